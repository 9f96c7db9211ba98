use crate::identity::Variant;
use crate::primitive::{HashRequest, Status};

// Trait boundary for the native hashing primitive.
// Transactions depend on this contract only: status codes in, no panics out,
// no allocation of the caller's output buffers.
pub trait Argon2Primitive {
    /// Fills `out` with the raw tag. When `encoded` is given, also writes the
    /// NUL-terminated encoded form into it; the terminator must fit.
    fn hash(&self, request: &HashRequest<'_>, out: &mut [u8], encoded: Option<&mut [u8]>) -> Status;

    /// Checks `password` against a previously encoded hash of `variant`.
    /// Returns `Status::OK` on match and `Status::VERIFY_MISMATCH` on mismatch.
    fn verify(&self, encoded: &[u8], password: &[u8], variant: Variant) -> Status;

    /// Diagnostic text for a status code.
    fn error_message(&self, status: Status) -> &'static str;
}
