use tracing::debug;

use crate::error::BoundaryError;
use crate::host::{ManagedHost, NativeAllocator};
use crate::identity::{resolve_variant, INVALID_VARIANT};
use crate::params::VerifyArgs;
use crate::primitive::{Argon2Primitive, Outcome};
use crate::transaction::Boundary;

const EMPTY_PASSWORD: &str = "Password length must be positive";

impl<P: Argon2Primitive, A: NativeAllocator> Boundary<P, A> {
    /// Runs one verify transaction.
    ///
    /// A mismatch is `Ok(false)`; only malformed input and primitive
    /// failures are errors.
    pub fn verify<'a, H: ManagedHost + 'a>(
        &self,
        host: &mut H,
        args: VerifyArgs<'a, H::Text, H::ByteArray>,
    ) -> Result<bool, BoundaryError> {
        let encoded = host.pin_text(args.encoded)?;
        let password = host.pin_bytes(args.password)?;

        let variant = resolve_variant(args.variant_id).ok_or(BoundaryError::InvalidArgument(INVALID_VARIANT))?;

        if password.is_empty() {
            return Err(BoundaryError::InvalidArgument(EMPTY_PASSWORD));
        }

        let _span = tracing::debug_span!("argon2_verify", ?variant, encoded_len = encoded.len()).entered();

        let status = self.primitive.verify(&*encoded, &*password, variant);
        match status.outcome() {
            Outcome::Ok => Ok(true),
            Outcome::Mismatch => Ok(false),
            Outcome::Error(status) => {
                debug!(code = status.code(), "primitive rejected verify request");
                Err(BoundaryError::Primitive {
                    status,
                    message: self.primitive.error_message(status),
                })
            }
        }
    }
}
