/*
    argon2jni-native
      - Argon2 primitive behind argon2jni-core's Argon2Primitive.
      - Speaks the reference library's contract: numeric status codes,
        its diagnostic messages and its encoded string format.
*/
mod encoding;
mod engine;
mod status;

use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use argon2jni_core::identity::Variant;
use argon2jni_core::primitive::{Argon2Primitive, HashRequest, Status};

pub use status::error_message;

/// Native Argon2d/Argon2i/Argon2id.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeArgon2;

impl NativeArgon2 {
    pub fn new() -> Self {
        Self
    }
}

impl Argon2Primitive for NativeArgon2 {
    fn hash(&self, request: &HashRequest<'_>, out: &mut [u8], encoded: Option<&mut [u8]>) -> Status {
        if let Err(status) = engine::compute(request.identity, &request.costs, request.password, request.salt, out) {
            return status;
        }

        let Some(buf) = encoded else {
            return Status::OK;
        };

        let text = encoding::encode(request.identity, &request.costs, request.salt, out);
        // The terminator has to fit as well.
        if text.len() >= buf.len() {
            debug!(needed = text.len() + 1, available = buf.len(), "encoded buffer too small");
            out.zeroize();
            buf.zeroize();
            return Status::ENCODING_FAIL;
        }
        buf[..text.len()].copy_from_slice(text.as_bytes());
        buf[text.len()] = 0;
        Status::OK
    }

    fn verify(&self, encoded: &[u8], password: &[u8], variant: Variant) -> Status {
        let Ok(text) = std::str::from_utf8(encoded) else {
            return Status::DECODING_FAIL;
        };

        let decoded = match encoding::decode(text, variant) {
            Ok(decoded) => decoded,
            Err(err) => {
                debug!(%err, "rejecting encoded hash");
                return err.status();
            }
        };

        let mut tag = Zeroizing::new(vec![0u8; decoded.hash.len()]);
        if let Err(status) = engine::compute(decoded.identity, &decoded.costs, password, &decoded.salt, &mut tag) {
            return status;
        }

        if tags_match(&tag, &decoded.hash) {
            Status::OK
        } else {
            Status::VERIFY_MISMATCH
        }
    }

    fn error_message(&self, status: Status) -> &'static str {
        status::error_message(status)
    }
}

fn tags_match(computed: &[u8], expected: &[u8]) -> bool {
    computed.ct_eq(expected).into()
}
