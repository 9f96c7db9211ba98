use tracing::debug;

use crate::error::BoundaryError;
use crate::host::{ManagedHost, NativeAllocator};
use crate::identity::AlgorithmIdentity;
use crate::params::{HashArgs, HashParams};
use crate::primitive::{Argon2Primitive, HashRequest, Outcome};
use crate::result::build_result;
use crate::transaction::Boundary;

impl<P: Argon2Primitive, A: NativeAllocator> Boundary<P, A> {
    /// Runs one hash transaction.
    ///
    /// Identifiers and scalars are checked before anything is pinned or
    /// allocated. Every pin and buffer is a guard local to this call, so each
    /// is released exactly once (in reverse order) on every return path.
    pub fn hash<'a, H: ManagedHost + 'a>(
        &self,
        host: &mut H,
        args: HashArgs<'a, H::ByteArray>,
    ) -> Result<H::Object, BoundaryError> {
        let identity = AlgorithmIdentity::resolve(args.variant_id, args.version_id)?;

        let password_len = host.byte_len(args.password);
        let salt_len = host.byte_len(args.salt);
        let params = HashParams::validate(&args, password_len, salt_len)?;

        let _span = tracing::debug_span!(
            "argon2_hash",
            variant = ?identity.variant,
            version = ?identity.version,
            hash_len = params.hash_len,
            encoded_len = params.encoded_len.map_or(0, |n| n.get()),
        )
        .entered();

        let password = host.pin_bytes(args.password)?;
        let salt = host.pin_bytes(args.salt)?;
        let mut out = self
            .allocator
            .allocate(params.hash_len)
            .ok_or(BoundaryError::OutOfMemory)?;
        // One byte past the requested length is kept for the terminator.
        let mut encoded = match params.encoded_len {
            Some(len) => {
                let buf = len
                    .get()
                    .checked_add(1)
                    .and_then(|size| self.allocator.allocate(size))
                    .ok_or(BoundaryError::OutOfMemory)?;
                Some((buf, len.get()))
            }
            None => None,
        };

        let request = HashRequest {
            identity,
            costs: params.costs,
            password: &*password,
            salt: &*salt,
        };

        let status = self.primitive.hash(
            &request,
            &mut *out,
            encoded.as_mut().map(|(buf, len)| &mut buf[..*len]),
        );

        match status.outcome() {
            Outcome::Ok => {}
            Outcome::Mismatch | Outcome::Error(_) => {
                debug!(code = status.code(), "primitive rejected hash request");
                return Err(BoundaryError::Primitive {
                    status,
                    message: self.primitive.error_message(status),
                });
            }
        }

        let object = build_result(host, &*out, encoded.as_ref().map(|(buf, _)| &buf[..]))?;
        Ok(object)
    }
}
