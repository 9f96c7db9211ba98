//! Managed entry points: a transaction followed by signaling of its failure.
//!
//! These are what a runtime binding exports. They never return an error
//! value; a failed hash yields `None` and a failed verify yields `false`,
//! with the exception already raised on the host.

use crate::host::{ManagedHost, NativeAllocator};
use crate::params::{HashArgs, VerifyArgs};
use crate::primitive::Argon2Primitive;
use crate::signal::signal;
use crate::transaction::Boundary;

pub fn hash<'a, H, P, A>(host: &mut H, boundary: &Boundary<P, A>, args: HashArgs<'a, H::ByteArray>) -> Option<H::Object>
where
    H: ManagedHost + 'a,
    P: Argon2Primitive,
    A: NativeAllocator,
{
    match boundary.hash(host, args) {
        Ok(object) => Some(object),
        Err(err) => {
            signal(host, &err);
            None
        }
    }
}

pub fn verify<'a, H, P, A>(
    host: &mut H,
    boundary: &Boundary<P, A>,
    args: VerifyArgs<'a, H::Text, H::ByteArray>,
) -> bool
where
    H: ManagedHost + 'a,
    P: Argon2Primitive,
    A: NativeAllocator,
{
    boundary.verify(host, args).unwrap_or_else(|err| {
        signal(host, &err);
        false
    })
}
