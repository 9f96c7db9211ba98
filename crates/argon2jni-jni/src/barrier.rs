use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::error;

use argon2jni_core::error::ExceptionKind;
use argon2jni_core::host::ManagedHost;
use argon2jni_core::signal::raise;

pub(crate) const PANIC_MESSAGE: &str = "panic at the argon2jni native boundary";

/// Runs `body` so that a panic never unwinds into the managed runtime.
///
/// A caught panic raises a RuntimeException on `host` and yields `fallback`.
pub(crate) fn abi_boundary<H, R, F>(host: &mut H, fallback: R, body: F) -> R
where
    H: ManagedHost,
    F: FnOnce(&mut H) -> R,
{
    match catch_unwind(AssertUnwindSafe(|| body(host))) {
        Ok(value) => value,
        Err(_) => {
            error!("panic caught at the JNI boundary");
            raise(host, ExceptionKind::Runtime, PANIC_MESSAGE);
            fallback
        }
    }
}
