//! The single path by which a failure becomes visible to the managed caller.

use tracing::warn;

use crate::error::{BoundaryError, ExceptionKind};
use crate::host::ManagedHost;

/// Raises the managed exception for a transaction failure. Returns whether
/// an exception is now pending on the host.
pub fn signal<H: ManagedHost>(host: &mut H, err: &BoundaryError) -> bool {
    raise(host, err.kind(), &err.to_string())
}

/// Raises an exception of `kind` carrying `message`.
///
/// If the host cannot locate the exception type nothing is raised; that
/// branch is logged since the caller will see only the failure return value.
pub fn raise<H: ManagedHost>(host: &mut H, kind: ExceptionKind, message: &str) -> bool {
    let raised = host.throw(kind, message);
    if !raised {
        warn!(class = kind.class_path(), reason = message, "exception type not found, failure was not raised");
    }
    raised
}
