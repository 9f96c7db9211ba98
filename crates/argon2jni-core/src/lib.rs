/*
    argon2jni-core
        request/response marshaling between a managed runtime and a
        native Argon2 primitive. Nothing here calls into the JVM or
        about how the hash is computed; both sit behind traits.
 */

pub mod error;

pub mod identity;
pub mod params;
pub mod primitive;
pub mod host;
pub mod result;
pub mod transaction;
pub mod signal;
pub mod entry;
pub mod local;

pub use error::{BoundaryError, BuildError, ExceptionKind};
pub use identity::{AlgorithmIdentity, Variant, Version};
pub use params::{HashArgs, HashParams, SecurityParameters, VerifyArgs};
pub use transaction::Boundary;

#[cfg(test)]
mod params_tests;
#[cfg(test)]
mod result_tests;
