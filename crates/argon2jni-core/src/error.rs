use thiserror::Error;

use crate::host::PinError;
use crate::primitive::Status;

/// Managed exception families a failure can surface as.
///
/// Each kind is bound to one JVM class at compile time; hosts that are not a
/// JVM only need the kind itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionKind {
    IllegalArgument,
    OutOfMemory,
    Argon2,
    Runtime,
    ClassNotFound,
    NoSuchMethod,
    Instantiation,
}

impl ExceptionKind {
    pub const fn class_path(self) -> &'static str {
        match self {
            ExceptionKind::IllegalArgument => "java/lang/IllegalArgumentException",
            ExceptionKind::OutOfMemory => "java/lang/OutOfMemoryError",
            ExceptionKind::Argon2 => "de/wuthoehle/argon2jni/Argon2Exception",
            ExceptionKind::Runtime => "java/lang/RuntimeException",
            ExceptionKind::ClassNotFound => "java/lang/ClassNotFoundException",
            ExceptionKind::NoSuchMethod => "java/lang/NoSuchMethodException",
            ExceptionKind::Instantiation => "java/lang/InstantiationException",
        }
    }
}

/// Failure while assembling the managed result after a successful hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Could not compose return values (raw)")]
    WrapRaw,

    #[error("Could not compose return values (encoded)")]
    WrapEncoded,

    #[error("Could not find Argon2Result class")]
    TypeNotFound,

    #[error("Could not find Argon2Result constructor")]
    ConstructorNotFound,

    #[error("There was an error while creating the Argon2Result object")]
    Instantiation,
}

impl BuildError {
    pub fn kind(self) -> ExceptionKind {
        match self {
            BuildError::WrapRaw | BuildError::WrapEncoded => ExceptionKind::Runtime,
            BuildError::TypeNotFound => ExceptionKind::ClassNotFound,
            BuildError::ConstructorNotFound => ExceptionKind::NoSuchMethod,
            BuildError::Instantiation => ExceptionKind::Instantiation,
        }
    }
}

/// Terminal failure of a hash or verify transaction.
///
/// The `Display` text is the message handed to the managed exception.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundaryError {
    #[error("{0}")]
    InvalidArgument(&'static str),

    #[error("Could not allocate enough space to continue")]
    OutOfMemory,

    #[error("{message}")]
    Primitive { status: Status, message: &'static str },

    #[error(transparent)]
    Construction(#[from] BuildError),
}

pub(crate) const NULL_REFERENCE: &str = "Argon2 inputs must not be null";

impl From<PinError> for BoundaryError {
    fn from(err: PinError) -> Self {
        match err {
            PinError::Null => BoundaryError::InvalidArgument(NULL_REFERENCE),
            PinError::Exhausted => BoundaryError::OutOfMemory,
        }
    }
}

impl BoundaryError {
    pub fn kind(&self) -> ExceptionKind {
        match self {
            BoundaryError::InvalidArgument(_) => ExceptionKind::IllegalArgument,
            BoundaryError::OutOfMemory => ExceptionKind::OutOfMemory,
            BoundaryError::Primitive { .. } => ExceptionKind::Argon2,
            BoundaryError::Construction(err) => err.kind(),
        }
    }
}
