//! In-process host: the managed side is plain Rust values.
//!
//! Used by the CLI and by tests that want the full transaction without a
//! JVM. Exceptions are recorded and handed back as errors.

use thiserror::Error;

use crate::entry;
use crate::error::{BuildError, ExceptionKind};
use crate::host::{ManagedHost, NativeAllocator, PinError};
use crate::params::{HashArgs, VerifyArgs};
use crate::primitive::Argon2Primitive;
use crate::result::ResultFields;
use crate::transaction::Boundary;

/// Immutable result of a successful hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argon2Result {
    raw: Vec<u8>,
    encoded: Option<String>,
}

impl Argon2Result {
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    pub fn encoded(&self) -> Option<&str> {
        self.encoded.as_deref()
    }

    pub fn into_parts(self) -> (Vec<u8>, Option<String>) {
        (self.raw, self.encoded)
    }
}

/// An exception raised through the local host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {message}", .kind.class_path())]
pub struct ThrownException {
    pub kind: ExceptionKind,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct LocalHost {
    pending: Option<ThrownException>,
}

impl LocalHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the exception raised by the last failed call, if any.
    pub fn take_exception(&mut self) -> Option<ThrownException> {
        self.pending.take()
    }

    pub fn hash<P, A>(&mut self, boundary: &Boundary<P, A>, args: HashArgs<'_, [u8]>) -> Result<Argon2Result, ThrownException>
    where
        P: Argon2Primitive,
        A: NativeAllocator,
    {
        entry::hash(self, boundary, args).ok_or_else(|| self.take_unraised())
    }

    pub fn verify<P, A>(&mut self, boundary: &Boundary<P, A>, args: VerifyArgs<'_, str, [u8]>) -> Result<bool, ThrownException>
    where
        P: Argon2Primitive,
        A: NativeAllocator,
    {
        let matched = entry::verify(self, boundary, args);
        match self.pending.take() {
            Some(exception) => Err(exception),
            None => Ok(matched),
        }
    }

    fn take_unraised(&mut self) -> ThrownException {
        self.pending.take().unwrap_or_else(|| ThrownException {
            kind: ExceptionKind::Runtime,
            message: "call failed without raising an exception".to_owned(),
        })
    }
}

impl ManagedHost for LocalHost {
    type ByteArray = [u8];
    type Text = str;
    type NewBytes = Vec<u8>;
    type NewText = String;
    type Object = Argon2Result;
    type BytesView<'a> = &'a [u8];
    type TextView<'a> = &'a [u8];

    fn byte_len(&mut self, array: &[u8]) -> Option<usize> {
        Some(array.len())
    }

    fn pin_bytes<'a>(&mut self, array: &'a [u8]) -> Result<&'a [u8], PinError>
    where
        Self: 'a,
    {
        Ok(array)
    }

    fn pin_text<'a>(&mut self, text: &'a str) -> Result<&'a [u8], PinError>
    where
        Self: 'a,
    {
        Ok(text.as_bytes())
    }

    fn new_bytes(&mut self, bytes: &[u8]) -> Option<Vec<u8>> {
        Some(bytes.to_vec())
    }

    fn new_text(&mut self, text: &str) -> Option<String> {
        Some(text.to_owned())
    }

    fn instantiate(&mut self, fields: ResultFields<Vec<u8>, String>) -> Result<Argon2Result, BuildError> {
        Ok(match fields {
            ResultFields::Raw(raw) => Argon2Result { raw, encoded: None },
            ResultFields::Encoded(raw, encoded) => Argon2Result {
                raw,
                encoded: Some(encoded),
            },
        })
    }

    fn throw(&mut self, kind: ExceptionKind, message: &str) -> bool {
        self.pending = Some(ThrownException {
            kind,
            message: message.to_owned(),
        });
        true
    }
}
