use std::ops::Deref;

use crate::error::{BuildError, ExceptionKind};
use crate::result::ResultFields;

/*
    The managed side of the boundary.
      - Views returned by `pin_*` are read-only and release their pin when
        dropped, without writing anything back to the managed buffer.
      - A pin fails with `PinError`, which keeps a null reference (caller
        error) apart from the runtime running out of resources.
      - A `None` from value creation means the runtime could not provide it.
*/

/// Why a managed buffer could not be pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    /// The caller passed a null reference.
    Null,
    /// The runtime could not provide the elements.
    Exhausted,
}

pub trait ManagedHost {
    /// Managed byte array received from the caller.
    type ByteArray: ?Sized;
    /// Managed string received from the caller.
    type Text: ?Sized;

    /// Freshly created managed byte array.
    type NewBytes;
    /// Freshly created managed string.
    type NewText;
    /// Constructed result object.
    type Object;

    type BytesView<'a>: Deref<Target = [u8]>
    where
        Self: 'a;
    type TextView<'a>: Deref<Target = [u8]>
    where
        Self: 'a;

    fn byte_len(&mut self, array: &Self::ByteArray) -> Option<usize>;

    fn pin_bytes<'a>(&mut self, array: &'a Self::ByteArray) -> Result<Self::BytesView<'a>, PinError>
    where
        Self: 'a;

    /// Pins the single-byte form of a managed string, without terminator.
    fn pin_text<'a>(&mut self, text: &'a Self::Text) -> Result<Self::TextView<'a>, PinError>
    where
        Self: 'a;

    fn new_bytes(&mut self, bytes: &[u8]) -> Option<Self::NewBytes>;

    fn new_text(&mut self, text: &str) -> Option<Self::NewText>;

    /// Locates the class for `fields.class()` and runs its constructor.
    fn instantiate(
        &mut self,
        fields: ResultFields<Self::NewBytes, Self::NewText>,
    ) -> Result<Self::Object, BuildError>;

    /// Raises a managed exception. Returns `false` when the exception type
    /// could not be located and nothing was raised.
    fn throw(&mut self, kind: ExceptionKind, message: &str) -> bool;
}
