use std::cell::{Cell, RefCell};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use crate::error::{BuildError, ExceptionKind};
use crate::host::{ManagedHost, NativeAllocator, PinError};
use crate::identity::Variant;
use crate::primitive::{Argon2Primitive, HashRequest, Status};
use crate::result::ResultFields;

// What the counting host observed during one transaction.
#[derive(Debug, Default)]
pub(crate) struct HostLedger {
    pub pins: usize,
    pub releases: usize,
    pub thrown: Vec<(ExceptionKind, String)>,
}

/// Host over plain slices that counts pins and releases and can be told to
/// fail at chosen points.
#[derive(Debug, Default)]
pub(crate) struct CountingHost {
    pub ledger: Rc<RefCell<HostLedger>>,
    // Zero-based index of the pin the runtime cannot satisfy.
    pub fail_pin_at: Option<usize>,
    // Zero-based index of the pin whose reference is null.
    pub null_pin_at: Option<usize>,
    pub fail_new_bytes: bool,
    pub fail_new_text: bool,
    pub instantiate_error: Option<BuildError>,
    pub exception_types_missing: bool,
}

pub(crate) struct CountedView<'a> {
    bytes: &'a [u8],
    ledger: Rc<RefCell<HostLedger>>,
}

impl Deref for CountedView<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

impl Drop for CountedView<'_> {
    fn drop(&mut self) {
        self.ledger.borrow_mut().releases += 1;
    }
}

impl CountingHost {
    fn pin<'a>(&mut self, bytes: &'a [u8]) -> Result<CountedView<'a>, PinError> {
        let mut ledger = self.ledger.borrow_mut();
        let index = ledger.pins;
        if self.null_pin_at == Some(index) {
            return Err(PinError::Null);
        }
        if self.fail_pin_at == Some(index) {
            return Err(PinError::Exhausted);
        }
        ledger.pins += 1;
        Ok(CountedView {
            bytes,
            ledger: Rc::clone(&self.ledger),
        })
    }

    pub fn pins(&self) -> usize {
        self.ledger.borrow().pins
    }

    pub fn releases(&self) -> usize {
        self.ledger.borrow().releases
    }

    pub fn thrown(&self) -> Vec<(ExceptionKind, String)> {
        self.ledger.borrow().thrown.clone()
    }
}

impl ManagedHost for CountingHost {
    type ByteArray = [u8];
    type Text = str;
    type NewBytes = Vec<u8>;
    type NewText = String;
    type Object = (Vec<u8>, Option<String>);
    type BytesView<'a> = CountedView<'a>;
    type TextView<'a> = CountedView<'a>;

    fn byte_len(&mut self, array: &[u8]) -> Option<usize> {
        Some(array.len())
    }

    fn pin_bytes<'a>(&mut self, array: &'a [u8]) -> Result<CountedView<'a>, PinError>
    where
        Self: 'a,
    {
        self.pin(array)
    }

    fn pin_text<'a>(&mut self, text: &'a str) -> Result<CountedView<'a>, PinError>
    where
        Self: 'a,
    {
        self.pin(text.as_bytes())
    }

    fn new_bytes(&mut self, bytes: &[u8]) -> Option<Vec<u8>> {
        (!self.fail_new_bytes).then(|| bytes.to_vec())
    }

    fn new_text(&mut self, text: &str) -> Option<String> {
        (!self.fail_new_text).then(|| text.to_owned())
    }

    fn instantiate(&mut self, fields: ResultFields<Vec<u8>, String>) -> Result<Self::Object, BuildError> {
        if let Some(err) = self.instantiate_error {
            return Err(err);
        }
        Ok(match fields {
            ResultFields::Raw(raw) => (raw, None),
            ResultFields::Encoded(raw, text) => (raw, Some(text)),
        })
    }

    fn throw(&mut self, kind: ExceptionKind, message: &str) -> bool {
        if self.exception_types_missing {
            return false;
        }
        self.ledger.borrow_mut().thrown.push((kind, message.to_owned()));
        true
    }
}

/// Allocator that counts allocations and releases and can return "null".
#[derive(Debug, Default)]
pub(crate) struct CountingAllocator {
    pub allocations: Cell<usize>,
    pub releases: Rc<Cell<usize>>,
    pub sizes: RefCell<Vec<usize>>,
    // Zero-based index of the allocation that fails.
    pub fail_at: Option<usize>,
}

pub(crate) struct CountedBuffer {
    bytes: Vec<u8>,
    releases: Rc<Cell<usize>>,
}

impl Deref for CountedBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for CountedBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl Drop for CountedBuffer {
    fn drop(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

impl CountingAllocator {
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }
}

impl NativeAllocator for CountingAllocator {
    type Buffer = CountedBuffer;

    fn allocate(&self, len: usize) -> Option<CountedBuffer> {
        let index = self.allocations.get();
        if self.fail_at == Some(index) {
            return None;
        }
        self.allocations.set(index + 1);
        self.sizes.borrow_mut().push(len);
        Some(CountedBuffer {
            bytes: vec![0u8; len],
            releases: Rc::clone(&self.releases),
        })
    }
}

pub(crate) const STUB_ENCODED: &str = "$argon2id$v=19$m=8,t=1,p=1$c2FsdA$dGFn";

/// Primitive returning scripted statuses. On success it fills the raw output
/// with 0xAB and writes `STUB_ENCODED` when there is room for it.
#[derive(Debug)]
pub(crate) struct ScriptedPrimitive {
    pub hash_status: Status,
    pub verify_status: Status,
    pub hash_calls: Cell<usize>,
    pub verify_calls: Cell<usize>,
    pub last_encoded_len: Cell<Option<usize>>,
    pub last_verify: RefCell<Option<(Vec<u8>, Vec<u8>, Variant)>>,
}

impl Default for ScriptedPrimitive {
    fn default() -> Self {
        Self {
            hash_status: Status::OK,
            verify_status: Status::OK,
            hash_calls: Cell::new(0),
            verify_calls: Cell::new(0),
            last_encoded_len: Cell::new(None),
            last_verify: RefCell::new(None),
        }
    }
}

impl Argon2Primitive for ScriptedPrimitive {
    fn hash(&self, _request: &HashRequest<'_>, out: &mut [u8], encoded: Option<&mut [u8]>) -> Status {
        self.hash_calls.set(self.hash_calls.get() + 1);
        self.last_encoded_len.set(encoded.as_ref().map(|buf| buf.len()));
        if self.hash_status != Status::OK {
            return self.hash_status;
        }

        out.fill(0xAB);
        if let Some(buf) = encoded {
            let text = STUB_ENCODED.as_bytes();
            if text.len() + 1 > buf.len() {
                return Status::ENCODING_FAIL;
            }
            buf[..text.len()].copy_from_slice(text);
            buf[text.len()] = 0;
        }
        Status::OK
    }

    fn verify(&self, encoded: &[u8], password: &[u8], variant: Variant) -> Status {
        self.verify_calls.set(self.verify_calls.get() + 1);
        *self.last_verify.borrow_mut() = Some((encoded.to_vec(), password.to_vec(), variant));
        self.verify_status
    }

    fn error_message(&self, status: Status) -> &'static str {
        match status {
            Status::SALT_TOO_SHORT => "Salt is too short",
            Status::DECODING_FAIL => "Decoding failed",
            Status::ENCODING_FAIL => "Encoding failed",
            _ => "Unknown error code",
        }
    }
}
