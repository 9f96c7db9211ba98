//! Construction of the managed result value from raw native output.

use std::ffi::CStr;

use crate::error::BuildError;
use crate::host::ManagedHost;

/// The two managed result types, fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultClass {
    /// `Argon2Result(byte[])`
    Raw,
    /// `EncodedArgon2Result(byte[], String)`
    Encoded,
}

impl ResultClass {
    pub const fn class_path(self) -> &'static str {
        match self {
            ResultClass::Raw => "de/wuthoehle/argon2jni/Argon2Result",
            ResultClass::Encoded => "de/wuthoehle/argon2jni/EncodedArgon2Result",
        }
    }

    pub const fn constructor_signature(self) -> &'static str {
        match self {
            ResultClass::Raw => "([B)V",
            ResultClass::Encoded => "([BLjava/lang/String;)V",
        }
    }
}

/// Constructor arguments, already wrapped as managed values.
#[derive(Debug)]
pub enum ResultFields<B, T> {
    Raw(B),
    Encoded(B, T),
}

impl<B, T> ResultFields<B, T> {
    pub fn class(&self) -> ResultClass {
        match self {
            ResultFields::Raw(_) => ResultClass::Raw,
            ResultFields::Encoded(..) => ResultClass::Encoded,
        }
    }
}

/// Builds the managed result for a successful hash.
///
/// `encoded` is the native encoded buffer; its text ends at the first NUL.
pub fn build_result<H: ManagedHost>(
    host: &mut H,
    raw: &[u8],
    encoded: Option<&[u8]>,
) -> Result<H::Object, BuildError> {
    let raw = host.new_bytes(raw).ok_or(BuildError::WrapRaw)?;

    let fields = match encoded {
        None => ResultFields::Raw(raw),
        Some(buf) => {
            let text = encoded_text(buf).ok_or(BuildError::WrapEncoded)?;
            let text = host.new_text(text).ok_or(BuildError::WrapEncoded)?;
            ResultFields::Encoded(raw, text)
        }
    };

    host.instantiate(fields)
}

fn encoded_text(buf: &[u8]) -> Option<&str> {
    CStr::from_bytes_until_nul(buf).ok()?.to_str().ok()
}
