use std::ops::Deref;
use std::slice;

use jni::errors::Error as JniError;
use jni::objects::{AutoElements, JByteArray, JObject, JString, JValue, ReleaseMode};
use jni::strings::JavaStr;
use jni::sys::jbyte;
use jni::JNIEnv;

use argon2jni_core::error::{BuildError, ExceptionKind};
use argon2jni_core::host::{ManagedHost, PinError};
use argon2jni_core::result::ResultFields;

/// `ManagedHost` over the JNI environment of one native call.
pub(crate) struct JniHost<'local> {
    env: JNIEnv<'local>,
}

impl<'local> JniHost<'local> {
    pub(crate) fn new(env: JNIEnv<'local>) -> Self {
        Self { env }
    }
}

/// Byte-array elements, released with `JNI_ABORT` on drop.
pub(crate) struct PinnedBytes<'local: 'array, 'array> {
    elements: AutoElements<'local, 'local, 'array, jbyte>,
}

impl Deref for PinnedBytes<'_, '_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        let elements: &[jbyte] = &self.elements;
        // SAFETY: jbyte and u8 share size and alignment (asserted in lib.rs),
        // and the slice keeps the length and lifetime of the pinned elements.
        unsafe { slice::from_raw_parts(elements.as_ptr().cast::<u8>(), elements.len()) }
    }
}

/// Modified UTF-8 characters of a Java string, released on drop.
pub(crate) struct PinnedText<'local: 'obj, 'obj> {
    chars: JavaStr<'local, 'local, 'obj>,
}

impl Deref for PinnedText<'_, '_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.chars.to_bytes()
    }
}

impl<'local> ManagedHost for JniHost<'local> {
    type ByteArray = JByteArray<'local>;
    type Text = JString<'local>;
    type NewBytes = JByteArray<'local>;
    type NewText = JString<'local>;
    type Object = JObject<'local>;

    type BytesView<'a> = PinnedBytes<'local, 'a>
    where
        Self: 'a;
    type TextView<'a> = PinnedText<'local, 'a>
    where
        Self: 'a;

    fn byte_len(&mut self, array: &JByteArray<'local>) -> Option<usize> {
        if array.is_null() {
            return None;
        }
        let len = self.env.get_array_length(array).ok()?;
        usize::try_from(len).ok()
    }

    fn pin_bytes<'a>(&mut self, array: &'a JByteArray<'local>) -> Result<PinnedBytes<'local, 'a>, PinError>
    where
        Self: 'a,
    {
        if array.is_null() {
            return Err(PinError::Null);
        }
        // SAFETY: the elements are only ever read through shared slices, so
        // pinning the same array twice (password == salt) aliases immutably.
        // NoCopyBack leaves the managed array untouched on release.
        let elements = unsafe { self.env.get_array_elements(array, ReleaseMode::NoCopyBack) }
            .map_err(|_| PinError::Exhausted)?;
        Ok(PinnedBytes { elements })
    }

    fn pin_text<'a>(&mut self, text: &'a JString<'local>) -> Result<PinnedText<'local, 'a>, PinError>
    where
        Self: 'a,
    {
        if text.is_null() {
            return Err(PinError::Null);
        }
        let chars = self.env.get_string(text).map_err(|_| PinError::Exhausted)?;
        Ok(PinnedText { chars })
    }

    fn new_bytes(&mut self, bytes: &[u8]) -> Option<JByteArray<'local>> {
        self.env.byte_array_from_slice(bytes).ok()
    }

    fn new_text(&mut self, text: &str) -> Option<JString<'local>> {
        self.env.new_string(text).ok()
    }

    fn instantiate(
        &mut self,
        fields: ResultFields<JByteArray<'local>, JString<'local>>,
    ) -> Result<JObject<'local>, BuildError> {
        let class = fields.class();
        let jclass = self
            .env
            .find_class(class.class_path())
            .map_err(|_| BuildError::TypeNotFound)?;

        let created = match &fields {
            ResultFields::Raw(raw) => {
                self.env
                    .new_object(&jclass, class.constructor_signature(), &[JValue::Object(&**raw)])
            }
            ResultFields::Encoded(raw, encoded) => self.env.new_object(
                &jclass,
                class.constructor_signature(),
                &[JValue::Object(&**raw), JValue::Object(&**encoded)],
            ),
        };

        created.map_err(|err| match err {
            JniError::MethodNotFound { .. } => BuildError::ConstructorNotFound,
            _ => BuildError::Instantiation,
        })
    }

    fn throw(&mut self, kind: ExceptionKind, message: &str) -> bool {
        // Whatever a failed JNI call left pending is replaced by this failure.
        if self.env.exception_check().unwrap_or(false) {
            let _ = self.env.exception_clear();
        }
        self.env.throw_new(kind.class_path(), message).is_ok()
    }
}
