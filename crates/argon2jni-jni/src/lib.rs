/*
    argon2jni (cdylib)
      - Native methods of de.wuthoehle.argon2jni.Argon2.
      - Every call runs behind the panic barrier and reports failures as
        pending Java exceptions; the return value is then null / false.
*/
mod barrier;
mod host;
mod logging;


use std::ffi::c_void;
use std::mem::size_of;

use jni::objects::{JByteArray, JClass, JString};
use jni::sys::{jboolean, jbyte, jint, jobject, JNI_FALSE, JNI_TRUE, JNI_VERSION_1_6};
use jni::JNIEnv;

use argon2jni_core::entry;
use argon2jni_core::params::{HashArgs, VerifyArgs};
use argon2jni_core::Boundary;
use argon2jni_native::NativeArgon2;

use crate::barrier::abi_boundary;
use crate::host::JniHost;

// Managed integers and bytes are handed to the primitive as-is.
const _: () = assert!(size_of::<jint>() == size_of::<u32>() && size_of::<jbyte>() == size_of::<u8>());

fn boundary() -> Boundary<NativeArgon2> {
    Boundary::new(NativeArgon2::new())
}

#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: *mut jni::sys::JavaVM, _reserved: *mut c_void) -> jint {
    logging::init();
    JNI_VERSION_1_6
}

/// `static native Argon2Result argon2jni_hash(int, int, int, byte[], byte[], int, int, int, int)`
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub extern "system" fn Java_de_wuthoehle_argon2jni_Argon2_argon2jni_1hash<'local>(
    env: JNIEnv<'local>,
    _class: JClass<'local>,
    t_cost: jint,
    m_cost: jint,
    parallelism: jint,
    password: JByteArray<'local>,
    salt: JByteArray<'local>,
    hash_len: jint,
    encoded_len: jint,
    variant_id: jint,
    version_id: jint,
) -> jobject {
    let mut host = JniHost::new(env);
    abi_boundary(&mut host, std::ptr::null_mut(), |host| {
        let args = HashArgs {
            t_cost,
            m_cost,
            parallelism,
            password: &password,
            salt: &salt,
            hash_len,
            encoded_len,
            variant_id,
            version_id,
        };
        entry::hash(host, &boundary(), args).map_or(std::ptr::null_mut(), |object| object.into_raw())
    })
}

/// `static native boolean argon2jni_verify(String, byte[], int)`
#[no_mangle]
pub extern "system" fn Java_de_wuthoehle_argon2jni_Argon2_argon2jni_1verify<'local>(
    env: JNIEnv<'local>,
    _class: JClass<'local>,
    encoded: JString<'local>,
    password: JByteArray<'local>,
    variant_id: jint,
) -> jboolean {
    let mut host = JniHost::new(env);
    abi_boundary(&mut host, JNI_FALSE, |host| {
        let args = VerifyArgs {
            encoded: &encoded,
            password: &password,
            variant_id,
        };
        if entry::verify(host, &boundary(), args) {
            JNI_TRUE
        } else {
            JNI_FALSE
        }
    })
}
