use jni::JNIEnv;
use jni::objects::JObject;
use jni::sys::{jint, jstring, JNI_VERSION_1_6};
use std::os::raw::c_void;
use std::ptr;

use crate::core::{cpp_greeting, ndk_greeting, PlatformLog};

/// Called by the VM when `System.loadLibrary` loads us.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn JNI_OnLoad(_vm: *mut jni::sys::JavaVM, _reserved: *mut c_void) -> jint {
    crate::init_logging();
    JNI_VERSION_1_6
}

fn new_java_string(env: &JNIEnv, text: &str) -> jni::errors::Result<jstring> {
    Ok(env.new_string(text)?.into_inner())
}

// A failed allocation leaves an exception pending in the VM; returning null
// lets the runtime throw it once we are back in Java.
fn to_java_string_or_null(env: &JNIEnv, text: &str) -> jstring {
    match new_java_string(env, text) {
        Ok(s) => s,
        Err(e) => {
            error!("failed to create java string: {}", e);
            ptr::null_mut()
        }
    }
}

/// `external fun stringFromJNI()` of `com.example.cameramqttapp.MainActivity`.
#[no_mangle]
pub extern "system" fn Java_com_example_cameramqttapp_MainActivity_stringFromJNI(
    env: JNIEnv,
    _this: JObject,
) -> jstring {
    to_java_string_or_null(&env, ndk_greeting(&PlatformLog))
}

/// `external fun stringFromJNI()` of `com.example.myapplication.MainActivity`.
#[no_mangle]
pub extern "system" fn Java_com_example_myapplication_MainActivity_stringFromJNI(
    env: JNIEnv,
    _this: JObject,
) -> jstring {
    let greeting = cpp_greeting();
    to_java_string_or_null(&env, &greeting)
}
