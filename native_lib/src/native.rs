use crate::core::{cpp_greeting, ndk_greeting, PlatformLog};
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

fn into_c_string(text: String) -> *mut c_char {
    match CString::new(text) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            error!("greeting contains interior NUL: {}", e);
            ptr::null_mut()
        }
    }
}

/// Same as the cameramqttapp `stringFromJNI`. Free the result with
/// [`native_lib_free_string`].
#[unsafe(no_mangle)]
pub extern "C" fn native_lib_string_from_ndk() -> *mut c_char {
    into_c_string(ndk_greeting(&PlatformLog).to_string())
}

/// Same as the myapplication `stringFromJNI`. Free the result with
/// [`native_lib_free_string`].
#[unsafe(no_mangle)]
pub extern "C" fn native_lib_string_from_cpp() -> *mut c_char {
    into_c_string(cpp_greeting())
}

/// Releases a string returned by the exports above. Null is ignored.
#[unsafe(no_mangle)]
pub extern "C" fn native_lib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
