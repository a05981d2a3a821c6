#[macro_use]
extern crate log;

pub mod core;
mod jvm;
pub mod native;

/// Initialize logger - called from `JNI_OnLoad`.
#[cfg(target_os = "android")]
pub fn init_logging() {
    if let Err(e) = android_log::init(crate::core::LOG_TAG) {
        // a logger was installed first, records still reach it
        warn!("logger already initialized: {}", e);
    }
}

#[cfg(not(target_os = "android"))]
pub fn init_logging() {
    // No-op on non-Android platforms
}
