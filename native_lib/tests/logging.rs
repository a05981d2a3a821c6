use log::{Level, LevelFilter, Log, Metadata, Record};
use native_lib::core::{cpp_greeting, ndk_greeting, PlatformLog};
use native_lib::native::{
    native_lib_free_string, native_lib_string_from_cpp, native_lib_string_from_ndk,
};
use std::ffi::CStr;
use std::os::raw::c_char;
use std::sync::Mutex;

struct CapturingLogger {
    records: Mutex<Vec<(Level, String, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

fn drain() -> Vec<(Level, String, String)> {
    std::mem::take(&mut *LOGGER.records.lock().unwrap())
}

fn take(ptr: *mut c_char) -> String {
    assert!(!ptr.is_null());
    let text = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_owned();
    native_lib_free_string(ptr);
    text
}

fn running_record() -> (Level, String, String) {
    (
        Level::Info,
        "NativeTest".to_string(),
        "Native code is running!".to_string(),
    )
}

// The logger is process-global, so everything runs in one test to keep
// records from other tests out of the capture.
#[test]
fn greetings_reach_the_installed_logger() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    // a logger is already installed, init must neither panic nor replace it
    native_lib::init_logging();
    native_lib::init_logging();
    drain();

    assert_eq!(ndk_greeting(&PlatformLog), "Hello from NDK");
    assert_eq!(drain(), vec![running_record()]);

    assert_eq!(take(native_lib_string_from_ndk()), "Hello from NDK");
    assert_eq!(drain(), vec![running_record()]);

    assert_eq!(cpp_greeting(), "Hello from C++");
    assert!(drain().is_empty());

    assert_eq!(take(native_lib_string_from_cpp()), "Hello from C++");
    assert_eq!(take(native_lib_string_from_cpp()), "Hello from C++");
    assert!(drain().is_empty());
}
