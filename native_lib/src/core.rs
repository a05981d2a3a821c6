/// Tag every record from this library is written under.
pub const LOG_TAG: &str = "NativeTest";

/// Logged once per call to [`ndk_greeting`].
pub const RUNNING_MESSAGE: &str = "Native code is running!";

pub const NDK_GREETING: &str = "Hello from NDK";
pub const CPP_GREETING: &str = "Hello from C++";

/// Where greeting calls send their log records.
///
/// The JNI and C entry points pass [`PlatformLog`]; tests pass a sink that
/// records what it was given.
pub trait LogSink: Send + Sync {
    fn info(&self, tag: &str, message: &str);
}

/// Forwards to the `log` facade. On Android the installed logger ends up in logcat.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlatformLog;

impl LogSink for PlatformLog {
    fn info(&self, tag: &str, message: &str) {
        info!(target: tag, "{}", message);
    }
}

/// Greeting returned to `com.example.cameramqttapp.MainActivity`.
/// Writes exactly one info record before returning.
pub fn ndk_greeting(sink: &dyn LogSink) -> &'static str {
    sink.info(LOG_TAG, RUNNING_MESSAGE);
    NDK_GREETING
}

/// Greeting returned to `com.example.myapplication.MainActivity`.
pub fn cpp_greeting() -> String {
    String::from(CPP_GREETING)
}
