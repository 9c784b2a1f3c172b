// Host Logger - Route `tracing` events into the host application's log
//
// The host registers a C callback once at startup; every event at or above
// the configured level is formatted as "[target] message key=value" and
// handed over. Without a callback, events only reach stderr.

use std::fmt::Write as FmtWrite;
use std::sync::atomic::{AtomicPtr, Ordering};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Host log callback: level (0=ERROR .. 4=TRACE) and a NUL-terminated message
pub type HostLogCallback = extern "C" fn(level: i32, message: *const std::ffi::c_char);

const MAX_MESSAGE_LEN: usize = 4096;

static HOST_LOG_CALLBACK: AtomicPtr<()> = AtomicPtr::new(std::ptr::null_mut());

/// Register the host log callback. The callback must stay valid for the
/// lifetime of the process.
#[no_mangle]
pub extern "C" fn dictation_engine_register_log_callback(callback: HostLogCallback) {
    HOST_LOG_CALLBACK.store(callback as *mut (), Ordering::SeqCst);
}

pub fn has_host_callback() -> bool {
    !HOST_LOG_CALLBACK.load(Ordering::SeqCst).is_null()
}

/// Install the global subscriber: `RUST_LOG` (or `min_level`) filter plus
/// forwarding to the host callback, or stderr output when none is registered.
///
/// Returns false if a subscriber was already installed.
pub fn init_logging(min_level: Level) -> bool {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(min_level).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with((!has_host_callback()).then(|| {
            fmt::layer().with_writer(std::io::stderr).with_ansi(false)
        }))
        .with(HostLoggerLayer::new(min_level))
        .try_init()
        .is_ok()
}

pub struct HostLoggerLayer {
    min_level: Level,
}

impl HostLoggerLayer {
    pub fn new(min_level: Level) -> Self {
        Self { min_level }
    }

    fn level_code(level: &Level) -> i32 {
        match *level {
            Level::ERROR => 0,
            Level::WARN => 1,
            Level::INFO => 2,
            Level::DEBUG => 3,
            Level::TRACE => 4,
        }
    }

    fn forward(level: i32, message: &str) {
        let callback_ptr = HOST_LOG_CALLBACK.load(Ordering::SeqCst);
        if callback_ptr.is_null() {
            return;
        }

        let message = truncate_message(message);
        if let Ok(c_str) = std::ffi::CString::new(message) {
            // SAFETY: only `dictation_engine_register_log_callback` stores into
            // HOST_LOG_CALLBACK, always from a `HostLogCallback`.
            let callback: HostLogCallback = unsafe { std::mem::transmute(callback_ptr) };
            callback(level, c_str.as_ptr());
        }
    }
}

/// Cut overly long messages on a char boundary.
fn truncate_message(message: &str) -> String {
    if message.len() <= MAX_MESSAGE_LEN {
        return message.to_string();
    }

    let mut cut = MAX_MESSAGE_LEN - 64;
    while !message.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}... [truncated]", &message[..cut])
}

impl<S> Layer<S> for HostLoggerLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = metadata.level();
        if *level > self.min_level {
            return;
        }

        let mut message = String::with_capacity(256);
        let target = metadata.target();
        let target = target.strip_prefix("dictation_engine::").unwrap_or(target);
        write!(message, "[{}] ", target).ok();

        event.record(&mut MessageVisitor::new(&mut message));
        Self::forward(Self::level_code(level), &message);
    }
}

/// Collects the `message` field first, then any other fields as key=value.
struct MessageVisitor<'a> {
    message: &'a mut String,
}

impl<'a> MessageVisitor<'a> {
    fn new(message: &'a mut String) -> Self {
        Self { message }
    }

    fn separate(&mut self) {
        if !self.message.is_empty() && !self.message.ends_with(' ') {
            self.message.push(' ');
        }
    }
}

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.separate();
        if field.name() == "message" {
            write!(self.message, "{:?}", value).ok();
        } else {
            write!(self.message, "{}={:?}", field.name(), value).ok();
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.separate();
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            write!(self.message, "{}={}", field.name(), value).ok();
        }
    }
}
