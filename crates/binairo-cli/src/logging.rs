use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose logging flag
static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

pub fn enable_verbose_logging() {
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// Diagnostic output on stderr, only when `--verbose` is set
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!("[binairo] {}", format!($($arg)*));
        }
    };
}
