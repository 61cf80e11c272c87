/// Emits a message built from several positional arguments. A first argument
/// containing `%` specifiers is used as a printf-style format string.
///
/// ```
/// use footstep::{Level, Logger, Overrides, Sink};
///
/// let mut logger = Logger::new(Overrides::new().stream("info", Sink::null()));
/// footstep::log!(logger, Level::Info, "loaded %d files from %s", 3, "/etc");
/// assert_eq!(
///     logger.past_logs().last().map(|r| r.message.as_str()),
///     Some("loaded 3 files from /etc")
/// );
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:expr),+ $(,)?) => {
        $logger.emit($level, &[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Per-level shorthands for [`log!`]: `footstep::info!(logger, "%s ready", name)`.
///
/// ```
/// use footstep::{Level, Logger, Overrides, Sink};
///
/// let mut logger = Logger::new(Overrides::new().stream("warning", Sink::null()));
/// footstep::warning!(logger, "%d retries left", 2);
/// assert_eq!(logger.past_logs().last().map(|r| r.level), Some(Level::Warning));
/// ```
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Level::Verbose, $($arg),+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Level::Info, $($arg),+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Level::Error, $($arg),+)
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg),+)
    };
}

#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Level::Notice, $($arg),+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg),+)
    };
}
