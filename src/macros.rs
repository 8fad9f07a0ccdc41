//! Formatting macros for prioritized log messages.
//!
//! The macros capture their arguments at the call site but defer the actual
//! `format!` work until the message is written, so filtered-out and discarded
//! messages cost no formatting. Arguments are captured by value; borrowed
//! data must be owned or `'static` to cross a forwarding queue.
//!
//! # Examples
//!
//! ```
//! use log_relay::{warning, Log, SinkLogger};
//!
//! let mut logger = SinkLogger::new(Vec::new());
//! let attempt = 3;
//! warning!(logger, "retry attempt {} of {}", attempt, 5);
//! ```

/// Emit a formatted message at an explicit priority.
///
/// ```
/// use log_relay::{logf, Log, Priority, SinkLogger};
///
/// let mut logger = SinkLogger::new(Vec::new());
/// logf!(logger, Priority::Error, "exit code {}", 3);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $pri:expr, $($arg:tt)+) => {
        $logger.emit($pri, $crate::Message::lazy(move || format!($($arg)+)))
    };
}

/// Emit a formatted `Emergency` message.
#[macro_export]
macro_rules! emerg {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Priority::Emergency, $($arg)+)
    };
}

/// Emit a formatted `Critical` message.
#[macro_export]
macro_rules! crit {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Priority::Critical, $($arg)+)
    };
}

/// Emit a formatted `Error` message.
///
/// ```
/// use log_relay::{error, Log, SinkLogger};
///
/// let mut logger = SinkLogger::new(Vec::new());
/// error!(logger, "failed to open {}: {}", "config.toml", "not found");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Priority::Error, $($arg)+)
    };
}

/// Emit a formatted `Warning` message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Priority::Warning, $($arg)+)
    };
}

/// Emit a formatted `Notice` message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Priority::Notice, $($arg)+)
    };
}

/// Emit a formatted `Info` message.
///
/// ```
/// use log_relay::{info, Log, Priority, SinkLogger};
///
/// let mut logger = SinkLogger::new(Vec::new());
/// logger.set_priority(Priority::Info);
/// info!(logger, "listening on port {}", 8080);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Priority::Info, $($arg)+)
    };
}

/// Emit a formatted `Debug` message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Priority::Debug, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::loggers::test_util::SharedBuf;
    use crate::{Log, Priority, SinkLogger};

    #[test]
    fn test_logf_macro() {
        let buf = SharedBuf::new();
        let mut logger = SinkLogger::new(buf.clone());
        logf!(logger, Priority::Warning, "code {}", 500);
        assert_eq!(buf.take(), "[W] code 500\n");
    }

    #[test]
    fn test_priority_macros() {
        let buf = SharedBuf::new();
        let mut logger = SinkLogger::new(buf.clone());
        logger.set_priority(Priority::Debug);

        emerg!(logger, "unusable");
        crit!(logger, "critical {}", 1);
        error!(logger, "error {}", 2);
        warning!(logger, "warning {}", 3);
        notice!(logger, "notice {}", 4);
        info!(logger, "info {}", 5);
        debug!(logger, "debug {}", 6);

        assert_eq!(
            buf.take(),
            "[!] unusable\n[C] critical 1\n[E] error 2\n[W] warning 3\n\
             [N] notice 4\n[I] info 5\n[D] debug 6\n"
        );
    }

    #[test]
    fn test_macro_through_boxed_logger() {
        let buf = SharedBuf::new();
        let mut logger: Box<dyn Log> = Box::new(SinkLogger::new(buf.clone()));
        warning!(logger, "boxed {}", true);
        assert_eq!(buf.take(), "[W] boxed true\n");
    }
}
