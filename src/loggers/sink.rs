//! Line-oriented text logger writing to an output stream

use std::any::Any;
use std::io::Write;

use crate::core::{Log, Message, Priority, Result};

/// Logger that formats and writes one line per accepted message.
///
/// Accepted messages are written as `<id>[<code>] <message>\n`, where `<code>`
/// is the single-character priority marker, optionally preceded by a
/// `YYYY/MM/DD HH:MM:SS ` wall-clock timestamp. The destination stream is not
/// synchronized; a `SinkLogger` has a single owner, and concurrent callers
/// must go through a [`crate::loggers::ChannelLogger`] instead.
///
/// ```
/// use log_relay::{Log, SinkLogger};
///
/// let mut lgr = SinkLogger::new(Vec::new());
/// lgr.set_id("svc ");
/// lgr.warning("low disk space");
/// ```
pub struct SinkLogger {
    pri: Priority,
    id: String,
    timestamps: bool,
    out: Box<dyn Write + Send>,
}

impl SinkLogger {
    /// Create a sink writing to `out`, filtering at the default `Warning`.
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            pri: Priority::default(),
            id: String::new(),
            timestamps: false,
            out: Box::new(out),
        }
    }

    /// Create a sink writing timestamped lines to standard error.
    pub fn stderr() -> Self {
        Self::new(std::io::stderr()).with_timestamps(true)
    }

    /// Toggle the wall-clock timestamp ahead of each line.
    #[must_use]
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Replace the destination stream.
    ///
    /// Part of the sink-specific surface reached by downcast when the logger
    /// is held as `dyn Log`.
    pub fn set_output(&mut self, out: impl Write + Send + 'static) {
        self.out = Box::new(out);
    }

    /// Flush the destination stream.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

impl Log for SinkLogger {
    fn set_id(&mut self, id: &str) -> &mut dyn Log {
        self.id = id.to_string();
        self
    }

    fn set_priority(&mut self, pri: Priority) -> &mut dyn Log {
        self.pri = pri;
        self
    }

    fn priority(&self) -> Priority {
        self.pri
    }

    /// Filtered-out messages have no side effect; the body is not rendered.
    /// Write failures are swallowed, emission never disturbs the caller.
    fn emit(&mut self, pri: Priority, message: Message) {
        if !self.pri.enables(pri) {
            return;
        }
        let text = message.into_string();
        let line = if self.timestamps {
            let now = chrono::Local::now().format("%Y/%m/%d %H:%M:%S");
            format!("{} {}[{}] {}\n", now, self.id, pri.code(), text)
        } else {
            format!("{}[{}] {}\n", self.id, pri.code(), text)
        };
        let _ = self.out.write_all(line.as_bytes());
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// [`crate::core::LogMaker`] producing a stderr-backed sink at the default
/// `Warning` priority, ignoring the owner.
pub fn sink_log_maker(_owner: Option<&dyn Any>) -> Box<dyn Log> {
    Box::new(SinkLogger::stderr())
}
