//! Logger that discards every message

use std::any::Any;

use crate::core::{Log, Message, Priority};

/// Logger with no observable output.
///
/// Priority bookkeeping behaves exactly like a real logger so code paths stay
/// interchangeable; identifiers are accepted and ignored; message bodies are
/// dropped without being rendered. Also serves as the no-op endpoint returned
/// by a failed [`crate::loggers::ChannelLogger::prefixed`] derivation.
#[derive(Debug, Clone, Default)]
pub struct NullLogger {
    pri: Priority,
}

impl NullLogger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Log for NullLogger {
    fn set_id(&mut self, _id: &str) -> &mut dyn Log {
        self
    }

    fn set_priority(&mut self, pri: Priority) -> &mut dyn Log {
        self.pri = pri;
        self
    }

    fn priority(&self) -> Priority {
        self.pri
    }

    fn emit(&mut self, _pri: Priority, _message: Message) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// [`crate::core::LogMaker`] producing a discarding logger, ignoring the
/// owner.
pub fn null_log_maker(_owner: Option<&dyn Any>) -> Box<dyn Log> {
    Box::new(NullLogger::new())
}
