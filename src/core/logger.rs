//! Logger capability trait and factory contract

use std::any::Any;

use super::message::Message;
use super::priority::Priority;

/// Filterable, identifier-prefixed text logging capability.
///
/// The crate ships a closed set of backends behind this trait: a line-oriented
/// stream backend ([`crate::loggers::SinkLogger`]), a discarding backend
/// ([`crate::loggers::NullLogger`]), and a channel-backed forwarding endpoint
/// ([`crate::loggers::ChannelLogger`]). Backend-specific extras, such as
/// reconfiguring a sink's output stream, are reached through [`Log::as_any`]
/// rather than widening this interface.
///
/// Configuration methods return the receiver so calls chain:
///
/// ```
/// use log_relay::{Log, NullLogger, Priority};
///
/// let mut lgr = NullLogger::new();
/// assert_eq!(lgr.set_priority(Priority::Debug).priority(), Priority::Debug);
/// ```
///
/// Mutating the priority or identifier is an owner-side operation; perform it
/// before handing concurrent workers access to a forwarding endpoint.
pub trait Log: Send + Any {
    /// Replace the identification string prepended to each emitted message.
    ///
    /// No separator is inserted beyond what `id` itself contains.
    fn set_id(&mut self, id: &str) -> &mut dyn Log;

    /// Replace the priority used to filter emitted messages.
    fn set_priority(&mut self, pri: Priority) -> &mut dyn Log;

    /// The priority of the least severe message that will still be emitted.
    fn priority(&self) -> Priority;

    /// Emit `message` at `pri`, subject to the backend's filtering.
    fn emit(&mut self, pri: Priority, message: Message);

    /// Downcast support for backend-specific capabilities.
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast support for backend-specific capabilities.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Emit plain text at `Emergency`.
    fn emergency(&mut self, text: &str) {
        self.emit(Priority::Emergency, text.into());
    }

    /// Emit plain text at `Critical`.
    fn critical(&mut self, text: &str) {
        self.emit(Priority::Critical, text.into());
    }

    /// Emit plain text at `Error`.
    fn error(&mut self, text: &str) {
        self.emit(Priority::Error, text.into());
    }

    /// Emit plain text at `Warning`.
    fn warning(&mut self, text: &str) {
        self.emit(Priority::Warning, text.into());
    }

    /// Emit plain text at `Notice`.
    fn notice(&mut self, text: &str) {
        self.emit(Priority::Notice, text.into());
    }

    /// Emit plain text at `Info`.
    fn info(&mut self, text: &str) {
        self.emit(Priority::Info, text.into());
    }

    /// Emit plain text at `Debug`.
    fn debug(&mut self, text: &str) {
        self.emit(Priority::Debug, text.into());
    }
}

/// Factory that constructs a logger for some owner object or role.
///
/// Injecting a `LogMaker` into a package lets the application choose the log
/// infrastructure while ensuring objects receive a configured logger before
/// any threads associated with them start. The factory may inspect `owner`
/// to customize priority, identifier, or destination per role; `None` asks
/// for an anonymous logger.
pub type LogMaker = fn(owner: Option<&dyn Any>) -> Box<dyn Log>;

/// Exposes the log configuration of an object that owns a logger.
pub trait LogOwner {
    /// Priority of the owned logger.
    fn log_priority(&self) -> Priority;

    /// Set the priority of the owned logger.
    fn log_set_priority(&mut self, pri: Priority);
}
