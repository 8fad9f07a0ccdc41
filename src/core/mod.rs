//! Core types and traits of the logging facade

pub mod error;
pub mod logger;
pub mod message;
pub mod priority;

pub use error::{LoggerError, Result};
pub use logger::{Log, LogMaker, LogOwner};
pub use message::Message;
pub use priority::Priority;
