//! # Log Relay
//!
//! A minimal logging facade with syslog-style priorities, pluggable backends,
//! and a channel-based forwarding layer that lets concurrent producers log
//! through a sink that is not safe for concurrent use.
//!
//! ## Features
//!
//! - **Priority filtering**: seven ordered syslog levels with text
//!   encoding/decoding for configuration surfaces
//! - **Interchangeable backends**: line-oriented stream sink, discarding
//!   null logger, and a forwarding endpoint, all behind one [`Log`] trait
//! - **Safe concurrency**: any number of producers submit through a bounded
//!   queue drained by the single context that owns the real sink
//! - **Deferred formatting**: message bodies render only when actually
//!   written
//!
//! ## Forwarding overview
//!
//! ```
//! use log_relay::{drain_pending, shared, warning, ChannelLogger, Log, SinkLogger};
//!
//! let wrapped = shared(Box::new(SinkLogger::new(Vec::new())));
//! let (chlgr, rx) = ChannelLogger::new(wrapped, 8);
//!
//! let mut worker = ChannelLogger::prefixed(&chlgr, "w1: ");
//! warning!(worker, "queue depth {}", 42);
//!
//! // The owning context drains and emits.
//! while drain_pending(&rx) > 0 {}
//! ```

pub mod core;
pub mod loggers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{Log, LogMaker, LogOwner, LoggerError, Message, Priority, Result};
    pub use crate::loggers::{
        drain_pending, null_log_maker, shared, sink_log_maker, ChannelLogger, NullLogger,
        QueuedMessage, SharedLog, SinkLogger,
    };
}

pub use crate::core::{Log, LogMaker, LogOwner, LoggerError, Message, Priority, Result};
pub use crate::loggers::{
    drain_pending, null_log_maker, shared, sink_log_maker, ChannelLogger, NullLogger,
    QueuedMessage, SharedLog, SinkLogger,
};
