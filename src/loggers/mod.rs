//! Concrete logger backends

pub mod channel;
pub mod null;
pub mod sink;

pub use channel::{drain_pending, shared, ChannelLogger, QueuedMessage, SharedLog};
pub use null::{null_log_maker, NullLogger};
pub use sink::{sink_log_maker, SinkLogger};
