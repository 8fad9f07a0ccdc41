//! Channel-backed forwarding logger for concurrent producers
//!
//! A [`ChannelLogger`] wraps a logger whose sink is not safe for concurrent
//! use and exposes a submission endpoint that is. Submissions are captured as
//! [`QueuedMessage`]s in a bounded queue; a single consumer, running in the
//! execution context that owns the wrapped logger, receives and emits them.
//!
//! The queue is never closed by the forwarding logger itself. An application
//! that wants to stop consuming must signal termination on its own channel
//! and then perform a final non-blocking [`drain_pending`] pass, since
//! producers may race the shutdown signal.

use crossbeam_channel::{bounded, Receiver, Sender};
use parking_lot::Mutex;
use std::any::Any;
use std::sync::Arc;

use crate::core::{Log, Message, Priority};
use crate::loggers::null::NullLogger;

/// Wrapped-logger handle shared between the submission side and the draining
/// consumer. The mutex serializes access; in steady state only the consumer
/// touches the logger.
pub type SharedLog = Arc<Mutex<Box<dyn Log>>>;

/// Wrap a logger for use with [`ChannelLogger::new`].
pub fn shared(logger: Box<dyn Log>) -> SharedLog {
    Arc::new(Mutex::new(logger))
}

/// A pending log request, captured at submission time and consumed exactly
/// once by the draining consumer.
///
/// Holds the wrapped-logger handle, the priority, and the prefix-applied
/// message body. Rendering is deferred until [`QueuedMessage::emit`].
pub struct QueuedMessage {
    target: SharedLog,
    pri: Priority,
    message: Message,
}

impl QueuedMessage {
    /// The priority captured at submission.
    pub fn priority(&self) -> Priority {
        self.pri
    }

    /// Format and write through the wrapped logger, exactly as if it had been
    /// called directly with the submitted arguments.
    ///
    /// The wrapped logger's priority at this moment, not at submission time,
    /// decides whether the message is written.
    pub fn emit(self) {
        self.target.lock().emit(self.pri, self.message);
    }
}

/// Concurrency-safe submission endpoint over a non-concurrent-safe logger.
///
/// Cloning yields another endpoint on the same queue and wrapped logger;
/// hand each worker its own clone (optionally via
/// [`ChannelLogger::prefixed`]). `emit` never filters: the threshold check is
/// deferred to the consumer at drain time.
///
/// ```
/// use log_relay::{shared, ChannelLogger, Log, SinkLogger};
///
/// let wrapped = shared(Box::new(SinkLogger::new(Vec::new())));
/// let (mut lgr, rx) = ChannelLogger::new(wrapped, 4);
/// lgr.warning("queued, not yet written");
/// rx.recv().unwrap().emit();
/// ```
#[derive(Clone)]
pub struct ChannelLogger {
    inner: SharedLog,
    tx: Sender<QueuedMessage>,
    prefix: String,
}

impl ChannelLogger {
    /// Wrap `logger`, returning a submission endpoint and the receive handle
    /// the consumer drains.
    ///
    /// A requested capacity of 0 is raised to 1: an unbuffered rendezvous
    /// would force producers and consumer into lockstep.
    pub fn new(logger: SharedLog, capacity: usize) -> (ChannelLogger, Receiver<QueuedMessage>) {
        let (tx, rx) = bounded(capacity.max(1));
        (
            ChannelLogger {
                inner: logger,
                tx,
                prefix: String::new(),
            },
            rx,
        )
    }

    /// Derive a submission endpoint that prepends `prefix` to every message
    /// submitted through it, sharing `source`'s queue and wrapped logger.
    ///
    /// This is a capability check on the backend, not a value check: if
    /// `source` is not a `ChannelLogger`, the result is a [`NullLogger`],
    /// whose `emit` is safely callable, drops all messages, and enqueues
    /// nothing. Call sites stay uniform either way.
    ///
    /// Deriving from an already-prefixed endpoint composes the prefixes,
    /// source prefix first.
    pub fn prefixed(source: &dyn Log, prefix: &str) -> Box<dyn Log> {
        match source.as_any().downcast_ref::<ChannelLogger>() {
            Some(ch) => Box::new(ChannelLogger {
                inner: Arc::clone(&ch.inner),
                tx: ch.tx.clone(),
                prefix: format!("{}{}", ch.prefix, prefix),
            }),
            None => Box::new(NullLogger::new()),
        }
    }
}

impl Log for ChannelLogger {
    fn set_id(&mut self, id: &str) -> &mut dyn Log {
        self.inner.lock().set_id(id);
        self
    }

    fn set_priority(&mut self, pri: Priority) -> &mut dyn Log {
        self.inner.lock().set_priority(pri);
        self
    }

    /// Delegates to the wrapped logger's current priority.
    fn priority(&self) -> Priority {
        self.inner.lock().priority()
    }

    /// Capture and enqueue the message without filtering; the threshold is
    /// applied by the consumer at drain time.
    ///
    /// Blocks while the queue is full. Size the capacity to the producers'
    /// burst profile or accept the backpressure. If the receive handle has
    /// been dropped the message is discarded.
    fn emit(&mut self, pri: Priority, message: Message) {
        let qm = QueuedMessage {
            target: Arc::clone(&self.inner),
            pri,
            message: message.prefixed(&self.prefix),
        };
        let _ = self.tx.send(qm);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Emit every message already in the queue without blocking, returning how
/// many were emitted.
///
/// Consumers run this as the final pass after deciding to stop, so messages
/// that raced the shutdown signal are not lost.
pub fn drain_pending(rx: &Receiver<QueuedMessage>) -> usize {
    let mut emitted = 0;
    while let Ok(qm) = rx.try_recv() {
        qm.emit();
        emitted += 1;
    }
    emitted
}
