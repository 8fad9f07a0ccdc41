//! Forwarding logger with concurrent workers
//!
//! A service owns a sink that is not safe for concurrent use. It wraps the
//! sink in a channel logger, hands prefixed endpoints to two worker threads,
//! and runs the consumption loop itself: every queued message is formatted
//! and written in the service's own execution context, through the same sink
//! the service logs to directly. After both workers signal completion, a
//! final non-blocking drain catches messages that raced the signals.
//!
//! Run with: cargo run --example chan_service

use crossbeam_channel::{select, unbounded};
use log_relay::{drain_pending, info, notice, shared, ChannelLogger, Log, Priority, SinkLogger};
use std::sync::Arc;
use std::thread;

fn worker(mut lgr: Box<dyn Log>, done: crossbeam_channel::Sender<()>) {
    notice!(lgr, "Started subservice");
    info!(lgr, "Notified service");
    lgr.debug("Debug");
    notice!(lgr, "Gone");
    done.send(()).unwrap();
}

fn main() {
    let mut sink = SinkLogger::new(std::io::stdout());
    sink.set_priority(Priority::Debug).set_id("S1");
    let wrapped = shared(Box::new(sink));

    // Small queue on purpose: workers block briefly when it fills. The
    // service itself logs through `wrapped` directly; it owns the consumer
    // context, so that never contends with a draining pass.
    let (chlgr, log_rx) = ChannelLogger::new(Arc::clone(&wrapped), 2);
    let (done_tx, done_rx) = unbounded::<()>();

    wrapped.lock().notice("Entered");

    let mut handles = Vec::new();
    for name in ["s1: ", "s2: "] {
        let endpoint = ChannelLogger::prefixed(&chlgr, name);
        let done = done_tx.clone();
        handles.push(thread::spawn(move || worker(endpoint, done)));
        info!(wrapped.lock(), "Started {}", name.trim_end_matches(": "));
    }
    let workers = handles.len();

    let mut remaining = workers;
    while remaining > 0 {
        select! {
            recv(log_rx) -> qm => {
                if let Ok(qm) = qm {
                    qm.emit();
                }
            }
            recv(done_rx) -> _ => {
                remaining -= 1;
                let seen = workers - remaining;
                info!(wrapped.lock(), "{} signalled done", seen);
            }
        }
    }

    // Flush out any remaining messages.
    drain_pending(&log_rx);

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    wrapped.lock().notice("Gone");
}
