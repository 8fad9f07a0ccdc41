//! Factory-based logger injection
//!
//! A `LogMaker` lets the application choose the log infrastructure for
//! objects created by a library, configuring priority and identifier from
//! the owner before any of the object's threads start.
//!
//! Run with: cargo run --example log_maker

use log_relay::{Log, LogMaker, Priority, SinkLogger};
use std::any::Any;

struct Service {
    id: String,
}

struct SubService {
    id: String,
}

fn app_log_maker(owner: Option<&dyn Any>) -> Box<dyn Log> {
    let mut lgr: Box<dyn Log> = Box::new(SinkLogger::new(std::io::stdout()));
    match owner {
        Some(o) if o.is::<Service>() => {
            let svc = o.downcast_ref::<Service>().unwrap();
            lgr.set_priority(Priority::Info).set_id(&svc.id);
        }
        Some(o) if o.is::<SubService>() => {
            let sub = o.downcast_ref::<SubService>().unwrap();
            lgr.set_priority(Priority::Debug).set_id(&sub.id);
        }
        _ => {
            lgr.set_priority(Priority::Notice);
        }
    }
    lgr
}

fn run_service(maker: LogMaker) {
    let svc = Service {
        id: "S1".to_string(),
    };
    let sub = SubService {
        id: "S1.sub".to_string(),
    };

    let mut svc_lgr = maker(Some(&svc));
    let mut sub_lgr = maker(Some(&sub));

    svc_lgr.notice("Constructed");
    svc_lgr.info("Starting subservice");
    svc_lgr.debug("hidden at Info");

    sub_lgr.notice("Constructed");
    sub_lgr.debug("visible at Debug");
}

fn main() {
    run_service(app_log_maker);
}
