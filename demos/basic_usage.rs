//! Basic logger usage
//!
//! Demonstrates the sink backend, priority filtering, and identifiers.
//!
//! Run with: cargo run --example basic_usage

use log_relay::{info, warning, Log, Priority, SinkLogger};

fn main() {
    println!("=== Log Relay - Basic Usage ===\n");

    // A sink logger writing plain lines to stdout.
    let mut logger = SinkLogger::new(std::io::stdout());
    logger.set_id("demo ");

    println!("1. Default threshold is Warning:");
    logger.warning("this is emitted");
    logger.info("this is filtered");

    println!("\n2. Loosen the threshold to Debug:");
    logger.set_priority(Priority::Debug);
    logger.info("now informational messages show");
    logger.debug("and debug messages too");

    println!("\n3. Formatted messages:");
    let port = 8080;
    info!(logger, "listening on port {}", port);
    warning!(logger, "retry attempt {} of {}", 2, 5);

    println!("\n4. Priority text surface:");
    let pri: Priority = "crit".parse().expect("known synonym");
    println!("   parsed \"crit\" as {}", pri);
    match "verbose".parse::<Priority>() {
        Ok(_) => unreachable!(),
        Err(err) => println!("   rejected \"verbose\": {}", err),
    }
}
