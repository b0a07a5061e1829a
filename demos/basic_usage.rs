//! Basic facade usage example
//!
//! Initializes the process-wide logger, logs through two module loggers and
//! flushes on the way out.
//!
//! Run with: cargo run --example basic_usage
//! Try:      LOG_LEVEL=debug cargo run --example basic_usage | head -n 2

use service_logger::{debug, info, Result};

fn main() -> Result<()> {
    // Empty level: LOG_LEVEL, then "info"
    service_logger::init("", "demo-service", "dev")?;

    let http = service_logger::module_logger("http");
    let db = service_logger::module_logger("db");

    info!(http, "listening on port {}", 8080);
    debug!(db, "pool size {}", 4);

    http.info_builder()
        .message("request served")
        .field("path", "/orders")
        .field("status", 200)
        .log();

    db.error("connection reset");

    // Stdout closed by `head` is not an error
    service_logger::sync()
}
