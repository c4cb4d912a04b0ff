//! Multi-destination logger example
//!
//! Demonstrates routing records to several destinations with filter
//! expressions, threshold selectors and record processors.
//!
//! Run with: cargo run --example multi_destination

use filtered_logger::prelude::*;
use filtered_logger::warning;

fn main() -> Result<()> {
    println!("=== Filtered Logger - Multi-Destination Example ===\n");

    let audit = MemoryAppender::named("audit");

    let mut logger = MultiDestinationLogger::builder()
        .channel("demo")
        // everything except debug goes to the console
        .appender(ConsoleAppender::new(), "all -debug")
        // only errors and warnings are kept for auditing
        .appender(audit.clone(), "none +error +warning")
        .processor(|record| record.with_extra("pid", i64::from(std::process::id())))
        .build();

    println!("1. Logging at different levels:");
    logger.debug("Debug message (console skips it)")?;
    logger.info("Info message")?;
    warning!(logger, "Disk usage at {}%", 91)?;
    logger.log_with_context(
        LogLevel::Error,
        "Payment failed",
        LogContext::new()
            .with_field("order_id", 1042)
            .with_field("retryable", true),
    )?;

    println!("\n2. Audited records:");
    for record in audit.records() {
        println!("   [{}] {}", record.level_name(), record.message());
    }

    println!("\n3. Registry as a stack:");
    logger.push_appender(Box::new(MemoryAppender::named("scratch")), LogLevel::Critical);
    println!("   destinations: {}", logger.destinations().len());
    if let Some(appender) = logger.pop_appender() {
        println!("   popped: {}", appender.name());
    }

    let metrics = logger.metrics();
    println!(
        "\n4. Metrics: handled={}, unhandled={}, write failures={}",
        metrics.handled_count(),
        metrics.unhandled_count(),
        metrics.write_failures()
    );

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
