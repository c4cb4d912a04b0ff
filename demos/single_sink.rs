//! Single-sink logger example
//!
//! Demonstrates the threshold logger writing formatted lines to a file,
//! configured from JSON and adjusted at runtime.
//!
//! Run with: cargo run --example single_sink

use filtered_logger::prelude::*;
use std::fs;

fn main() -> Result<()> {
    println!("=== Filtered Logger - Single Sink Example ===\n");

    let log_path = std::env::temp_dir().join("filtered_logger_single_sink.log");

    let config = LoggerConfig::from_json(
        r#"{
            "level": "info",
            "logFormat": "{datetime} {LEVEL}: {message} {context}",
            "dateFormat": "%H:%M:%S"
        }"#,
    )?
    .with_filename(log_path.to_string_lossy());

    let mut logger = SingleSinkLogger::with_config(config)?;

    println!("1. Writing to {}", log_path.display());
    logger.debug("Below the threshold, dropped")?;
    logger.info("Service started")?;
    logger.log_with_context(
        LogLevel::Warning,
        "Cache miss rate high",
        LogContext::new().with_field("rate", 0.42),
    )?;

    println!("2. Lowering the threshold to debug");
    logger.set_level("debug")?;
    logger.debug("Now visible")?;

    // releases the file handle
    logger.close()?;

    println!("\n3. File contents:");
    for line in fs::read_to_string(&log_path)?.lines() {
        println!("   {}", line);
    }

    println!("\n4. Switching to stderr:");
    logger.set_filename("");
    logger.set_eol("\n");
    logger.error("Written to stderr")?;

    fs::remove_file(&log_path)?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
