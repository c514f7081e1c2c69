//! Demo walking through single, optional, and batched settling.
//!
//! Run with: cargo run --example demo

use std::collections::HashMap;
use std::time::Duration;

use settled::{settle, settle_all, settle_all_async, settle_optional, Caught};
use thiserror::Error;

// ============================================================================
// A small fallible domain
// ============================================================================

#[derive(Debug, Clone, Error)]
enum ConfigError {
    #[error("missing key: {0}")]
    Missing(String),
    #[error("not a number: {0}")]
    NotANumber(String),
}

fn lookup(config: &HashMap<&str, &str>, key: &str) -> Result<u32, ConfigError> {
    let raw = config
        .get(key)
        .ok_or_else(|| ConfigError::Missing(key.to_string()))?;
    raw.parse()
        .map_err(|_| ConfigError::NotANumber(raw.to_string()))
}

async fn fetch_port(config: HashMap<&str, &str>) -> Result<u32, ConfigError> {
    // Stand-in for a real async source
    tokio::time::sleep(Duration::from_millis(50)).await;
    lookup(&config, "port")
}

#[tokio::main]
async fn main() {
    let mut config = HashMap::new();
    config.insert("port", "8080");
    config.insert("workers", "four");

    // ------------------------------------------------------------------
    // Single call: branch on success, then read value or error
    // ------------------------------------------------------------------
    println!("=== single call ===");
    let outcome = settle(|| lookup(&config, "port"));
    if outcome.success {
        println!("port = {}", outcome.value.unwrap());
    } else {
        println!("port failed: {}", outcome.error);
    }

    // The foot-gun: on success the error slot holds the sentinel, whose
    // message tells you to check the value first.
    println!("error slot of a success reads: {}", outcome.error);

    // ------------------------------------------------------------------
    // Optional-returning call: absent is a success, not a failure
    // ------------------------------------------------------------------
    println!("\n=== optional call ===");
    let outcome = settle_optional(|| -> Result<Option<u32>, ConfigError> {
        Ok(config.get("timeout").and_then(|raw| raw.parse().ok()))
    });
    match (outcome.success, outcome.value) {
        (true, Some(timeout)) => println!("timeout = {timeout}"),
        (true, None) => println!("no timeout configured (that's fine)"),
        (false, _) => println!("lookup failed: {:?}", outcome.error),
    }

    // ------------------------------------------------------------------
    // All-settled batch: every entry reported, in order
    // ------------------------------------------------------------------
    println!("\n=== all-settled batch ===");
    let outcomes = settle_all![
        || lookup(&config, "port"),
        || lookup(&config, "workers"),
        || lookup(&config, "retries"),
    ];
    for (index, outcome) in outcomes.iter().enumerate() {
        match &outcome.error {
            Caught::NotAnError(_) => {
                println!("  [{index}] ok: {}", outcome.value.unwrap())
            }
            Caught::Raised(e) => println!("  [{index}] failed: {e}"),
        }
    }

    // ------------------------------------------------------------------
    // Async batch: awaited strictly in order
    // ------------------------------------------------------------------
    println!("\n=== async batch ===");
    let outcomes = settle_all_async![
        fetch_port(config.clone()),
        fetch_port(HashMap::new()),
    ]
    .await;
    for (index, outcome) in outcomes.iter().enumerate() {
        if outcome.success {
            println!("  [{index}] port = {}", outcome.value.unwrap());
        } else {
            println!("  [{index}] failed: {}", outcome.error);
        }
    }
}
