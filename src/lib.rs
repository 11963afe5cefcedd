#![doc(test(attr(deny(warnings))))]

//! Subtrack Core tracks recurring and one-time expenses for a solo founder:
//! burn rate, category breakdowns, renewal calendars, and cost-optimization
//! heuristics derived from a small in-memory expense collection.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Subtrack Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
