//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::{Builder, Env};

/// Setup logging with `default_level` unless `RUST_LOG` says otherwise.
///
/// Calling this more than once is harmless.
pub fn setup_logging(default_level: &str) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_level)).try_init();
}
