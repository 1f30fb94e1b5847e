//! # Bookstore Demo Library
//!
//! Wires configuration, logging and the demo script together.
//!
//! ## Module Organization
//! ```text
//! bookstore_demo/
//! ├── lib.rs      ◄─── You are here (startup sequence)
//! ├── config.rs   ◄─── Environment configuration
//! ├── demo.rs     ◄─── The fixed demo script
//! └── error.rs    ◄─── DemoError for main()
//! ```
//!
//! ## Output Streams
//! - stdout: the demo text, nothing else
//! - stderr: tracing events, filtered by `BOOKSTORE_LOG` (default `warn`)

pub mod config;
pub mod demo;
pub mod error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::DemoConfig;
use error::DemoResult;

/// Runs the demo end to end.
///
/// ## Startup Sequence
/// ```text
/// 1. Load DemoConfig from the environment
/// 2. Initialize tracing (stderr)
/// 3. Render the demo script
/// 4. Print it to stdout
/// ```
pub fn run() -> DemoResult<()> {
    let config = DemoConfig::load()?;
    init_tracing(&config.log_filter);

    info!(report_format = ?config.report_format, "Starting bookstore demo");

    let output = demo::render(&config)?;
    print!("{}", output);

    info!("Demo complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// An unparsable filter falls back to `warn`. Must be called once per process.
fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(filter))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn log_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_keeps_valid_directives() {
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_log_filter_falls_back_to_warn() {
        assert_eq!(log_filter("bookstore=loud").max_level_hint(), Some(LevelFilter::WARN));
    }
}
