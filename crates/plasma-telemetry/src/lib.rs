//! # Plasma Telemetry
//!
//! Structured logging for the plasma sidechain core.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plasma_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let span = init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//!     let _service = span.entered();
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PC_SERVICE_NAME` | `plasma-core` | `service` field of the root span |
//! | `PC_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter |
//! | `PC_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `PC_JSON_LOGS` | `false` (`true` in containers) | JSON log format |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging, service_span};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Initialize logging for the process and return the service span.
///
/// Enter the returned span on each thread whose events should carry the
/// service name.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<tracing::Span, TelemetryError> {
    init_logging(config)?;
    Ok(service_span(config))
}

