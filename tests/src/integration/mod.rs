//! Cross-crate scenarios: admission followed by state transition.

pub mod deposit_flow;
pub mod spend_flow;
pub mod telemetry;
