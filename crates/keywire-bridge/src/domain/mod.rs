//! Domain layer: pure wire-message and configuration types (no I/O).

pub mod config;
pub mod messages;

pub use config::BridgeConfig;
pub use messages::{ack_reason, BridgeToBrowserMsg, BrowserToBridgeMsg};
