//! Bridge configuration types.
//!
//! [`BridgeConfig`] is the single source of truth for runtime settings. It is
//! a plain struct with no environment reads of its own: the binary populates
//! it from CLI arguments and environment variables, and tests construct it
//! directly. Defaults match the historical single-board deployment, so a bare
//! `keywire-bridge` on a configured gadget host just works.

use std::net::SocketAddr;
use std::path::PathBuf;

/// All runtime configuration for the bridge.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Address and port the WebSocket server binds to.
    ///
    /// `0.0.0.0` accepts connections from any interface; use `127.0.0.1` to
    /// restrict access to the gadget host itself.
    pub bind_addr: SocketAddr,

    /// Path of the HID gadget device file reports are written to.
    ///
    /// On a kernel configured with the configfs HID gadget this is
    /// `/dev/hidg0`. The file is opened per keystroke, never held open.
    pub hid_path: PathBuf,
}

impl Default for BridgeConfig {
    /// | Field     | Default        |
    /// |-----------|----------------|
    /// | bind_addr | `0.0.0.0:8000` |
    /// | hid_path  | `/dev/hidg0`   |
    fn default() -> Self {
        Self {
            // Compile-time-known valid socket address string.
            bind_addr: "0.0.0.0:8000".parse().unwrap(),
            hid_path: PathBuf::from("/dev/hidg0"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
