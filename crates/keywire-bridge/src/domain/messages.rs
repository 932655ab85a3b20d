//! JSON message types for the browser-facing WebSocket protocol.
//!
//! Every message on the wire is a JSON object with a `"type"` field naming
//! the variant; the remaining fields sit flat in the same object. Serde's
//! `#[serde(tag = "type")]` handles the discriminant automatically.
//!
//! # Message flow
//!
//! ```text
//! Browser → Bridge:  {"type":"Keystroke","key":"a","keyCode":65,
//!                     "metaKey":false,"altKey":false,
//!                     "shiftKey":true,"ctrlKey":false}
//! Bridge  → Browser: {"type":"KeystrokeAck","success":true}
//! ```
//!
//! The two directions use distinct enums, so sending a browser-only message
//! to the browser (or vice versa) is a compile-time error.
//!
//! # Acknowledgement contract
//!
//! Exactly one `KeystrokeAck` is emitted per inbound keystroke. On failure
//! the ack carries a short machine-readable `reason` so the browser UI can
//! distinguish "that key cannot be typed" from "the gadget device is broken";
//! on success the field is omitted entirely.

use serde::{Deserialize, Serialize};

use keywire_core::KeyEvent;

// ── Browser → Bridge messages ─────────────────────────────────────────────────

/// All messages a browser can send to the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BrowserToBridgeMsg {
    /// One keydown captured in the browser, to be forwarded to the gadget.
    Keystroke(KeyEvent),
}

// ── Bridge → Browser messages ─────────────────────────────────────────────────

/// Failure reasons carried in a negative [`BridgeToBrowserMsg::KeystrokeAck`].
///
/// These are wire constants, collected here so the session handler and the
/// tests cannot drift apart on the exact slugs.
pub mod ack_reason {
    /// The key has no HID usage mapping; nothing was written.
    pub const UNMAPPED_KEY: &str = "unmapped-key";
    /// The gadget device could not be opened or written.
    pub const DEVICE_WRITE: &str = "device-write";
    /// The keystroke payload was missing or mistyping required fields.
    pub const MALFORMED_EVENT: &str = "malformed-event";
}

/// All messages the bridge sends to a browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BridgeToBrowserMsg {
    /// Outcome of one forwarded keystroke.
    KeystrokeAck {
        /// `true` when the report reached the gadget device.
        success: bool,
        /// Failure reason slug (see [`ack_reason`]); absent on success.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

impl BridgeToBrowserMsg {
    /// The ack for a keystroke that reached the device.
    pub fn ack_success() -> Self {
        BridgeToBrowserMsg::KeystrokeAck {
            success: true,
            reason: None,
        }
    }

    /// The ack for a keystroke that did not reach the device.
    pub fn ack_failure(reason: &str) -> Self {
        BridgeToBrowserMsg::KeystrokeAck {
            success: false,
            reason: Some(reason.to_string()),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
