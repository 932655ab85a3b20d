//! The per-keystroke application service.
//!
//! [`KeystrokeService`] owns the single-shot flow every inbound keystroke
//! takes: convert the event to HID report ingredients, hand them to a
//! [`ReportSink`], and produce exactly one acknowledgement. There is no state
//! machine beyond this; nothing survives from one keystroke to the next.
//!
//! The service never fails: every error in the taxonomy is resolved locally
//! into a negative ack plus a log line, so a bad keystroke can never take the
//! session (let alone the process) down with it.
//!
//! The [`ReportSink`] trait is the seam to the device. The production
//! implementation opens the gadget file per keystroke
//! ([`crate::infrastructure::gadget::HidGadget`]); tests substitute a
//! recording mock.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use keywire_core::report::{DeviceWriteError, ModifierMask};
use keywire_core::{convert, HidUsageId, KeyEvent, KeymapError};

use crate::domain::messages::{ack_reason, BridgeToBrowserMsg, BrowserToBridgeMsg};

// ── Report sink seam ──────────────────────────────────────────────────────────

/// Destination for translated key-down reports.
///
/// Implementations deliver one report per call and hold no state between
/// calls. `Send + Sync` so a single instance can serve every session task.
pub trait ReportSink: Send + Sync {
    /// Delivers one key-down report.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceWriteError`] when the report cannot reach the device.
    fn send_key(&self, mask: ModifierMask, usage: HidUsageId) -> Result<(), DeviceWriteError>;
}

// ── Decode errors ─────────────────────────────────────────────────────────────

/// Failures while decoding an inbound WebSocket text frame.
///
/// The split matters for acknowledgement semantics: a frame that is
/// recognizably a keystroke but malformed gets a negative ack, while a frame
/// the bridge does not understand at all is only logged.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A `"type":"Keystroke"` frame whose payload failed validation
    /// (missing or wrong-typed fields).
    #[error("malformed keystroke payload: {0}")]
    MalformedKeystroke(String),

    /// A JSON frame with an unknown or absent `"type"`.
    #[error("unsupported message type: {0}")]
    UnsupportedMessage(String),

    /// A text frame that is not JSON at all.
    #[error("invalid JSON frame: {0}")]
    InvalidJson(String),
}

/// Decodes one inbound text frame into a [`BrowserToBridgeMsg`].
///
/// Decoding happens in two steps (parse the JSON, then inspect `"type"`
/// before validating fields) so that a malformed keystroke is distinguishable
/// from a message the bridge does not speak.
pub fn decode_browser_message(text: &str) -> Result<BrowserToBridgeMsg, DecodeError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;

    match value.get("type").and_then(|t| t.as_str()) {
        Some("Keystroke") => {
            // The extra "type" key is ignored by KeyEvent's deserializer.
            let event: KeyEvent = serde_json::from_value(value.clone())
                .map_err(|e| DecodeError::MalformedKeystroke(e.to_string()))?;
            Ok(BrowserToBridgeMsg::Keystroke(event))
        }
        Some(other) => Err(DecodeError::UnsupportedMessage(other.to_string())),
        None => Err(DecodeError::UnsupportedMessage("<missing type field>".to_string())),
    }
}

// ── Keystroke service ─────────────────────────────────────────────────────────

/// Translates keystrokes and delivers them to the report sink.
pub struct KeystrokeService {
    sink: Arc<dyn ReportSink>,
}

impl KeystrokeService {
    /// Creates a service delivering reports to `sink`.
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self { sink }
    }

    /// Handles one keystroke and returns the acknowledgement to emit.
    ///
    /// - Mapped key, device write ok: `{success:true}`.
    /// - Unmapped key: logged at info (an everyday occurrence for modifier
    ///   and media keys), acked `unmapped-key`, no write attempted.
    /// - Device open/write failure: logged at warn with the event context,
    ///   acked `device-write`. Permission failures take this path like any
    ///   other device failure; they are never folded into a success.
    pub fn handle_keystroke(&self, event: &KeyEvent) -> BridgeToBrowserMsg {
        let (mask, usage) = match convert(event) {
            Ok(converted) => converted,
            Err(KeymapError::UnrecognizedKey { key, key_code }) => {
                info!("ignoring unmapped key {key:?} (keyCode={key_code})");
                return BridgeToBrowserMsg::ack_failure(ack_reason::UNMAPPED_KEY);
            }
        };

        match self.sink.send_key(mask, usage) {
            Ok(()) => BridgeToBrowserMsg::ack_success(),
            Err(e) => {
                warn!(
                    "device write failed for key {:?} (keyCode={}): {e}",
                    event.key, event.key_code
                );
                BridgeToBrowserMsg::ack_failure(ack_reason::DEVICE_WRITE)
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;

    // ── Recording sink ────────────────────────────────────────────────────────

    #[derive(Default)]
    struct RecordingSink {
        sent: Mutex<Vec<(u8, u8)>>,
        should_fail: bool,
    }

    impl ReportSink for RecordingSink {
        fn send_key(&self, mask: ModifierMask, usage: HidUsageId) -> Result<(), DeviceWriteError> {
            if self.should_fail {
                return Err(DeviceWriteError::classify(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "injected failure",
                )));
            }
            self.sent.lock().unwrap().push((mask.0, usage.as_u8()));
            Ok(())
        }
    }

    fn make_service(should_fail: bool) -> (KeystrokeService, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink {
            should_fail,
            ..RecordingSink::default()
        });
        let service = KeystrokeService::new(Arc::clone(&sink) as Arc<dyn ReportSink>);
        (service, sink)
    }

    fn shift_a() -> KeyEvent {
        KeyEvent {
            key: "a".to_string(),
            key_code: 65,
            meta_modifier: false,
            alt_modifier: false,
            shift_modifier: true,
            ctrl_modifier: false,
        }
    }

    // ── handle_keystroke ──────────────────────────────────────────────────────

    #[test]
    fn test_mapped_key_is_sent_and_acked_successful() {
        // Arrange
        let (service, sink) = make_service(false);

        // Act
        let ack = service.handle_keystroke(&shift_a());

        // Assert: positive ack and exactly one (mask, usage) delivered
        assert_eq!(ack, BridgeToBrowserMsg::ack_success());
        assert_eq!(*sink.sent.lock().unwrap(), vec![(0x02, 0x04)]);
    }

    #[test]
    fn test_unmapped_key_is_acked_unsuccessful_without_a_write() {
        // Arrange
        let (service, sink) = make_service(false);
        let event = KeyEvent {
            key: "F24".to_string(),
            key_code: 135,
            meta_modifier: false,
            alt_modifier: false,
            shift_modifier: false,
            ctrl_modifier: false,
        };

        // Act
        let ack = service.handle_keystroke(&event);

        // Assert
        assert_eq!(ack, BridgeToBrowserMsg::ack_failure(ack_reason::UNMAPPED_KEY));
        assert!(
            sink.sent.lock().unwrap().is_empty(),
            "no report may be written for an unmapped key"
        );
    }

    #[test]
    fn test_device_failure_is_acked_unsuccessful_with_distinct_reason() {
        // Arrange: sink that refuses with a permission error
        let (service, _sink) = make_service(true);

        // Act
        let ack = service.handle_keystroke(&shift_a());

        // Assert: the failure is reported, not swallowed, and its reason is
        // distinct from the unmapped-key reason
        assert_eq!(ack, BridgeToBrowserMsg::ack_failure(ack_reason::DEVICE_WRITE));
        assert_ne!(
            ack,
            BridgeToBrowserMsg::ack_failure(ack_reason::UNMAPPED_KEY)
        );
    }

    #[test]
    fn test_modifier_only_keystroke_is_forwarded() {
        let (service, sink) = make_service(false);
        let event = KeyEvent {
            key: "Shift".to_string(),
            key_code: 16,
            meta_modifier: false,
            alt_modifier: false,
            shift_modifier: true,
            ctrl_modifier: false,
        };

        let ack = service.handle_keystroke(&event);

        assert_eq!(ack, BridgeToBrowserMsg::ack_success());
        // ShiftLeft usage with the Shift mask bit also set.
        assert_eq!(*sink.sent.lock().unwrap(), vec![(0x02, 0xE1)]);
    }

    #[test]
    fn test_each_keystroke_is_delivered_independently() {
        let (service, sink) = make_service(false);

        service.handle_keystroke(&shift_a());
        service.handle_keystroke(&KeyEvent {
            key: "Enter".to_string(),
            key_code: 13,
            meta_modifier: false,
            alt_modifier: false,
            shift_modifier: false,
            ctrl_modifier: false,
        });

        assert_eq!(
            *sink.sent.lock().unwrap(),
            vec![(0x02, 0x04), (0x00, 0x28)]
        );
    }

    // ── decode_browser_message ────────────────────────────────────────────────

    #[test]
    fn test_decode_valid_keystroke_frame() {
        let text = r#"{"type":"Keystroke","key":"a","keyCode":65,
                       "metaKey":false,"altKey":false,"shiftKey":true,"ctrlKey":false}"#;

        let msg = decode_browser_message(text).unwrap();

        let BrowserToBridgeMsg::Keystroke(event) = msg;
        assert_eq!(event.key, "a");
        assert!(event.shift_modifier);
    }

    #[test]
    fn test_decode_keystroke_missing_field_is_malformed() {
        // shiftKey absent: recognizably a keystroke, but incomplete
        let text = r#"{"type":"Keystroke","key":"a","keyCode":65,
                       "metaKey":false,"altKey":false,"ctrlKey":false}"#;

        let err = decode_browser_message(text).unwrap_err();

        assert!(matches!(err, DecodeError::MalformedKeystroke(_)));
    }

    #[test]
    fn test_decode_keystroke_wrong_typed_field_is_malformed() {
        let text = r#"{"type":"Keystroke","key":"a","keyCode":"sixty-five",
                       "metaKey":false,"altKey":false,"shiftKey":false,"ctrlKey":false}"#;

        let err = decode_browser_message(text).unwrap_err();

        assert!(matches!(err, DecodeError::MalformedKeystroke(_)));
    }

    #[test]
    fn test_decode_unknown_type_is_unsupported_not_malformed() {
        let text = r#"{"type":"MouseMove","x":1,"y":2}"#;
        let err = decode_browser_message(text).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedMessage(_)));
    }

    #[test]
    fn test_decode_missing_type_is_unsupported() {
        let text = r#"{"key":"a","keyCode":65}"#;
        let err = decode_browser_message(text).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedMessage(_)));
    }

    #[test]
    fn test_decode_non_json_frame_is_invalid_json() {
        let err = decode_browser_message("not json at all").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidJson(_)));
    }
}
