//! The browser key-event value object.

use serde::{Deserialize, Serialize};

/// One keydown occurrence as reported by the browser.
///
/// Deserialized directly from the JSON payload a `keydown` listener captures:
/// the semantic key name, the legacy numeric code, and the four modifier
/// flags. Every field is required; a payload missing any of them (or carrying
/// a wrong-typed value) fails deserialization rather than defaulting, so a
/// half-formed event can never reach the translation pipeline.
///
/// The struct is a plain immutable data holder. Nothing outlives the
/// keystroke it describes: the event is constructed, translated into a
/// report, and dropped.
///
/// # Wire form
///
/// ```json
/// {"key":"a","keyCode":65,"metaKey":false,"altKey":false,
///  "shiftKey":true,"ctrlKey":false}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Semantic key name (`KeyboardEvent.key`): `"a"`, `"Enter"`, `"F5"`, ...
    pub key: String,

    /// Legacy numeric code (`KeyboardEvent.keyCode`), used as a lookup
    /// fallback for keys without a stable semantic name.
    #[serde(rename = "keyCode")]
    pub key_code: u16,

    /// Meta (Win/Cmd/Super) was held during the keydown.
    #[serde(rename = "metaKey")]
    pub meta_modifier: bool,

    /// Alt was held during the keydown.
    #[serde(rename = "altKey")]
    pub alt_modifier: bool,

    /// Shift was held during the keydown.
    #[serde(rename = "shiftKey")]
    pub shift_modifier: bool,

    /// Ctrl was held during the keydown.
    #[serde(rename = "ctrlKey")]
    pub ctrl_modifier: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_key(key: &str, key_code: u16) -> KeyEvent {
        KeyEvent {
            key: key.to_string(),
            key_code,
            meta_modifier: false,
            alt_modifier: false,
            shift_modifier: false,
            ctrl_modifier: false,
        }
    }

    #[test]
    fn test_deserializes_from_browser_field_names() {
        // Arrange: the exact shape a keydown listener produces
        let json = r#"{
            "key": "a",
            "keyCode": 65,
            "metaKey": false,
            "altKey": false,
            "shiftKey": true,
            "ctrlKey": false
        }"#;

        // Act
        let event: KeyEvent = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(event.key, "a");
        assert_eq!(event.key_code, 65);
        assert!(event.shift_modifier);
        assert!(!event.meta_modifier);
        assert!(!event.alt_modifier);
        assert!(!event.ctrl_modifier);
    }

    #[test]
    fn test_missing_key_field_is_a_construction_error() {
        let json = r#"{"keyCode":65,"metaKey":false,"altKey":false,"shiftKey":false,"ctrlKey":false}"#;
        let result: Result<KeyEvent, _> = serde_json::from_str(json);
        assert!(result.is_err(), "missing 'key' must fail, not default");
    }

    #[test]
    fn test_missing_modifier_field_is_a_construction_error() {
        // ctrlKey absent
        let json = r#"{"key":"a","keyCode":65,"metaKey":false,"altKey":false,"shiftKey":false}"#;
        let result: Result<KeyEvent, _> = serde_json::from_str(json);
        assert!(result.is_err(), "missing 'ctrlKey' must fail, not default");
    }

    #[test]
    fn test_wrong_typed_key_code_is_a_construction_error() {
        for bad in [r#""65""#, "-1", "65.5", "true"] {
            let json = format!(
                r#"{{"key":"a","keyCode":{bad},"metaKey":false,"altKey":false,"shiftKey":false,"ctrlKey":false}}"#
            );
            let result: Result<KeyEvent, _> = serde_json::from_str(&json);
            assert!(result.is_err(), "keyCode={bad} must fail to deserialize");
        }
    }

    #[test]
    fn test_round_trips_through_json() {
        let original = KeyEvent {
            key: "Enter".to_string(),
            key_code: 13,
            meta_modifier: true,
            alt_modifier: false,
            shift_modifier: false,
            ctrl_modifier: true,
        };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: KeyEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_serializes_with_browser_field_names() {
        let event = plain_key("a", 65);
        let json = serde_json::to_string(&event).unwrap();
        for field in ["\"key\"", "\"keyCode\"", "\"metaKey\"", "\"altKey\"", "\"shiftKey\"", "\"ctrlKey\""] {
            assert!(json.contains(field), "serialized form missing {field}: {json}");
        }
    }
}
