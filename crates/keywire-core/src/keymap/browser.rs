//! Lookup tables from browser key events to HID usage IDs.
//!
//! Browsers describe a keystroke two ways at once: the semantic
//! `KeyboardEvent.key` string (`"a"`, `"Enter"`, `"ArrowUp"`) and the legacy
//! numeric `KeyboardEvent.keyCode`. The semantic name is the reliable one and
//! is consulted first; the numeric code exists only as a fallback for keys
//! the browser reports without a stable name (in practice the numpad cluster,
//! which surfaces as `"Unidentified"` on some engines).
//!
//! Both tables are plain match expressions with no logic mixed in, so every
//! mapping can be read, audited, and tested on its own.
//!
//! Shifted characters map to their physical key: the browser sends
//! `key:"A"` or `key:"!"` with `shiftKey:true`, and the host re-applies Shift
//! from the modifier byte, so `"!"` must resolve to the Digit1 position.

use super::hid::HidUsageId;

/// Resolves a semantic `KeyboardEvent.key` value to a HID usage ID.
///
/// Returns `None` for keys with no Boot Keyboard usage (media keys, IME
/// composition keys, `"Unidentified"`, ...).
pub fn key_name_to_hid(key: &str) -> Option<HidUsageId> {
    match key {
        // Letters: the browser reports the produced character, so both cases
        // resolve to the same physical key.
        "a" | "A" => Some(HidUsageId::KeyA),
        "b" | "B" => Some(HidUsageId::KeyB),
        "c" | "C" => Some(HidUsageId::KeyC),
        "d" | "D" => Some(HidUsageId::KeyD),
        "e" | "E" => Some(HidUsageId::KeyE),
        "f" | "F" => Some(HidUsageId::KeyF),
        "g" | "G" => Some(HidUsageId::KeyG),
        "h" | "H" => Some(HidUsageId::KeyH),
        "i" | "I" => Some(HidUsageId::KeyI),
        "j" | "J" => Some(HidUsageId::KeyJ),
        "k" | "K" => Some(HidUsageId::KeyK),
        "l" | "L" => Some(HidUsageId::KeyL),
        "m" | "M" => Some(HidUsageId::KeyM),
        "n" | "N" => Some(HidUsageId::KeyN),
        "o" | "O" => Some(HidUsageId::KeyO),
        "p" | "P" => Some(HidUsageId::KeyP),
        "q" | "Q" => Some(HidUsageId::KeyQ),
        "r" | "R" => Some(HidUsageId::KeyR),
        "s" | "S" => Some(HidUsageId::KeyS),
        "t" | "T" => Some(HidUsageId::KeyT),
        "u" | "U" => Some(HidUsageId::KeyU),
        "v" | "V" => Some(HidUsageId::KeyV),
        "w" | "W" => Some(HidUsageId::KeyW),
        "x" | "X" => Some(HidUsageId::KeyX),
        "y" | "Y" => Some(HidUsageId::KeyY),
        "z" | "Z" => Some(HidUsageId::KeyZ),

        // Digit row, with the US-layout shifted symbols on the same keys.
        "1" | "!" => Some(HidUsageId::Digit1),
        "2" | "@" => Some(HidUsageId::Digit2),
        "3" | "#" => Some(HidUsageId::Digit3),
        "4" | "$" => Some(HidUsageId::Digit4),
        "5" | "%" => Some(HidUsageId::Digit5),
        "6" | "^" => Some(HidUsageId::Digit6),
        "7" | "&" => Some(HidUsageId::Digit7),
        "8" | "*" => Some(HidUsageId::Digit8),
        "9" | "(" => Some(HidUsageId::Digit9),
        "0" | ")" => Some(HidUsageId::Digit0),

        // Punctuation, unshifted and shifted forms of each physical key.
        "-" | "_" => Some(HidUsageId::Minus),
        "=" | "+" => Some(HidUsageId::Equal),
        "[" | "{" => Some(HidUsageId::BracketLeft),
        "]" | "}" => Some(HidUsageId::BracketRight),
        "\\" | "|" => Some(HidUsageId::Backslash),
        ";" | ":" => Some(HidUsageId::Semicolon),
        "'" | "\"" => Some(HidUsageId::Quote),
        "`" | "~" => Some(HidUsageId::Backquote),
        "," | "<" => Some(HidUsageId::Comma),
        "." | ">" => Some(HidUsageId::Period),
        "/" | "?" => Some(HidUsageId::Slash),

        // Whitespace and editing.
        " " => Some(HidUsageId::Space),
        "Enter" => Some(HidUsageId::Enter),
        "Tab" => Some(HidUsageId::Tab),
        "Backspace" => Some(HidUsageId::Backspace),
        "Delete" => Some(HidUsageId::Delete),
        "Escape" => Some(HidUsageId::Escape),
        "Insert" => Some(HidUsageId::Insert),

        // Navigation.
        "ArrowUp" => Some(HidUsageId::ArrowUp),
        "ArrowDown" => Some(HidUsageId::ArrowDown),
        "ArrowLeft" => Some(HidUsageId::ArrowLeft),
        "ArrowRight" => Some(HidUsageId::ArrowRight),
        "Home" => Some(HidUsageId::Home),
        "End" => Some(HidUsageId::End),
        "PageUp" => Some(HidUsageId::PageUp),
        "PageDown" => Some(HidUsageId::PageDown),

        // Function keys.
        "F1" => Some(HidUsageId::F1),
        "F2" => Some(HidUsageId::F2),
        "F3" => Some(HidUsageId::F3),
        "F4" => Some(HidUsageId::F4),
        "F5" => Some(HidUsageId::F5),
        "F6" => Some(HidUsageId::F6),
        "F7" => Some(HidUsageId::F7),
        "F8" => Some(HidUsageId::F8),
        "F9" => Some(HidUsageId::F9),
        "F10" => Some(HidUsageId::F10),
        "F11" => Some(HidUsageId::F11),
        "F12" => Some(HidUsageId::F12),

        // Locks and system keys.
        "CapsLock" => Some(HidUsageId::CapsLock),
        "NumLock" => Some(HidUsageId::NumLock),
        "ScrollLock" => Some(HidUsageId::ScrollLock),
        "PrintScreen" => Some(HidUsageId::PrintScreen),
        "Pause" => Some(HidUsageId::Pause),
        "ContextMenu" => Some(HidUsageId::ContextMenu),

        // Modifier keys pressed on their own. Each resolves to its left-hand
        // usage ID; the browser does not say which side was pressed.
        // "OS" is the pre-standard name some engines used for Meta.
        "Control" => Some(HidUsageId::ControlLeft),
        "Shift" => Some(HidUsageId::ShiftLeft),
        "Alt" => Some(HidUsageId::AltLeft),
        "Meta" | "OS" => Some(HidUsageId::MetaLeft),
        "AltGraph" => Some(HidUsageId::AltRight),

        _ => None,
    }
}

/// Resolves a legacy `KeyboardEvent.keyCode` to a HID usage ID.
///
/// Only covers keys whose semantic `key` value is not stable across browser
/// engines: the numpad cluster (reported as `"Unidentified"` by some engines
/// depending on NumLock state) and the numpad Clear position.
pub fn key_code_to_hid(key_code: u16) -> Option<HidUsageId> {
    match key_code {
        12 => Some(HidUsageId::Numpad5), // Clear: numpad 5 with NumLock off
        96 => Some(HidUsageId::Numpad0),
        97 => Some(HidUsageId::Numpad1),
        98 => Some(HidUsageId::Numpad2),
        99 => Some(HidUsageId::Numpad3),
        100 => Some(HidUsageId::Numpad4),
        101 => Some(HidUsageId::Numpad5),
        102 => Some(HidUsageId::Numpad6),
        103 => Some(HidUsageId::Numpad7),
        104 => Some(HidUsageId::Numpad8),
        105 => Some(HidUsageId::Numpad9),
        106 => Some(HidUsageId::NumpadMultiply),
        107 => Some(HidUsageId::NumpadAdd),
        109 => Some(HidUsageId::NumpadSubtract),
        110 => Some(HidUsageId::NumpadDecimal),
        111 => Some(HidUsageId::NumpadDivide),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_uppercase_letters_share_a_usage() {
        for (lower, upper) in [("a", "A"), ("m", "M"), ("z", "Z")] {
            let from_lower = key_name_to_hid(lower);
            let from_upper = key_name_to_hid(upper);
            assert!(from_lower.is_some(), "{lower} must be mapped");
            assert_eq!(
                from_lower, from_upper,
                "{lower} and {upper} must resolve to the same key"
            );
        }
    }

    #[test]
    fn test_all_letters_are_mapped() {
        for c in b'a'..=b'z' {
            let key = (c as char).to_string();
            assert!(
                key_name_to_hid(&key).is_some(),
                "letter {key} missing from the table"
            );
        }
    }

    #[test]
    fn test_all_digits_are_mapped() {
        for c in b'0'..=b'9' {
            let key = (c as char).to_string();
            assert!(
                key_name_to_hid(&key).is_some(),
                "digit {key} missing from the table"
            );
        }
    }

    #[test]
    fn test_shifted_digit_symbols_resolve_to_the_digit_key() {
        // Shift state travels in the modifier byte, so "!" is the Digit1 key.
        let pairs = [
            ("!", "1"), ("@", "2"), ("#", "3"), ("$", "4"), ("%", "5"),
            ("^", "6"), ("&", "7"), ("*", "8"), ("(", "9"), (")", "0"),
        ];
        for (shifted, digit) in pairs {
            assert_eq!(
                key_name_to_hid(shifted),
                key_name_to_hid(digit),
                "{shifted} must resolve to the same key as {digit}"
            );
        }
    }

    #[test]
    fn test_shifted_punctuation_resolves_to_the_unshifted_key() {
        let pairs = [
            ("_", "-"), ("+", "="), ("{", "["), ("}", "]"), ("|", "\\"),
            (":", ";"), ("\"", "'"), ("~", "`"), ("<", ","), (">", "."),
            ("?", "/"),
        ];
        for (shifted, plain) in pairs {
            assert_eq!(
                key_name_to_hid(shifted),
                key_name_to_hid(plain),
                "{shifted} must resolve to the same key as {plain}"
            );
        }
    }

    #[test]
    fn test_named_keys_resolve_to_documented_usages() {
        let expected = [
            ("Enter", 0x28u8),
            ("Escape", 0x29),
            ("Backspace", 0x2A),
            ("Tab", 0x2B),
            (" ", 0x2C),
            ("Delete", 0x4C),
            ("Home", 0x4A),
            ("End", 0x4D),
            ("PageUp", 0x4B),
            ("PageDown", 0x4E),
            ("ArrowRight", 0x4F),
            ("ArrowLeft", 0x50),
            ("ArrowDown", 0x51),
            ("ArrowUp", 0x52),
        ];
        for (key, usage) in expected {
            assert_eq!(
                key_name_to_hid(key).map(HidUsageId::as_u8),
                Some(usage),
                "wrong usage for {key:?}"
            );
        }
    }

    #[test]
    fn test_function_keys_f1_through_f12_are_mapped() {
        for n in 1..=12u8 {
            let key = format!("F{n}");
            let usage = key_name_to_hid(&key);
            assert_eq!(
                usage.map(HidUsageId::as_u8),
                Some(0x3A + n - 1),
                "wrong usage for {key}"
            );
        }
    }

    #[test]
    fn test_modifier_keys_resolve_to_their_own_usage() {
        assert_eq!(key_name_to_hid("Control"), Some(HidUsageId::ControlLeft));
        assert_eq!(key_name_to_hid("Shift"), Some(HidUsageId::ShiftLeft));
        assert_eq!(key_name_to_hid("Alt"), Some(HidUsageId::AltLeft));
        assert_eq!(key_name_to_hid("Meta"), Some(HidUsageId::MetaLeft));
        assert_eq!(key_name_to_hid("OS"), Some(HidUsageId::MetaLeft));
        assert_eq!(key_name_to_hid("AltGraph"), Some(HidUsageId::AltRight));
    }

    #[test]
    fn test_unknown_key_names_are_not_mapped() {
        for key in ["Unidentified", "F24", "MediaPlayPause", "Convert", ""] {
            assert_eq!(key_name_to_hid(key), None, "{key:?} must not be mapped");
        }
    }

    #[test]
    fn test_numpad_digit_codes_resolve_through_the_fallback() {
        for (code, expected) in [
            (96u16, HidUsageId::Numpad0),
            (97, HidUsageId::Numpad1),
            (101, HidUsageId::Numpad5),
            (105, HidUsageId::Numpad9),
        ] {
            assert_eq!(key_code_to_hid(code), Some(expected));
        }
    }

    #[test]
    fn test_numpad_operator_codes_resolve_through_the_fallback() {
        assert_eq!(key_code_to_hid(106), Some(HidUsageId::NumpadMultiply));
        assert_eq!(key_code_to_hid(107), Some(HidUsageId::NumpadAdd));
        assert_eq!(key_code_to_hid(109), Some(HidUsageId::NumpadSubtract));
        assert_eq!(key_code_to_hid(110), Some(HidUsageId::NumpadDecimal));
        assert_eq!(key_code_to_hid(111), Some(HidUsageId::NumpadDivide));
    }

    #[test]
    fn test_fallback_does_not_shadow_semantic_lookups() {
        // Codes for keys that always have a good semantic name stay out of
        // the fallback table, so the name table remains the single source
        // for them.
        for code in [13u16, 27, 65, 112, 0] {
            assert_eq!(key_code_to_hid(code), None, "code {code} must not be mapped");
        }
    }
}
