//! Translation from browser key events to HID report ingredients.
//!
//! [`convert`] is the single entry point: it takes one [`KeyEvent`] and
//! produces the two values a Boot Keyboard report is made of, the modifier
//! byte and the key's usage ID. It is a pure function over static tables,
//! safe to call concurrently and idempotent for a given event.

pub mod browser;
pub mod hid;

use thiserror::Error;

use crate::domain::key_event::KeyEvent;
use crate::report::ModifierMask;

pub use hid::HidUsageId;

/// A key that has no HID usage mapping.
///
/// Expected and non-fatal: browsers emit keydowns for OS-reserved keys, IME
/// composition, and media keys that a Boot Keyboard simply cannot express.
/// Carries both identifiers the lookup tried so the caller can log exactly
/// what arrived.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeymapError {
    #[error("no HID usage for key {key:?} (keyCode={key_code})")]
    UnrecognizedKey { key: String, key_code: u16 },
}

/// Translates a browser key event into (modifier byte, HID usage ID).
///
/// The semantic `key` name is looked up first; the legacy `keyCode` table is
/// the fallback for keys the browser could not name. The modifier mask is
/// built independently of the lookup, one bit per active modifier flag.
///
/// # Errors
///
/// Returns [`KeymapError::UnrecognizedKey`] when neither table knows the key.
/// No report should be written in that case; there is no placeholder usage.
pub fn convert(event: &KeyEvent) -> Result<(ModifierMask, HidUsageId), KeymapError> {
    let mask = ModifierMask::from_event(event);

    let usage = browser::key_name_to_hid(&event.key)
        .or_else(|| browser::key_code_to_hid(event.key_code))
        .ok_or_else(|| KeymapError::UnrecognizedKey {
            key: event.key.clone(),
            key_code: event.key_code,
        })?;

    Ok((mask, usage))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
