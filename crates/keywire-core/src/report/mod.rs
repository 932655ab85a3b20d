//! USB HID Boot Keyboard report construction and device write.
//!
//! The gadget driver expects the standard 8-byte Boot Keyboard input report:
//!
//! ```text
//! Byte 0: modifier bitfield
//!         bit 0 = Left Ctrl,  bit 1 = Left Shift,
//!         bit 2 = Left Alt,   bit 3 = Left Meta,
//!         bit 4 = Right Ctrl, bit 5 = Right Shift,
//!         bit 6 = Right Alt,  bit 7 = Right Meta
//! Byte 1: reserved, always 0x00
//! Bytes 2-7: up to six simultaneous key usage IDs
//! ```
//!
//! One keystroke produces one report carrying a single usage ID in the first
//! slot; the remaining slots stay zero. The report is built fresh for each
//! keystroke, written once, and discarded.

use std::io::{self, Write};

use thiserror::Error;

use crate::domain::key_event::KeyEvent;
use crate::keymap::hid::HidUsageId;

/// Total length of a Boot Keyboard report in bytes.
pub const REPORT_SIZE: usize = 8;

// ── Modifier mask ─────────────────────────────────────────────────────────────

/// The modifier byte of a Boot Keyboard report.
///
/// Bit positions follow the Boot protocol layout (usage IDs 0xE0-0xE7 in
/// ascending order). The browser only reports *whether* a modifier was held,
/// not which side, so masks derived from a [`KeyEvent`] use the left-hand
/// bits; the right-hand constants exist because the byte layout defines them
/// and the predicates must honor both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierMask(pub u8);

impl ModifierMask {
    pub const LEFT_CTRL: u8 = 1 << 0;
    pub const LEFT_SHIFT: u8 = 1 << 1;
    pub const LEFT_ALT: u8 = 1 << 2;
    pub const LEFT_META: u8 = 1 << 3;
    pub const RIGHT_CTRL: u8 = 1 << 4;
    pub const RIGHT_SHIFT: u8 = 1 << 5;
    pub const RIGHT_ALT: u8 = 1 << 6;
    pub const RIGHT_META: u8 = 1 << 7;

    /// Derives the mask from an event's four modifier flags, one bit per
    /// active modifier. Nothing else feeds the mask.
    pub fn from_event(event: &KeyEvent) -> Self {
        let mut bits = 0u8;
        if event.ctrl_modifier {
            bits |= Self::LEFT_CTRL;
        }
        if event.shift_modifier {
            bits |= Self::LEFT_SHIFT;
        }
        if event.alt_modifier {
            bits |= Self::LEFT_ALT;
        }
        if event.meta_modifier {
            bits |= Self::LEFT_META;
        }
        ModifierMask(bits)
    }

    /// Returns `true` if either Ctrl bit is set.
    pub fn ctrl(&self) -> bool {
        self.0 & (Self::LEFT_CTRL | Self::RIGHT_CTRL) != 0
    }

    /// Returns `true` if either Shift bit is set.
    pub fn shift(&self) -> bool {
        self.0 & (Self::LEFT_SHIFT | Self::RIGHT_SHIFT) != 0
    }

    /// Returns `true` if either Alt bit is set.
    pub fn alt(&self) -> bool {
        self.0 & (Self::LEFT_ALT | Self::RIGHT_ALT) != 0
    }

    /// Returns `true` if either Meta bit is set.
    pub fn meta(&self) -> bool {
        self.0 & (Self::LEFT_META | Self::RIGHT_META) != 0
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// An 8-byte Boot Keyboard input report, ready to write to the gadget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HidReport {
    /// Modifier bitfield (byte 0).
    pub modifier: u8,
    /// Reserved byte, always 0x00 (byte 1).
    pub reserved: u8,
    /// Key usage slots (bytes 2-7); only slot 0 is ever populated here.
    pub usages: [u8; 6],
}

impl HidReport {
    /// Builds the report for a single key-down with the given modifiers.
    pub fn key_down(mask: ModifierMask, usage: HidUsageId) -> Self {
        let mut usages = [0u8; 6];
        usages[0] = usage.as_u8();
        HidReport {
            modifier: mask.0,
            reserved: 0,
            usages,
        }
    }

    /// Serializes the report into the exact on-wire byte order.
    pub fn as_bytes(&self) -> [u8; REPORT_SIZE] {
        let mut buf = [0u8; REPORT_SIZE];
        buf[0] = self.modifier;
        buf[1] = self.reserved;
        buf[2..].copy_from_slice(&self.usages);
        buf
    }
}

// ── Device write ──────────────────────────────────────────────────────────────

/// A failure to deliver a report to the gadget device.
///
/// Kept distinct from [`crate::keymap::KeymapError`]: "this key has no HID
/// mapping" and "the device is not writable" are different conditions and
/// callers must be able to tell them apart.
#[derive(Debug, Error)]
pub enum DeviceWriteError {
    /// The process may not open or write the device file.
    #[error("permission denied writing to the HID gadget")]
    PermissionDenied(#[source] io::Error),

    /// The device file does not exist (gadget not configured or unplugged).
    #[error("HID gadget device not found")]
    DeviceMissing(#[source] io::Error),

    /// Any other I/O failure during the write.
    #[error("I/O error writing to the HID gadget")]
    Io(#[source] io::Error),
}

impl DeviceWriteError {
    /// Classifies a raw I/O error from an open or write on the gadget.
    pub fn classify(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => DeviceWriteError::PermissionDenied(err),
            io::ErrorKind::NotFound => DeviceWriteError::DeviceMissing(err),
            _ => DeviceWriteError::Io(err),
        }
    }
}

/// Writes one key-down report to an already-open device handle.
///
/// The full 8 bytes are written and flushed in a single call; the handle's
/// lifetime (open before, close after, on every exit path) belongs to the
/// caller, which opens the device fresh for each keystroke.
///
/// # Errors
///
/// Returns [`DeviceWriteError`] if the write or flush fails. The error is
/// classified by I/O error kind so callers can log permission problems
/// distinctly from a missing device.
pub fn send<W: Write>(
    handle: &mut W,
    mask: ModifierMask,
    usage: HidUsageId,
) -> Result<(), DeviceWriteError> {
    let report = HidReport::key_down(mask, usage);
    handle
        .write_all(&report.as_bytes())
        .and_then(|()| handle.flush())
        .map_err(DeviceWriteError::classify)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
