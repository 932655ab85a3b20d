//! The HID gadget device writer.
//!
//! # What is a HID gadget? (for beginners)
//!
//! A Linux machine with a USB device-mode controller (a Raspberry Pi Zero,
//! for example) can present itself *to another computer* as a USB peripheral.
//! The kernel's configfs gadget subsystem exposes the peripheral's input
//! endpoint as a character device such as `/dev/hidg0`: any 8-byte Boot
//! Keyboard report written to that file is delivered to the attached host
//! exactly as if a physical keyboard had sent it.
//!
//! # Per-keystroke open/close
//!
//! [`HidGadget`] opens the device fresh for every report and lets the handle
//! close when it goes out of scope, on success and error paths alike. Holding
//! no handle between keystrokes keeps the writer stateless, and the open
//! overhead is irrelevant at human typing rates. The trade-off is ordering:
//! with no shared handle there is no cross-keystroke ordering guarantee
//! beyond what the gadget driver itself serializes, which is fine for the
//! single-user sessions this bridge serves.

pub mod mock;

use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing::debug;

use keywire_core::report::{send, DeviceWriteError, ModifierMask};
use keywire_core::HidUsageId;

use crate::application::keystroke_service::ReportSink;

/// Writes each report to the gadget device file at a fixed path.
pub struct HidGadget {
    path: PathBuf,
}

impl HidGadget {
    /// Creates a writer for the gadget device at `path`.
    ///
    /// The path is not probed here: the device may legitimately appear after
    /// the bridge starts (gadget configuration is asynchronous at boot), and
    /// a missing device surfaces per keystroke as
    /// [`DeviceWriteError::DeviceMissing`].
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ReportSink for HidGadget {
    /// Opens the device, writes one report, and closes the handle by scope.
    ///
    /// Open failures are classified the same way write failures are, so the
    /// caller sees a single [`DeviceWriteError`] taxonomy either way.
    fn send_key(&self, mask: ModifierMask, usage: HidUsageId) -> Result<(), DeviceWriteError> {
        let mut handle = OpenOptions::new()
            .write(true)
            .open(&self.path)
            .map_err(DeviceWriteError::classify)?;

        send(&mut handle, mask, usage)?;
        debug!(
            "wrote report (modifier={:#04x}, usage={:#04x}) to {}",
            mask.0,
            usage.as_u8(),
            self.path.display()
        );
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
