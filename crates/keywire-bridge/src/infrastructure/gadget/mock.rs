//! Mock report sink for unit and integration testing.
//!
//! The real [`HidGadget`](super::HidGadget) needs a kernel gadget device node
//! that only exists on configured hardware. The mock replaces the device with
//! in-memory recording: every delivered report is pushed into a
//! `Mutex<Vec<...>>` so tests can assert exactly what would have reached the
//! host, and in what order.
//!
//! Set `should_fail` to `true` to simulate a broken or permission-restricted
//! device and exercise the error-handling paths of callers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use keywire_core::report::{DeviceWriteError, ModifierMask};
use keywire_core::{HidReport, HidUsageId, REPORT_SIZE};

use crate::application::keystroke_service::ReportSink;

/// A report sink that records every delivery instead of touching a device.
#[derive(Default)]
pub struct MockReportSink {
    /// Every (mask, usage) pair delivered, in arrival order.
    pub sent: Mutex<Vec<(ModifierMask, HidUsageId)>>,
    /// When `true`, every delivery fails with a permission-denied
    /// [`DeviceWriteError`].
    pub should_fail: AtomicBool,
}

impl MockReportSink {
    /// Creates a mock with no recorded reports and `should_fail` off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches subsequent deliveries between success and failure.
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    /// Renders the recorded deliveries as the byte stream the device would
    /// have received.
    pub fn written_bytes(&self) -> Vec<u8> {
        let sent = self.sent.lock().unwrap();
        let mut bytes = Vec::with_capacity(sent.len() * REPORT_SIZE);
        for &(mask, usage) in sent.iter() {
            bytes.extend_from_slice(&HidReport::key_down(mask, usage).as_bytes());
        }
        bytes
    }
}

impl ReportSink for MockReportSink {
    /// Records the delivery, or fails if `should_fail` is set.
    fn send_key(&self, mask: ModifierMask, usage: HidUsageId) -> Result<(), DeviceWriteError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DeviceWriteError::classify(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "mock device failure",
            )));
        }
        self.sent.lock().unwrap().push((mask, usage));
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
