//! Application layer: the per-keystroke service and frame decoding.

pub mod keystroke_service;

pub use keystroke_service::{decode_browser_message, DecodeError, KeystrokeService, ReportSink};
