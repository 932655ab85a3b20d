//! # keywire-core
//!
//! The translation pipeline at the heart of Keywire: browser key events in,
//! USB HID Boot Keyboard reports out.
//!
//! ```text
//! KeyEvent (key name, keyCode, 4 modifier flags)
//!     │  keymap::convert
//!     ▼
//! (ModifierMask, HidUsageId)
//!     │  report::send
//!     ▼
//! [modifier, 0x00, usage, 0, 0, 0, 0, 0]  →  gadget device file
//! ```
//!
//! This crate has no dependency on sockets, async runtimes, or any specific
//! transport. The only I/O it touches is the `std::io::Write` handle passed
//! into [`report::send`], which keeps every stage testable against in-memory
//! buffers.
//!
//! - **`domain`** – the immutable [`KeyEvent`] value the browser sends.
//! - **`keymap`** – static lookup tables and the pure [`convert`] function.
//! - **`report`** – the modifier byte, the 8-byte report, and the scoped
//!   device write.

pub mod domain;
pub mod keymap;
pub mod report;

// Re-export the working set at the crate root so callers can write
// `keywire_core::convert` instead of spelling out the module path.
pub use domain::key_event::KeyEvent;
pub use keymap::{convert, HidUsageId, KeymapError};
pub use report::{send, DeviceWriteError, HidReport, ModifierMask, REPORT_SIZE};
