//! Pure domain types (no I/O, no async, no frameworks).

pub mod key_event;

pub use key_event::KeyEvent;
