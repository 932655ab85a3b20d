//! keywire-bridge library crate.
//!
//! This crate turns a web browser into a keyboard for whatever machine the
//! gadget device is plugged into: browsers send keydown events over a
//! WebSocket, the bridge translates each into a USB HID Boot Keyboard report
//! and writes it to the gadget device file.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Browser (JSON over WebSocket)
//!         │
//! [keywire-bridge]
//!   ├── domain/          Pure types: wire message enums, BridgeConfig
//!   ├── application/     KeystrokeService: decode → convert → sink → ack
//!   └── infrastructure/
//!         ├── ws_server/ WebSocket accept loop (tokio-tungstenite)
//!         └── gadget/    Per-keystroke device open/write/close
//!         │
//! /dev/hidg0  →  USB host sees a keystroke
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O, no async, no frameworks.
//! - `application` depends on `domain` and `keywire-core` only; the device is
//!   reached through the `ReportSink` trait, never directly.
//! - `infrastructure` depends on everything plus `tokio` and `tungstenite`.
//!
//! The payoff is that the whole keystroke flow, decoding included, runs in
//! plain unit tests against an in-memory sink; only `ws_server` and the
//! `HidGadget` file open touch the outside world.

/// Domain layer: wire messages and configuration.
pub mod domain;

/// Application layer: the per-keystroke service.
pub mod application;

/// Infrastructure layer: WebSocket server and gadget writer.
pub mod infrastructure;
