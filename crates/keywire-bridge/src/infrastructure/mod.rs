//! Infrastructure layer: the WebSocket server and the gadget device writer.

pub mod gadget;
pub mod ws_server;

pub use gadget::HidGadget;
pub use ws_server::run_server;
