//! WebSocket server: accept loop and per-session keystroke handling.
//!
//! This module is responsible for:
//!
//! 1. Binding a TCP listener on the configured address.
//! 2. Accepting incoming connections from browsers.
//! 3. Upgrading each connection to a WebSocket session.
//! 4. Running the session loop: read a text frame, decode it, hand the
//!    keystroke to the [`KeystrokeService`], and reply with the ack frame.
//! 5. Gracefully shutting down when the `running` flag is cleared.
//!
//! Each browser session runs in its own Tokio task, so a slow session never
//! delays the accept loop. Sessions are otherwise stateless: connect and
//! disconnect are logged, and nothing about a session outlives it.
//!
//! The gadget write inside the service is a blocking file write performed
//! inline. At human keystroke rates on a per-event 8-byte report this is well
//! under any latency that would matter, and each session processes one frame
//! at a time, so the write never competes with itself.

use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use anyhow::Context;
use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tokio_tungstenite::{
    accept_async,
    tungstenite::{Error as WsError, Message as WsMessage},
};
use tracing::{debug, error, info, warn};

use crate::application::keystroke_service::{
    decode_browser_message, DecodeError, KeystrokeService,
};
use crate::domain::config::BridgeConfig;
use crate::domain::messages::{ack_reason, BridgeToBrowserMsg, BrowserToBridgeMsg};
use crate::infrastructure::gadget::HidGadget;

// ── Public API ────────────────────────────────────────────────────────────────

/// Runs the accept loop until `running` is set to `false`.
///
/// Binds a TCP listener on `config.bind_addr` and serves each accepted
/// connection in a dedicated Tokio task. A single [`KeystrokeService`]
/// writing to the configured gadget path is shared by all sessions.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound (port in use, no
/// permission to bind). Everything past that point is handled per session.
pub async fn run_server(config: BridgeConfig, running: Arc<AtomicBool>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind WebSocket listener on {}", config.bind_addr))?;

    info!(
        "keywire bridge listening on {} (gadget: {})",
        config.bind_addr,
        config.hid_path.display()
    );

    let service = Arc::new(KeystrokeService::new(Arc::new(HidGadget::new(
        config.hid_path.clone(),
    ))));

    loop {
        if !running.load(Ordering::Relaxed) {
            info!("shutdown flag set; stopping accept loop");
            break;
        }

        // Short timeout on accept() so the loop can check the running flag
        // even when no browsers are connecting.
        let accept_result = timeout(Duration::from_millis(200), listener.accept()).await;

        match accept_result {
            Ok(Ok((stream, peer_addr))) => {
                info!("client connected: {peer_addr}");
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    handle_browser_session(stream, peer_addr, service).await;
                });
            }
            Ok(Err(e)) => {
                // Transient accept error; keep serving rather than crashing.
                error!("accept error: {e}");
            }
            Err(_) => {
                // Timeout, no new connection; loop back to the flag check.
            }
        }
    }

    Ok(())
}

// ── Per-session handler ───────────────────────────────────────────────────────

/// Outer wrapper for one session: runs it and logs the outcome.
///
/// The outer/inner pair lets `run_session` use `?` freely while connect and
/// disconnect stay logged in one place.
async fn handle_browser_session(
    raw_stream: TcpStream,
    peer_addr: SocketAddr,
    service: Arc<KeystrokeService>,
) {
    match run_session(raw_stream, peer_addr, service).await {
        Ok(()) => info!("client disconnected: {peer_addr}"),
        Err(e) => warn!("session {peer_addr} closed with error: {e:#}"),
    }
}

/// Runs the complete lifecycle of one browser session.
///
/// Completes the WebSocket upgrade, then loops: read a frame, decode,
/// dispatch to the service, send the ack. Exactly one ack is sent per frame
/// that is recognizably a keystroke (well-formed or not); frames the bridge
/// does not understand are logged and skipped.
///
/// # Errors
///
/// Returns an error if the WebSocket handshake fails or an ack cannot be
/// delivered (the browser is gone).
async fn run_session(
    raw_stream: TcpStream,
    peer_addr: SocketAddr,
    service: Arc<KeystrokeService>,
) -> anyhow::Result<()> {
    let mut ws_stream = accept_async(raw_stream)
        .await
        .with_context(|| format!("WebSocket handshake failed with {peer_addr}"))?;

    loop {
        let ws_msg = match ws_stream.next().await {
            Some(Ok(msg)) => msg,
            Some(Err(WsError::ConnectionClosed | WsError::Protocol(_))) => {
                debug!("session {peer_addr}: WebSocket closed");
                break;
            }
            Some(Err(e)) => {
                warn!("session {peer_addr}: WebSocket error: {e}");
                break;
            }
            None => {
                debug!("session {peer_addr}: stream ended");
                break;
            }
        };

        match ws_msg {
            WsMessage::Text(text) => {
                let Some(ack) = process_text_frame(&text, peer_addr, &service) else {
                    continue;
                };

                match serde_json::to_string(&ack) {
                    Ok(json) => {
                        ws_stream
                            .send(WsMessage::Text(json))
                            .await
                            .with_context(|| format!("session {peer_addr}: failed to send ack"))?;
                    }
                    Err(e) => {
                        error!("session {peer_addr}: ack serialization error: {e}");
                    }
                }
            }

            WsMessage::Binary(_) => {
                // The browser protocol is JSON text frames only.
                warn!("session {peer_addr}: unexpected binary frame (ignored)");
            }

            WsMessage::Ping(data) => {
                // tokio-tungstenite queues the protocol-level Pong itself.
                debug!("session {peer_addr}: WebSocket ping ({} bytes)", data.len());
            }

            WsMessage::Pong(_) => {
                debug!("session {peer_addr}: WebSocket pong received");
            }

            WsMessage::Close(_) => {
                debug!("session {peer_addr}: Close frame received");
                break;
            }

            WsMessage::Frame(_) => {
                debug!("session {peer_addr}: raw frame (ignored)");
            }
        }
    }

    Ok(())
}

/// Decodes one text frame and produces the ack to send, if any.
///
/// - A valid keystroke goes to the service, whose ack is returned.
/// - A malformed keystroke is acked unsuccessful without touching the device.
/// - Frames the bridge does not speak produce no ack, only a log line.
fn process_text_frame(
    text: &str,
    peer_addr: SocketAddr,
    service: &KeystrokeService,
) -> Option<BridgeToBrowserMsg> {
    match decode_browser_message(text) {
        Ok(BrowserToBridgeMsg::Keystroke(event)) => Some(service.handle_keystroke(&event)),
        Err(DecodeError::MalformedKeystroke(detail)) => {
            warn!("session {peer_addr}: malformed keystroke: {detail}");
            Some(BridgeToBrowserMsg::ack_failure(ack_reason::MALFORMED_EVENT))
        }
        Err(e @ (DecodeError::UnsupportedMessage(_) | DecodeError::InvalidJson(_))) => {
            // Not recognizably a keystroke; don't close the session over it,
            // the browser might just be ahead of this bridge version.
            warn!("session {peer_addr}: {e}");
            None
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
