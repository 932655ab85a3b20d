//! Keywire bridge — entry point.
//!
//! Accepts WebSocket connections from web browsers and forwards each browser
//! keystroke to a USB HID gadget device, so the machine the gadget is plugged
//! into sees ordinary keyboard input.
//!
//! # Usage
//!
//! ```text
//! keywire-bridge [OPTIONS]
//!
//! Options:
//!   --bind     <ADDR>  Address to bind the WebSocket server to [default: 0.0.0.0]
//!   --port     <PORT>  WebSocket listener port [default: 8000]
//!   --hid-path <PATH>  HID gadget device file [default: /dev/hidg0]
//!   --debug            Force debug-level logging
//! ```
//!
//! # Environment variable overrides
//!
//! The CLI defaults can be overridden with the environment variables the
//! historical deployments already use. CLI args take precedence when both
//! are present.
//!
//! | Variable   | Default      | Description                      |
//! |------------|--------------|----------------------------------|
//! | `HOST`     | `0.0.0.0`    | WebSocket bind address           |
//! | `PORT`     | `8000`       | WebSocket listener port          |
//! | `HID_PATH` | `/dev/hidg0` | Gadget device file               |
//! | `DEBUG`    | unset        | Any truthy value enables --debug |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use keywire_bridge::domain::BridgeConfig;
use keywire_bridge::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Keywire bridge.
///
/// Forwards browser keystrokes received over WebSocket to a USB HID gadget
/// device file as Boot Keyboard reports.
#[derive(Debug, Parser)]
#[command(
    name = "keywire-bridge",
    about = "WebSocket-to-HID-gadget keyboard bridge",
    version
)]
struct Cli {
    /// IP address to bind the WebSocket server to.
    ///
    /// `0.0.0.0` accepts connections from any interface; `127.0.0.1`
    /// restricts access to the gadget host itself.
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    bind: String,

    /// TCP port for the WebSocket server to listen on.
    #[arg(long, default_value_t = 8000, env = "PORT")]
    port: u16,

    /// Path of the HID gadget device file reports are written to.
    #[arg(long, default_value = "/dev/hidg0", env = "HID_PATH")]
    hid_path: PathBuf,

    /// Force debug-level logging regardless of `RUST_LOG`.
    ///
    /// The `DEBUG` environment variable is treated presence-style: any value
    /// other than an empty string, `0`, or `false` enables it.
    #[arg(long, env = "DEBUG", value_parser = clap::builder::FalseyValueParser::new())]
    debug: bool,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`BridgeConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not a valid IP address.
    fn into_bridge_config(self) -> anyhow::Result<BridgeConfig> {
        let bind_addr: SocketAddr = format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid bind address: '{}:{}'", self.bind, self.port))?;

        Ok(BridgeConfig {
            bind_addr,
            hid_path: self.hid_path,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// Initialises logging, parses the CLI, installs a Ctrl+C handler that clears
/// the shared running flag, and runs the accept loop until shutdown.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins when set; --debug (or DEBUG=1) forces debug level;
    // otherwise default to info.
    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = cli.into_bridge_config()?;

    info!(
        "keywire bridge starting — ws={}, gadget={}",
        config.bind_addr,
        config.hid_path.display()
    );

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);

    // The accept loop checks this flag every 200 ms and exits cleanly.
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("received Ctrl+C — initiating graceful shutdown");
                running_clone.store(false, Ordering::Relaxed);
            }
            Err(e) => {
                tracing::error!("failed to listen for Ctrl+C signal: {e}");
            }
        }
    });

    run_server(config, running).await?;

    info!("keywire bridge stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
