//! gesture-keys binary entry point.
//!
//! Reads hand frames as JSON lines on stdin, runs the gesture policy on each
//! frame, and presses the resulting keys.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()              -- GESTURE_KEYS_CONFIG or platform dir
//!  └─ KeyHandler::from_config()  -- queue + worker + dispatch backend
//!  └─ frame loop (stdin lines)
//!       ├─ parse_frame()         -- malformed lines are logged and skipped
//!       ├─ GesturePolicy::evaluate()
//!       └─ perform() per action  -- key down, async hold, key up
//!  └─ KeyHandler::shutdown()     -- drain pending keys, join worker
//! ```
//!
//! The loop ends on EOF or Ctrl-C.  A typical pipeline:
//!
//! ```text
//! python tracker.py | gesture-keys
//! ```

use std::path::PathBuf;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gesture_keys::application::gesture_policy::{perform, GesturePolicy};
use gesture_keys::infrastructure::config::load_config;
use gesture_keys::infrastructure::frame_input::parse_frame;
use gesture_keys::KeyHandler;

/// Overrides the config file location.
const CONFIG_ENV: &str = "GESTURE_KEYS_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = load_config(config_path.as_deref()).context("loading configuration")?;

    // RUST_LOG wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .init();

    info!("gesture-keys starting");

    let handler = KeyHandler::from_config(&config).context("starting key handler")?;
    let policy = GesturePolicy::new(config.gestures.settings());
    info!(
        backend = handler.dispatcher_name(),
        platform = %handler.platform(),
        capacity = config.queue.capacity,
        "ready; reading hand frames from stdin"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    // ── Frame loop ────────────────────────────────────────────────────────────
    loop {
        let line = tokio::select! {
            _ = &mut ctrl_c => {
                info!("shutdown signal received");
                break;
            }
            line = lines.next_line() => line.context("reading stdin")?,
        };
        let Some(line) = line else {
            info!("input closed");
            break;
        };

        let frame = match parse_frame(&line) {
            Ok(Some(frame)) => frame,
            Ok(None) => continue,
            Err(e) => {
                warn!("skipping frame: {e}");
                continue;
            }
        };

        for action in policy.evaluate(&frame) {
            if !perform(&handler, action).await {
                warn!(symbol = %action.symbol, "key action dropped");
            }
        }
    }

    if let Some(report) = handler.shutdown() {
        info!(
            dispatched = report.dispatched,
            failed = report.failed,
            "gesture-keys stopped"
        );
    }
    Ok(())
}
