// SPDX-License-Identifier: MIT OR Apache-2.0
//! Flipbook Player - headless host for the frame sequencer
//!
//! Loads a clip description (or a built-in demo clip), then ticks the
//! animator at a fixed rate and logs every frame it would display.
//!
//! ```text
//! flipbook_player [clip.ron]
//! ```
//!
//! Log output is controlled through `RUST_LOG`.

mod clip;
mod error;
mod player;

use clip::ClipFile;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("flipbook_player=info,flipbook_sequencer=debug")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Flipbook Player v{}", env!("CARGO_PKG_VERSION"));

    let clip = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            tracing::info!("Loading clip {}", path.display());
            ClipFile::load(&path)
        }
        None => {
            tracing::info!("No clip given, playing the demo clip");
            Ok(ClipFile::demo())
        }
    };

    match clip.and_then(player::run) {
        Ok(summary) => tracing::info!(
            ticks = summary.ticks,
            advances = summary.advances,
            completions = summary.completions,
            frames_shown = summary.frames_shown,
            deactivated = summary.deactivated,
            final_frame = summary.final_frame.as_deref().unwrap_or("<none>"),
            "Playback finished"
        ),
        Err(e) => {
            tracing::error!("Playback failed: {e}");
            std::process::exit(1);
        }
    }
}
