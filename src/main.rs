//! TouchHud - Touch Control Core for Tabletop Game Overlays
//!
//! Replays a JSON-lines input script against a scripted host and prints the
//! outcome of every dispatch.
//!
//! Usage: `touchhud [SCRIPT] [CONFIG]`. The script is read from stdin when
//! omitted; the config falls back to the platform config directory.

use anyhow::Context;
use std::io::Read;
use std::path::PathBuf;
use touchhud::hud::{Entity, TracingBridge};
use touchhud::replay::{self, ScriptedHost, DEFAULT_GRID_UNIT};
use touchhud::storage::config;
use touchhud::TouchHud;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting TouchHud v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let script_path = args.next().map(PathBuf::from);
    let config_path = args.next().map(PathBuf::from);

    let hud_config = match &config_path {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .context("failed to load HUD configuration")?;

    let script = match &script_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read script from stdin")?;
            buf
        }
    };

    let inputs = replay::parse_script(&script)?;
    tracing::info!("Replaying {} inputs", inputs.len());

    let mut hud = TouchHud::new(&hud_config, touchhud::audio::default_platform())?
        .with_telemetry(Box::new(TracingBridge));
    let mut host = ScriptedHost::with_selection(Entity::new("Hero", 0.0, 0.0), DEFAULT_GRID_UNIT);

    for event in replay::run_script(&mut hud, &mut host, &inputs) {
        println!("{}", serde_json::to_string(&event)?);
    }

    tracing::info!("Final panel: {}", hud.active_panel());
    Ok(())
}
