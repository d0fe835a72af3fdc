//! # ecl_demo
//!
//! Runs a small scene through the entity layer: spawn from a prefab, tag,
//! filter by components, destroy, and look everything up again.
//!
//! Set `ECL_DEMO_ENEMIES` to change how many enemies are spawned and
//! `RUST_LOG=ecl_entity=debug` to watch registry traffic.

mod components;
mod config;
mod scenario;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::DemoConfig;

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ecl_demo=info".parse()?))
        .init();

    let config = DemoConfig::from_env()?;
    info!(enemies = config.enemy_count, "demo starting");

    let summary = scenario::run(&config)?;

    info!(
        spawned = summary.enemies_spawned,
        movers = summary.movers,
        remaining = summary.enemies_remaining,
        player_found = summary.player_found,
        "demo finished"
    );
    Ok(())
}
