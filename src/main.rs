//! Headless simulation runner (default binary).
//!
//! Plays seeded games under a scripted player and prints one summary per
//! game. Settings come from `--seed N`, `--games N`, `--max-ticks N` and
//! `--json`, or the matching `MONSTRO_*` environment variables. Engine
//! logging is enabled with `RUST_LOG` (e.g. `RUST_LOG=monstro_core=debug`).

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use monstro::sim::{run_game, SimConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = SimConfig::parse();
    log::info!("simulating {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for game in 0..config.games {
        let summary = run_game(&config, game);
        if config.json {
            serde_json::to_writer(&mut out, &summary).context("encoding summary")?;
            writeln!(out)?;
        } else {
            writeln!(out, "{summary}").context("writing summary")?;
        }
    }
    out.flush()?;
    Ok(())
}
