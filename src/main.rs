//! Headless simulation runner (default binary).
//!
//! Drives the rules engine with a fixed timestep and an optional scripted
//! action cycle, then prints the final snapshot as ASCII or JSON. Settings
//! come from `SRS_*` environment variables (see `srs_tetris::config`).

use anyhow::{Context, Result};

use srs_tetris::config::{OutputFormat, SimConfig};
use srs_tetris::core::{GameEngine, GameSnapshot, GameState};
use srs_tetris::types::GameAction;

/// Totals across every episode of a run
#[derive(Debug, Default)]
struct RunSummary {
    episodes: u32,
    best_score: u32,
    total_lines: u32,
    actions: u32,
}

impl RunSummary {
    fn record_episode(&mut self, snap: &GameSnapshot) {
        self.episodes += 1;
        self.best_score = self.best_score.max(snap.score);
        self.total_lines += snap.lines;
    }
}

fn main() -> Result<()> {
    let config = SimConfig::from_env().context("failed to load SRS_* configuration")?;
    eprintln!(
        "[sim] seed={} ticks={} tick_secs={} script_len={} output={:?}",
        config.seed,
        config.ticks,
        config.tick_secs,
        config.script.len(),
        config.output
    );

    let mut game = GameState::new(config.seed);
    let summary = run(&mut game, &config);

    let snap = game.snapshot();
    eprintln!(
        "[sim] done episodes={} best_score={} total_lines={} actions={}",
        summary.episodes, summary.best_score, summary.total_lines, summary.actions
    );

    match config.output {
        OutputFormat::Text => println!("{}", snap),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&snap).context("failed to encode snapshot")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Fixed-step loop; a finished episode is logged and restarted
fn run(engine: &mut impl GameEngine, config: &SimConfig) -> RunSummary {
    let mut summary = RunSummary::default();
    let mut snap = engine.snapshot();

    for tick in 0..config.ticks {
        if let Some(action) = config.action_at(tick) {
            engine.apply(action);
            summary.actions += 1;
        }
        engine.advance(config.tick_secs);

        snap = engine.snapshot();
        if snap.game_over {
            eprintln!(
                "[sim] game over tick={} episode={} score={} lines={} pieces={}",
                tick, snap.episode_id, snap.score, snap.lines, snap.piece_id
            );
            summary.record_episode(&snap);

            engine.apply(GameAction::Restart);
            snap = engine.snapshot();
            eprintln!("[sim] restart episode={}", snap.episode_id);
        }
    }

    // The episode still in progress counts too
    summary.record_episode(&snap);
    summary
}
