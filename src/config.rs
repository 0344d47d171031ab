//! Headless driver configuration
//!
//! Settings come from `SRS_*` environment variables, each with a default.
//! Unparseable values are errors rather than silently falling back.

use std::env;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::types::{GameAction, TICK_SECS};

/// How the driver prints the final snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub seed: u32,
    /// Fixed steps to simulate
    pub ticks: u32,
    /// Simulation seconds per step
    pub tick_secs: f32,
    /// Actions replayed cyclically, one every `action_every` ticks
    pub script: Vec<GameAction>,
    pub action_every: u32,
    pub output: OutputFormat,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            ticks: 3600,
            tick_secs: TICK_SECS,
            script: Vec::new(),
            action_every: 8,
            output: OutputFormat::Text,
        }
    }
}

impl SimConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; missing or blank keys keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let seed = parse_or(var("SRS_SEED"), "SRS_SEED", defaults.seed)?;
        let ticks = parse_or(var("SRS_TICKS"), "SRS_TICKS", defaults.ticks)?;
        let tick_secs = parse_or(var("SRS_TICK_SECS"), "SRS_TICK_SECS", defaults.tick_secs)?;
        if !(tick_secs.is_finite() && tick_secs > 0.0) {
            bail!("SRS_TICK_SECS must be a positive number, got {}", tick_secs);
        }

        let action_every = parse_or(
            var("SRS_ACTION_EVERY"),
            "SRS_ACTION_EVERY",
            defaults.action_every,
        )?;
        if action_every == 0 {
            bail!("SRS_ACTION_EVERY must be at least 1");
        }

        let script = match var("SRS_SCRIPT") {
            Some(raw) => parse_script(&raw)?,
            None => defaults.script,
        };

        let output = match var("SRS_OUTPUT") {
            Some(raw) => OutputFormat::parse(&raw)
                .with_context(|| format!("SRS_OUTPUT must be `text` or `json`, got `{}`", raw))?,
            None => defaults.output,
        };

        Ok(Self {
            seed,
            ticks,
            tick_secs,
            script,
            action_every,
            output,
        })
    }

    /// Action scheduled for `tick`, if any
    pub fn action_at(&self, tick: u32) -> Option<GameAction> {
        if self.script.is_empty() || tick % self.action_every != 0 {
            return None;
        }
        let step = (tick / self.action_every) as usize;
        self.script.get(step % self.script.len()).copied()
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid {} value `{}`", key, s)),
        None => Ok(default),
    }
}

/// Parse a comma-separated action list such as `moveLeft,rotateCw,hardDrop`
pub fn parse_script(raw: &str) -> Result<Vec<GameAction>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            GameAction::from_str(s).with_context(|| format!("unknown action `{}` in SRS_SCRIPT", s))
        })
        .collect()
}
