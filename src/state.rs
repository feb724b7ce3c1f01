//! League-change tracking persisted between runs.
//!
//! The state file is a flat JSON object:
//! `{"season_league": "Hacker", "league_changed_at": 1767225600.0}`.
//! Reading never fails (anything unreadable is an empty state); writing
//! failures are fatal for the run.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::config::WINDOW_SECONDS;
use crate::error::{CardError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueState {
    #[serde(default)]
    pub season_league: Option<String>,
    /// Epoch seconds of the last observed league change; 0 if never.
    #[serde(default)]
    pub league_changed_at: f64,
    /// Keys written by other tools, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of comparing this run's league against the stored one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeagueUpdate {
    pub changed: bool,
    pub recently_changed: bool,
}

/// Load state from `path`. Missing, unreadable, or malformed files all yield
/// an empty state.
pub fn load_state(path: &Path) -> LeagueState {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no prior state");
            return LeagueState::default();
        }
    };

    serde_json::from_str(&content).unwrap_or_else(|e| {
        debug!(path = %path.display(), error = %e, "discarding malformed state");
        LeagueState::default()
    })
}

/// Write state to `path`, creating the parent directory if needed.
pub fn save_state(path: &Path, state: &LeagueState) -> Result<()> {
    let write_err = |source| CardError::StateWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let json = serde_json::to_string(state).map_err(|e| write_err(e.into()))?;
    fs::write(path, json).map_err(write_err)?;
    Ok(())
}

/// Fold the current league observation into `state`.
///
/// A change is only recorded when both the stored and the observed league are
/// known and differ. `season_league` is always overwritten with `current`,
/// even when that is `None`.
pub fn track_league(state: &mut LeagueState, current: Option<&str>, now: f64) -> LeagueUpdate {
    let current = current.filter(|s| !s.is_empty());
    let previous = state.season_league.as_deref().filter(|s| !s.is_empty());

    let changed = matches!((previous, current), (Some(p), Some(c)) if p != c);
    if changed {
        info!(from = ?previous, to = ?current, "league changed");
        state.league_changed_at = state.league_changed_at.max(now);
    }

    state.season_league = current.map(str::to_string);

    LeagueUpdate {
        changed,
        recently_changed: now - state.league_changed_at < WINDOW_SECONDS,
    }
}

/// Wall-clock time as fractional epoch seconds.
pub fn epoch_seconds(now: DateTime<Utc>) -> f64 {
    now.timestamp_micros() as f64 / 1_000_000.0
}
