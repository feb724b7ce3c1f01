//! End-to-end card generation.
//!
//! Each pipeline is strictly sequential: fetch, extract, (track league),
//! validate, embed images, render, write.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::{HtbConfig, ThmConfig};
use crate::embed::embed_image;
use crate::error::{CardError, Result};
use crate::fetch::Fetcher;
use crate::render::{render_htb, render_thm, HtbImages, ThmImages};
use crate::scrapers::{htb, thm};
use crate::state::{epoch_seconds, load_state, save_state, track_league, LeagueState};
use crate::types::{BadgeStats, ProfileStats};
use crate::validate::{validate_stats, ValidationReport, HTB_FIELD_SPEC, THM_FIELD_SPEC};

#[derive(Debug)]
pub struct HtbOutcome {
    pub stats: ProfileStats,
    pub state: LeagueState,
    pub report: ValidationReport,
    pub output: PathBuf,
}

#[derive(Debug)]
pub struct ThmOutcome {
    pub badge: BadgeStats,
    pub report: ValidationReport,
    pub output: PathBuf,
}

/// Generate the HackTheBox card as of `now`.
///
/// The state file is written before validation, so a run that aborts on a
/// missing critical field still records the league it saw.
pub fn run_htb(cfg: &HtbConfig, now: DateTime<Utc>) -> Result<HtbOutcome> {
    if cfg.token.is_empty() {
        return Err(CardError::MissingToken { var: "HTB_TOKEN" });
    }

    let fetcher = Fetcher::new(cfg.timeout)?;
    let raw = htb::fetch_all(&fetcher, cfg);
    let mut stats = htb::parse_stats(&raw, now);

    let mut state = load_state(&cfg.state_file);
    let league = stats.league_label();
    let update = track_league(&mut state, league.as_deref(), epoch_seconds(now));
    stats.league_entered = update.recently_changed;
    save_state(&cfg.state_file, &state)?;
    info!(
        league = ?state.season_league,
        changed_at = state.league_changed_at,
        changed = update.changed,
        recently_changed = update.recently_changed,
        "state saved"
    );

    let report = validate_stats(&stats, HTB_FIELD_SPEC);
    if !report.is_valid() {
        return Err(CardError::CriticalFields {
            count: report.errors.len(),
            errors: report.errors.clone(),
        });
    }

    println!("\n[*] Encoding images to base64...");
    let images = HtbImages {
        avatar: embed_image(&fetcher, &cfg.avatar_url),
        logo: embed_image(&fetcher, &cfg.logo_url),
        season: league
            .map(|l| embed_image(&fetcher, &cfg.tier_icon_url(&l)))
            .unwrap_or_default(),
    };

    println!("\n[*] Generating SVG card...");
    let svg = render_htb(&stats, &images);
    write_output(&cfg.output, &svg)?;
    println!("[✓] SVG saved → {}", cfg.output.display());

    Ok(HtbOutcome {
        stats,
        state,
        report,
        output: cfg.output.clone(),
    })
}

/// Generate the TryHackMe badge card.
pub fn run_thm(cfg: &ThmConfig) -> Result<ThmOutcome> {
    let fetcher = Fetcher::new(cfg.timeout)?;

    println!("\n[*] Fetching badge page...");
    let html = fetcher
        .get_text(&cfg.badge_url)
        .ok_or_else(|| CardError::PageUnavailable {
            url: cfg.badge_url.clone(),
        })?;
    let badge = thm::parse_badge(&html);

    let report = validate_stats(&badge, THM_FIELD_SPEC);
    if !report.is_valid() {
        return Err(CardError::CriticalFields {
            count: report.errors.len(),
            errors: report.errors.clone(),
        });
    }

    println!("\n[*] Encoding images to base64...");
    let images = ThmImages {
        avatar: badge
            .avatar_url
            .as_deref()
            .map(|url| embed_image(&fetcher, url))
            .unwrap_or_default(),
        background: embed_image(&fetcher, &cfg.background_url),
    };

    println!("\n[*] Generating SVG card...");
    let svg = render_thm(&badge, &images);
    write_output(&cfg.output, &svg)?;
    println!("[✓] SVG saved → {}", cfg.output.display());

    Ok(ThmOutcome {
        badge,
        report,
        output: cfg.output.clone(),
    })
}

fn write_output(path: &Path, svg: &str) -> Result<()> {
    let write_err = |source| CardError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, svg).map_err(write_err)
}
