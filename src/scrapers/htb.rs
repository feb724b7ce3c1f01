//! HackTheBox profile API: four JSON documents mapped onto [`ProfileStats`].

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::HtbConfig;
use crate::fetch::Fetcher;
use crate::types::{FieldValue, ProfileStats};

/// The four raw documents; any of them may be missing.
#[derive(Debug, Clone, Default)]
pub struct RawProfile {
    pub basic: Option<Value>,
    pub machines: Option<Value>,
    pub challenges: Option<Value>,
    pub season: Option<Value>,
}

/// Fetch every profile document in sequence.
pub fn fetch_all(fetcher: &Fetcher, cfg: &HtbConfig) -> RawProfile {
    println!("\n[*] Fetching endpoints...");
    RawProfile {
        basic: fetcher.get_json(&cfg.basic_url(), &cfg.token),
        machines: fetcher.get_json(&cfg.machines_url(), &cfg.token),
        challenges: fetcher.get_json(&cfg.challenges_url(), &cfg.token),
        season: fetcher.get_json(&cfg.season_url(), &cfg.token),
    }
}

/// Extract card fields. Never fails; missing branches become `None`.
pub fn parse_stats(raw: &RawProfile, now: DateTime<Utc>) -> ProfileStats {
    let basic = raw.basic.as_ref();
    let season = first_season_entry(raw.season.as_ref());

    ProfileStats {
        name: lookup(basic, "/profile/name"),
        rank: lookup(basic, "/profile/rank"),
        user_owns: lookup(raw.machines.as_ref(), "/profile/machine_owns/solved"),
        root_owns: lookup(basic, "/profile/system_owns"),
        challenges_solved: lookup(raw.challenges.as_ref(), "/profile/challenge_owns/solved"),
        rank_pos: lookup(basic, "/profile/ranking"),
        season_rank: lookup(season, "/rank"),
        season_league: lookup(season, "/league"),
        updated: now.format("%Y-%m-%d %H:%M UTC").to_string(),
        league_entered: false,
    }
}

fn lookup(doc: Option<&Value>, pointer: &str) -> Option<FieldValue> {
    doc?.pointer(pointer).and_then(FieldValue::from_json)
}

// `data` must be a non-empty array; only the current season (index 0) counts.
fn first_season_entry(season: Option<&Value>) -> Option<&Value> {
    season?.get("data")?.as_array()?.first()
}
