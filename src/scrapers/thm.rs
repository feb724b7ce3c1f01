//! TryHackMe public badge page.
//!
//! The badge is an HTML snippet; fields are picked out by class name and the
//! avatar URL is pulled from an inline `<style>` block. Markup changes
//! upstream simply produce absent fields.

use regex::Regex;
use scraper::Html;

use super::{select_all, stripped_text};
use crate::types::BadgeStats;

const AVATAR_PATTERN: &str = r"url\((https://tryhackme-images.*?)\)";

pub fn parse_badge(html: &str) -> BadgeStats {
    let document = Html::parse_document(html);

    let first_text = |selector: &str| {
        select_all(&document, selector)
            .first()
            .and_then(stripped_text)
    };

    // trophies, streak, awards, rooms
    let details: Vec<Option<String>> = select_all(&document, ".details-text")
        .iter()
        .map(stripped_text)
        .collect();
    let detail = |i: usize| details.get(i).cloned().flatten();

    BadgeStats {
        name: first_text(".user_name"),
        rank_title: first_text(".rank-title"),
        trophies: detail(0),
        streak: detail(1),
        awards: detail(2),
        rooms: detail(3),
        avatar_url: extract_avatar_url(&document),
    }
}

fn extract_avatar_url(document: &Html) -> Option<String> {
    let style = select_all(document, "style")
        .first()
        .map(|el| el.text().collect::<String>())?;

    let re = Regex::new(AVATAR_PATTERN).ok()?;
    re.captures(&style)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
