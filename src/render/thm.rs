use super::{display_str, escape_xml, FALLBACK};
use crate::types::BadgeStats;

#[derive(Debug, Clone, Default)]
pub struct ThmImages {
    pub avatar: String,
    pub background: String,
}

pub fn render_thm(b: &BadgeStats, images: &ThmImages) -> String {
    let name = display_str(b.name.as_deref(), FALLBACK);
    let rank_title = display_str(b.rank_title.as_deref(), FALLBACK);
    let trophies = display_str(b.trophies.as_deref(), "0");
    let streak = display_str(b.streak.as_deref(), "0");
    let awards = display_str(b.awards.as_deref(), "0");
    let rooms = display_str(b.rooms.as_deref(), "0");
    let avatar = escape_xml(&images.avatar);
    let background = escape_xml(&images.background);

    format!(
        r##"<svg width="327" height="84" viewBox="0 0 327 84" fill="none" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <clipPath id="avatarClip"><circle cx="40" cy="42" r="30"/></clipPath>
    <linearGradient id="avatarBorder" x1="10" y1="72" x2="70" y2="12" gradientUnits="userSpaceOnUse">
      <stop stop-color="#a3ea2a"/><stop offset="1" stop-color="#2e4463"/>
    </linearGradient>
  </defs>

  <image href="{background}" width="327" height="84" preserveAspectRatio="xMidYMid slice"/>

  <circle cx="40" cy="42" r="32" fill="url(#avatarBorder)"/>
  <circle cx="40" cy="42" r="30" fill="#121212"/>

  <image href="{avatar}" x="10" y="12" width="60" height="60" preserveAspectRatio="xMidYMid slice" clip-path="url(#avatarClip)"/>
  <text x="82" y="28" font-family="Ubuntu, Arial, sans-serif" font-size="14" font-weight="500" fill="#f9f9fb">{name}</text>
  <text x="150" y="28" font-family="Ubuntu, Arial, sans-serif" font-size="12" font-weight="500" fill="#ffffff">{rank_title}</text>

  <g transform="translate(82, 54)">
    <text font-size="11" fill="#9ca4b4">🏆</text> <text x="16" font-family="Ubuntu" font-size="11" fill="white">{trophies}</text>
    <text x="44" font-size="11" fill="#a3ea2a">🔥</text> <text x="60" font-family="Ubuntu" font-size="11" fill="white">{streak}</text>
    <text x="108" font-size="11" fill="#d752ff">🏅</text> <text x="124" font-family="Ubuntu" font-size="11" fill="white">{awards}</text>
    <text x="146" font-size="11" fill="#719cf9">🚪</text> <text x="162" font-family="Ubuntu" font-size="11" fill="white">{rooms}</text>
  </g>

  <text x="82" y="74" font-family="Ubuntu" font-size="11" fill="#f9f9fb" opacity="0.6">tryhackme.com</text>
</svg>"##
    )
}
