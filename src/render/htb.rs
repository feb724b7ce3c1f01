use super::{display, escape_xml, FALLBACK};
use crate::types::ProfileStats;

/// Embedded images for the HackTheBox card; empty strings mean "not drawn"
/// (or drawn blank, for avatar and logo).
#[derive(Debug, Clone, Default)]
pub struct HtbImages {
    pub avatar: String,
    pub logo: String,
    pub season: String,
}

const BG_FILL: &str = "#000000";
const PANEL_FILL: &str = "#0A0A0A";
const STROKE_DARK: &str = "#2A0F0F";
const MUTED: &str = "#C48A6A";
const SMALL: &str = "#4A1B1D";
const GOLD: &str = "#FFD700";
const RED: &str = "#AA0A0A";

/// Accent colour for an HTB rank name.
pub fn rank_color(rank: Option<&str>) -> &'static str {
    match rank.unwrap_or("") {
        "Noob" => "#9E9E9E",
        "Script Kiddie" => "#B04A2F",
        "Hacker" => "#FF7A45",
        "Pro Hacker" => "#FF9800",
        "Elite Hacker" => "#FF5C3A",
        "Guru" => "#D97706",
        _ => "#FF7A45",
    }
}

pub fn render_htb(s: &ProfileStats, images: &HtbImages) -> String {
    let rank_text = s.rank.as_ref().map(|r| r.to_string());
    let rc = rank_color(rank_text.as_deref());

    let name = display(s.name.as_ref(), FALLBACK);
    let rank = display(s.rank.as_ref(), FALLBACK);
    let updated = escape_xml(&s.updated);
    let user_owns = display(s.user_owns.as_ref(), "0");
    let root_owns = display(s.root_owns.as_ref(), "0");
    let challenges = display(s.challenges_solved.as_ref(), "0");
    let season_rank = display(s.season_rank.as_ref(), FALLBACK);
    let season_league = display(s.season_league.as_ref(), FALLBACK);
    let rank_pos = display(s.rank_pos.as_ref(), FALLBACK);
    let avatar = escape_xml(&images.avatar);
    let logo = escape_xml(&images.logo);

    let sword_glow_layer = if s.league_entered {
        format!(
            r#"<text x="80" y="38" font-size="14" fill="{GOLD}" filter="url(#edgeGlow)">⚔️</text>"#
        )
    } else {
        String::new()
    };

    let ranked_up_badge = if s.league_entered {
        format!(
            r#"
  <g>
    <rect x="58" y="167" width="76" height="22" rx="4" fill="{GOLD}" fill-opacity="0.1" stroke="{GOLD}" stroke-width="1"/>
    <text x="96" y="182" text-anchor="middle" font-size="9" fill="{GOLD}" font-family="monospace" font-weight="bold">RANKED UP!</text>
    <animate attributeName="opacity" values="1;0.3;1" dur="2s" repeatCount="indefinite"/>
  </g>"#
        )
    } else {
        String::new()
    };

    let season_icon = if images.season.is_empty() {
        String::new()
    } else {
        format!(
            r#"<image href="{}" x="152" y="170" width="18" height="18"/>"#,
            escape_xml(&images.season)
        )
    };

    format!(
        r##"<svg width="480" height="240" viewBox="0 0 480 240" fill="none" xmlns="http://www.w3.org/2000/svg">

  <rect width="480" height="240" rx="14" fill="{BG_FILL}"/>
  <rect width="480" height="240" rx="14" stroke="{STROKE_DARK}" stroke-width="1.5"/>
  <rect width="4" height="240" rx="2" fill="{rc}"/>

  <defs>
    <clipPath id="avatarClip"><circle cx="48" cy="28" r="18"/></clipPath>

    <filter id="edgeGlow" x="-50%" y="-50%" width="200%" height="200%">
      <feMorphology in="SourceGraphic" operator="dilate" radius="1.2" result="expanded"/>
      <feGaussianBlur in="expanded" stdDeviation="1.5" result="blur"/>
      <feComponentTransfer in="blur">
        <feFuncA type="linear" slope="0">
          <animate attributeName="slope" values="0; 4; 0" dur="1.8s" repeatCount="indefinite"/>
        </feFuncA>
      </feComponentTransfer>
    </filter>
  </defs>
  <image href="{logo}" x="380" y="12" width="80" height="25" opacity="0.8"/>
  <image href="{avatar}" x="30" y="10" width="36" height="36" clip-path="url(#avatarClip)"/>

  <text x="80" y="23" font-size="15" font-weight="bold" fill="white" font-family="'Segoe UI', Arial, sans-serif">{name}</text>

  {sword_glow_layer}
  <text x="80" y="38" font-size="14" fill="{rc}">⚔️</text>
  <text x="100" y="38" font-size="11" fill="{rc}" font-family="monospace">{rank}</text>

  <text x="460" y="18" text-anchor="end" font-size="9" fill="{SMALL}" font-family="monospace">{updated}</text>

  <line x1="20" y1="52" x2="460" y2="52" stroke="{STROKE_DARK}" stroke-width="1"/>

  <rect x="97"  y="62" width="82" height="66" rx="8" fill="{PANEL_FILL}" stroke="{STROKE_DARK}" stroke-width="1"/>
  <text x="138" y="79"  text-anchor="middle" font-size="8"  fill="{MUTED}" font-family="monospace">USER OWNS</text>
  <text x="138" y="103" text-anchor="middle" font-size="21" fill="{RED}" font-family="monospace" font-weight="bold">{user_owns}</text>
  <text x="138" y="118" text-anchor="middle" font-size="7"  fill="{SMALL}" font-family="monospace">flags</text>

  <rect x="199" y="62" width="82" height="66" rx="8" fill="{PANEL_FILL}" stroke="{STROKE_DARK}" stroke-width="1"/>
  <text x="240" y="79"  text-anchor="middle" font-size="8"  fill="{MUTED}" font-family="monospace">ROOT OWNS</text>
  <text x="240" y="103" text-anchor="middle" font-size="21" fill="{RED}" font-family="monospace" font-weight="bold">{root_owns}</text>
  <text x="240" y="118" text-anchor="middle" font-size="7"  fill="{SMALL}" font-family="monospace">shells</text>

  <rect x="301" y="62" width="82" height="66" rx="8" fill="{PANEL_FILL}" stroke="{STROKE_DARK}" stroke-width="1"/>
  <text x="342" y="79"  text-anchor="middle" font-size="8"  fill="{MUTED}" font-family="monospace">CHALLENGES</text>
  <text x="342" y="103" text-anchor="middle" font-size="21" fill="{RED}" font-family="monospace" font-weight="bold">{challenges}</text>
  <text x="342" y="118" text-anchor="middle" font-size="7"  fill="{SMALL}" font-family="monospace">solved</text>

  <line x1="20" y1="140" x2="460" y2="140" stroke="{STROKE_DARK}" stroke-width="1"/>

  {ranked_up_badge}

  <rect x="148" y="150" width="82" height="58" rx="8" fill="{PANEL_FILL}" stroke="{STROKE_DARK}" stroke-width="1"/>
  <text x="189" y="165" text-anchor="middle" font-size="8"  fill="{MUTED}" font-family="monospace">SEASON</text>
  {season_icon}
  <text x="195" y="186" text-anchor="middle" font-size="16" fill="{RED}" font-family="monospace" font-weight="bold">#{season_rank}</text>
  <text x="189" y="200" text-anchor="middle" font-size="7"  fill="{SMALL}" font-family="monospace">{season_league}</text>

  <rect x="250" y="150" width="82" height="58" rx="8" fill="{PANEL_FILL}" stroke="{STROKE_DARK}" stroke-width="1.5"/>
  <text x="291" y="165" text-anchor="middle" font-size="8"  fill="{rc}" font-family="monospace">GLOBAL</text>
  <text x="291" y="186" text-anchor="middle" font-size="16" fill="{RED}" font-family="monospace" font-weight="bold">#{rank_pos}</text>
  <text x="291" y="200" text-anchor="middle" font-size="7"  fill="{SMALL}" font-family="monospace">rank</text>

  <line x1="20" y1="220" x2="460" y2="220" stroke="{STROKE_DARK}" stroke-width="1"/>

</svg>"##
    )
}
