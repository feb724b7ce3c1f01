//! Run configuration and defaults for both card pipelines.

use std::path::PathBuf;
use std::time::Duration;

/// Seconds after a league change during which the card shows "RANKED UP!".
pub const WINDOW_SECONDS: f64 = 259_200.0;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = "Mozilla/5.0";

pub const DEFAULT_HTB_USER_ID: &str = "2013859";
pub const DEFAULT_HTB_AVATAR_URL: &str =
    "https://account.hackthebox.com/storage/users/d60954c2-1ab5-4a68-8148-8aa0f9dd8c78-avatar.png";
pub const DEFAULT_HTB_API_BASE: &str = "https://labs.hackthebox.com/api/v4";
pub const HTB_LOGO_URL: &str = "https://www.hackthebox.com/images/logo-htb.svg";
pub const HTB_TIER_ICON_BASE: &str =
    "https://app.hackthebox.com/images/competitive/tier-icons-rewards";
pub const DEFAULT_HTB_OUTPUT: &str = "assets/htb-stats.svg";
pub const DEFAULT_HTB_STATE: &str = "assets/htb_state.json";

pub const DEFAULT_THM_USER_PUBLIC_ID: &str = "2807022";
pub const THM_BADGE_ENDPOINT: &str = "https://tryhackme.com/api/v2/badges/public-profile";
pub const THM_BACKGROUND_URL: &str = "https://tryhackme.com/img/thm_public_badge_bg.svg";
pub const DEFAULT_THM_OUTPUT: &str = "assets/thm-stats.svg";

/// Everything the HackTheBox pipeline needs, resolved up front.
#[derive(Debug, Clone)]
pub struct HtbConfig {
    pub user_id: String,
    pub token: String,
    pub avatar_url: String,
    pub api_base: String,
    pub logo_url: String,
    pub tier_icon_base: String,
    pub output: PathBuf,
    pub state_file: PathBuf,
    pub timeout: Duration,
}

impl HtbConfig {
    pub fn new(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            token: token.into(),
            avatar_url: DEFAULT_HTB_AVATAR_URL.to_string(),
            api_base: DEFAULT_HTB_API_BASE.to_string(),
            logo_url: HTB_LOGO_URL.to_string(),
            tier_icon_base: HTB_TIER_ICON_BASE.to_string(),
            output: PathBuf::from(DEFAULT_HTB_OUTPUT),
            state_file: PathBuf::from(DEFAULT_HTB_STATE),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn basic_url(&self) -> String {
        format!("{}/user/profile/basic/{}", self.api_base, self.user_id)
    }

    pub fn machines_url(&self) -> String {
        format!("{}/user/profile/progress/machines/{}", self.api_base, self.user_id)
    }

    pub fn challenges_url(&self) -> String {
        format!("{}/user/profile/progress/challenges/{}", self.api_base, self.user_id)
    }

    pub fn season_url(&self) -> String {
        format!("{}/season/user/{}/ranks", self.api_base, self.user_id)
    }

    /// Tier icon for a league label, e.g. "Pro Hacker" -> `tier-pro-hacker.svg`.
    pub fn tier_icon_url(&self, league: &str) -> String {
        let slug = league.replace(' ', "-").to_lowercase();
        format!("{}/tier-{}.svg", self.tier_icon_base, slug)
    }
}

#[derive(Debug, Clone)]
pub struct ThmConfig {
    pub badge_url: String,
    pub background_url: String,
    pub output: PathBuf,
    pub timeout: Duration,
}

impl ThmConfig {
    pub fn new(user_public_id: &str) -> Self {
        Self {
            badge_url: badge_url_for(user_public_id),
            background_url: THM_BACKGROUND_URL.to_string(),
            output: PathBuf::from(DEFAULT_THM_OUTPUT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

pub fn badge_url_for(user_public_id: &str) -> String {
    format!("{}?userPublicId={}", THM_BADGE_ENDPOINT, user_public_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_htb_endpoint_urls() {
        let cfg = HtbConfig::new("42", "t");
        assert_eq!(
            cfg.basic_url(),
            "https://labs.hackthebox.com/api/v4/user/profile/basic/42"
        );
        assert_eq!(
            cfg.machines_url(),
            "https://labs.hackthebox.com/api/v4/user/profile/progress/machines/42"
        );
        assert_eq!(
            cfg.challenges_url(),
            "https://labs.hackthebox.com/api/v4/user/profile/progress/challenges/42"
        );
        assert_eq!(
            cfg.season_url(),
            "https://labs.hackthebox.com/api/v4/season/user/42/ranks"
        );
    }

    #[test]
    fn test_tier_icon_slug() {
        let cfg = HtbConfig::new("1", "t");
        assert!(cfg.tier_icon_url("Pro Hacker").ends_with("/tier-pro-hacker.svg"));
        assert!(cfg.tier_icon_url("Guru").ends_with("/tier-guru.svg"));
    }

    #[test]
    fn test_thm_badge_url() {
        let cfg = ThmConfig::new("2807022");
        assert_eq!(
            cfg.badge_url,
            "https://tryhackme.com/api/v2/badges/public-profile?userPublicId=2807022"
        );
        assert_eq!(cfg.timeout, Duration::from_secs(10));
    }
}
