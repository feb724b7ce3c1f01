use std::fmt;

use serde_json::Value;

/// A single scalar pulled out of an upstream payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl FieldValue {
    /// Converts a JSON node into a scalar. `null` is absent; containers are
    /// kept as their compact JSON text.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(FieldValue::Bool(*b)),
            Value::Number(n) => Some(match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => FieldValue::Text(n.to_string()),
            }),
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            other => Some(FieldValue::Text(other.to_string())),
        }
    }

    /// Rendering used by the validator report: text is single-quoted,
    /// numbers and booleans are not.
    pub fn debug_repr(&self) -> String {
        match self {
            FieldValue::Text(s) => format!("'{}'", s),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// Lookup of a named field, used by the validator to walk a field table
/// without knowing the concrete stats type.
pub trait FieldSource {
    fn field(&self, key: &str) -> Option<FieldValue>;
}

/// HackTheBox profile fields for a single run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileStats {
    pub name: Option<FieldValue>,
    pub rank: Option<FieldValue>,
    pub user_owns: Option<FieldValue>,
    pub root_owns: Option<FieldValue>,
    pub challenges_solved: Option<FieldValue>,
    pub rank_pos: Option<FieldValue>,
    pub season_rank: Option<FieldValue>,
    pub season_league: Option<FieldValue>,
    pub updated: String,
    pub league_entered: bool,
}

impl ProfileStats {
    /// The league label as text, with empty labels treated as absent.
    pub fn league_label(&self) -> Option<String> {
        self.season_league
            .as_ref()
            .map(|v| v.to_string())
            .filter(|s| !s.is_empty())
    }
}

impl FieldSource for ProfileStats {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "name" => self.name.clone(),
            "rank" => self.rank.clone(),
            "user_owns" => self.user_owns.clone(),
            "root_owns" => self.root_owns.clone(),
            "challenges_solved" => self.challenges_solved.clone(),
            "rank_pos" => self.rank_pos.clone(),
            "season_rank" => self.season_rank.clone(),
            "season_league" => self.season_league.clone(),
            _ => None,
        }
    }
}

/// TryHackMe public badge fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BadgeStats {
    pub name: Option<String>,
    pub rank_title: Option<String>,
    pub trophies: Option<String>,
    pub streak: Option<String>,
    pub awards: Option<String>,
    pub rooms: Option<String>,
    pub avatar_url: Option<String>,
}

impl FieldSource for BadgeStats {
    fn field(&self, key: &str) -> Option<FieldValue> {
        let value = match key {
            "name" => &self.name,
            "rank_title" => &self.rank_title,
            "trophies" => &self.trophies,
            "streak" => &self.streak,
            "awards" => &self.awards,
            "rooms" => &self.rooms,
            "avatar_url" => &self.avatar_url,
            _ => return None,
        };
        value.as_deref().map(FieldValue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(FieldValue::from_json(&json!(null)), None);
        assert_eq!(FieldValue::from_json(&json!(42)), Some(FieldValue::Int(42)));
        assert_eq!(FieldValue::from_json(&json!("Guru")), Some(FieldValue::from("Guru")));
        assert_eq!(FieldValue::from_json(&json!(true)), Some(FieldValue::Bool(true)));
        assert_eq!(FieldValue::from_json(&json!(1.5)), Some(FieldValue::from("1.5")));
    }

    #[test]
    fn test_from_json_container_is_present() {
        let v = FieldValue::from_json(&json!({"a": 1})).unwrap();
        assert_eq!(v, FieldValue::from("{\"a\":1}"));
    }

    #[test]
    fn test_debug_repr_quotes_text_only() {
        assert_eq!(FieldValue::from("Hacker").debug_repr(), "'Hacker'");
        assert_eq!(FieldValue::Int(412).debug_repr(), "412");
        assert_eq!(FieldValue::Bool(false).debug_repr(), "false");
    }

    #[test]
    fn test_league_label_ignores_empty() {
        let mut stats = ProfileStats::default();
        assert_eq!(stats.league_label(), None);
        stats.season_league = Some(FieldValue::from(""));
        assert_eq!(stats.league_label(), None);
        stats.season_league = Some(FieldValue::from("Hacker"));
        assert_eq!(stats.league_label().as_deref(), Some("Hacker"));
    }

    #[test]
    fn test_badge_field_lookup() {
        let badge = BadgeStats {
            name: Some("neo".to_string()),
            ..Default::default()
        };
        assert_eq!(badge.field("name"), Some(FieldValue::from("neo")));
        assert_eq!(badge.field("rooms"), None);
        assert_eq!(badge.field("unknown"), None);
    }
}
