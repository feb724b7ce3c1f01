//! Field presence validation against a fixed criticality table.
//!
//! Table order is the report order.

use crate::types::FieldSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub critical: bool,
    pub label: &'static str,
}

const fn spec(key: &'static str, critical: bool, label: &'static str) -> FieldSpec {
    FieldSpec { key, critical, label }
}

pub const HTB_FIELD_SPEC: &[FieldSpec] = &[
    spec("name", true, "Profile name"),
    spec("rank", true, "HTB rank"),
    spec("user_owns", false, "Machine user owns"),
    spec("root_owns", false, "Machine root owns"),
    spec("challenges_solved", false, "Challenges solved"),
    spec("rank_pos", true, "Global ranking position"),
    spec("season_rank", false, "Season rank"),
    spec("season_league", false, "Season league"),
];

pub const THM_FIELD_SPEC: &[FieldSpec] = &[
    spec("name", true, "Profile name"),
    spec("rank_title", false, "Rank title"),
    spec("trophies", false, "Trophies"),
    spec("streak", false, "Streak"),
    spec("awards", false, "Awards"),
    spec("rooms", false, "Rooms completed"),
    spec("avatar_url", false, "Avatar URL"),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    /// One status line per table entry, in table order.
    pub lines: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check every field in `table`, without printing.
pub fn check_fields(stats: &impl FieldSource, table: &[FieldSpec]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for entry in table {
        let value = stats.field(entry.key);
        let symbol = match (&value, entry.critical) {
            (Some(_), _) => "✓",
            (None, true) => "✗",
            (None, false) => "⚠",
        };
        let display = value
            .as_ref()
            .map(|v| v.debug_repr())
            .unwrap_or_else(|| "NOT FOUND".to_string());
        report
            .lines
            .push(format!("  [{}] {:<30} = {}", symbol, entry.label, display));

        if value.is_none() {
            let msg = format!("{} ('{}') not found in API response", entry.label, entry.key);
            if entry.critical {
                report.errors.push(msg);
            } else {
                report.warnings.push(msg);
            }
        }
    }

    report
}

/// Check every field and print the per-field report plus any warnings and
/// errors.
pub fn validate_stats(stats: &impl FieldSource, table: &[FieldSpec]) -> ValidationReport {
    println!("\n[*] Validating fields...");
    let report = check_fields(stats, table);
    for line in &report.lines {
        println!("{}", line);
    }

    if !report.warnings.is_empty() {
        println!(
            "\n[!] {} warning(s); card generates with fallback values:",
            report.warnings.len()
        );
        for w in &report.warnings {
            println!("    ⚠  {}", w);
        }
    }

    if !report.errors.is_empty() {
        println!(
            "\n[✗] {} critical error(s); cannot generate card:",
            report.errors.len()
        );
        for e in &report.errors {
            println!("    ✗  {}", e);
        }
    }

    report
}
