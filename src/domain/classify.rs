// src/domain/classify.rs

use serde::Serialize;
use serde_json::Value;

/// Canonical answer for an amenity whose source field may be a boolean,
/// a count, a free-text label or missing altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Presence {
    pub fn is_yes(self) -> bool {
        self == Presence::Yes
    }

    pub fn label(self) -> &'static str {
        match self {
            Presence::Yes => "Yes",
            Presence::No => "No",
            Presence::Unknown => "Unknown",
        }
    }
}

/// `adult_only` carries a fourth outcome: a number that is neither 0 nor 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdultOnly {
    Yes,
    No,
    Maybe,
    #[default]
    Unknown,
}

impl AdultOnly {
    pub fn is_yes(self) -> bool {
        self == AdultOnly::Yes
    }

    /// Display label; an unknown value reads as "any" guests.
    pub fn label(self) -> &'static str {
        match self {
            AdultOnly::Yes => "Yes",
            AdultOnly::No => "No",
            AdultOnly::Maybe => "Maybe",
            AdultOnly::Unknown => "Any",
        }
    }
}

const NEGATIVE_SPA_TOKENS: [&str; 4] = ["no", "not available", "none", "n"];

/// `drinks24h` / `snacks24h`: only real booleans carry an answer.
pub fn classify_flag(value: &Value) -> Presence {
    match value {
        Value::Bool(true) => Presence::Yes,
        Value::Bool(false) => Presence::No,
        _ => Presence::Unknown,
    }
}

/// `spa_available` is either a spa count or a label such as "Yes" / "Not available".
pub fn classify_spa(value: &Value) -> Presence {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(count) if count == 0.0 => Presence::No,
            Some(count) if count > 0.0 => Presence::Yes,
            _ => Presence::Unknown,
        },
        Value::String(label) => classify_spa_label(label),
        _ => Presence::Unknown,
    }
}

fn classify_spa_label(label: &str) -> Presence {
    let label = label.trim().to_lowercase();
    if label.is_empty() {
        Presence::Unknown
    } else if NEGATIVE_SPA_TOKENS.contains(&label.as_str()) {
        Presence::No
    } else {
        Presence::Yes
    }
}

pub fn classify_adult_only(value: &Value) -> AdultOnly {
    match value {
        Value::Number(n) => n.as_f64().map_or(AdultOnly::Unknown, adult_only_from_number),
        _ => AdultOnly::Unknown,
    }
}

fn adult_only_from_number(n: f64) -> AdultOnly {
    if n.is_nan() {
        AdultOnly::Unknown
    } else if n == 1.0 {
        AdultOnly::Yes
    } else if n == 0.0 {
        AdultOnly::No
    } else {
        AdultOnly::Maybe
    }
}
