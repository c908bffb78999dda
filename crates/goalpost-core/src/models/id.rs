use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::SortKey;

/// Identifier of a goal, category or user.
///
/// The data files mix numeric and string ids (`1` and `"1"`), so the id keeps
/// whatever JSON form it was loaded with and all comparisons go through
/// [`RecordId::canonical`]. Two ids are equal when their canonical forms are.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(serde_json::Number),
    Text(String),
}

impl RecordId {
    /// Canonical text form: numeric values (numbers, or text that parses as
    /// one) in plain decimal, everything else trimmed. `1`, `1.0`, `"1"`,
    /// `"1.0"` and `" 01 "` all canonicalize to `"1"`.
    pub fn canonical(&self) -> String {
        match self {
            RecordId::Number(n) => canonical_number(n),
            RecordId::Text(s) => canonical_text(s),
        }
    }

    /// Compare against a raw id taken from a request path.
    pub fn matches(&self, raw: &str) -> bool {
        self.canonical() == canonical_text(raw)
    }

    pub fn sort_key(&self) -> SortKey {
        match self {
            RecordId::Number(n) => n.as_f64().map_or(SortKey::Missing, SortKey::Number),
            RecordId::Text(s) => SortKey::Text(s.clone()),
        }
    }
}

fn canonical_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // Exactly representable integers only (|f| < 2^53).
        Some(f) if f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

/// Numeric text goes through the same rules as JSON numbers, so `"1.0"` and
/// `"1e0"` land on the same form as `1`.
fn canonical_text(s: &str) -> String {
    let trimmed = s.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return i.to_string();
    }
    match trimmed
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
    {
        Some(n) => canonical_number(&n),
        None => trimmed.to_string(),
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for RecordId {}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value.into())
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}
