use std::cmp::Ordering;

use serde::Deserialize;
use serde_json::Value;

/// `?query=` and `?sort=` parameters shared by the list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub query: Option<String>,
    pub sort: Option<String>,
}

/// A record that can be filtered by substring and sorted by field name.
pub trait Queryable {
    /// Text the `query` parameter is matched against.
    fn search_text(&self) -> &str;

    fn sort_key(&self, field: &str) -> SortKey;
}

/// Value of a single field, reduced to something orderable.
///
/// Ordering across kinds: booleans, then numbers, then strings, then
/// anything missing or not scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Bool(bool),
    Number(f64),
    Text(String),
    Missing,
}

impl SortKey {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Bool(b)) => SortKey::Bool(*b),
            Some(Value::Number(n)) => n.as_f64().map_or(SortKey::Missing, SortKey::Number),
            Some(Value::String(s)) => SortKey::Text(s.clone()),
            _ => SortKey::Missing,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Bool(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
            SortKey::Missing => 3,
        }
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Filter `records` by substring and optionally sort them, leaving the
/// source slice untouched.
///
/// Matching is case-sensitive. Sorting is stable and ascending, so records
/// with equal keys keep their stored order.
pub fn filter_and_sort<'a, T: Queryable>(records: &'a [T], params: &ListParams) -> Vec<&'a T> {
    let matched = records.iter().filter(|record| match &params.query {
        Some(needle) => record.search_text().contains(needle.as_str()),
        None => true,
    });

    let Some(field) = &params.sort else {
        return matched.collect();
    };

    let mut keyed: Vec<(SortKey, &T)> = matched
        .map(|record| (record.sort_key(field), record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.compare(b));
    keyed.into_iter().map(|(_, record)| record).collect()
}
