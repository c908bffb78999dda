use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::models::id::RecordId;
use crate::query::{Queryable, SortKey};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: RecordId,
    pub description: String,
    /// Category this goal belongs to. Dangling references are tolerated.
    ///
    /// Outer `None` means the key was absent, `Some(None)` an explicit
    /// `null`; both are written back the way they were read.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<Option<RecordId>>,
    /// Any other fields in the data file, kept verbatim and sortable.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Marks a key as present even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<RecordId>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RecordId>::deserialize(deserializer).map(Some)
}

impl Goal {
    pub fn category(&self) -> Option<&RecordId> {
        self.category_id.as_ref().and_then(Option::as_ref)
    }

    pub fn in_category(&self, category_id: &str) -> bool {
        self.category().is_some_and(|id| id.matches(category_id))
    }
}

impl Queryable for Goal {
    fn search_text(&self) -> &str {
        &self.description
    }

    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "id" => self.id.sort_key(),
            "description" => SortKey::Text(self.description.clone()),
            "categoryId" => self.category().map_or(SortKey::Missing, RecordId::sort_key),
            other => SortKey::from_value(self.extra.get(other)),
        }
    }
}
