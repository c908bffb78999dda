use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::id::RecordId;
use crate::query::{Queryable, SortKey};

/// A named grouping of goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Queryable for Category {
    fn search_text(&self) -> &str {
        &self.name
    }

    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "id" => self.id.sort_key(),
            "name" => SortKey::Text(self.name.clone()),
            other => SortKey::from_value(self.extra.get(other)),
        }
    }
}
