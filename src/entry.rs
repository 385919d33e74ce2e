use serde::{Deserialize, Deserializer, Serialize};

/// One persisted reminder row. Field order matches the on-disk key order;
/// a stored item must carry all three keys, with `null` marking a text
/// unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// 0-based position in the grid.
    pub row: i32,
    /// Free-form time text (e.g. "Tues 1:00 pm"). Never validated.
    #[serde(deserialize_with = "deserialize_nullable_text")]
    pub time: Option<String>,
    /// Free-form description text.
    #[serde(deserialize_with = "deserialize_nullable_text")]
    pub description: Option<String>,
}

impl Entry {
    pub fn new(row: i32, time: Option<String>, description: Option<String>) -> Self {
        Self {
            row,
            time,
            description,
        }
    }

    /// An entry with both texts absent occupies no slot and is never persisted.
    pub fn is_empty(&self) -> bool {
        self.time.is_none() && self.description.is_none()
    }
}

// A bare `Option` field would treat a missing key as unset; routing it
// through `deserialize_with` makes the key required while still taking null.
fn deserialize_nullable_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer)
}
