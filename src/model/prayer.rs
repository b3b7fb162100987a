//! Prayer record and its client-submitted draft.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use uuid::Uuid;

/// Opaque record identifier (a hyphenated UUID v4 string).
pub type PrayerId = String;

/// Wire name of the key attribute
const PRAYER_ID_FIELD: &str = "prayerID";

/// A prayer as stored in the table and returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prayer {
    /// Table key, serialized as `prayerID`
    #[serde(rename = "prayerID")]
    pub prayer_id: PrayerId,
    pub name: String,
    pub verse: String,
    pub passage: String,
    /// Kept as a JSON number so `0` round-trips as `0`, not `0.0`.
    pub percentage_complete: Number,
    pub read: bool,
    /// Attributes outside the schema, stored and echoed as submitted
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Prayer {
    /// Builds a record from a validated draft under the given key.
    ///
    /// Any `prayerID` the client put in the body is discarded in favour of
    /// `prayer_id`. Every other undeclared attribute is kept.
    pub fn from_draft(prayer_id: impl Into<PrayerId>, draft: PrayerDraft) -> Self {
        let mut extra = draft.extra;
        extra.remove(PRAYER_ID_FIELD);

        Self {
            prayer_id: prayer_id.into(),
            name: draft.name,
            verse: draft.verse,
            passage: draft.passage,
            percentage_complete: draft.percentage_complete,
            read: draft.read,
            extra,
        }
    }

    /// Builds a record from a draft with a freshly generated key.
    pub fn create(draft: PrayerDraft) -> Self {
        Self::from_draft(Uuid::new_v4().to_string(), draft)
    }
}

/// Client-submitted prayer body, deserialized after schema validation.
///
/// Undeclared attributes land in `extra`. A client-supplied `prayerID`
/// lands there too and is stripped by `Prayer::from_draft`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerDraft {
    pub name: String,
    pub verse: String,
    pub passage: String,
    pub percentage_complete: Number,
    pub read: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
