//! The reading record.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// One fortune interpretation together with a reference to its source image.
///
/// A `Reading` is immutable once created: the id and timestamp are assigned
/// at construction and never change, and the content text is never edited.
/// Records are kept most-recent-first; two readings created in the same
/// instant keep their insertion order.
///
/// The serialized form uses the persisted history keys: `id`, `date`
/// (RFC 3339), `content`, and `imageID`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Unique identifier, never reused.
    pub id: Uuid,
    /// Creation time, set once.
    #[serde(rename = "date", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// The interpretation text.
    pub content: String,
    /// Identifier of the stored image blob, unique per reading.
    #[serde(rename = "imageID")]
    pub image_ref: String,
}

impl Reading {
    /// Create a new reading with a fresh id and the current time.
    pub fn new(content: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: OffsetDateTime::now_utc(),
            content: content.into(),
            image_ref: image_ref.into(),
        }
    }

    /// Blob file name for this reading's image (`<imageID>.jpg`).
    pub fn image_file_name(&self) -> String {
        format!("{}.jpg", self.image_ref)
    }
}
