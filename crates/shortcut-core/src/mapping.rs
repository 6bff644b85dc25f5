use crate::shortcode::ShortCode;
use serde::{Deserialize, Serialize};

/// The persisted (id, source URL) pair.
///
/// A mapping is immutable once created: no field is ever updated in
/// place, it can only be deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// The short code, unique across all mappings (store-enforced).
    pub id: ShortCode,
    /// The original long URL.
    pub source_url: String,
}

impl Mapping {
    pub fn new(id: ShortCode, source_url: impl Into<String>) -> Self {
        Self {
            id,
            source_url: source_url.into(),
        }
    }

    /// Enriches this mapping into its externally-facing view, deriving
    /// the shortcut as `prefix + id`.
    pub fn into_short_link(self, prefix: &str) -> ShortLink {
        let shortcut = format!("{}{}", prefix, self.id);
        ShortLink {
            id: self.id,
            source_url: self.source_url,
            shortcut,
        }
    }
}

/// The externally-facing view of a [`Mapping`].
///
/// `shortcut` is computed at response time and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLink {
    pub id: ShortCode,
    pub source_url: String,
    pub shortcut: String,
}
