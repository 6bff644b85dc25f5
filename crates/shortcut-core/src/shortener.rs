use crate::error::Result;
use crate::mapping::ShortLink;
use async_trait::async_trait;

/// The boundary operations of the shortening service, independent of
/// transport.
///
/// Every returned [`ShortLink`] is enriched with its derived shortcut;
/// "not found" is `Ok(None)` rather than an error so callers can map it
/// to the correct miss behavior (404, redirect failure).
#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Shortens a source URL, creating a new mapping or returning an
    /// existing one per the resolution rules. `custom_code` carries a
    /// caller-chosen id; `None` (or blank) selects random generation.
    async fn shorten(&self, source_url: &str, custom_code: Option<&str>) -> Result<ShortLink>;

    /// Looks up a mapping by id.
    async fn get_by_id(&self, id: &str) -> Result<Option<ShortLink>>;

    /// Lists all mappings.
    async fn list(&self) -> Result<Vec<ShortLink>>;

    /// Deletes a mapping by id. Deleting an id that does not exist
    /// succeeds; a blank id is a validation error.
    async fn delete_by_id(&self, id: &str) -> Result<()>;

    /// Resolves an id to its target URL for redirecting.
    async fn resolve(&self, id: &str) -> Result<Option<String>>;
}
