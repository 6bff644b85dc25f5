use crate::error::StorageResult;
use crate::mapping::Mapping;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

/// The store collaborator backing the shortening protocol.
///
/// Uniqueness of `id` is enforced here, not by the protocol: the
/// check-then-persist sequence in the service is not transactional, so
/// two racing requests can both pass an existence check and [`save`]
/// must reject the loser with [`Conflict`].
///
/// [`save`]: Repository::save
/// [`Conflict`]: crate::error::StorageError::Conflict
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Retrieves the mapping for a given id.
    /// Returns `None` if the id does not exist.
    async fn find_by_id(&self, id: &ShortCode) -> StorageResult<Option<Mapping>>;

    /// Retrieves the mapping for a given source URL.
    /// Returns `None` if no mapping for that URL exists.
    async fn find_by_source_url(&self, source_url: &str) -> StorageResult<Option<Mapping>>;

    /// Inserts a new mapping and returns the persisted entity.
    async fn save(&self, mapping: Mapping) -> StorageResult<Mapping>;

    /// Checks whether an id is already taken.
    async fn exists_by_id(&self, id: &ShortCode) -> StorageResult<bool>;

    /// Deletes the mapping for a given id.
    /// Returns `true` if the mapping existed and was removed; deleting
    /// an absent id is not an error.
    async fn delete_by_id(&self, id: &ShortCode) -> StorageResult<bool>;

    /// Lists every stored mapping.
    async fn find_all(&self) -> StorageResult<Vec<Mapping>>;
}
