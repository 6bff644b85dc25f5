use crate::config::DigestConfig;
use async_trait::async_trait;
use shortcut_core::{
    Mapping, Repository, Result, ShortCode, ShortLink, Shortener, ShortenerError, StorageError,
};
use shortcut_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace};

/// The resolution protocol for shorten requests.
///
/// Given a source URL and an optional caller-supplied code, decides
/// whether to create a new mapping, return an existing one, or reject
/// the request:
///
/// - no custom code, URL already mapped: the existing mapping is
///   returned unchanged (dedup).
/// - no custom code, URL unknown: a free random code is allocated and
///   a new mapping persisted.
/// - custom code free: a new mapping with that id is persisted.
/// - custom code taken by the same URL: the existing mapping is
///   returned unchanged (idempotent re-request).
/// - custom code taken by a different URL: conflict.
///
/// The check-then-persist sequence is not wrapped in a transaction; two
/// concurrent requests racing on the same code can both pass the
/// existence check. The store's uniqueness constraint on the id is the
/// arbiter: the losing `save` surfaces as a conflict.
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    config: DigestConfig,
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    pub fn new(repository: R, generator: G, config: DigestConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            config,
        }
    }

    /// Validates the source URL before any store access.
    fn validate_source_url(source_url: &str) -> Result<()> {
        let parsed = url::Url::parse(source_url)
            .map_err(|e| ShortenerError::InvalidUrl(format!("{}: {}", source_url, e)))?;

        // An absolute URL without an authority (e.g. "mailto:") is not
        // shortenable.
        if !parsed.has_host() {
            return Err(ShortenerError::InvalidUrl(format!(
                "{}: missing authority",
                source_url
            )));
        }

        Ok(())
    }

    /// Draws candidates until one is free in the store, bounded by the
    /// configured attempt budget. Fail fast: when the budget is spent
    /// the whole request fails, no retries further up the stack.
    async fn next_free_code(&self) -> Result<ShortCode> {
        let max_attempts = self.config.max_attempts;

        for attempt in 1..=max_attempts {
            let candidate = self.generator.generate();
            if !self.repository.exists_by_id(&candidate).await? {
                trace!(code = %candidate, attempt, "allocated free short code");
                return Ok(candidate);
            }
            debug!(code = %candidate, attempt, "candidate code already taken");
        }

        Err(ShortenerError::CapacityExhausted {
            attempts: max_attempts,
        })
    }

    async fn shorten_with_random_code(&self, source_url: &str) -> Result<Mapping> {
        // Dedup short-circuit: at most one random-path mapping per
        // source URL.
        if let Some(existing) = self.repository.find_by_source_url(source_url).await? {
            debug!(id = %existing.id, "reusing existing mapping for source url");
            return Ok(existing);
        }

        let code = self.next_free_code().await?;
        self.repository
            .save(Mapping::new(code, source_url))
            .await
            .map_err(save_error_to_shortener_error)
    }

    async fn shorten_with_custom_code(&self, source_url: &str, code: &str) -> Result<Mapping> {
        let code = ShortCode::new(code)?;

        match self.repository.find_by_id(&code).await? {
            // Idempotent re-request: same code already bound to the
            // same URL.
            Some(existing) if existing.source_url == source_url => Ok(existing),
            Some(_) => Err(ShortenerError::CodeConflict(code.to_string())),
            None => self
                .repository
                .save(Mapping::new(code, source_url))
                .await
                .map_err(save_error_to_shortener_error),
        }
    }
}

/// Converts a `save` failure to a protocol error. A uniqueness
/// violation here means this request lost the check-then-persist race,
/// so it surfaces as a code conflict rather than a storage failure.
fn save_error_to_shortener_error(err: StorageError) -> ShortenerError {
    match err {
        StorageError::Conflict(code) => ShortenerError::CodeConflict(code),
        other => ShortenerError::Storage(other),
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, source_url: &str, custom_code: Option<&str>) -> Result<ShortLink> {
        Self::validate_source_url(source_url)?;

        // A blank custom code means "no code requested".
        let custom = custom_code.map(str::trim).filter(|code| !code.is_empty());

        let mapping = match custom {
            Some(code) => self.shorten_with_custom_code(source_url, code).await?,
            None => self.shorten_with_random_code(source_url).await?,
        };

        Ok(mapping.into_short_link(&self.config.prefix))
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<ShortLink>> {
        if id.trim().is_empty() {
            return Ok(None);
        }

        let code = ShortCode::new_unchecked(id);
        Ok(self
            .repository
            .find_by_id(&code)
            .await?
            .map(|mapping| mapping.into_short_link(&self.config.prefix)))
    }

    async fn list(&self) -> Result<Vec<ShortLink>> {
        Ok(self
            .repository
            .find_all()
            .await?
            .into_iter()
            .map(|mapping| mapping.into_short_link(&self.config.prefix))
            .collect())
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        // A blank id is a validation error; deleting an absent id is
        // not.
        let code = ShortCode::new(id)?;

        let removed = self.repository.delete_by_id(&code).await?;
        if !removed {
            trace!(id = %code, "delete of absent id, nothing to do");
        }
        Ok(())
    }

    async fn resolve(&self, id: &str) -> Result<Option<String>> {
        Ok(self.get_by_id(id).await?.map(|link| link.source_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortcut_core::{StorageError, StorageResult};
    use shortcut_generator::RandomCodeGenerator;
    use shortcut_storage::InMemoryRepository;
    use std::sync::atomic::{AtomicU32, Ordering};

    const PREFIX: &str = "http://short.ly/";

    fn test_service() -> ShortenerService<InMemoryRepository, RandomCodeGenerator> {
        let config = DigestConfig::default();
        let generator = RandomCodeGenerator::new(config.random_bytes, config.length);
        ShortenerService::new(InMemoryRepository::new(), generator, config)
    }

    #[tokio::test]
    async fn shorten_with_random_code() {
        let service = test_service();

        let link = service.shorten("http://example.com", None).await.unwrap();

        assert_eq!(link.source_url, "http://example.com");
        assert_eq!(link.id.as_str().len(), 6);
        assert_eq!(link.shortcut, format!("{}{}", PREFIX, link.id));
        assert!(link
            .shortcut
            .strip_prefix(PREFIX)
            .unwrap()
            .chars()
            .all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn shorten_is_idempotent_for_the_same_source_url() {
        let service = test_service();

        let first = service.shorten("http://example.com", None).await.unwrap();
        let second = service.shorten("http://example.com", None).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn shorten_with_custom_code() {
        let service = test_service();

        let link = service
            .shorten("http://foo.com", Some("test-hash"))
            .await
            .unwrap();

        assert_eq!(link.id.as_str(), "test-hash");
        assert_eq!(link.source_url, "http://foo.com");
        assert_eq!(link.shortcut, format!("{}test-hash", PREFIX));
    }

    #[tokio::test]
    async fn shorten_with_custom_code_is_idempotent() {
        let service = test_service();

        let first = service
            .shorten("http://foo.com", Some("abc"))
            .await
            .unwrap();
        let second = service
            .shorten("http://foo.com", Some("abc"))
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn shorten_with_taken_custom_code_conflicts() {
        let service = test_service();

        service
            .shorten("http://a.com", Some("abc"))
            .await
            .unwrap();

        let err = service
            .shorten("http://b.com", Some("abc"))
            .await
            .unwrap_err();
        assert!(matches!(err, ShortenerError::CodeConflict(_)));

        // The conflict message must not leak the existing target URL.
        assert!(!err.to_string().contains("a.com"));

        // The original mapping is not mutated.
        let existing = service.get_by_id("abc").await.unwrap().unwrap();
        assert_eq!(existing.source_url, "http://a.com");
    }

    #[tokio::test]
    async fn blank_custom_code_means_no_custom_code() {
        let service = test_service();

        let link = service
            .shorten("http://example.com", Some("   "))
            .await
            .unwrap();

        // Random path: generated id, not the blank input.
        assert_eq!(link.id.as_str().len(), 6);
    }

    #[tokio::test]
    async fn shorten_with_invalid_url_fails_before_store_access() {
        let service = test_service();

        for bad in ["not a url", "", "h ttp://&example.com", "/relative/path"] {
            let err = service.shorten(bad, None).await.unwrap_err();
            assert!(matches!(err, ShortenerError::InvalidUrl(_)), "{:?}", bad);
        }

        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_by_id_enriches_the_shortcut() {
        let service = test_service();

        service
            .shorten("http://foo.com", Some("testID"))
            .await
            .unwrap();

        let link = service.get_by_id("testID").await.unwrap().unwrap();
        assert_eq!(link.shortcut, format!("{}testID", PREFIX));
    }

    #[tokio::test]
    async fn get_by_id_miss_is_none() {
        let service = test_service();

        assert!(service.get_by_id("nope").await.unwrap().is_none());
        assert!(service.get_by_id("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_enriches_every_mapping() {
        let service = test_service();

        service
            .shorten("http://foo.com/1", Some("1"))
            .await
            .unwrap();
        service
            .shorten("http://foo.com/2", Some("2"))
            .await
            .unwrap();

        let links = service.list().await.unwrap();
        assert_eq!(links.len(), 2);
        for link in links {
            assert_eq!(link.shortcut, format!("{}{}", PREFIX, link.id));
        }
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let service = test_service();

        service
            .shorten("http://foo.com", Some("some-hash"))
            .await
            .unwrap();

        service.delete_by_id("some-hash").await.unwrap();
        assert!(service.get_by_id("some-hash").await.unwrap().is_none());

        // Deleting an id that never existed is not an error.
        service.delete_by_id("nonexistent").await.unwrap();
    }

    #[tokio::test]
    async fn delete_with_blank_id_is_a_validation_error() {
        let service = test_service();

        let err = service.delete_by_id("").await.unwrap_err();
        assert!(matches!(err, ShortenerError::InvalidId(_)));
    }

    #[tokio::test]
    async fn resolve_returns_the_target_url() {
        let service = test_service();

        service
            .shorten("http://example.com", Some("abc"))
            .await
            .unwrap();

        assert_eq!(
            service.resolve("abc").await.unwrap().as_deref(),
            Some("http://example.com")
        );
        assert!(service.resolve("missing").await.unwrap().is_none());
    }

    /// A store stub whose `exists_by_id` reports every candidate as
    /// taken, counting the checks.
    #[derive(Default)]
    struct SaturatedRepository {
        existence_checks: AtomicU32,
    }

    #[async_trait]
    impl Repository for SaturatedRepository {
        async fn find_by_id(&self, _id: &ShortCode) -> StorageResult<Option<Mapping>> {
            Ok(None)
        }

        async fn find_by_source_url(&self, _source_url: &str) -> StorageResult<Option<Mapping>> {
            Ok(None)
        }

        async fn save(&self, mapping: Mapping) -> StorageResult<Mapping> {
            Err(StorageError::Conflict(mapping.id.to_string()))
        }

        async fn exists_by_id(&self, _id: &ShortCode) -> StorageResult<bool> {
            self.existence_checks.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        }

        async fn delete_by_id(&self, _id: &ShortCode) -> StorageResult<bool> {
            Ok(false)
        }

        async fn find_all(&self) -> StorageResult<Vec<Mapping>> {
            Ok(vec![])
        }
    }

    /// A store stub whose lookups report everything free but whose
    /// `save` rejects the id — the shape a request sees when it loses
    /// the check-then-persist race.
    struct ContestedRepository;

    #[async_trait]
    impl Repository for ContestedRepository {
        async fn find_by_id(&self, _id: &ShortCode) -> StorageResult<Option<Mapping>> {
            Ok(None)
        }

        async fn find_by_source_url(&self, _source_url: &str) -> StorageResult<Option<Mapping>> {
            Ok(None)
        }

        async fn save(&self, mapping: Mapping) -> StorageResult<Mapping> {
            Err(StorageError::Conflict(mapping.id.to_string()))
        }

        async fn exists_by_id(&self, _id: &ShortCode) -> StorageResult<bool> {
            Ok(false)
        }

        async fn delete_by_id(&self, _id: &ShortCode) -> StorageResult<bool> {
            Ok(false)
        }

        async fn find_all(&self) -> StorageResult<Vec<Mapping>> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn losing_the_persist_race_is_a_conflict_not_a_storage_error() {
        let config = DigestConfig::default();
        let generator = RandomCodeGenerator::new(config.random_bytes, config.length);
        let service = ShortenerService::new(ContestedRepository, generator, config);

        // Custom path: the lookup missed, the insert lost.
        let err = service
            .shorten("http://a.com", Some("abc"))
            .await
            .unwrap_err();
        assert!(matches!(err, ShortenerError::CodeConflict(_)));

        // Random path: the existence check passed, the insert lost.
        let err = service.shorten("http://a.com", None).await.unwrap_err();
        assert!(matches!(err, ShortenerError::CodeConflict(_)));
    }

    #[tokio::test]
    async fn generation_fails_after_exactly_the_attempt_budget() {
        let config = DigestConfig::builder().max_attempts(7).build();
        let generator = RandomCodeGenerator::new(config.random_bytes, config.length);
        let service = ShortenerService::new(SaturatedRepository::default(), generator, config);

        let err = service
            .shorten("http://example.com", None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ShortenerError::CapacityExhausted { attempts: 7 }
        ));
        assert_eq!(
            service.repository.existence_checks.load(Ordering::SeqCst),
            7
        );
    }
}
