use std::{
    collections::HashMap,
    sync::{
        Arc,
        Mutex,
        PoisonError,
    },
};

use futures::{
    future::{
        BoxFuture,
        Shared,
    },
    FutureExt,
};

use crate::{
    api::{
        self,
        Author,
    },
    core::{
        http::Transport,
        ApiError,
        AuthorId,
        ResolutionError,
    },
    translations,
};

/// API author name to author id, as served by the authors endpoint.
#[derive(Debug, Default, Clone)]
pub struct AuthorDirectory {
    ids: HashMap<String, AuthorId>,
}

impl AuthorDirectory {
    pub fn from_authors(authors: Vec<Author>) -> Self {
        Self { ids: authors.into_iter().map(|author| (author.name, author.id)).collect() }
    }

    pub fn get(&self, api_author_name: &str) -> Option<AuthorId> {
        self.ids.get(api_author_name).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

type DirectoryResult = Result<Arc<AuthorDirectory>, Arc<ApiError>>;
type PendingDirectory = Shared<BoxFuture<'static, DirectoryResult>>;

/// Maps translation display names to API author ids.
///
/// The author list is fetched lazily on first use and kept until
/// [`AuthorResolver::invalidate`]. Callers arriving while the fetch is in
/// flight wait on that same fetch, and a failed fetch stays failed until the
/// resolver is invalidated.
pub struct AuthorResolver {
    transport: Arc<dyn Transport>,
    pending: Mutex<Option<PendingDirectory>>,
}

impl AuthorResolver {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport, pending: Mutex::new(None) }
    }

    pub async fn directory(&self) -> Result<Arc<AuthorDirectory>, ResolutionError> {
        let pending = {
            let mut slot = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            slot.get_or_insert_with(|| self.start_fetch()).clone()
        };

        pending.await.map_err(ResolutionError::DirectoryUnavailable)
    }

    pub async fn resolve_author_id(&self, display_name: &str) -> Result<AuthorId, ResolutionError> {
        let directory = self.directory().await?;

        let translation = translations::translation(display_name)
            .ok_or_else(|| ResolutionError::UnknownTranslation(display_name.to_string()))?;

        directory.get(translation.api_author_name).ok_or_else(|| {
            tracing::warn!(
                "[AuthorResolver] '{}' not in author list ({} authors)",
                translation.api_author_name,
                directory.len()
            );
            ResolutionError::AuthorNotFound {
                translation: display_name.to_string(),
                author_name: translation.api_author_name.to_string(),
            }
        })
    }

    /// Drops the cached directory (or cached failure); the next call fetches again.
    pub fn invalidate(&self) {
        let mut slot = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.take().is_some() {
            tracing::debug!("[AuthorResolver] Directory invalidated");
        }
    }

    pub fn is_loaded(&self) -> bool {
        let slot = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        matches!(slot.as_ref().and_then(|pending| pending.peek()), Some(Ok(_)))
    }

    fn start_fetch(&self) -> PendingDirectory {
        let transport = Arc::clone(&self.transport);

        async move {
            tracing::debug!("[AuthorResolver] Fetching author list");
            match api::get_authors(transport.as_ref()).await {
                Ok(authors) => {
                    let directory = AuthorDirectory::from_authors(authors);
                    tracing::info!(
                        "[AuthorResolver] Author directory built: {} authors",
                        directory.len()
                    );
                    Ok(Arc::new(directory))
                }
                Err(e) => {
                    tracing::warn!("[AuthorResolver] Failed to fetch author list: {}", e);
                    Err(Arc::new(e))
                }
            }
        }
        .boxed()
        .shared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{
        mock::MockTransport,
        AUTHORS_PATH,
    };

    const AUTHORS: &str = r#"{"data":[
        {"id":7,"name":"Diyanet İşleri"},
        {"id":11,"name":"Mehmet Okuyan"},
        {"id":3,"name":"Süleyman Ateş"}
    ]}"#;

    fn resolver(transport: &Arc<MockTransport>) -> AuthorResolver {
        AuthorResolver::new(transport.clone())
    }

    #[tokio::test]
    async fn test_warm_directory_returns_same_id() {
        let transport = Arc::new(MockTransport::new().with_body(AUTHORS_PATH, AUTHORS));
        let resolver = resolver(&transport);

        assert!(!resolver.is_loaded());
        let first = resolver.resolve_author_id("Diyanet İşleri").await.unwrap();
        let second = resolver.resolve_author_id("Diyanet İşleri").await.unwrap();

        assert_eq!(first, 7);
        assert_eq!(first, second);
        assert!(resolver.is_loaded());
        assert_eq!(transport.request_count(AUTHORS_PATH), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_calls_share_one_fetch() {
        let transport =
            Arc::new(MockTransport::new().with_body(AUTHORS_PATH, AUTHORS).with_yields(5));
        let resolver = resolver(&transport);

        let (diyanet, okuyan) = tokio::join!(
            resolver.resolve_author_id("Diyanet İşleri"),
            resolver.resolve_author_id("Mehmet Okuyan"),
        );

        assert_eq!(diyanet.unwrap(), 7);
        assert_eq!(okuyan.unwrap(), 11);
        assert_eq!(transport.request_count(AUTHORS_PATH), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_calls_share_one_fetch_across_tasks() {
        let transport =
            Arc::new(MockTransport::new().with_body(AUTHORS_PATH, AUTHORS).with_yields(5));
        let resolver = Arc::new(resolver(&transport));

        let handles: Vec<_> = ["Diyanet İşleri", "Süleyman Ateş", "Mehmet Okuyan"]
            .into_iter()
            .map(|name| {
                let resolver = resolver.clone();
                tokio::spawn(async move { resolver.resolve_author_id(name).await })
            })
            .collect();

        let ids: Vec<AuthorId> = futures::future::join_all(handles)
            .await
            .into_iter()
            .map(|joined| joined.unwrap().unwrap())
            .collect();

        assert_eq!(ids, vec![7, 3, 11]);
        assert_eq!(transport.request_count(AUTHORS_PATH), 1);
    }

    #[tokio::test]
    async fn test_missing_author_is_author_not_found() {
        let transport = Arc::new(MockTransport::new().with_body(AUTHORS_PATH, AUTHORS));
        let resolver = resolver(&transport);

        let err = resolver.resolve_author_id("Gültekin Onan").await.unwrap_err();
        match err {
            ResolutionError::AuthorNotFound { translation, author_name } => {
                assert_eq!(translation, "Gültekin Onan");
                assert_eq!(author_name, "Gültekin Onan");
            }
            other => panic!("Expected AuthorNotFound, got {:?}", other),
        }
        assert!(resolver.is_loaded());
    }

    #[tokio::test]
    async fn test_unknown_translation() {
        let transport = Arc::new(MockTransport::new().with_body(AUTHORS_PATH, AUTHORS));
        let resolver = resolver(&transport);

        let err = resolver.resolve_author_id("Süleyman Ateş Meal").await.unwrap_err();
        assert!(matches!(err, ResolutionError::UnknownTranslation(name) if name == "Süleyman Ateş Meal"));
    }

    #[tokio::test]
    async fn test_failed_fetch_is_directory_unavailable_until_invalidated() {
        let transport = Arc::new(MockTransport::new().with_status(AUTHORS_PATH, 503));
        let resolver = resolver(&transport);

        let err = resolver.resolve_author_id("Diyanet İşleri").await.unwrap_err();
        match &err {
            ResolutionError::DirectoryUnavailable(cause) => assert_eq!(cause.status(), Some(503)),
            other => panic!("Expected DirectoryUnavailable, got {:?}", other),
        }

        let again = resolver.resolve_author_id("Mehmet Okuyan").await.unwrap_err();
        assert!(matches!(again, ResolutionError::DirectoryUnavailable(_)));
        assert_eq!(transport.request_count(AUTHORS_PATH), 1);
        assert!(!resolver.is_loaded());

        resolver.invalidate();
        let _ = resolver.resolve_author_id("Diyanet İşleri").await;
        assert_eq!(transport.request_count(AUTHORS_PATH), 2);
    }

    #[tokio::test]
    async fn test_malformed_author_list_is_directory_unavailable() {
        let transport =
            Arc::new(MockTransport::new().with_body(AUTHORS_PATH, r#"{"data":{"authors":[]}}"#));
        let resolver = resolver(&transport);

        let err = resolver.resolve_author_id("Diyanet İşleri").await.unwrap_err();
        match err {
            ResolutionError::DirectoryUnavailable(cause) => {
                assert!(matches!(cause.as_ref(), ApiError::Decode(_)))
            }
            other => panic!("Expected DirectoryUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_last_duplicate_wins() {
        let directory = AuthorDirectory::from_authors(vec![
            Author { id: 1, name: "İbni Kesir".to_string(), language: None },
            Author { id: 2, name: "İbni Kesir".to_string(), language: None },
        ]);
        assert_eq!(directory.get("İbni Kesir"), Some(2));
        assert_eq!(directory.len(), 1);
        assert!(directory.get("Muhammed Esed").is_none());
    }
}
