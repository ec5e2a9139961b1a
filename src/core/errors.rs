use std::sync::Arc;

use thiserror::Error;

/// Failure of a single request against the remote API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error {status} from {url}: {body}")]
    Status { status: u16, url: String, body: String },

    #[error("Network error: {0}")]
    Network(Box<reqwest::Error>),

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("ApiError: {0}")]
    Custom(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Network(Box::new(error))
    }
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ResolutionError {
    #[error("Unknown translation: {0}")]
    UnknownTranslation(String),

    #[error("Author directory unavailable: {0}")]
    DirectoryUnavailable(#[source] Arc<ApiError>),

    #[error("No author named '{author_name}' in the directory (translation '{translation}')")]
    AuthorNotFound { translation: String, author_name: String },
}

impl ResolutionError {
    pub fn is_transient(&self) -> bool {
        matches!(self, ResolutionError::DirectoryUnavailable(_))
    }

    pub fn user_message(&self) -> String {
        match self {
            ResolutionError::UnknownTranslation(name) => format!("'{}' adlı bir meal yok.", name),
            ResolutionError::DirectoryUnavailable(_) => {
                "Mealleri yüklerken bir sorun oluştu. Lütfen internet bağlantınızı kontrol edin."
                    .to_string()
            }
            ResolutionError::AuthorNotFound { translation, .. } => {
                format!("'{}' meali için API yazar ID'si bulunamadı.", translation)
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Unknown chapter: {0}")]
    UnknownChapter(u32),

    #[error("Author resolution failed: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("Remote error: {0}")]
    Remote(#[source] ApiError),

    #[error("Malformed verse payload: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

impl FetchError {
    /// True when retrying the same request unchanged may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Resolution(inner) => inner.is_transient(),
            FetchError::Remote(_) => true,
            FetchError::UnknownChapter(_) | FetchError::MalformedResponse(_) => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            FetchError::UnknownChapter(_) => "Sure bulunamadı.".to_string(),
            FetchError::Resolution(inner) => inner.user_message(),
            FetchError::Remote(ApiError::Network(_)) => {
                "İnternet bağlantınızı kontrol edin veya API'ye ulaşılamıyor olabilir.".to_string()
            }
            FetchError::Remote(err) => match err.status() {
                Some(status) => format!("API hatası: {}. Lütfen tekrar deneyin.", status),
                None => "Ayetler yüklenirken bir sorun oluştu. Lütfen tekrar deneyin.".to_string(),
            },
            FetchError::MalformedResponse(_) => {
                "API'den gelen veri okunamadı. Lütfen daha sonra tekrar deneyin.".to_string()
            }
        }
    }
}

impl From<ApiError> for FetchError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Decode(inner) => FetchError::MalformedResponse(inner),
            other => FetchError::Remote(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16) -> ApiError {
        ApiError::Status { status, url: "/authors".to_string(), body: String::new() }
    }

    #[test]
    fn test_transient_classification() {
        assert!(FetchError::Remote(status_error(503)).is_transient());
        assert!(FetchError::from(ResolutionError::DirectoryUnavailable(Arc::new(status_error(
            500
        ))))
        .is_transient());

        assert!(!FetchError::UnknownChapter(115).is_transient());
        assert!(!FetchError::from(ResolutionError::UnknownTranslation("x".to_string()))
            .is_transient());
        assert!(!FetchError::from(ResolutionError::AuthorNotFound {
            translation: "Gültekin Onan".to_string(),
            author_name: "Gültekin Onan".to_string(),
        })
        .is_transient());
    }

    #[test]
    fn test_decode_error_becomes_malformed_response() {
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FetchError = ApiError::Decode(decode).into();
        assert!(matches!(err, FetchError::MalformedResponse(_)));

        let err: FetchError = status_error(404).into();
        assert!(matches!(err, FetchError::Remote(ApiError::Status { status: 404, .. })));
    }

    #[test]
    fn test_user_messages_are_distinct_per_kind() {
        let messages = [
            FetchError::UnknownChapter(0).user_message(),
            FetchError::Remote(status_error(500)).user_message(),
            FetchError::from(ResolutionError::UnknownTranslation("x".to_string())).user_message(),
            FetchError::from(ResolutionError::DirectoryUnavailable(Arc::new(status_error(500))))
                .user_message(),
            FetchError::from(ResolutionError::AuthorNotFound {
                translation: "x".to_string(),
                author_name: "x".to_string(),
            })
            .user_message(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
