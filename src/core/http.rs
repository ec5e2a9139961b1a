use async_trait::async_trait;
use reqwest::{
    header::{
        ACCEPT,
        USER_AGENT,
    },
    Client,
    Response,
};

use crate::core::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://api.acikkuran.com";

/// Issues GET requests against the API and hands back the body of successful
/// responses. Paths are relative to the transport's base URL.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<String, ApiError>;
}

pub fn http_client() -> Result<Client, ApiError> {
    Client::builder()
        .build()
        .map_err(|e| ApiError::Custom(format!("HTTP client build failed: {e}")))
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self::with_client(http_client()?, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self { client, base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<String, ApiError> {
        let url = self.url(path);
        tracing::debug!("[Http] GET {}", url);

        let resp = self
            .client
            .get(&url)
            .header(USER_AGENT, "kuranmeal/0.1 (+reqwest)")
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let resp = ensure_success(resp).await?;
        Ok(resp.text().await?)
    }
}

async fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let url = resp.url().to_string();
    let body = resp.text().await.unwrap_or_else(|_| "Detaylı hata mesajı alınamadı.".to_string());
    tracing::warn!("[Http] {} returned {}", url, status);

    Err(ApiError::Status { status: status.as_u16(), url, body })
}
