use serde::Deserialize;

use crate::core::{
    http::Transport,
    ApiError,
    AuthorId,
};

#[cfg(test)]
pub mod mock;
pub mod types;

pub use types::{
    ApiResponse,
    Author,
    RawFootnote,
    RawTranslation,
    RawVerse,
    SurahPayload,
};

pub const AUTHORS_PATH: &str = "authors";

pub fn surah_path(chapter_id: u32, author_id: AuthorId) -> String {
    format!("surah/{}?author={}", chapter_id, author_id)
}

async fn get_json<T: for<'de> Deserialize<'de>>(
    transport: &dyn Transport,
    path: &str,
) -> Result<T, ApiError> {
    let body = transport.get(path).await?;
    let response: ApiResponse<T> = serde_json::from_str(&body)?;
    Ok(response.data)
}

pub async fn get_authors(transport: &dyn Transport) -> Result<Vec<Author>, ApiError> {
    get_json(transport, AUTHORS_PATH).await
}

pub async fn get_surah(
    transport: &dyn Transport,
    chapter_id: u32,
    author_id: AuthorId,
) -> Result<SurahPayload, ApiError> {
    get_json(transport, &surah_path(chapter_id, author_id)).await
}
