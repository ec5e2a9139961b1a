use serde::Deserialize;

use crate::core::AuthorId;

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SurahPayload {
    pub verses: Vec<RawVerse>,
}

#[derive(Debug, Deserialize)]
pub struct RawVerse {
    pub verse_number: u32,
    pub verse: String,
    #[serde(default)]
    pub translation: Option<RawTranslation>,
}

#[derive(Debug, Deserialize)]
pub struct RawTranslation {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub footnotes: Option<Vec<RawFootnote>>,
}

#[derive(Debug, Deserialize)]
pub struct RawFootnote {
    pub number: u32,
    pub text: String,
}
