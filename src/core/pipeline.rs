use std::{
    collections::{
        BTreeMap,
        HashMap,
    },
    sync::Arc,
};

use crate::{
    api::{
        self,
        RawVerse,
        SurahPayload,
    },
    chapters,
    core::{
        http::Transport,
        AuthorId,
        FetchError,
        Footnote,
        ResolutionError,
        Verse,
        TRANSLATION_UNAVAILABLE,
    },
    translations::AuthorResolver,
};

/// Entry point for the presentation layer: resolves translations to authors
/// and fetches chapters under them. Holds the only session-wide cache, the
/// author directory.
pub struct MealReader {
    transport: Arc<dyn Transport>,
    resolver: AuthorResolver,
}

impl MealReader {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let resolver = AuthorResolver::new(Arc::clone(&transport));
        Self { transport, resolver }
    }

    pub fn resolver(&self) -> &AuthorResolver {
        &self.resolver
    }

    pub async fn resolve_author_id(&self, translation: &str) -> Result<AuthorId, ResolutionError> {
        self.resolver.resolve_author_id(translation).await
    }

    pub async fn fetch_verses(
        &self,
        chapter_id: u32,
        translation: &str,
    ) -> Result<Vec<Verse>, FetchError> {
        let chapter =
            chapters::chapter_by_id(chapter_id).ok_or(FetchError::UnknownChapter(chapter_id))?;

        let author_id = self.resolver.resolve_author_id(translation).await?;
        tracing::debug!(
            "[VerseFetcher] Fetching surah {} for '{}' (author {})",
            chapter_id,
            translation,
            author_id
        );

        let payload = api::get_surah(self.transport.as_ref(), chapter_id, author_id).await?;
        let verses = transform_verses(chapter_id, translation, payload);

        if verses.len() != chapter.verse_count as usize {
            tracing::warn!(
                "[VerseFetcher] Surah {} returned {} verses, expected {}",
                chapter_id,
                verses.len(),
                chapter.verse_count
            );
        }

        Ok(verses)
    }

    /// Fetches `translation` for a chapter that is already on screen and folds
    /// it into `verses`.
    pub async fn add_translation(
        &self,
        verses: Vec<Verse>,
        translation: &str,
    ) -> Result<Vec<Verse>, FetchError> {
        let Some(chapter_id) = verses.first().map(|v| v.chapter_id) else {
            return Ok(verses);
        };
        let fetched = self.fetch_verses(chapter_id, translation).await?;
        Ok(merge_translations(verses, fetched, translation))
    }
}

/// Turns the surah payload into verses, one per source entry and in source order.
pub fn transform_verses(chapter_id: u32, translation: &str, payload: SurahPayload) -> Vec<Verse> {
    let verses: Vec<Verse> = payload
        .verses
        .into_iter()
        .map(|raw| transform_verse(chapter_id, translation, raw))
        .collect();

    if verses.windows(2).any(|pair| pair[0].verse_number >= pair[1].verse_number) {
        tracing::warn!("[VerseFetcher] Surah {} verses are not in ascending order", chapter_id);
    }

    verses
}

fn transform_verse(chapter_id: u32, translation: &str, raw: RawVerse) -> Verse {
    let (text, footnotes) = match raw.translation {
        Some(source) => (
            source.text.filter(|text| !text.is_empty()),
            source.footnotes.unwrap_or_default(),
        ),
        None => (None, Vec::new()),
    };

    let text = text.unwrap_or_else(|| TRANSLATION_UNAVAILABLE.to_string());

    Verse {
        chapter_id,
        verse_number: raw.verse_number,
        arabic_text: raw.verse,
        translated_text: BTreeMap::from([(translation.to_string(), text)]),
        footnotes: footnotes
            .into_iter()
            .map(|note| Footnote { number: note.number, text: note.text })
            .collect(),
        translation: translation.to_string(),
        footnotes_by_translation: HashMap::new(),
    }
}

/// Adds the translations carried by `fetched` to the matching verses of `base`.
/// Verses only present in `fetched` are ignored; `base` keeps its order. A base
/// verse with no counterpart gets the sentinel text under `translation`.
pub fn merge_translations(
    mut base: Vec<Verse>,
    fetched: Vec<Verse>,
    translation: &str,
) -> Vec<Verse> {
    let mut by_number: HashMap<(u32, u32), Verse> =
        fetched.into_iter().map(|v| ((v.chapter_id, v.verse_number), v)).collect();

    let mut unmatched = 0;
    for verse in base.iter_mut() {
        match by_number.remove(&(verse.chapter_id, verse.verse_number)) {
            Some(other) => verse.absorb(other),
            None => {
                verse
                    .translated_text
                    .entry(translation.to_string())
                    .or_insert_with(|| TRANSLATION_UNAVAILABLE.to_string());
                unmatched += 1;
            }
        }
    }

    if unmatched > 0 {
        tracing::warn!(
            "[VerseFetcher] {} verses have no '{}' counterpart",
            unmatched,
            translation
        );
    }
    if !by_number.is_empty() {
        tracing::debug!(
            "[VerseFetcher] {} fetched verses had no counterpart to merge into",
            by_number.len()
        );
    }

    base
}
