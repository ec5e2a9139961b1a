use std::collections::{
    BTreeMap,
    HashMap,
};

use serde::{
    Deserialize,
    Serialize,
};

/// Shown in place of a verse's translation when the API returned none for it.
pub const TRANSLATION_UNAVAILABLE: &str = "Çeviri bulunamadı.";

pub type AuthorId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevelationPlace {
    Mecca,
    Medina,
}

impl RevelationPlace {
    pub fn display_name(&self) -> &'static str {
        match self {
            RevelationPlace::Mecca => "Mekke",
            RevelationPlace::Medina => "Medine",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: u32,
    pub name: &'static str,
    pub arabic_name: &'static str,
    pub verse_count: u32,
    pub revelation_place: RevelationPlace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub display_name: &'static str,
    pub api_author_name: &'static str,
    pub accent_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footnote {
    pub number: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verse {
    pub chapter_id: u32,
    pub verse_number: u32,
    pub arabic_text: String,
    pub translated_text: BTreeMap<String, String>,
    /// Footnotes of the translation this verse was fetched under.
    pub footnotes: Vec<Footnote>,
    pub translation: String,
    /// Footnotes of translations merged in after the first fetch.
    pub footnotes_by_translation: HashMap<String, Vec<Footnote>>,
}

impl Verse {
    pub fn text(&self, translation: &str) -> Option<&str> {
        self.translated_text.get(translation).map(String::as_str)
    }

    pub fn footnotes_for(&self, translation: &str) -> &[Footnote] {
        if translation == self.translation {
            return &self.footnotes;
        }
        self.footnotes_by_translation.get(translation).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn footnote(&self, number: u32) -> Option<&Footnote> {
        self.footnotes.iter().find(|f| f.number == number)
    }

    pub fn footnote_for(&self, translation: &str, number: u32) -> Option<&Footnote> {
        self.footnotes_for(translation).iter().find(|f| f.number == number)
    }

    /// Copies every translation carried by `other` into this verse. Entries for a
    /// translation already present are overwritten.
    pub fn absorb(&mut self, other: Verse) {
        let Verse { translated_text, footnotes, translation, footnotes_by_translation, .. } = other;

        for (name, text) in translated_text {
            self.translated_text.insert(name, text);
        }

        if translation == self.translation {
            self.footnotes = footnotes;
        } else {
            self.footnotes_by_translation.insert(translation, footnotes);
        }

        for (name, notes) in footnotes_by_translation {
            if name == self.translation {
                self.footnotes = notes;
            } else {
                self.footnotes_by_translation.insert(name, notes);
            }
        }
    }
}
