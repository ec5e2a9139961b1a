//! The meals the reader offers, in menu order, and how each one is named by the API.

use crate::core::Translation;

pub mod resolver;

pub use resolver::{
    AuthorDirectory,
    AuthorResolver,
};

pub const DEFAULT_TRANSLATION: &str = "Diyanet İşleri";

/// Accent for anything without a registered colour.
pub const PRIMARY_COLOR: &str = "#9E7FFF";

static TRANSLATIONS: [Translation; 11] = [
    Translation {
        display_name: "Diyanet İşleri",
        api_author_name: "Diyanet İşleri",
        accent_color: PRIMARY_COLOR,
    },
    Translation {
        display_name: "Süleyman Ateş",
        api_author_name: "Süleyman Ateş",
        accent_color: "#38bdf8",
    },
    Translation {
        display_name: "Elmalılı Hamdi Yazır",
        api_author_name: "Elmalılı Hamdi Yazır",
        accent_color: "#f472b6",
    },
    Translation {
        display_name: "Bayraktar Bayraklı",
        api_author_name: "Bayraktar Bayraklı",
        accent_color: "#10b981",
    },
    Translation {
        display_name: "Elmalılı (sadeleştirilmiş)",
        api_author_name: "Elmalılı (sadeleştirilmiş)",
        accent_color: "#0ea5e9",
    },
    Translation {
        display_name: "Mehmet Okuyan",
        api_author_name: "Mehmet Okuyan",
        accent_color: "#f59e0b",
    },
    Translation {
        display_name: "Mustafa İslamoğlu",
        api_author_name: "Mustafa İslamoğlu",
        accent_color: "#a855f7",
    },
    Translation {
        display_name: "Muhammed Esed",
        api_author_name: "Muhammed Esed",
        accent_color: "#059669",
    },
    Translation {
        display_name: "Süleymaniye Vakfı",
        api_author_name: "Süleymaniye Vakfı",
        accent_color: "#e11d48",
    },
    Translation {
        display_name: "İbni Kesir",
        api_author_name: "İbni Kesir",
        accent_color: "#fbbf24",
    },
    Translation {
        display_name: "Gültekin Onan",
        api_author_name: "Gültekin Onan",
        accent_color: "#84cc16",
    },
];

pub fn translations() -> &'static [Translation] {
    &TRANSLATIONS
}

pub fn translation(display_name: &str) -> Option<&'static Translation> {
    TRANSLATIONS.iter().find(|t| t.display_name == display_name)
}

pub fn accent_color(display_name: &str) -> &'static str {
    translation(display_name).map(|t| t.accent_color).unwrap_or(PRIMARY_COLOR)
}
