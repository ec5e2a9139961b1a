pub mod errors;
pub mod generation;
pub mod http;
pub mod models;
pub mod pipeline;

pub use errors::{
    ApiError,
    FetchError,
    ResolutionError,
};
pub use generation::{
    FetchGeneration,
    FetchTicket,
};
pub use models::{
    AuthorId,
    Chapter,
    Footnote,
    RevelationPlace,
    Translation,
    Verse,
    TRANSLATION_UNAVAILABLE,
};
pub use pipeline::MealReader;
