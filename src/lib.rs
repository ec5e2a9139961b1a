pub mod api;
pub mod chapters;
pub mod core;
pub mod parser;
pub mod persistence;
pub mod settings;
pub mod translations;

pub use crate::core::{
    FetchError,
    MealReader,
    ResolutionError,
    Verse,
};
pub use parser::{
    split_references,
    Segment,
};
