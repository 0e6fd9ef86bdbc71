//! Static option data for the selection fields: genres, genre-scoped moods and reading levels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_GENRES: &str = include_str!("../data/genres.json");
const BUILTIN_MOODS: &str = include_str!("../data/moods.json");

pub const LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Expert"];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed genre list: {0}")]
    Genres(#[source] serde_json::Error),
    #[error("malformed mood mapping: {0}")]
    Moods(#[source] serde_json::Error),
    #[error("mood mapping references unknown genre '{0}'")]
    UnknownGenre(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub genres: Vec<String>,
    pub moods: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_GENRES, BUILTIN_MOODS)
    }

    /// Parses a genre list (`["Fantasy", ...]`) and a genre -> moods object.
    pub fn from_json(genres_json: &str, moods_json: &str) -> Result<Self, CatalogError> {
        let genres: Vec<String> =
            serde_json::from_str(genres_json).map_err(CatalogError::Genres)?;
        let moods: BTreeMap<String, Vec<String>> =
            serde_json::from_str(moods_json).map_err(CatalogError::Moods)?;

        if let Some(orphan) = moods.keys().find(|genre| !genres.contains(genre)) {
            return Err(CatalogError::UnknownGenre(orphan.clone()));
        }

        Ok(Self { genres, moods })
    }

    pub fn levels(&self) -> &'static [&'static str] {
        &LEVELS
    }

    /// Moods valid for `genre`; empty when the genre is unselected or unknown.
    pub fn moods_for(&self, genre: &str) -> &[String] {
        self.moods.get(genre).map(Vec::as_slice).unwrap_or(&[])
    }
}
