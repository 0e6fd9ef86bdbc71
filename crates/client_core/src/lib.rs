//! Selection store and recommendation request lifecycle shared by the desktop front-ends.

pub mod config;
pub mod fetcher;
pub mod gemini;
pub mod prompt;
pub mod state;

pub use config::{load_settings, ConfigError, Settings};
pub use fetcher::{FetchOutcome, PendingFetch, RecommendationFetcher};
pub use gemini::{ApiCallError, GeminiClient, GenerativeTextApi, MissingGenerativeTextApi};
pub use state::{available_moods, reduce, Action, Selection, SelectionState, Store};
