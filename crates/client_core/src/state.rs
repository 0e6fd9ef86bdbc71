//! Selection state and the pure transition function driving it.

use shared::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetGenre(String),
    SetMood(String),
    SetLevel(String),
    FetchStart,
    /// `None` when the response carried no text at the expected path.
    FetchSuccess(Option<String>),
    FetchError,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetGenre(_) => "set_genre",
            Action::SetMood(_) => "set_mood",
            Action::SetLevel(_) => "set_level",
            Action::FetchStart => "fetch_start",
            Action::FetchSuccess(_) => "fetch_success",
            Action::FetchError => "fetch_error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub genre: String,
    pub mood: String,
    pub level: String,
    pub responses: Vec<Option<String>>,
    pub loading: bool,
}

/// A complete (genre, mood, level) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub genre: String,
    pub mood: String,
    pub level: String,
}

impl SelectionState {
    pub fn selection(&self) -> Option<Selection> {
        if self.genre.is_empty() || self.mood.is_empty() || self.level.is_empty() {
            return None;
        }
        Some(Selection {
            genre: self.genre.clone(),
            mood: self.mood.clone(),
            level: self.level.clone(),
        })
    }

    /// Advisory guard for UI surfaces; the fetcher itself does not check it.
    pub fn can_fetch(&self) -> bool {
        !self.loading
    }
}

/// Payloads are stored as given; nothing is checked against the catalog.
pub fn reduce(state: SelectionState, action: Action) -> SelectionState {
    match action {
        Action::SetGenre(genre) => SelectionState {
            genre,
            mood: String::new(),
            ..state
        },
        Action::SetMood(mood) => SelectionState { mood, ..state },
        Action::SetLevel(level) => SelectionState { level, ..state },
        Action::FetchStart => SelectionState {
            loading: true,
            ..state
        },
        Action::FetchSuccess(text) => {
            let mut responses = state.responses;
            responses.push(text);
            SelectionState {
                responses,
                loading: false,
                ..state
            }
        }
        Action::FetchError => SelectionState {
            loading: false,
            ..state
        },
    }
}

pub fn available_moods<'a>(catalog: &'a Catalog, genre: &str) -> &'a [String] {
    catalog.moods_for(genre)
}

/// Single owner of a [`SelectionState`].
#[derive(Debug, Default)]
pub struct Store {
    state: SelectionState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        let name = action.name();
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        tracing::debug!(
            action = name,
            loading = self.state.loading,
            responses = self.state.responses.len(),
            "applied transition"
        );
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
