//! Recommendation request lifecycle: presence check, FetchStart, one call, terminal action.
//!
//! There is no in-flight guard here. Callers that must not overlap requests check
//! [`SelectionState::can_fetch`] before starting; direct callers may overlap freely
//! and get no ordering guarantee between completions.

use shared::protocol::GenerateContentRequest;

use crate::{
    gemini::GenerativeTextApi,
    prompt::recommendation_prompt,
    state::{Action, Selection, SelectionState},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Selection was incomplete; nothing was dispatched.
    Skipped,
    Succeeded(Option<String>),
    Failed,
}

/// A request whose `FetchStart` has been (or must be) dispatched but which has not run yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    selection: Selection,
    prompt: String,
}

impl PendingFetch {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Performs the call and yields exactly one of `FetchSuccess` or `FetchError`.
    pub async fn run(self, api: &dyn GenerativeTextApi) -> Action {
        let request = GenerateContentRequest::from_prompt(self.prompt);
        match api.generate_content(&request).await {
            Ok(response) => {
                let text = response.first_text().map(str::to_string);
                if text.is_none() {
                    tracing::warn!(
                        candidates = response.candidate_count(),
                        "recommendation response carried no text"
                    );
                }
                Action::FetchSuccess(text)
            }
            Err(err) => {
                tracing::error!(
                    genre = %self.selection.genre,
                    mood = %self.selection.mood,
                    level = %self.selection.level,
                    "recommendation request failed: {err}"
                );
                Action::FetchError
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationFetcher;

impl RecommendationFetcher {
    /// `None` when genre, mood or level is empty.
    pub fn begin(&self, state: &SelectionState) -> Option<PendingFetch> {
        let selection = state.selection()?;
        let prompt = recommendation_prompt(&selection);
        Some(PendingFetch { selection, prompt })
    }

    pub async fn fetch<D>(
        &self,
        state: &SelectionState,
        api: &dyn GenerativeTextApi,
        mut dispatch: D,
    ) -> FetchOutcome
    where
        D: FnMut(Action),
    {
        let Some(pending) = self.begin(state) else {
            tracing::debug!("selection incomplete; skipping recommendation request");
            return FetchOutcome::Skipped;
        };

        dispatch(Action::FetchStart);
        let action = pending.run(api).await;
        let outcome = match &action {
            Action::FetchSuccess(text) => FetchOutcome::Succeeded(text.clone()),
            _ => FetchOutcome::Failed,
        };
        dispatch(action);
        outcome
    }
}

#[cfg(test)]
#[path = "tests/fetcher_tests.rs"]
mod tests;
