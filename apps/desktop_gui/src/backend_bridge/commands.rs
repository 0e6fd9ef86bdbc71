//! Backend commands queued from UI to backend worker.

use client_core::PendingFetch;

#[derive(Debug)]
pub enum BackendCommand {
    /// `FetchStart` has already been dispatched on the UI side.
    Recommend(PendingFetch),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Recommend(_) => "recommend",
        }
    }
}
