//! Command orchestration helpers from UI actions to backend command queue.

use client_core::{Action, RecommendationFetcher, Store};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext};

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            *status = UiError::from_message(
                UiErrorContext::CommandQueue,
                "UI command queue is full; please retry",
            )
            .status_line();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            *status = UiError::from_message(
                UiErrorContext::CommandQueue,
                "Backend command processor disconnected (possible startup/runtime failure)",
            )
            .status_line();
            false
        }
    }
}

/// Handles a press of the recommendation button.
///
/// Does nothing while a request is loading or when the selection is incomplete.
/// Otherwise dispatches `FetchStart` and queues the request; if the queue rejects
/// it, `FetchError` is dispatched so the button becomes usable again.
pub fn request_recommendation(
    store: &mut Store,
    fetcher: &RecommendationFetcher,
    cmd_tx: &Sender<BackendCommand>,
    status: &mut String,
) {
    if !store.state().can_fetch() {
        return;
    }
    let Some(pending) = fetcher.begin(store.state()) else {
        return;
    };

    store.dispatch(Action::FetchStart);
    if !dispatch_backend_command(cmd_tx, BackendCommand::Recommend(pending), status) {
        store.dispatch(Action::FetchError);
    }
}
