//! Folds backend events into the selection store and the status line.

use client_core::Store;

use crate::controller::events::UiEvent;

pub fn apply_ui_event(store: &mut Store, status: &mut String, event: UiEvent) {
    match event {
        UiEvent::Info(message) => {
            *status = message;
        }
        UiEvent::Error(err) => {
            tracing::warn!(context = ?err.context(), "{}", err.message());
            *status = err.status_line();
        }
        // Fetch failures are only logged; the re-enabled button is the sole visible effect.
        UiEvent::Transition(action) => store.dispatch(action),
    }
}
