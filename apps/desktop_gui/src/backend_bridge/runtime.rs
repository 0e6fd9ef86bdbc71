//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::GenerativeTextApi;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the backend worker thread. Commands run one at a time in arrival order.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    api: Arc<dyn GenerativeTextApi>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                let event = handle_command(cmd, api.as_ref()).await;
                if ui_tx.send(event).is_err() {
                    tracing::debug!("ui event receiver dropped; stopping backend worker");
                    break;
                }
            }
        });
        tracing::debug!("backend worker stopped");
    })
}

pub async fn handle_command(cmd: BackendCommand, api: &dyn GenerativeTextApi) -> UiEvent {
    match cmd {
        BackendCommand::Recommend(pending) => UiEvent::Transition(pending.run(api).await),
    }
}
