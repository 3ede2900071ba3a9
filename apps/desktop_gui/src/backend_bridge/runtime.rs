//! Runtime bridge between UI command queue and backend event intake.

use std::thread::{self, JoinHandle};

use client_core::{ActorHandle, CallOrchestrator};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub const WORKER_READY: &str = "Backend worker ready";

/// Starts the backend worker thread. Every command becomes its own task, so
/// completions reach the UI in whatever order the calls resolve.
///
/// `startup_error` is reported right after the ready notice so it stays on
/// the status line.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    orchestrator: CallOrchestrator<dyn ActorHandle>,
    startup_error: Option<UiError>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("failed to build backend runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let _ = ui_tx.try_send(UiEvent::Info(WORKER_READY.to_string()));
        if let Some(err) = startup_error {
            let _ = ui_tx.try_send(UiEvent::Error(err));
        }
        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                let orchestrator = orchestrator.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let cmd_name = cmd.name();
                    let BackendCommand::Submit(submission) = cmd;
                    match orchestrator.run(submission).await {
                        Ok(update) => {
                            deliver(ui_tx, cmd_name, UiEvent::ViewUpdated(update)).await;
                        }
                        Err(err) => tracing::error!(
                            command = cmd_name,
                            "unhandled greeting failure: {err}"
                        ),
                    }
                });
            }
            tracing::debug!("ui command queue closed; backend worker stopping");
        });
    })
}

/// View updates carry call results, so they wait for room in the UI queue
/// rather than being dropped when it is full.
async fn deliver(ui_tx: Sender<UiEvent>, cmd_name: &'static str, event: UiEvent) {
    match tokio::task::spawn_blocking(move || ui_tx.send(event)).await {
        Ok(Ok(())) => tracing::debug!(command = cmd_name, "delivered backend->ui event"),
        Ok(Err(_)) => {
            tracing::debug!(command = cmd_name, "ui closed before update arrived");
        }
        Err(err) => {
            tracing::error!(command = cmd_name, "ui delivery task failed: {err}");
        }
    }
}
