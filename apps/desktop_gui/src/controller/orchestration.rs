//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext};

/// Queues a submission for the backend worker. Queue problems only touch the
/// status line; the view fields are left alone.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = UiError::from_message(
                UiErrorContext::Dispatch,
                "UI command queue is full; please retry",
            )
            .status_line();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = UiError::from_message(
                UiErrorContext::Dispatch,
                "backend command processor disconnected; restart the app",
            )
            .status_line();
        }
    }
}

#[cfg(test)]
mod tests {
    use client_core::Submission;
    use crossbeam_channel::bounded;

    use super::*;

    fn claim(id: &str) -> BackendCommand {
        BackendCommand::Submit(Submission::Claim {
            digital_world_id: id.to_string(),
        })
    }

    #[test]
    fn queued_command_leaves_status_untouched() {
        let (tx, rx) = bounded(4);
        let mut status = String::new();

        dispatch_backend_command(&tx, claim("3"), &mut status);

        assert!(status.is_empty());
        assert_eq!(rx.try_recv().expect("queued"), claim("3"));
    }

    #[test]
    fn full_queue_reports_retry() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();

        dispatch_backend_command(&tx, claim("1"), &mut status);
        dispatch_backend_command(&tx, claim("2"), &mut status);

        assert!(status.contains("queue is full"), "status: {status}");
    }

    #[test]
    fn disconnected_worker_is_reported() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();

        dispatch_backend_command(&tx, claim("1"), &mut status);

        assert!(status.contains("disconnected"), "status: {status}");
    }
}
