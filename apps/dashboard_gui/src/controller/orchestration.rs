//! Hands UI actions to the backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Returns the command back when it could not be queued so the caller can
/// settle the view it was meant for.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> Option<BackendCommand> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            None
        }
        Err(TrySendError::Full(cmd)) => {
            *status = "Fila de comandos cheia; tente novamente".to_string();
            tracing::warn!(command = cmd_name, "ui->backend queue full");
            Some(cmd)
        }
        Err(TrySendError::Disconnected(cmd)) => {
            *status = "Processo de busca encerrado; reinicie o aplicativo".to_string();
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            Some(cmd)
        }
    }
}

#[cfg(test)]
mod tests {
    use client_core::Loader;
    use crossbeam_channel::bounded;

    use super::*;

    fn command() -> BackendCommand {
        let mut loader = Loader::<()>::new();
        BackendCommand::FetchOrders {
            ticket: loader.begin(),
        }
    }

    #[test]
    fn queued_command_leaves_status_alone() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();

        assert_eq!(dispatch_backend_command(&tx, command(), &mut status), None);
        assert!(status.is_empty());
        assert_eq!(rx.try_recv().ok(), Some(command()));
    }

    #[test]
    fn full_queue_hands_the_command_back() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();
        dispatch_backend_command(&tx, command(), &mut status);

        let returned = dispatch_backend_command(&tx, command(), &mut status);
        assert_eq!(returned, Some(command()));
        assert!(status.contains("cheia"));
    }

    #[test]
    fn disconnected_worker_is_reported() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();

        assert!(dispatch_backend_command(&tx, command(), &mut status).is_some());
        assert!(status.contains("encerrado"));
    }
}
