//! Signal handling for the utility process

use tokio::sync::mpsc;

/// Signals delivered to the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppSignal {
    /// Clean shutdown requested (Ctrl+C / SIGTERM)
    Shutdown,
}

/// Listens for OS shutdown signals and forwards them as [`AppSignal`]s.
pub struct AppSignalHandler {
    receiver: mpsc::Receiver<AppSignal>,
}

impl AppSignalHandler {
    /// Create the handler and start listening for shutdown signals.
    ///
    /// Also returns a sender so other components can request shutdown
    /// through the same channel.
    pub fn new() -> Result<(Self, mpsc::Sender<AppSignal>), std::io::Error> {
        let (tx, rx) = mpsc::channel(4);

        let tx_int = tx.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = tx_int.send(AppSignal::Shutdown).await;
            }
        });

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let tx_term = tx.clone();
            let mut sigterm = signal(SignalKind::terminate())?;
            tokio::spawn(async move {
                sigterm.recv().await;
                let _ = tx_term.send(AppSignal::Shutdown).await;
            });
        }

        Ok((Self { receiver: rx }, tx))
    }

    /// Wait for the next signal
    pub async fn recv(&mut self) -> Option<AppSignal> {
        self.receiver.recv().await
    }
}
