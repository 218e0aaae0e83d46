use campanile_core::Notification;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::screen::DetailParams;

/// Durata del banner prima della chiusura automatica.
pub const BANNER_AUTO_DISMISS: Duration = Duration::from_millis(4000);

/// Banner transiente che mostra la notifica più recente della sessione.
/// Puro stato UI locale: non persiste nulla ed è indipendente dal flag
/// di lettura.
pub struct Banner {
    notification: Notification,
    dismiss_tx: Option<oneshot::Sender<()>>,
    timer: JoinHandle<()>,
}

impl Banner {
    /// Mostra il banner e pianifica la chiusura automatica dopo 4 secondi.
    /// `on_close` scatta esattamente una volta, alla chiusura automatica o a
    /// quella manuale; mai dopo il drop del banner (smontaggio della
    /// schermata), perché il drop abortisce il timer.
    pub fn show<F>(notification: Notification, on_close: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (dismiss_tx, dismiss_rx) = oneshot::channel::<()>();
        let timer = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(BANNER_AUTO_DISMISS) => {}
                _ = dismiss_rx => {}
            }
            on_close();
        });
        Self {
            notification,
            dismiss_tx: Some(dismiss_tx),
            timer,
        }
    }

    pub fn title(&self) -> &str {
        &self.notification.title
    }

    pub fn message(&self) -> &str {
        &self.notification.message
    }

    /// Tap sul banner: parametri per navigare al dettaglio della notifica.
    pub fn press(&self) -> DetailParams {
        DetailParams::from_notification(&self.notification)
    }

    /// Chiusura manuale: annulla l'attesa residua e fa scattare subito
    /// `on_close`. Chiamate ripetute non hanno effetto.
    pub fn dismiss(&mut self) {
        if let Some(tx) = self.dismiss_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for Banner {
    fn drop(&mut self) {
        // smontaggio: il timer viene abortito, on_close non deve più scattare
        self.timer.abort();
    }
}
