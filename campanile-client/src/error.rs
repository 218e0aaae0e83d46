use thiserror::Error;

/// Errore di fetch lato client: non fatale, l'utente può sempre ritentare
/// (pull-to-refresh). Non deve mai far cadere il livello di rendering.
#[derive(Debug, Error)]
pub enum FetchError {
    /// La richiesta non ha raggiunto il server o la risposta non è leggibile.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Il server ha risposto con uno stato non 2xx; `message` riporta il
    /// motivo dichiarato dal server quando la busta d'errore è leggibile.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}
