use serde::{Deserialize, Serialize};

/// Notifica persistita dal server ed esposta sul wire al client.
/// Immutabile una volta creata: nessun update o delete nel contratto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Assegnato dallo store alla creazione, unico e monotono crescente.
    pub id: i64,
    pub title: String,
    pub message: String,
    /// Proprietario: ogni notifica appartiene a esattamente un utente.
    pub user_id: i64,
    /// URI assoluto di un'immagine remota; `null` sul wire quando assente.
    pub image_url: Option<String>,
    /// Chiave simbolica verso un'immagine locale del bundle; `null` quando assente.
    pub image_key: Option<String>,
    pub created_at: String, // RFC3339 UTC
    /// Stato di lettura: puro stato di visualizzazione lato client,
    /// il server lo crea sempre a false e non lo aggiorna mai.
    #[serde(default)]
    pub is_read: bool,
}
