use campanile_core::{resolve_image, ImageSource, Notification};
use std::collections::HashSet;

use crate::api::ApiClient;
use crate::error::FetchError;

/// Stato di caricamento della schermata notifiche.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    /// Messaggio leggibile per l'utente; i dati dell'ultimo fetch riuscito
    /// restano visibili (vedi `NotificationsScreen::apply`). `retryable`
    /// dice alla UI se offrire il pull-to-refresh.
    Error { message: String, retryable: bool },
}

/// Parametri di navigazione verso la vista di dettaglio.
/// imageUrl e imageKey viaggiano come campi distinti, ciascuno col suo nome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailParams {
    pub title: String,
    pub message: String,
    pub created_at: String,
    pub image_url: Option<String>,
    pub image_key: Option<String>,
}

impl DetailParams {
    pub fn from_notification(n: &Notification) -> Self {
        Self {
            title: n.title.clone(),
            message: n.message.clone(),
            created_at: n.created_at.clone(),
            image_url: n.image_url.clone(),
            image_key: n.image_key.clone(),
        }
    }

    /// Immagine da mostrare nel dettaglio: remota se presente, altrimenti
    /// l'asset locale mappato dalla chiave, altrimenti la riserva.
    pub fn image(&self) -> ImageSource {
        resolve_image(self.image_url.as_deref(), self.image_key.as_deref())
    }
}

/// Stato per-schermata della lista notifiche: caricamento, elementi,
/// flag di lettura locali. Lo stato di lettura è puramente visuale e non
/// viene mai sincronizzato col server.
pub struct NotificationsScreen {
    state: LoadState,
    items: Vec<Notification>,
    read_ids: HashSet<i64>,
}

impl NotificationsScreen {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            items: Vec::new(),
            read_ids: HashSet::new(),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Elementi correnti, nell'ordine del livello di fetch (più recenti prime).
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Caricata ma senza notifiche: la UI mostra "No notifications yet".
    pub fn is_empty(&self) -> bool {
        self.state == LoadState::Loaded && self.items.is_empty()
    }

    /// La notifica più recente della sessione, da mostrare nel banner.
    pub fn latest(&self) -> Option<&Notification> {
        self.items.first()
    }

    /// Esegue il fetch e applica il risultato. Chiamate concorrenti non
    /// vengono deduplicate: l'ultima risposta risolta vince sullo stato.
    pub async fn refresh(&mut self, api: &ApiClient, user_id: i64) {
        let result = api.fetch_notifications(user_id).await;
        self.apply(result);
    }

    /// Applica l'esito di un fetch. In caso di errore lo stato passa a
    /// Error ma gli elementi dell'ultimo fetch riuscito restano: scelta
    /// esplicita, il refresh fallito non svuota la schermata.
    pub fn apply(&mut self, result: Result<Vec<Notification>, FetchError>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::warn!(error = %e, "refresh failed");
                // ogni errore di fetch è ritentabile dall'utente
                self.state = LoadState::Error { message: e.to_string(), retryable: true };
            }
        }
    }

    /// Una notifica è "letta" se lo era già sul record o se l'utente l'ha
    /// aperta in questa sessione.
    pub fn is_read(&self, id: i64) -> bool {
        self.read_ids.contains(&id)
            || self.items.iter().any(|n| n.id == id && n.is_read)
    }

    /// Segna come letta, solo localmente: nessuna mutazione lato server.
    pub fn mark_read(&mut self, id: i64) {
        self.read_ids.insert(id);
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !self.is_read(n.id)).count()
    }

    /// Tap su un elemento: lo segna come letto e produce i parametri di
    /// navigazione verso il dettaglio. None se l'id non è in lista.
    pub fn open_detail(&mut self, id: i64) -> Option<DetailParams> {
        let params = self
            .items
            .iter()
            .find(|n| n.id == id)
            .map(DetailParams::from_notification)?;
        self.mark_read(id);
        Some(params)
    }
}

impl Default for NotificationsScreen {
    fn default() -> Self {
        Self::new()
    }
}
