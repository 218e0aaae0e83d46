use campanile_core::{ErrorBody, ListNotificationsResponse, Notification};

use crate::error::FetchError;

/// Configurazione esplicita del client API, iniettata alla costruzione.
/// Nessun lookup globale o condizionato alla piattaforma: chi costruisce
/// il client decide l'host (emulatore, dispositivo fisico, localhost).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Client della Delivery API.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// Recupera le notifiche di un utente, più recenti per prime.
    ///
    /// Il server garantisce già l'ordinamento, ma il contratto del client non
    /// si fida dell'ordine arrivato sul wire: il riordino locale è voluto e
    /// va mantenuto. L'unica sospensione è la chiamata di rete; nessun
    /// timeout o token di cancellazione viene propagato.
    pub async fn fetch_notifications(&self, user_id: i64) -> Result<Vec<Notification>, FetchError> {
        let url = format!("{}/api/notifications/user/{}", self.base_url(), user_id);
        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            // prova a leggere il motivo dichiarato dal server
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => format!("request failed with status {}", status.as_u16()),
            };
            return Err(FetchError::Status { status: status.as_u16(), message });
        }

        let body: ListNotificationsResponse = resp.json().await?;
        let mut notifications = body.notifications;
        sort_most_recent_first(&mut notifications);
        Ok(notifications)
    }
}

/// Riordina per createdAt discendente. Le stringhe sono RFC3339 UTC troncate
/// al secondo, a larghezza fissa: il confronto lessicografico coincide con
/// quello cronologico. L'id fa da spareggio per timestamp identici.
pub fn sort_most_recent_first(notifications: &mut [Notification]) {
    notifications.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}
