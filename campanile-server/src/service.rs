use campanile_core::{now_timestamp, CreateNotificationRequest, Notification};
use serde_json::Value;
use sqlx::{Row, SqlitePool};
use thiserror::Error;

/// Errori del servizio notifiche.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input mancante o malformato: correggibile dal chiamante (4xx).
    #[error("{0}")]
    Validation(String),
    /// Guasto dello store (5xx): il dettaglio va nei log, mai al client.
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Servizio notifiche: valida gli input, applica i default e opera sullo store.
/// La validazione avviene qui, prima di toccare il database.
pub struct NotificationService {
    pool: SqlitePool,
}

impl NotificationService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Crea una notifica e restituisce il record completo con id e createdAt
    /// assegnati dallo store. Ogni chiamata crea un record nuovo: nessuna
    /// deduplicazione.
    pub async fn create(&self, req: CreateNotificationRequest) -> Result<Notification, ServiceError> {
        // controllo congiunto sui tre campi obbligatori, come un unico 400
        let title = req.title.as_deref().unwrap_or("").trim().to_string();
        let message = req.message.as_deref().unwrap_or("").trim().to_string();
        let user_id = match req.user_id.as_ref() {
            Some(raw) if !title.is_empty() && !message.is_empty() => parse_user_id(raw)?,
            _ => {
                return Err(ServiceError::Validation(
                    "title, message and userId are required".to_string(),
                ))
            }
        };

        // campi immagine: stringa vuota e campo assente diventano entrambi NULL
        let image_url = none_if_blank(req.image_url);
        let image_key = none_if_blank(req.image_key);
        let created_at = now_timestamp();

        let result = sqlx::query(
            "INSERT INTO notifications (title, message, user_id, image_url, image_key, created_at, is_read)
             VALUES (?, ?, ?, ?, ?, ?, 0)",
        )
        .bind(&title)
        .bind(&message)
        .bind(user_id)
        .bind(&image_url)
        .bind(&image_key)
        .bind(&created_at)
        .execute(&self.pool)
        .await?;

        Ok(Notification {
            id: result.last_insert_rowid(),
            title,
            message,
            user_id,
            image_url,
            image_key,
            created_at,
            is_read: false,
        })
    }

    /// Restituisce tutte le notifiche dell'utente, più recenti per prime.
    /// L'ordinamento è una garanzia del servizio, non del chiamante;
    /// l'id fa da spareggio per record creati nello stesso secondo.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Notification>, ServiceError> {
        let rows = sqlx::query(
            "SELECT id, title, message, user_id, image_url, image_key, created_at, is_read
             FROM notifications
             WHERE user_id = ?
             ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(notification_from_row).collect()
    }
}

/// Interpreta lo userId di un path param; "Invalid userId" quando non è un intero.
pub fn parse_user_id_param(raw: &str) -> Result<i64, ServiceError> {
    raw.trim()
        .parse()
        .map_err(|_| ServiceError::Validation("Invalid userId".to_string()))
}

// userId nel body: numero JSON oppure stringa numerica.
fn parse_user_id(value: &Value) -> Result<i64, ServiceError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ServiceError::Validation("userId must be a number".to_string()))
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn notification_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Notification, ServiceError> {
    let is_read: i64 = row.try_get("is_read")?;
    Ok(Notification {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        message: row.try_get("message")?,
        user_id: row.try_get("user_id")?,
        image_url: row.try_get("image_url")?,
        image_key: row.try_get("image_key")?,
        created_at: row.try_get("created_at")?,
        is_read: is_read != 0,
    })
}
