use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Notification;
/*
    DTO per le richieste/risposte HTTP della Delivery API.
*/
// Submit notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    /* title/message/userId sono Option così che un campo mancante diventi
    un errore di validazione 400 con messaggio, non un rifiuto del parser JSON */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// userId arriva come numero JSON oppure come stringa numerica (es. "7"):
    /// il pannello admin invia entrambe le forme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationResponse {
    pub success: bool,
    pub notification: Notification,
}

// List notifications for a user (userId viaggia nel path, non nel body)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotificationsResponse {
    pub success: bool,
    pub notifications: Vec<Notification>,
}
