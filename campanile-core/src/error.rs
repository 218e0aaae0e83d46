use serde::{Deserialize, Serialize};

/// Busta d'errore condivisa dalle risposte HTTP non 2xx.
/// `success` è sempre false; `message` è leggibile dal chiamante.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
