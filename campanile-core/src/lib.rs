//! campanile-core: tipi condivisi tra client e server (modello Notification,
//! DTO HTTP, busta d'errore) più la risoluzione pura delle immagini.
//! Niente I/O o dipendenze non compatibili con WASM.

pub mod error;
pub mod images;
pub mod models;
pub mod protocol;
pub mod utils;

// Re-export utili per ridurre i percorsi nei crate client/server
pub use error::ErrorBody;
pub use images::{resolve_image, BundledImage, ImageSource, FALLBACK_IMAGE};
pub use models::Notification;
pub use protocol::http::{
    CreateNotificationRequest, CreateNotificationResponse, ListNotificationsResponse,
};
pub use utils::now_timestamp;
