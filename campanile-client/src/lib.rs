//! campanile-client: il lato mobile della pipeline di notifiche.
//! Fetch e riordino della lista, stato di presentazione della schermata
//! (read/unread, navigazione al dettaglio) e banner transiente per la
//! notifica più recente.

pub mod api;
pub mod banner;
pub mod error;
pub mod screen;

// Re-export utili per ridurre i percorsi in chi consuma il crate
pub use api::{sort_most_recent_first, ApiClient, ApiConfig};
pub use banner::{Banner, BANNER_AUTO_DISMISS};
pub use error::FetchError;
pub use screen::{DetailParams, LoadState, NotificationsScreen};
