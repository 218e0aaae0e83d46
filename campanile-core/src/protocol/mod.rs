pub mod http;

// Re-export comodi
pub use http::{
    CreateNotificationRequest, CreateNotificationResponse, ListNotificationsResponse,
};
