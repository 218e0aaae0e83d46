pub mod notification;

// Re-export per comodità
pub use notification::Notification;
