// libs/appointment-cell/src/services/mod.rs

pub mod booking;
pub mod notification;
pub mod slots;
pub mod store;
pub mod validation;

pub use booking::AppointmentBookingService;
pub use notification::{LoggingNotifier, Notification, NotificationError, Notifier};
pub use store::AppointmentStore;
