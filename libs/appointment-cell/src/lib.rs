// libs/appointment-cell/src/lib.rs
//! # Appointment Cell
//!
//! Booking, lookup and rescheduling of telehealth appointments, plus the
//! daily slot grid shown on the booking form.
//!
//! ```text
//! +-----------------------------------------------------+
//! |                 Appointment Cell                    |
//! +-----------------------------------------------------+
//! |  handlers.rs      |  HTTP handlers                  |
//! |  router.rs        |  Public + admin route groups    |
//! |  models.rs        |  Appointment, questionnaire DTOs|
//! |  services/        |                                 |
//! |    booking.rs     |  Booking orchestration          |
//! |    store.rs       |  In-memory appointment store    |
//! |    slots.rs       |  Time slot generation           |
//! |    validation.rs  |  Payload + questionnaire checks |
//! |    notification.rs|  Notifier + email bodies        |
//! +-----------------------------------------------------+
//! ```
//!
//! ## API Endpoints
//! - `POST /appointments` - Book; provisions a meeting and emails the patient
//! - `GET /appointments/available-times?date=` - Slot grid for a day
//! - `GET /appointments/{id}` - Single appointment
//! - `GET /appointments` - Dashboard listing (admin)
//! - `PATCH /appointments/{id}` - Partial update (admin)
//! - `DELETE /appointments/{id}` - Delete and notify (admin)
//! - `POST /validate-questionnaire` - Intake questionnaire check

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    Appointment, AppointmentError, AppointmentStatus, Questionnaire, TimeSlot,
};
pub use router::{appointment_routes, questionnaire_routes};
pub use services::{
    AppointmentBookingService, AppointmentStore, LoggingNotifier, Notification, Notifier,
};
