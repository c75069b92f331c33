// libs/availability-cell/src/lib.rs
//! # Availability Cell
//!
//! The clinic's weekly opening hours and the bookable-date calendar.
//!
//! ## API Endpoints
//! - `GET /availability?start=&end=` - Bookable dates in a range
//! - `GET /availability` - Every weekly rule
//! - `GET /availability/{day}` - Rules for weekday 0 (Sunday) to 6
//! - `POST /availability`, `POST /availability/{day}` - New rule (admin)
//! - `PATCH /availability/rules/{id}` - Edit a rule (admin)
//! - `DELETE /availability/rules/{id}` - Remove a rule (admin)

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{AvailabilityError, AvailabilityRule};
pub use router::availability_routes;
pub use services::{available_dates, AvailabilityStore};
