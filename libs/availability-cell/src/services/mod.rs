// libs/availability-cell/src/services/mod.rs

pub mod resolver;
pub mod store;
pub mod validation;

pub use resolver::available_dates;
pub use store::AvailabilityStore;
