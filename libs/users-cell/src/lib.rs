// libs/users-cell/src/lib.rs
//! # Users Cell
//!
//! Registration of clinic user accounts. Passwords are stored as argon2
//! hashes and never leave the store.
//!
//! ## API Endpoints
//! - `POST /users` - Register a user; emails and usernames are unique

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{User, UserError};
pub use router::user_routes;
pub use services::UserStore;
