//! Admin sign-in for the dashboard.
//!
//! - `POST /admin/login` - Exchange the admin password for a bearer token
//! - `GET /admin/session` - Check a bearer token

pub mod handlers;
pub mod router;

pub use router::admin_routes;
