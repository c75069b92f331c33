// libs/users-cell/src/services/mod.rs

pub mod password;
pub mod store;
pub mod validation;

pub use store::UserStore;
