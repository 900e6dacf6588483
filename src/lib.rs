//! Identity model for Smartbooking users.
//!
//! - [`User`] is the value object shared with the request and storage layers,
//!   with fixed wire keys (`userId`, `firstname`, `lastname`, `email`,
//!   `password`, `walletAddress`).
//! - [`generate_user_id`] produces random version-4 UUID strings and reports
//!   entropy failure as [`IdentityError::EntropyUnavailable`].
//! - `Display`/`Debug` on [`User`] are log-safe; [`User::describe`] is not.
//!
//! Validation, password hashing and persistence belong to the calling layers.

pub mod app_system;
pub mod domain;
pub mod error;


pub use domain::{
    generate_user_id, generate_user_id_with, mask_wallet, register, Redacted, User, UserCreate,
};
pub use error::IdentityError;
