pub mod dtos;
pub mod redacted;
pub mod user;
pub mod user_id;
mod wire;

pub use dtos::*;
pub use redacted::*;
pub use user::*;
pub use user_id::*;
