//! Process-level setup shared by binaries embedding the identity model.

pub mod tracing;

pub use self::tracing::setup_tracing;
