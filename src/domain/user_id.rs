//! User identifier generation.
//!
//! Ids are random version-4 UUIDs rendered in the canonical lowercase
//! hyphenated form (`xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`). There is no
//! registry check; uniqueness rests on 122 random bits.

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;
use uuid::Builder;

use crate::error::IdentityError;

/// Generates a new user id from the operating-system random source.
///
/// Fails with [`IdentityError::EntropyUnavailable`] when the random source
/// cannot be read. The caller decides whether that aborts a request or the
/// whole process.
pub fn generate_user_id() -> Result<String, IdentityError> {
    generate_user_id_with(&mut OsRng)
}

/// Generates a user id from the given random source.
pub fn generate_user_id_with<R: RngCore + ?Sized>(rng: &mut R) -> Result<String, IdentityError> {
    let mut bytes = [0u8; 16];
    if let Err(e) = rng.try_fill_bytes(&mut bytes) {
        debug!(error = %e, "Failed to read random bytes for user id");
        return Err(e.into());
    }

    // Sets the version nibble to 4 and the variant bits to RFC 4122.
    let id = Builder::from_random_bytes(bytes).into_uuid().to_string();
    debug!(user_id = %id, "Generated user id");
    Ok(id)
}
