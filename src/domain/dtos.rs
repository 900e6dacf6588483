use std::fmt;

use serde::{Deserialize, Serialize};

use super::wire::null_as_empty;

/// Payload for registering a new user.
///
/// Same wire keys as [`super::User`] minus `userId`, which is generated
/// server-side. Missing or `null` keys decode as empty strings.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCreate {
    #[serde(rename = "firstname", deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(rename = "lastname", deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
    #[serde(rename = "walletAddress", deserialize_with = "null_as_empty")]
    pub wallet_address: String,
}

impl fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreate")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("wallet_address", &super::mask_wallet(&self.wallet_address))
            .finish()
    }
}
