use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::dtos::UserCreate;
use super::redacted::{mask_wallet, Redacted};
use super::user_id::generate_user_id;
use super::wire::null_as_empty;
use crate::error::IdentityError;

/// Represents a registered user of the booking service.
///
/// Serializes with the keys `userId`, `firstname`, `lastname`, `email`,
/// `password` and `walletAddress`. Missing or `null` keys decode as empty
/// strings and unknown keys are ignored.
///
/// `Display` and `Debug` are log-safe: neither prints the password and both
/// mask the wallet address. [`User::describe`] is the full, unredacted view.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Empty until assigned, then fixed for the life of the user.
    #[serde(rename = "userId", deserialize_with = "null_as_empty")]
    pub user_id: String,
    #[serde(rename = "firstname", deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(rename = "lastname", deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    /// Plaintext as supplied. Nothing in this crate hashes it.
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
    #[serde(rename = "walletAddress", deserialize_with = "null_as_empty")]
    pub wallet_address: String,
}

impl User {
    /// Creates a new User without an id.
    ///
    /// # Notes
    /// Call [`User::assign_id`] before the user is first persisted.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        wallet_address: impl Into<String>,
    ) -> Self {
        Self {
            user_id: String::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            wallet_address: wallet_address.into(),
        }
    }

    /// Builds the full user from an id and a registration payload.
    pub fn from_create(id: impl Into<String>, payload: UserCreate) -> Self {
        Self {
            user_id: id.into(),
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            password: payload.password,
            wallet_address: payload.wallet_address,
        }
    }

    /// Generates a fresh id on behalf of this user.
    ///
    /// Reads no fields and stores nothing; see [`User::assign_id`] for the
    /// storing variant.
    pub fn generate_user_id(&self) -> Result<String, IdentityError> {
        generate_user_id()
    }

    /// Whether an id has been assigned.
    pub fn has_id(&self) -> bool {
        !self.user_id.is_empty()
    }

    /// Generates and stores an id. Succeeds at most once per user.
    ///
    /// # Errors
    /// - [`IdentityError::IdAlreadyAssigned`] if the user already has an id;
    ///   the existing id is left untouched.
    /// - [`IdentityError::EntropyUnavailable`] if no randomness could be read.
    pub fn assign_id(&mut self) -> Result<&str, IdentityError> {
        if self.has_id() {
            return Err(IdentityError::IdAlreadyAssigned(self.user_id.clone()));
        }
        self.user_id = generate_user_id()?;
        Ok(&self.user_id)
    }

    /// Full space-separated rendering:
    /// `userId firstname lastname email password walletAddress`.
    ///
    /// Includes the plaintext password and the raw wallet address. Never log
    /// this; use `Display` or [`User::redacted`] instead.
    pub fn describe(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.user_id,
            self.first_name,
            self.last_name,
            self.email,
            self.password,
            self.wallet_address
        )
    }

    /// Log-safe view without the password and with a masked wallet.
    pub fn redacted(&self) -> Redacted<'_> {
        Redacted::new(self)
    }

    /// Encodes the user as a JSON record with the wire keys.
    pub fn to_json(&self) -> Result<String, IdentityError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a user from a JSON record.
    pub fn from_json(raw: &str) -> Result<Self, IdentityError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.redacted(), f)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("user_id", &self.user_id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("wallet_address", &mask_wallet(&self.wallet_address))
            .finish()
    }
}

/// Registers a new user: generates an id and builds the user from `payload`.
///
/// This is the step a signup handler runs before first persistence.
#[instrument(skip(payload))]
pub fn register(payload: UserCreate) -> Result<User, IdentityError> {
    let user_id = generate_user_id()?;
    let user = User::from_create(user_id, payload);
    info!(user_id = %user.user_id, "User registered");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn ann() -> User {
        User {
            user_id: "u1".into(),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "a@x.com".into(),
            password: "pw".into(),
            wallet_address: "0xABC".into(),
        }
    }

    #[test]
    fn test_describe_renders_all_fields_in_order() {
        assert_eq!(ann().describe(), "u1 Ann Lee a@x.com pw 0xABC");
    }

    #[test]
    fn test_rendering_is_stable() {
        let user = ann();
        assert_eq!(user.describe(), user.describe());
        assert_eq!(user.to_string(), user.to_string());
    }

    #[test]
    fn test_display_and_debug_hide_password() {
        let mut user = ann();
        user.password = "s3cret-pass".into();
        user.wallet_address = "0x52908400098527886E0F7030069857D2E4169EE7".into();

        let display = user.to_string();
        let debug = format!("{:?}", user);

        assert_eq!(display, "u1 Ann Lee a@x.com 0x5290…9EE7");
        assert!(!display.contains("s3cret-pass"));
        assert!(!debug.contains("s3cret-pass"));
        assert!(!debug.contains("0x52908400098527886E0F7030069857D2E4169EE7"));
        assert!(debug.contains("[redacted]"));
    }

    #[test]
    fn test_serializes_with_wire_keys() {
        let value: Value = serde_json::from_str(&ann().to_json().unwrap()).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["email", "firstname", "lastname", "password", "userId", "walletAddress"]
        );
        assert_eq!(object["userId"], "u1");
        assert_eq!(object["walletAddress"], "0xABC");
    }

    #[test]
    fn test_json_round_trip() {
        let user = ann();
        let decoded = User::from_json(&user.to_json().unwrap()).unwrap();
        assert_eq!(decoded, user);
    }

    #[test]
    fn test_decode_tolerates_missing_and_unknown_keys() {
        let user = User::from_json(r#"{"firstname":"Ann","email":"a@x.com","role":"admin"}"#).unwrap();
        assert_eq!(user.first_name, "Ann");
        assert_eq!(user.email, "a@x.com");
        assert!(!user.has_id());
        assert_eq!(user.password, "");
    }

    #[test]
    fn test_decode_treats_null_as_empty() {
        let user = User::from_json(
            r#"{"userId":null,"firstname":"Ann","lastname":null,"email":null,"password":null,"walletAddress":null}"#,
        )
        .unwrap();
        assert!(!user.has_id());
        assert_eq!(user.first_name, "Ann");
        assert_eq!(user.last_name, "");
        assert_eq!(user.wallet_address, "");
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let result = User::from_json(r#"{"userId": 42}"#);
        assert!(matches!(result, Err(IdentityError::Serialization(_))));
    }

    #[test]
    fn test_assign_id_only_once() {
        let mut user = User::new("Ann", "Lee", "a@x.com", "pw", "0xABC");
        assert!(!user.has_id());

        let id = user.assign_id().unwrap().to_string();
        assert_eq!(id.len(), 36);
        assert_eq!(user.user_id, id);

        let second = user.assign_id();
        assert_eq!(second, Err(IdentityError::IdAlreadyAssigned(id.clone())));
        assert_eq!(user.user_id, id);
    }

    #[test]
    fn test_generate_user_id_does_not_touch_receiver() {
        let user = ann();
        let id = user.generate_user_id().unwrap();
        assert_ne!(id, user.user_id);
        assert_eq!(user, ann());
    }

    #[test]
    fn test_register_assigns_fresh_id() {
        let payload = UserCreate {
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "a@x.com".into(),
            password: "pw".into(),
            wallet_address: "0xABC".into(),
        };

        let first = register(payload.clone()).unwrap();
        let second = register(payload).unwrap();

        assert!(first.has_id());
        assert_ne!(first.user_id, second.user_id);
        assert_eq!(first.first_name, "Ann");
        assert_eq!(first.wallet_address, "0xABC");
    }
}
