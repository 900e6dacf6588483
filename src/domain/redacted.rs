use std::fmt;

use super::user::User;

const MASK: &str = "****";

/// Log-safe rendering of a [`User`].
///
/// Prints `userId firstname lastname email wallet`, leaving out the password
/// and masking the wallet address with [`mask_wallet`]. Users without a
/// wallet render without the trailing field.
#[derive(Clone, Copy)]
pub struct Redacted<'a> {
    user: &'a User,
}

impl<'a> Redacted<'a> {
    pub(crate) fn new(user: &'a User) -> Self {
        Self { user }
    }
}

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let user = self.user;
        write!(
            f,
            "{} {} {} {}",
            user.user_id, user.first_name, user.last_name, user.email
        )?;
        let wallet = mask_wallet(&user.wallet_address);
        if !wallet.is_empty() {
            write!(f, " {wallet}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.user, f)
    }
}

/// Masks a wallet address for display.
///
/// Addresses longer than 10 characters keep their first 6 and last 4
/// characters (`0x12ab…9f3c`). Shorter ones are fully masked. An empty
/// address stays empty.
pub fn mask_wallet(address: &str) -> String {
    let len = address.chars().count();
    match len {
        0 => String::new(),
        1..=10 => MASK.to_string(),
        _ => {
            let head: String = address.chars().take(6).collect();
            let tail: String = address.chars().skip(len - 4).collect();
            format!("{head}…{tail}")
        }
    }
}
