// Session and access-token derivation
//
// The hub issues an opaque raw token with every discovery reply. Write
// commands are authorized by the access token: AES-128-ECB encryption
// of the raw token under the factory key, hex-encoded upper-case.
//
// State machine: NoToken → RawTokenAcquired → AccessTokenDerived.
// A new discovery restarts the cycle — the derived token is only
// meaningful alongside the raw token that produced it, and the hub may
// rotate sessions at any time. No expiry is tracked.

use aes::Aes128;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::CoreError;

/// AES-128 block and key size. The raw token and factory key must each
/// be exactly one block long.
pub const BLOCK_SIZE: usize = 16;

/// Observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoToken,
    RawTokenAcquired,
    AccessTokenDerived,
}

/// Per-client session: the hub-issued raw token and the access token
/// derived from it. One session per discovery cycle.
#[derive(Debug, Clone, Default)]
pub struct Session {
    raw_token: Option<String>,
    access_token: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        match (&self.raw_token, &self.access_token) {
            (None, _) => SessionState::NoToken,
            (Some(_), None) => SessionState::RawTokenAcquired,
            (Some(_), Some(_)) => SessionState::AccessTokenDerived,
        }
    }

    /// The derived access token, if [`refresh_access_token`](Self::refresh_access_token)
    /// has run for the current raw token.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Store a hub-issued raw token, overwriting any prior session.
    ///
    /// Any previously derived access token is invalidated: it belonged
    /// to the session the hub just superseded.
    pub fn acquire_raw_token(&mut self, token: impl Into<String>) {
        self.raw_token = Some(token.into());
        self.access_token = None;
        debug!("raw session token acquired");
    }

    /// Derive the access token from the current raw token and `key`.
    ///
    /// # Errors
    ///
    /// [`CoreError::MissingToken`] if no discovery has run yet;
    /// [`CoreError::Crypto`] if the key or token is not exactly one
    /// cipher block (16 bytes) long.
    pub fn refresh_access_token(&mut self, key: &SecretString) -> Result<&str, CoreError> {
        let raw = self.raw_token.as_ref().ok_or(CoreError::MissingToken)?;
        let derived = derive_access_token(key.expose_secret().as_bytes(), raw.as_bytes())?;
        debug!("access token derived");
        Ok(self.access_token.insert(derived))
    }
}

/// Pure derivation: AES-128-ECB encrypt one block of `token` under
/// `key`, hex-encode the ciphertext upper-case.
///
/// Deterministic: the same (key, token) pair always yields the same
/// 32-character access token.
pub fn derive_access_token(key: &[u8], token: &[u8]) -> Result<String, CoreError> {
    if key.len() != BLOCK_SIZE {
        return Err(CoreError::Crypto {
            what: "key",
            expected: BLOCK_SIZE,
            got: key.len(),
        });
    }
    if token.len() != BLOCK_SIZE {
        return Err(CoreError::Crypto {
            what: "token",
            expected: BLOCK_SIZE,
            got: token.len(),
        });
    }

    let cipher = Aes128::new(GenericArray::from_slice(key));
    let mut block = GenericArray::clone_from_slice(token);
    cipher.encrypt_block(&mut block);

    Ok(hex::encode_upper(block))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &[u8] = b"74ae544c-d16e-4c";
    const TOKEN: &[u8] = b"0123456789abcdef";

    fn secret(s: &[u8]) -> SecretString {
        SecretString::from(String::from_utf8(s.to_vec()).expect("ascii"))
    }

    #[test]
    fn derivation_is_deterministic_and_32_uppercase_hex() {
        let a = derive_access_token(KEY, TOKEN).expect("derives");
        let b = derive_access_token(KEY, TOKEN).expect("derives");

        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.bytes().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn different_keys_derive_different_tokens() {
        let a = derive_access_token(KEY, TOKEN).expect("derives");
        let b = derive_access_token(b"another-16b-key!", TOKEN).expect("derives");
        assert_ne!(a, b);
    }

    #[test]
    fn short_or_long_tokens_are_crypto_errors_not_padded() {
        let short = derive_access_token(KEY, b"15-byte-token!!").expect_err("too short");
        assert!(matches!(
            short,
            CoreError::Crypto { what: "token", expected: 16, got: 15 }
        ));

        let long = derive_access_token(KEY, b"seventeen-bytes!!").expect_err("too long");
        assert!(matches!(
            long,
            CoreError::Crypto { what: "token", expected: 16, got: 17 }
        ));
    }

    #[test]
    fn wrong_key_length_is_a_crypto_error() {
        let err = derive_access_token(b"short-key", TOKEN).expect_err("bad key");
        assert!(matches!(
            err,
            CoreError::Crypto { what: "key", expected: 16, got: 9 }
        ));
    }

    #[test]
    fn refresh_before_discovery_is_missing_token() {
        let mut session = Session::new();
        assert_eq!(session.state(), SessionState::NoToken);

        let err = session
            .refresh_access_token(&secret(KEY))
            .expect_err("no raw token yet");
        assert!(matches!(err, CoreError::MissingToken));
    }

    #[test]
    fn lifecycle_walks_the_three_states() {
        let mut session = Session::new();

        session.acquire_raw_token("0123456789abcdef");
        assert_eq!(session.state(), SessionState::RawTokenAcquired);
        assert!(session.access_token().is_none());

        session
            .refresh_access_token(&secret(KEY))
            .expect("refresh succeeds");
        assert_eq!(session.state(), SessionState::AccessTokenDerived);
        assert_eq!(session.access_token().map(str::len), Some(32));
    }

    #[test]
    fn rediscovery_invalidates_the_derived_token() {
        let mut session = Session::new();
        session.acquire_raw_token("0123456789abcdef");
        session
            .refresh_access_token(&secret(KEY))
            .expect("refresh succeeds");

        // Hub rotated its session; a new discovery supersedes ours.
        session.acquire_raw_token("fedcba9876543210");
        assert_eq!(session.state(), SessionState::RawTokenAcquired);
        assert!(session.access_token().is_none());
    }
}
