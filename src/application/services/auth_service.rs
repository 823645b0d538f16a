//! Authentication service for API token validation.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::HashSet;

use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Hashes a raw token with HMAC-SHA256 keyed by `signing_secret`.
///
/// Returns a 64-character lowercase hex-encoded MAC.
pub fn hash_token(signing_secret: &str, token: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Service for authenticating API requests via Bearer tokens.
///
/// Only token hashes are configured. A leaked configuration file does not
/// reveal usable tokens without the signing secret.
pub struct AuthService {
    signing_secret: String,
    token_hashes: HashSet<String>,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `signing_secret` - HMAC key; must match the value used when tokens were created
    /// - `token_hashes` - hex-encoded hashes of accepted tokens
    pub fn new(
        signing_secret: impl Into<String>,
        token_hashes: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            signing_secret: signing_secret.into(),
            token_hashes: token_hashes
                .into_iter()
                .map(|hash| hash.trim().to_ascii_lowercase())
                .filter(|hash| !hash.is_empty())
                .collect(),
        }
    }

    /// Returns `true` when at least one token hash is configured.
    pub fn has_tokens(&self) -> bool {
        !self.token_hashes.is_empty()
    }

    /// Authenticates a raw token against the configured hashes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token hash is not configured.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        let token_hash = hash_token(&self.signing_secret, token);

        if !self.token_hashes.contains(&token_hash) {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid or revoked token"}),
            ));
        }

        Ok(())
    }
}
