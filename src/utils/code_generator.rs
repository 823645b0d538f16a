//! Random identifier generation for query ids and admin API tokens.
//!
//! Both use `getrandom` for entropy and URL-safe base64 without padding.

use base64::Engine as _;

/// Random bytes behind a query id (16 base64 characters).
const QUERY_ID_BYTES: usize = 12;

/// Random bytes behind an admin API token (43 base64 characters).
const API_TOKEN_BYTES: usize = 32;

/// Prefix marking server-assigned query ids.
pub const QUERY_ID_PREFIX: &str = "qry_";

fn random_base64<const N: usize>() -> String {
    let mut buffer = [0u8; N];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Generates an id for a query that arrived without one.
///
/// # Panics
///
/// Panics if the system random number generator fails.
pub fn generate_query_id() -> String {
    format!("{QUERY_ID_PREFIX}{}", random_base64::<QUERY_ID_BYTES>())
}

/// Generates a new admin API token.
///
/// # Panics
///
/// Panics if the system random number generator fails.
pub fn generate_api_token() -> String {
    random_base64::<API_TOKEN_BYTES>()
}
