//! Bearer-token verification contract.

use async_trait::async_trait;
use thiserror::Error;

/// Identity attributes extracted from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    /// Tenant identifier the token was issued for.
    pub domain_id: String,
    /// Subject the token identifies, when present.
    pub subject: Option<String>,
    /// Scopes granted to the token.
    pub scopes: Vec<String>,
}

#[derive(Debug, Error)]
pub enum TokenVerificationError {
    #[error("malformed token")]
    Malformed,

    #[error("token expired")]
    Expired,

    #[error("token verification failed: {0}")]
    Verification(String),
}

/// Parses and verifies raw bearer tokens.
///
/// The cryptographic verification itself is owned by the implementation;
/// this crate only consumes the resulting [`TokenInfo`]. Verification may
/// involve I/O (key fetches), so the call is async and must be safe to
/// invoke concurrently from many requests.
#[async_trait]
pub trait TokenParser: Send + Sync {
    async fn parse_and_verify(
        &self,
        raw_token: &str,
    ) -> Result<TokenInfo, TokenVerificationError>;
}
