//! API credentials and HTTP Basic authentication

use std::env;
use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

use crate::error::{ClientError, Result};

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "DOMENESHOP_TOKEN";
/// Environment variable holding the API secret.
pub const SECRET_ENV: &str = "DOMENESHOP_SECRET";

/// Token/secret pair issued by Domeneshop.
///
/// Consumed when a client is built: only the encoded `Authorization`
/// value is kept afterwards.
#[derive(Clone)]
pub struct Credentials {
    token: String,
    secret: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
        }
    }

    /// Reads `DOMENESHOP_TOKEN` and `DOMENESHOP_SECRET`.
    ///
    /// An unset or empty variable is a [`ClientError::Config`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ClientError::config(format!("{name} is not set")))
        };
        Ok(Self::new(read(TOKEN_ENV)?, read(SECRET_ENV)?))
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header: `Basic base64("token:secret")`.
    pub fn basic_auth_header(&self) -> String {
        format!("Basic {}", basic_auth(&self.token, &self.secret))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.token)
            .field("secret", &"***")
            .finish()
    }
}

/// Standard (padded) Base64 of `"{id}:{secret}"`.
pub fn basic_auth(id: &str, secret: &str) -> String {
    BASE64.encode(format!("{id}:{secret}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_pair() {
        assert_eq!(basic_auth("stian", "stian"), "c3RpYW46c3RpYW4=");
    }

    #[test]
    fn header_has_basic_prefix() {
        let creds = Credentials::new("stian", "stian");
        assert_eq!(creds.basic_auth_header(), "Basic c3RpYW46c3RpYW4=");
    }

    #[test]
    fn colon_in_secret_is_kept() {
        // "a:b:c"
        assert_eq!(basic_auth("a", "b:c"), "YTpiOmM=");
    }

    #[test]
    fn empty_pair_encodes_separator_only() {
        assert_eq!(basic_auth("", ""), "Og==");
    }

    #[test]
    fn lookup_reads_both_variables() {
        let creds = Credentials::from_lookup(|name| match name {
            TOKEN_ENV => Some("stian".to_string()),
            SECRET_ENV => Some("stian".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(creds.basic_auth_header(), "Basic c3RpYW46c3RpYW4=");
    }

    #[test]
    fn missing_token_is_config_error() {
        let err = Credentials::from_lookup(|_| None).unwrap_err();
        assert!(
            matches!(&err, ClientError::Config { detail } if detail.contains(TOKEN_ENV)),
            "{err:?}"
        );
    }

    #[test]
    fn empty_secret_is_config_error() {
        let err = Credentials::from_lookup(|name| match name {
            TOKEN_ENV => Some("token".to_string()),
            _ => Some(String::new()),
        })
        .unwrap_err();
        assert!(
            matches!(&err, ClientError::Config { detail } if detail.contains(SECRET_ENV)),
            "{err:?}"
        );
    }

    #[test]
    fn debug_masks_secret() {
        let creds = Credentials::new("token-123", "very-secret");
        let out = format!("{creds:?}");
        assert!(out.contains("token-123"));
        assert!(!out.contains("very-secret"));
    }
}
