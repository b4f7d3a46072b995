//! Validated scalar values used by the configuration model.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

/// Mask printed in place of secret values.
pub const REDACTED: &str = "[REDACTED]";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .expect("email pattern is valid")
});

/// A credential that must not leak through `Debug` or logs.
///
/// Serializes as the plain value so a configuration can be written back to
/// disk unchanged; use [`crate::MaasConfig::redacted`] before displaying one.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Secret(String);

impl Secret {
    /// Wrap a credential.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the underlying value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the credential is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// A syntactically valid email address (`local@domain.tld`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse an address, returning `None` when it is not well-formed.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        (value.len() <= 254 && EMAIL_PATTERN.is_match(value)).then(|| Self(value.to_string()))
    }

    /// The address as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain part of the address.
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// MAAS API key in `consumer_key:token_key:token_secret` form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiToken {
    /// OAuth consumer key
    pub consumer_key: String,
    /// OAuth token key
    pub token_key: String,
    /// OAuth token secret
    pub token_secret: Secret,
}

impl ApiToken {
    /// Split an API key into its three OAuth parts.
    ///
    /// Every part must be non-empty and there must be exactly three of them.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.trim().split(':');
        let consumer_key = parts.next()?;
        let token_key = parts.next()?;
        let token_secret = parts.next()?;
        if parts.next().is_some()
            || [consumer_key, token_key, token_secret]
                .iter()
                .any(|part| part.is_empty())
        {
            return None;
        }

        Some(Self {
            consumer_key: consumer_key.to_string(),
            token_key: token_key.to_string(),
            token_secret: Secret::new(token_secret),
        })
    }

    fn redacted(&self) -> Self {
        Self {
            token_secret: Secret::new(REDACTED),
            ..self.clone()
        }
    }

    pub(crate) fn redact(token: Option<&Self>) -> Option<Self> {
        token.map(Self::redacted)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiToken")
            .field("consumer_key", &self.consumer_key)
            .field("token_key", &self.token_key)
            .field("token_secret", &self.token_secret)
            .finish()
    }
}

impl Serialize for ApiToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!(
            "{}:{}:{}",
            self.consumer_key,
            self.token_key,
            self.token_secret.expose()
        ))
    }
}
