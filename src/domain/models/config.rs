use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::values::{ApiToken, EmailAddress, Secret};

/// API endpoint used when `maas.url` is not configured.
pub const DEFAULT_API_URL: &str = "https://localhost/";

/// Validated MAAS deployment configuration.
///
/// Built once by [`crate::ConfigLoader`] and never mutated afterwards; hand it
/// to consumers by reference or clone. Every leaf is optional, only the
/// `cluster` and `region` sections themselves are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaasConfig {
    /// MAAS API endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// MAAS API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<ApiToken>,

    /// Cluster controller settings
    pub cluster: ClusterConfig,

    /// Region controller settings
    pub region: RegionConfig,
}

/// Serialized form of a configuration, rooted at the `maas` key.
#[derive(Serialize)]
struct Document<'a> {
    maas: &'a MaasConfig,
}

impl MaasConfig {
    /// API endpoint, falling back to [`DEFAULT_API_URL`].
    pub fn api_url(&self) -> &str {
        self.url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Render the configuration back into its YAML document form.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&Document { maas: self })
    }

    /// Render the configuration as a JSON value rooted at `maas`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "maas": self })
    }

    /// Copy of this configuration with every credential masked.
    pub fn redacted(&self) -> Self {
        let mask = |secret: Option<&Secret>| secret.map(|_| Secret::new(super::values::REDACTED));
        let mut copy = self.clone();
        copy.token = ApiToken::redact(self.token.as_ref());
        if let Some(admin) = copy.region.admin.as_mut() {
            admin.password = mask(admin.password.as_ref());
        }
        if let Some(database) = copy.region.database.as_mut() {
            database.password = mask(database.password.as_ref());
        }
        copy
    }

    /// The stock single-host deployment written by `maas-config init`.
    pub fn reference() -> Self {
        Self {
            url: None,
            token: None,
            cluster: ClusterConfig {
                enabled: Some(true),
                region: Some(ClusterRegion {
                    host: Some("localhost".to_string()),
                }),
                role: Some(ClusterRole::Master),
                enable_iframe: Some(true),
            },
            region: RegionConfig {
                theme: Some("theme".to_string()),
                bind: Some(BindConfig {
                    host: Some("localhost".to_string()),
                    port: Some(80),
                }),
                admin: Some(AdminConfig {
                    username: Some("admin".to_string()),
                    password: Some(Secret::new("password")),
                    email: EmailAddress::parse("email@example.com"),
                }),
                database: Some(DatabaseConfig {
                    engine: Some(DatabaseEngine::Postgresql),
                    host: Some("localhost".to_string()),
                    name: Some("maasdb".to_string()),
                    password: Some(Secret::new("password")),
                    username: Some("maas".to_string()),
                }),
                enabled: Some(true),
            },
        }
    }
}

/// `maas.cluster` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClusterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Region controller this cluster reports to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<ClusterRegion>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ClusterRole>,

    /// Allow the web UI to be embedded in an iframe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_iframe: Option<bool>,
}

/// `maas.cluster.region` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClusterRegion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

/// Role a cluster controller plays in the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterRole {
    Master,
    Worker,
}

impl ClusterRole {
    /// Every role, in document order.
    pub const ALL: [Self; 2] = [Self::Master, Self::Worker];

    /// Spelling used in the document.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Worker => "worker",
        }
    }
}

impl fmt::Display for ClusterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClusterRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// `maas.region` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegionConfig {
    /// Web UI theme identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind: Option<BindConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl RegionConfig {
    /// `host:port` the region API listens on, when both are configured.
    pub fn bind_address(&self) -> Option<String> {
        let bind = self.bind.as_ref()?;
        Some(format!("{}:{}", bind.host.as_deref()?, bind.port?))
    }
}

/// `maas.region.bind` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BindConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Listening port (1-65535)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// `maas.region.admin` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdminConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Secret>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailAddress>,
}

/// `maas.region.database` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatabaseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<DatabaseEngine>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Database name (non-empty)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Database password (non-empty)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Secret>,

    /// Database user (non-empty)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Database backends MAAS can run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseEngine {
    Postgresql,
}

impl DatabaseEngine {
    /// Every supported engine.
    pub const ALL: [Self; 1] = [Self::Postgresql];

    /// Spelling used in the document.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Postgresql => "postgresql",
        }
    }
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|engine| engine.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
