//! Turns a [`RawMaas`] document into a validated [`MaasConfig`].

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::document::{
    Flag, Int, RawAdmin, RawBind, RawCluster, RawDatabase, RawMaas, RawRegion, Text,
};
use crate::domain::errors::{ValidationError, ValidationResult};
use crate::domain::models::{
    AdminConfig, ApiToken, BindConfig, ClusterConfig, ClusterRegion, ClusterRole, DatabaseConfig,
    DatabaseEngine, EmailAddress, MaasConfig, RegionConfig, Secret,
};

const MAX_HOSTNAME_LEN: usize = 253;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/?#]+(?:[/?#]\S*)?$").expect("url pattern is valid"));

/// Validate a raw document, failing on the first offending field.
pub fn validate(raw: RawMaas) -> ValidationResult<MaasConfig> {
    let (cluster, region) = match (raw.cluster, raw.region) {
        (Some(cluster), Some(region)) => (cluster, region),
        (cluster, region) => {
            let mut missing = Vec::new();
            if cluster.is_none() {
                missing.push("maas.cluster");
            }
            if region.is_none() {
                missing.push("maas.region");
            }
            return Err(ValidationError::MissingSections(missing));
        }
    };

    Ok(MaasConfig {
        url: raw.url.map(|url| url_field("maas.url", url)).transpose()?,
        token: raw
            .token
            .map(|token| token_field("maas.token", &token))
            .transpose()?,
        cluster: validate_cluster(cluster)?,
        region: validate_region(region)?,
    })
}

fn validate_cluster(raw: RawCluster) -> ValidationResult<ClusterConfig> {
    let region = raw
        .region
        .map(|region| {
            Ok::<_, ValidationError>(ClusterRegion {
                host: hostname_field("maas.cluster.region.host", region.host)?,
            })
        })
        .transpose()?;

    Ok(ClusterConfig {
        enabled: flag(raw.enabled),
        region,
        role: variant_field::<ClusterRole>("maas.cluster.role", raw.role, &ClusterRole::ALL)?,
        enable_iframe: flag(raw.enable_iframe),
    })
}

fn validate_region(raw: RawRegion) -> ValidationResult<RegionConfig> {
    Ok(RegionConfig {
        theme: text(raw.theme),
        bind: raw.bind.map(validate_bind).transpose()?,
        admin: raw.admin.map(validate_admin).transpose()?,
        database: raw.database.map(validate_database).transpose()?,
        enabled: flag(raw.enabled),
    })
}

fn validate_bind(raw: RawBind) -> ValidationResult<BindConfig> {
    Ok(BindConfig {
        host: hostname_field("maas.region.bind.host", raw.host)?,
        port: raw
            .port
            .map(|port| port_field("maas.region.bind.port", port))
            .transpose()?,
    })
}

fn validate_admin(raw: RawAdmin) -> ValidationResult<AdminConfig> {
    let email = raw
        .email
        .map(|Text(value)| {
            EmailAddress::parse(&value).ok_or_else(|| ValidationError::InvalidEmail {
                field: "maas.region.admin.email".to_string(),
                value,
            })
        })
        .transpose()?;

    Ok(AdminConfig {
        username: text(raw.username),
        password: text(raw.password).map(Secret::new),
        email,
    })
}

fn validate_database(raw: RawDatabase) -> ValidationResult<DatabaseConfig> {
    Ok(DatabaseConfig {
        engine: variant_field::<DatabaseEngine>(
            "maas.region.database.engine",
            raw.engine,
            &DatabaseEngine::ALL,
        )?,
        host: hostname_field("maas.region.database.host", raw.host)?,
        name: non_empty_field("maas.region.database.name", raw.name)?,
        password: non_empty_field("maas.region.database.password", raw.password)?
            .map(Secret::new),
        username: non_empty_field("maas.region.database.username", raw.username)?,
    })
}

fn flag(value: Option<Flag>) -> Option<bool> {
    value.map(|Flag(value)| value)
}

fn text(value: Option<Text>) -> Option<String> {
    value.map(|Text(value)| value)
}

fn port_field(field: &str, Int(value): Int) -> ValidationResult<u16> {
    u16::try_from(value)
        .ok()
        .filter(|port| *port != 0)
        .ok_or_else(|| ValidationError::PortOutOfRange {
            field: field.to_string(),
            value,
        })
}

fn non_empty_field(field: &str, value: Option<Text>) -> ValidationResult<Option<String>> {
    match text(value) {
        Some(value) if value.trim().is_empty() => Err(ValidationError::EmptyField {
            field: field.to_string(),
        }),
        other => Ok(other),
    }
}

fn hostname_field(field: &str, value: Option<Text>) -> ValidationResult<Option<String>> {
    match text(value) {
        Some(host) if !is_hostname(&host) => Err(ValidationError::InvalidHostname {
            field: field.to_string(),
            value: host,
        }),
        other => Ok(other),
    }
}

/// Loose hostname check: names, IPv4 and bare IPv6 literals all pass.
fn is_hostname(host: &str) -> bool {
    !host.is_empty()
        && host.len() <= MAX_HOSTNAME_LEN
        && !host.chars().any(|c| c.is_whitespace() || c.is_control() || c == '/')
}

fn variant_field<T>(
    field: &str,
    value: Option<Text>,
    allowed: &[T],
) -> ValidationResult<Option<T>>
where
    T: FromStr + std::fmt::Display,
{
    text(value)
        .map(|value| {
            value.parse::<T>().map_err(|_| ValidationError::UnknownVariant {
                field: field.to_string(),
                allowed: allowed
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
                value,
            })
        })
        .transpose()
}

fn url_field(field: &str, Text(value): Text) -> ValidationResult<String> {
    if URL_PATTERN.is_match(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidUrl {
            field: field.to_string(),
            value,
        })
    }
}

fn token_field(field: &str, Text(value): &Text) -> ValidationResult<ApiToken> {
    ApiToken::parse(value).ok_or_else(|| ValidationError::InvalidToken {
        field: field.to_string(),
    })
}
