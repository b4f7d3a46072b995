//! Environment overrides layered over the document by `load_with_env`.

mod common;

use common::{write_config, REFERENCE};
use maas_config::{ClusterRole, ConfigError, ConfigLoader, MaasConfig, ValidationError};

#[test]
fn test_env_overrides_nested_fields() {
    let file = write_config(REFERENCE);

    temp_env::with_vars(
        [
            ("MAAS_REGION__BIND__PORT", Some("5240")),
            ("MAAS_CLUSTER__ROLE", Some("worker")),
            ("MAAS_CLUSTER__ENABLE_IFRAME", Some("False")),
        ],
        || {
            let config = ConfigLoader::load_with_env(file.path()).unwrap();
            assert_eq!(config.region.bind.as_ref().unwrap().port, Some(5240));
            assert_eq!(config.cluster.role, Some(ClusterRole::Worker));
            assert_eq!(config.cluster.enable_iframe, Some(false));
            assert_eq!(config.region.theme.as_deref(), Some("theme"), "untouched values persist");
        },
    );
}

#[test]
fn test_env_supplies_api_settings() {
    let file = write_config(REFERENCE);

    temp_env::with_vars(
        [
            ("MAAS_URL", Some("https://maas.example.com/MAAS/")),
            ("MAAS_TOKEN", Some("ck:tk:ts")),
        ],
        || {
            let config = ConfigLoader::load_with_env(file.path()).unwrap();
            assert_eq!(config.api_url(), "https://maas.example.com/MAAS/");
            assert_eq!(config.token.unwrap().token_secret.expose(), "ts");
        },
    );
}

#[test]
fn test_env_values_are_validated() {
    let file = write_config(REFERENCE);

    temp_env::with_var("MAAS_REGION__BIND__PORT", Some("70000"), || {
        assert!(matches!(
            ConfigLoader::load_with_env(file.path()),
            Err(ConfigError::Validation(ValidationError::PortOutOfRange { value: 70000, .. }))
        ));
    });
}

#[test]
fn test_plain_load_ignores_env() {
    let file = write_config(REFERENCE);

    temp_env::with_var("MAAS_CLUSTER__ROLE", Some("worker"), || {
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config, MaasConfig::reference());
    });
}

#[test]
fn test_env_values_keep_leading_zeros() {
    let file = write_config(REFERENCE);

    temp_env::with_vars(
        [
            ("MAAS_REGION__ADMIN__PASSWORD", Some("007")),
            ("MAAS_REGION__THEME", Some("01")),
        ],
        || {
            let config = ConfigLoader::load_with_env(file.path()).unwrap();
            let admin = config.region.admin.unwrap();
            assert_eq!(admin.password.unwrap().expose(), "007");
            assert_eq!(config.region.theme.as_deref(), Some("01"));
        },
    );
}

#[test]
fn test_env_values_are_not_parsed_as_yaml() {
    let file = write_config(REFERENCE);

    temp_env::with_vars(
        [
            ("MAAS_REGION__ADMIN__PASSWORD", Some("[abc]")),
            ("MAAS_REGION__DATABASE__PASSWORD", Some("{x: 1}")),
        ],
        || {
            let config = ConfigLoader::load_with_env(file.path()).unwrap();
            let admin = config.region.admin.unwrap();
            assert_eq!(admin.password.unwrap().expose(), "[abc]");
            let database = config.region.database.unwrap();
            assert_eq!(database.password.unwrap().expose(), "{x: 1}");
        },
    );
}
