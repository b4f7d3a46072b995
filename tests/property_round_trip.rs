//! Property: serializing a configuration and loading it back is lossless.

use maas_config::{
    AdminConfig, ApiToken, BindConfig, ClusterConfig, ClusterRegion, ClusterRole, ConfigLoader,
    DatabaseConfig, DatabaseEngine, EmailAddress, MaasConfig, RegionConfig, Secret,
};
use proptest::option;
use proptest::prelude::*;

fn hostname() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,12}(\\.[a-z][a-z0-9-]{0,12}){0,2}"
}

fn word() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{1,16}"
}

/// Free text, including strings YAML would otherwise read as another type.
fn free_text() -> impl Strategy<Value = String> {
    prop_oneof![
        word(),
        proptest::sample::select(vec![
            "", "True", "FALSE", "yes", "off", "~", "null", "1.0", "007", "1e3", "0x10",
            "0o17", ".inf", ".NaN", "2001-01-01", "[abc]", "{a: b}", "- x", "#hash",
            "key: value", "'single'", "\"double\"", " padded ", "a\tb",
        ])
        .prop_map(str::to_string),
        "[ -~\\p{L}]{0,24}",
    ]
}

fn email() -> impl Strategy<Value = EmailAddress> {
    ("[a-z][a-z0-9._]{0,10}", "[a-z]{1,10}", "[a-z]{2,4}").prop_map(|(local, domain, tld)| {
        EmailAddress::parse(&format!("{local}@{domain}.{tld}")).expect("generated email is valid")
    })
}

fn token() -> impl Strategy<Value = ApiToken> {
    (word(), word(), word()).prop_map(|(ck, tk, ts)| {
        ApiToken::parse(&format!("{ck}:{tk}:{ts}")).expect("generated token is valid")
    })
}

fn cluster() -> impl Strategy<Value = ClusterConfig> {
    (
        option::of(any::<bool>()),
        option::of(option::of(hostname()).prop_map(|host| ClusterRegion { host })),
        option::of(prop_oneof![Just(ClusterRole::Master), Just(ClusterRole::Worker)]),
        option::of(any::<bool>()),
    )
        .prop_map(|(enabled, region, role, enable_iframe)| ClusterConfig {
            enabled,
            region,
            role,
            enable_iframe,
        })
}

fn region() -> impl Strategy<Value = RegionConfig> {
    let bind = (option::of(hostname()), option::of(1u16..=u16::MAX))
        .prop_map(|(host, port)| BindConfig { host, port });
    let admin = (option::of(free_text()), option::of(free_text()), option::of(email())).prop_map(
        |(username, password, email)| AdminConfig {
            username,
            password: password.map(Secret::new),
            email,
        },
    );
    let database = (
        option::of(Just(DatabaseEngine::Postgresql)),
        option::of(hostname()),
        option::of(word()),
        option::of(word()),
        option::of(word()),
    )
        .prop_map(|(engine, host, name, password, username)| DatabaseConfig {
            engine,
            host,
            name,
            password: password.map(Secret::new),
            username,
        });

    (
        option::of(free_text()),
        option::of(bind),
        option::of(admin),
        option::of(database),
        option::of(any::<bool>()),
    )
        .prop_map(|(theme, bind, admin, database, enabled)| RegionConfig {
            theme,
            bind,
            admin,
            database,
            enabled,
        })
}

fn maas_config() -> impl Strategy<Value = MaasConfig> {
    (
        option::of(hostname().prop_map(|host| format!("https://{host}/MAAS/"))),
        option::of(token()),
        cluster(),
        region(),
    )
        .prop_map(|(url, token, cluster, region)| MaasConfig {
            url,
            token,
            cluster,
            region,
        })
}

proptest! {
    /// Property: `to_yaml` output reloads into an equal configuration.
    #[test]
    fn prop_yaml_round_trip(config in maas_config()) {
        let yaml = config.to_yaml().expect("configuration serializes");
        let reloaded = ConfigLoader::load_from_str(&yaml)
            .map_err(|err| TestCaseError::fail(format!("{err}\n---\n{yaml}")))?;
        prop_assert_eq!(reloaded, config);
    }
}

#[test]
fn test_reference_round_trip() {
    let reference = MaasConfig::reference();
    let reloaded = ConfigLoader::load_from_str(&reference.to_yaml().unwrap()).unwrap();
    assert_eq!(reloaded, reference);
}
