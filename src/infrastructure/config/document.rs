//! Raw, untyped view of a configuration document.
//!
//! Every field is optional and scalars are accepted in whatever shape YAML or
//! the environment hands them over; range and format checks happen in
//! [`super::validator`].

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// Contents of the top-level `maas` key.
#[derive(Debug, Default, Deserialize)]
pub struct RawMaas {
    pub url: Option<Text>,
    pub token: Option<Text>,
    pub cluster: Option<RawCluster>,
    pub region: Option<RawRegion>,
}

/// Unvalidated `maas.cluster` section.
#[derive(Debug, Default, Deserialize)]
pub struct RawCluster {
    pub enabled: Option<Flag>,
    pub region: Option<RawClusterRegion>,
    pub role: Option<Text>,
    pub enable_iframe: Option<Flag>,
}

/// Unvalidated `maas.cluster.region` section.
#[derive(Debug, Default, Deserialize)]
pub struct RawClusterRegion {
    pub host: Option<Text>,
}

/// Unvalidated `maas.region` section.
#[derive(Debug, Default, Deserialize)]
pub struct RawRegion {
    pub theme: Option<Text>,
    pub bind: Option<RawBind>,
    pub admin: Option<RawAdmin>,
    pub database: Option<RawDatabase>,
    pub enabled: Option<Flag>,
}

/// Unvalidated `maas.region.bind` section.
#[derive(Debug, Default, Deserialize)]
pub struct RawBind {
    pub host: Option<Text>,
    pub port: Option<Int>,
}

/// Unvalidated `maas.region.admin` section.
#[derive(Debug, Default, Deserialize)]
pub struct RawAdmin {
    pub username: Option<Text>,
    pub password: Option<Text>,
    pub email: Option<Text>,
}

/// Unvalidated `maas.region.database` section.
#[derive(Debug, Default, Deserialize)]
pub struct RawDatabase {
    pub engine: Option<Text>,
    pub host: Option<Text>,
    pub name: Option<Text>,
    pub password: Option<Text>,
    pub username: Option<Text>,
}

/// Boolean that also accepts `"true"`/`"false"` in any letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag(pub bool);

/// Integer that also accepts a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int(pub i64);

/// String that also accepts numbers and booleans, keeping their text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(pub String);

/// Parse a boolean literal ignoring case and surrounding whitespace.
pub fn parse_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

struct FlagVisitor;

impl Visitor<'_> for FlagVisitor {
    type Value = Flag;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean (true or false)")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Flag, E> {
        Ok(Flag(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Flag, E> {
        parse_flag(v)
            .map(Flag)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FlagVisitor)
    }
}

struct IntVisitor;

impl Visitor<'_> for IntVisitor {
    type Value = Int;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Int, E> {
        Ok(Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Int, E> {
        i64::try_from(v)
            .map(Int)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Int, E> {
        v.trim()
            .parse()
            .map(Int)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Int {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IntVisitor)
    }
}

struct TextVisitor;

impl Visitor<'_> for TextVisitor {
    type Value = Text;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Text, E> {
        Ok(Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Text, E> {
        Ok(Text(v))
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<Text, E> {
        Ok(Text(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Text, E> {
        Ok(Text(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Text, E> {
        Ok(Text(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Text, E> {
        Ok(Text(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Text, E> {
        Ok(Text(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TextVisitor)
    }
}
