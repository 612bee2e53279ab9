use crate::error::DeisError;
use figment::{Figment, providers::{Env, Format, Serialized, Yaml}};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Client-side configuration, separate from the per-profile session state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Profile override. `None` means "use the default profile".
    ///
    /// Env values such as `2024` or `true` arrive as scalars and are kept as
    /// their text.
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub profile: Option<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String { "warn".into() }

fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarVisitor;

    impl<'de> Visitor<'de> for ScalarVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_char<E: de::Error>(self, v: char) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(ScalarVisitor)
        }
    }

    deserializer.deserialize_option(ScalarVisitor)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            profile: None,
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Load defaults, an optional YAML file, then `DEIS_*` env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, DeisError> {
        let config: ClientConfig = Self::figment(path).extract()?;
        tracing::debug!(
            profile = config.profile.as_deref().unwrap_or("<default>"),
            log_level = %config.log_level,
            "client config loaded"
        );
        Ok(config)
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(ClientConfig::default()));
        if let Some(p) = path {
            figment = figment.merge(Yaml::file(p));
        }
        figment.merge(Env::prefixed("DEIS_").only(&["profile", "log_level"]))
    }
}
