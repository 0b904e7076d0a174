use std::time::Duration;

use serde::Deserialize;

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins (wildcard "*" or explicit list)
    #[serde(default)]
    pub origins: AllowList,
    /// Allowed HTTP methods (wildcard "*" or explicit list)
    #[serde(default)]
    pub methods: AllowList,
    /// Allowed headers (wildcard "*" or explicit list)
    #[serde(default)]
    pub headers: AllowList,
    /// Max age for preflight cache in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

/// Either a wildcard "*" or explicit list of values
#[derive(Debug, Clone)]
pub enum AllowList {
    /// Match any value
    Any,
    /// Explicit list
    List(Vec<String>),
}

impl Default for AllowList {
    fn default() -> Self {
        Self::Any
    }
}

impl<'de> Deserialize<'de> for AllowList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de;

        struct AllowListVisitor;

        impl<'de> de::Visitor<'de> for AllowListVisitor {
            type Value = AllowList;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("\"*\" or array of strings")
            }

            fn visit_str<E>(self, v: &str) -> Result<AllowList, E>
            where
                E: de::Error,
            {
                if v == "*" {
                    Ok(AllowList::Any)
                } else {
                    Ok(AllowList::List(vec![v.to_string()]))
                }
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<AllowList, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut values = Vec::new();
                while let Some(val) = seq.next_element::<String>()? {
                    if val == "*" {
                        return Ok(AllowList::Any);
                    }
                    values.push(val);
                }
                Ok(AllowList::List(values))
            }
        }

        deserializer.deserialize_any(AllowListVisitor)
    }
}

impl CorsConfig {
    /// Get max age as Duration
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}
