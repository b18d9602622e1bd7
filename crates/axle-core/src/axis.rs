use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of axes that Axle validates beyond plain resolution.
pub mod names {
    pub const COMPILE_SDK: &str = "compileSdk";
    pub const MIN_SDK: &str = "minSdk";
    pub const TARGET_SDK: &str = "targetSdk";
    pub const JVM_TARGET: &str = "jvmTarget";
    pub const SOURCE_COMPATIBILITY: &str = "sourceCompatibility";
    pub const TARGET_COMPATIBILITY: &str = "targetCompatibility";
    pub const DESUGARING_ENABLED: &str = "coreLibraryDesugaringEnabled";
    pub const SIGNING_CONFIG: &str = "signingConfig";
}

/// A typed axis value: `true`, `34` or `"17"` in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Bool(bool),
    Integer(i64),
    String(String),
}

impl AxisValue {
    /// Type a raw string the way `.properties` values are read:
    /// `true`/`false` become booleans, integers become integers.
    pub fn parse_typed(raw: &str) -> Self {
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => raw
                .parse::<i64>()
                .map(Self::Integer)
                .unwrap_or_else(|_| Self::String(raw.to_string())),
        }
    }

    /// Boolean view of the value. `"true"` and `"false"` strings count.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::String(s) => s.parse().ok(),
            Self::Integer(_) => None,
        }
    }

    /// Integer view of the value. Numeric strings such as `"34"` count.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::String(s) => s.parse().ok(),
            Self::Bool(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AxisValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for AxisValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for AxisValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Where an axis declaration gets its value from.
///
/// Written either as a literal (`targetSdk = 34`) or as a deferred table
/// (`compileSdk = { provider = "flutter", key = "compileSdkVersion" }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisSource {
    Literal(AxisValue),
    Deferred(DeferredAxis),
}

/// An axis whose value comes from a named provider.
///
/// With no `provider` the axis is declared but has no value source at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeferredAxis {
    #[serde(default)]
    pub provider: Option<String>,
    /// Key to look up in the provider; defaults to the axis name.
    #[serde(default)]
    pub key: Option<String>,
}

impl AxisSource {
    pub fn literal(value: impl Into<AxisValue>) -> Self {
        Self::Literal(value.into())
    }

    pub fn from_provider(provider: &str, key: Option<&str>) -> Self {
        Self::Deferred(DeferredAxis {
            provider: Some(provider.to_string()),
            key: key.map(str::to_string),
        })
    }

    /// A declaration with no literal and no provider.
    pub fn unset() -> Self {
        Self::Deferred(DeferredAxis::default())
    }
}
