use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Dependency declarations as written in `[dependencies]`:
/// scope name to a list of `"group:artifact:version"` strings.
pub type DependencyDecls = BTreeMap<String, Vec<String>>;

/// Configuration a dependency is declared in.
///
/// The scope decides which classpaths the dependency joins, and whether it
/// feeds a build-time transformation (core library desugaring) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyScope {
    Api,
    Implementation,
    CompileOnly,
    RuntimeOnly,
    TestImplementation,
    CoreLibraryDesugaring,
}

impl DependencyScope {
    pub const ALL: [DependencyScope; 6] = [
        Self::Api,
        Self::Implementation,
        Self::CompileOnly,
        Self::RuntimeOnly,
        Self::TestImplementation,
        Self::CoreLibraryDesugaring,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Implementation => "implementation",
            Self::CompileOnly => "compileOnly",
            Self::RuntimeOnly => "runtimeOnly",
            Self::TestImplementation => "testImplementation",
            Self::CoreLibraryDesugaring => "coreLibraryDesugaring",
        }
    }

    /// Whether the dependency is visible to the main compilation.
    pub fn on_compile_classpath(&self) -> bool {
        matches!(self, Self::Api | Self::Implementation | Self::CompileOnly)
    }

    /// Whether the dependency is packaged into the runtime.
    pub fn on_runtime_classpath(&self) -> bool {
        matches!(self, Self::Api | Self::Implementation | Self::RuntimeOnly)
    }

    /// Whether the dependency feeds the desugaring transformation.
    pub fn is_desugaring(&self) -> bool {
        matches!(self, Self::CoreLibraryDesugaring)
    }

    /// Combine two declarations of the same coordinate.
    ///
    /// Identical scopes merge trivially and `api` subsumes `implementation`.
    /// Every other pairing is incompatible and yields `None`.
    pub fn merge(self, other: Self) -> Option<Self> {
        match (self, other) {
            (a, b) if a == b => Some(a),
            (Self::Api, Self::Implementation) | (Self::Implementation, Self::Api) => {
                Some(Self::Api)
            }
            _ => None,
        }
    }
}

impl fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|s| s.as_str()).collect();
                format!("unknown dependency scope '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

/// Maven coordinates parsed from a `"group:artifact:version"` string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl Coordinate {
    /// Parse `"group:artifact:version"` into coordinates.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        match parts.as_slice() {
            [group, artifact, version]
                if !group.is_empty() && !artifact.is_empty() && !version.is_empty() =>
            {
                Some(Self {
                    group: group.to_string(),
                    artifact: artifact.to_string(),
                    version: version.to_string(),
                })
            }
            _ => None,
        }
    }

    /// `group:artifact` identifier (without version).
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}
