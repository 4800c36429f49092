use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A `major.minor.patch` object version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    /// Incremented on incompatible changes.
    pub major: u16,
    /// Incremented on compatible additions.
    pub minor: u16,
    /// Incremented on fixes.
    pub patch: u16,
}

impl Version {
    /// Constructs a version from its three components.
    #[must_use]
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self { Self { major, minor, patch } }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Error returned when a version string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// More than three dot-separated components.
    #[error("version {0:?} has more than three components")]
    TooManyComponents(String),
    /// A component is not a 16-bit unsigned integer.
    #[error("version component {component:?} of {input:?} is not a number")]
    InvalidComponent {
        /// The whole input.
        input:     String,
        /// The offending component.
        component: String,
    },
}

impl FromStr for Version {
    type Err = VersionError;

    /// Missing trailing components default to zero, so `"1"` is `1.0.0`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = [0u16; 3];
        if input.is_empty() {
            return Ok(Self::default());
        }
        for (index, component) in input.split('.').enumerate() {
            let slot = parts
                .get_mut(index)
                .ok_or_else(|| VersionError::TooManyComponents(input.to_owned()))?;
            *slot = component.trim().parse().map_err(|_| VersionError::InvalidComponent {
                input:     input.to_owned(),
                component: component.to_owned(),
            })?;
        }
        let [major, minor, patch] = parts;
        Ok(Self { major, minor, patch })
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let string = String::deserialize(deserializer)?;
        string.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "schema")]
impl schemars::JsonSchema for Version {
    fn schema_name() -> std::borrow::Cow<'static, str> { "Version".into() }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        <String as schemars::JsonSchema>::json_schema(generator)
    }
}
