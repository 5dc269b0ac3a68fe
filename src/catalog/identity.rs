use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Stable identifier for a catalog resource (e.g., `he-dns`).
///
/// Selections refer to resources by this key; the human-readable name is
/// only used when rendering error text.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub String);

impl ResourceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        ResourceId(value.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        ResourceId(value)
    }
}

/// Capability category a resource provides.
///
/// Several providers usually share one type. Known variants keep
/// serialization consistent; `Other` keeps catalogs that introduce new
/// categories loadable.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ResourceType {
    Storage,
    Dns,
    Cdn,
    Email,
    Other(String),
}

impl Serialize for ResourceType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResourceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

impl ResourceType {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceType::Storage => "storage",
            ResourceType::Dns => "dns",
            ResourceType::Cdn => "cdn",
            ResourceType::Email => "email",
            ResourceType::Other(value) => value.as_str(),
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "storage" => ResourceType::Storage,
            "dns" => ResourceType::Dns,
            "cdn" => ResourceType::Cdn,
            "email" => ResourceType::Email,
            other => ResourceType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
