//! Broadcast names and the query-string name source.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Query parameter carrying the broadcast name.
pub const NAME_PARAM: &str = "name";

/// Which side of a broadcast a page is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Publisher,
    Watcher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Publisher => "publisher",
            Self::Watcher => "watcher",
        }
    }

    /// Name used when the page address does not carry one.
    pub fn default_name(&self) -> &'static str {
        match self {
            Self::Publisher => "demo/me",
            Self::Watcher => "bbb",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "publish" | "publisher" => Ok(Self::Publisher),
            "watch" | "watcher" => Ok(Self::Watcher),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Non-empty, `/`-separated broadcast identifier. Otherwise opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BroadcastName(String);

impl BroadcastName {
    /// Returns `None` for an empty string.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl fmt::Display for BroadcastName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BroadcastName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Read the broadcast name from a page query string, falling back to the
/// role default when `name` is absent or empty.
///
/// The first `name` pair wins. Values are form-urlencoded decoded; no
/// character validation is applied.
pub fn resolve_name(query: &str, role: Role) -> BroadcastName {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == NAME_PARAM)
        .and_then(|(_, value)| BroadcastName::new(value.into_owned()))
        .unwrap_or_else(|| BroadcastName(role.default_name().to_string()))
}
