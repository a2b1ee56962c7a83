//! Broadcast name → relay URL, and name → watch page link.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

use crate::name::{BroadcastName, NAME_PARAM};

/// Relay host used by the public demo (IDN, punycode form).
pub const DEFAULT_RELAY_HOST: &str = "relay.xn--tlay-0ra.com";
/// Anonymous namespace; broadcasts here need no token.
pub const NAMESPACE: &str = "anon";
pub const EXTENSION: &str = ".hang";
pub const DEFAULT_WATCH_PAGE: &str = "index.html";

/// Characters escaped inside a path segment when `escape_names` is on.
/// `/` is absent so segments stay segments.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters escaped in the `name` value of a watch link, so the watch page
/// decodes exactly the original name. `/` stays literal.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>');

/// Resolver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub relay_host: String,
    /// Percent-encode reserved characters in names before building the URL.
    pub escape_names: bool,
    /// Page that watch links point at, relative to the publish page.
    pub watch_page: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            relay_host: DEFAULT_RELAY_HOST.to_string(),
            escape_names: false,
            watch_page: DEFAULT_WATCH_PAGE.to_string(),
        }
    }
}

/// Fully qualified relay endpoint for a broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RelayUrl(String);

impl RelayUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RelayUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pure name codec. Never dereferences the addresses it builds.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// `https://{relay_host}/anon/{name}.hang`
    pub fn resolve_address(&self, name: &BroadcastName) -> RelayUrl {
        let path = if self.config.escape_names {
            name.segments()
                .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
                .collect::<Vec<_>>()
                .join("/")
        } else {
            name.as_str().to_string()
        };
        let url = format!(
            "https://{}/{}/{}{}",
            self.config.relay_host, NAMESPACE, path, EXTENSION
        );
        tracing::debug!(%name, %url, "resolved broadcast address");
        RelayUrl(url)
    }

    /// `{watch_page}?name={name}`; following it yields the same name.
    /// A watch page that already has a query gets `&name=` appended.
    pub fn watch_link(&self, name: &BroadcastName) -> String {
        let page = &self.config.watch_page;
        let sep = match page.find('?') {
            Some(i) if i + 1 == page.len() || page.ends_with('&') => "",
            Some(_) => "&",
            None => "?",
        };
        format!(
            "{}{}{}={}",
            page,
            sep,
            NAME_PARAM,
            utf8_percent_encode(name.as_str(), QUERY_VALUE)
        )
    }
}
