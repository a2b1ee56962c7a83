//! Hang demo core — broadcast name resolution and page binding.

mod address;
mod bind;
mod bootstrap;
mod name;
mod page;

// Explicit re-exports (avoids rust-analyzer issues with glob re-exports)
pub use address::{
    RelayUrl, Resolver, ResolverConfig, DEFAULT_RELAY_HOST, DEFAULT_WATCH_PAGE, EXTENSION,
    NAMESPACE,
};
pub use bind::{
    bind_publisher_view, bind_watcher_view, BindError, PublisherBinding, PublisherTargets,
    WatcherTargets, HREF_ATTR, URL_ATTR,
};
pub use bootstrap::{bootstrap, PageVariant, ViewContext};
pub use name::{resolve_name, BroadcastName, Role, NAME_PARAM};
pub use page::{Page, Target};
