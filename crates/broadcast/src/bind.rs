//! Pushes resolved addresses onto page elements.

use thiserror::Error;

use crate::address::{RelayUrl, Resolver};
use crate::name::BroadcastName;
use crate::page::{Page, Target};

/// Attribute the hang components read their relay URL from.
pub const URL_ATTR: &str = "url";
pub const HREF_ATTR: &str = "href";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The page lacks an element it cannot work without.
    #[error("missing target element: {0}")]
    MissingTargetElement(Target),
}

fn locate<P: Page>(page: &P, target: Target) -> Result<P::Handle, BindError> {
    page.find(target).ok_or(BindError::MissingTargetElement(target))
}

/// Elements of a watch page.
#[derive(Debug, Clone, Copy)]
pub struct WatcherTargets<H> {
    pub watch: H,
}

impl<H: Copy> WatcherTargets<H> {
    pub fn locate<P: Page<Handle = H>>(page: &P) -> Result<Self, BindError> {
        Ok(Self {
            watch: locate(page, Target::Watch)?,
        })
    }
}

/// Elements of a publish page.
#[derive(Debug, Clone, Copy)]
pub struct PublisherTargets<H> {
    pub publish: H,
    pub link: H,
    pub label: H,
}

impl<H: Copy> PublisherTargets<H> {
    pub fn locate<P: Page<Handle = H>>(page: &P) -> Result<Self, BindError> {
        Ok(Self {
            publish: locate(page, Target::Publish)?,
            link: locate(page, Target::WatchLink)?,
            label: locate(page, Target::WatchLabel)?,
        })
    }
}

/// What a publish page ended up bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherBinding {
    pub url: RelayUrl,
    pub watch_link: String,
}

/// Point the watcher component at the broadcast.
pub fn bind_watcher_view<P: Page>(
    page: &mut P,
    targets: &WatcherTargets<P::Handle>,
    name: &BroadcastName,
    resolver: &Resolver,
) -> RelayUrl {
    let url = resolver.resolve_address(name);
    page.set_attribute(targets.watch, URL_ATTR, url.as_str());
    url
}

/// Point the publisher component at the broadcast, link to the matching
/// watch page and show the name.
pub fn bind_publisher_view<P: Page>(
    page: &mut P,
    targets: &PublisherTargets<P::Handle>,
    name: &BroadcastName,
    resolver: &Resolver,
) -> PublisherBinding {
    let url = resolver.resolve_address(name);
    let watch_link = resolver.watch_link(name);
    page.set_attribute(targets.publish, URL_ATTR, url.as_str());
    page.set_attribute(targets.link, HREF_ATTR, &watch_link);
    page.set_text(targets.label, name.as_str());
    PublisherBinding { url, watch_link }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::{resolve_name, Role};
    use crate::page::fake::FakePage;

    fn name(s: &str) -> BroadcastName {
        BroadcastName::new(s).unwrap()
    }

    #[test]
    fn watcher_sets_url_attribute() {
        let mut page = FakePage::with(&[Target::Watch]);
        let targets = WatcherTargets::locate(&page).unwrap();
        let url = bind_watcher_view(&mut page, &targets, &name("bbb"), &Resolver::default());

        let watch = page.element(Target::Watch);
        assert_eq!(watch.attrs.get(URL_ATTR).map(String::as_str), Some(url.as_str()));
        assert_eq!(url.as_str(), "https://relay.xn--tlay-0ra.com/anon/bbb.hang");
        assert_eq!(watch.attrs.len(), 1);
    }

    #[test]
    fn publisher_sets_url_link_and_label() {
        let mut page = FakePage::with(&[Target::Publish, Target::WatchLink, Target::WatchLabel]);
        let targets = PublisherTargets::locate(&page).unwrap();
        let binding =
            bind_publisher_view(&mut page, &targets, &name("demo/me"), &Resolver::default());

        assert_eq!(
            page.element(Target::Publish).attrs.get(URL_ATTR).unwrap(),
            "https://relay.xn--tlay-0ra.com/anon/demo/me.hang"
        );
        assert_eq!(
            page.element(Target::WatchLink).attrs.get(HREF_ATTR).unwrap(),
            "index.html?name=demo/me"
        );
        assert_eq!(page.element(Target::WatchLabel).text.as_deref(), Some("demo/me"));
        assert_eq!(binding.watch_link, "index.html?name=demo/me");
    }

    #[test]
    fn publisher_link_leads_to_same_relay_url() {
        let resolver = Resolver::default();
        for n in ["demo/me", "odd name?#&", "ünïcode/x"] {
            let mut publish =
                FakePage::with(&[Target::Publish, Target::WatchLink, Target::WatchLabel]);
            let targets = PublisherTargets::locate(&publish).unwrap();
            let binding = bind_publisher_view(&mut publish, &targets, &name(n), &resolver);

            let (_, query) = binding.watch_link.split_once('?').unwrap();
            let mut watch = FakePage::with(&[Target::Watch]);
            let targets = WatcherTargets::locate(&watch).unwrap();
            let followed = resolve_name(query, Role::Watcher);
            let url = bind_watcher_view(&mut watch, &targets, &followed, &resolver);

            assert_eq!(followed.as_str(), n);
            assert_eq!(url, binding.url);
        }
    }

    #[test]
    fn locate_reports_first_missing_element() {
        let page = FakePage::with(&[Target::Publish, Target::WatchLabel]);
        let err = PublisherTargets::locate(&page).unwrap_err();
        assert_eq!(err, BindError::MissingTargetElement(Target::WatchLink));
        assert_eq!(err.to_string(), "missing target element: #watch");

        let empty = FakePage::default();
        assert_eq!(
            WatcherTargets::locate(&empty).unwrap_err(),
            BindError::MissingTargetElement(Target::Watch)
        );
    }
}
