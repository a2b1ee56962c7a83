//! Page load entry point.

use serde::Serialize;

use crate::address::Resolver;
use crate::bind::{
    bind_publisher_view, bind_watcher_view, BindError, PublisherTargets, WatcherTargets,
};
use crate::name::{resolve_name, BroadcastName, Role};
use crate::page::Page;

/// The page entry points of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVariant {
    Watch,
    Publish,
    /// Browser support report; nothing to bind.
    Support,
}

impl PageVariant {
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Watch => Some(Role::Watcher),
            Self::Publish => Some(Role::Publisher),
            Self::Support => None,
        }
    }
}

/// Role and name a loaded page is bound to. Fixed for the life of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewContext {
    pub role: Role,
    pub name: BroadcastName,
}

/// Locate the page's elements, read the name once and bind.
///
/// Every element is located before anything is written, so a
/// [`BindError::MissingTargetElement`] leaves the page untouched.
pub fn bootstrap<P: Page>(
    page: &mut P,
    variant: PageVariant,
    query: &str,
    resolver: &Resolver,
) -> Result<Option<ViewContext>, BindError> {
    let context = match variant {
        PageVariant::Watch => {
            let targets = WatcherTargets::locate(&*page)?;
            let name = resolve_name(query, Role::Watcher);
            let url = bind_watcher_view(page, &targets, &name, resolver);
            tracing::info!(%name, %url, "bound watch page");
            ViewContext {
                role: Role::Watcher,
                name,
            }
        }
        PageVariant::Publish => {
            let targets = PublisherTargets::locate(&*page)?;
            let name = resolve_name(query, Role::Publisher);
            let binding = bind_publisher_view(page, &targets, &name, resolver);
            tracing::info!(
                %name,
                url = %binding.url,
                link = %binding.watch_link,
                "bound publish page"
            );
            ViewContext {
                role: Role::Publisher,
                name,
            }
        }
        PageVariant::Support => return Ok(None),
    };
    Ok(Some(context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::{HREF_ATTR, URL_ATTR};
    use crate::page::fake::FakePage;
    use crate::page::Target;

    fn publish_page() -> FakePage {
        FakePage::with(&[Target::Publish, Target::WatchLink, Target::WatchLabel])
    }

    #[test]
    fn watch_page_without_query_binds_default() {
        let mut page = FakePage::with(&[Target::Watch]);
        let ctx = bootstrap(&mut page, PageVariant::Watch, "", &Resolver::default())
            .unwrap()
            .unwrap();
        assert_eq!(ctx.role, Role::Watcher);
        assert_eq!(ctx.name.as_str(), "bbb");
        assert_eq!(
            page.element(Target::Watch).attrs.get(URL_ATTR).unwrap(),
            "https://relay.xn--tlay-0ra.com/anon/bbb.hang"
        );
    }

    #[test]
    fn publish_page_with_name() {
        let mut page = publish_page();
        let ctx = bootstrap(
            &mut page,
            PageVariant::Publish,
            "?name=demo/me",
            &Resolver::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(ctx.role, Role::Publisher);
        assert_eq!(
            page.element(Target::Publish).attrs.get(URL_ATTR).unwrap(),
            "https://relay.xn--tlay-0ra.com/anon/demo/me.hang"
        );
        assert_eq!(
            page.element(Target::WatchLink).attrs.get(HREF_ATTR).unwrap(),
            "index.html?name=demo/me"
        );
        assert_eq!(page.element(Target::WatchLabel).text.as_deref(), Some("demo/me"));
    }

    #[test]
    fn publish_page_missing_elements_binds_nothing() {
        // Component present, link and label missing.
        let mut page = FakePage::with(&[Target::Publish]);
        let err = bootstrap(&mut page, PageVariant::Publish, "", &Resolver::default())
            .unwrap_err();
        assert_eq!(err, BindError::MissingTargetElement(Target::WatchLink));
        assert!(page.untouched());

        let mut wrong = FakePage::with(&[Target::Watch]);
        let err = bootstrap(&mut wrong, PageVariant::Publish, "", &Resolver::default())
            .unwrap_err();
        assert_eq!(err, BindError::MissingTargetElement(Target::Publish));
        assert!(wrong.untouched());
    }

    #[test]
    fn support_page_binds_nothing() {
        let mut page = FakePage::default();
        let ctx = bootstrap(&mut page, PageVariant::Support, "?name=x", &Resolver::default());
        assert_eq!(ctx, Ok(None));
    }

    #[test]
    fn variant_roles() {
        assert_eq!(PageVariant::Watch.role(), Some(Role::Watcher));
        assert_eq!(PageVariant::Publish.role(), Some(Role::Publisher));
        assert_eq!(PageVariant::Support.role(), None);
    }
}
