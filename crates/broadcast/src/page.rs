//! Capabilities the binder needs from a page.

use std::fmt;

/// Well-known elements the demo pages carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// `<hang-watch>` component.
    Watch,
    /// `<hang-publish>` component.
    Publish,
    /// Anchor pointing at the watch page (`#watch`).
    WatchLink,
    /// Span showing the broadcast name (`#watch-name`).
    WatchLabel,
}

impl Target {
    /// CSS selector identifying the element.
    pub fn selector(&self) -> &'static str {
        match self {
            Self::Watch => "hang-watch",
            Self::Publish => "hang-publish",
            Self::WatchLink => "#watch",
            Self::WatchLabel => "#watch-name",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// A rendered page whose elements are owned elsewhere.
pub trait Page {
    type Handle: Copy;

    fn find(&self, target: Target) -> Option<Self::Handle>;

    fn set_attribute(&mut self, element: Self::Handle, attr: &str, value: &str);

    fn set_text(&mut self, element: Self::Handle, text: &str);
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::BTreeMap;

    use super::{Page, Target};

    #[derive(Debug, Default)]
    pub struct FakeElement {
        pub target: Option<Target>,
        pub attrs: BTreeMap<String, String>,
        pub text: Option<String>,
    }

    /// In-memory page holding one element per listed target.
    #[derive(Debug, Default)]
    pub struct FakePage {
        pub elements: Vec<FakeElement>,
    }

    impl FakePage {
        pub fn with(targets: &[Target]) -> Self {
            Self {
                elements: targets
                    .iter()
                    .map(|t| FakeElement {
                        target: Some(*t),
                        ..Default::default()
                    })
                    .collect(),
            }
        }

        pub fn element(&self, target: Target) -> &FakeElement {
            self.elements
                .iter()
                .find(|e| e.target == Some(target))
                .unwrap()
        }

        pub fn untouched(&self) -> bool {
            self.elements
                .iter()
                .all(|e| e.attrs.is_empty() && e.text.is_none())
        }
    }

    impl Page for FakePage {
        type Handle = usize;

        fn find(&self, target: Target) -> Option<usize> {
            self.elements.iter().position(|e| e.target == Some(target))
        }

        fn set_attribute(&mut self, element: usize, attr: &str, value: &str) {
            self.elements[element]
                .attrs
                .insert(attr.to_string(), value.to_string());
        }

        fn set_text(&mut self, element: usize, text: &str) {
            self.elements[element].text = Some(text.to_string());
        }
    }
}
