//! Server-side page documents the core binds into.

use std::fmt::Write;

use broadcast::{Page, PageVariant, Target};

/// An element whose attributes and text may be set by the binder.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Element {
    tag: &'static str,
    id: Option<&'static str>,
    attrs: Vec<(String, String)>,
    text: Option<String>,
}

impl Element {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            attrs: Vec::new(),
            text: None,
        }
    }

    fn with_id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    #[cfg(test)]
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn matches(&self, target: Target) -> bool {
        let selector = target.selector();
        match selector.strip_prefix('#') {
            Some(id) => self.id == Some(id),
            None => self.tag == selector,
        }
    }

    fn render(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if let Some(id) = self.id {
            let _ = write!(out, " id=\"{}\"", escape(id));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    /// Fixed markup, emitted as is.
    Markup(&'static str),
    Element(Element),
}

/// A page body plus title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: &'static str,
    body: Vec<Node>,
}

impl Document {
    fn new(title: &'static str, body: Vec<Node>) -> Self {
        Self { title, body }
    }

    /// The shell served for a page variant.
    pub fn for_variant(variant: PageVariant) -> Self {
        match variant {
            PageVariant::Watch => Self::watch(),
            PageVariant::Publish => Self::publish(),
            PageVariant::Support => Self::support(),
        }
    }

    pub fn watch() -> Self {
        Self::new(
            "Hang - Watch",
            vec![
                Node::Element(Element::new("hang-support")),
                Node::Element(Element::new("hang-watch")),
                Node::Markup(r#"<p>Go <a href="publish.html">publish</a>"#),
                Node::Markup("your own broadcast.</p>"),
            ],
        )
    }

    pub fn publish() -> Self {
        Self::new(
            "Hang - Publish",
            vec![
                Node::Element(Element::new("hang-support")),
                Node::Element(Element::new("hang-publish")),
                Node::Markup("<p>Watch "),
                Node::Element(Element::new("span").with_id("watch-name")),
                Node::Markup(" at "),
                Node::Element(
                    Element {
                        text: Some("this link".to_string()),
                        ..Element::new("a")
                    }
                    .with_id("watch"),
                ),
                Node::Markup(".</p>"),
            ],
        )
    }

    pub fn support() -> Self {
        Self::new(
            "Hang - Support",
            vec![
                Node::Element(Element::new("hang-support")),
                Node::Markup(r#"<p><a href="index.html">Watch</a> or"#),
                Node::Markup(r#"<a href="publish.html">publish</a>.</p>"#),
            ],
        )
    }

    #[cfg(test)]
    fn element(&self, target: Target) -> Option<&Element> {
        self.find(target).and_then(|i| match &self.body[i] {
            Node::Element(element) => Some(element),
            Node::Markup(_) => None,
        })
    }

    pub fn render(&self) -> String {
        let mut out = String::from("<!doctype html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape(self.title));
        out.push_str("</head>\n<body>\n");
        for node in &self.body {
            match node {
                Node::Markup(markup) => out.push_str(markup),
                Node::Element(element) => element.render(&mut out),
            }
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        out
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut Element> {
        match self.body.get_mut(index) {
            Some(Node::Element(element)) => Some(element),
            _ => None,
        }
    }
}

impl Page for Document {
    type Handle = usize;

    fn find(&self, target: Target) -> Option<usize> {
        self.body.iter().position(|node| match node {
            Node::Element(element) => element.matches(target),
            Node::Markup(_) => false,
        })
    }

    fn set_attribute(&mut self, element: usize, attr: &str, value: &str) {
        if let Some(element) = self.element_mut(element) {
            match element.attrs.iter_mut().find(|(k, _)| k == attr) {
                Some((_, v)) => *v = value.to_string(),
                None => element.attrs.push((attr.to_string(), value.to_string())),
            }
        }
    }

    fn set_text(&mut self, element: usize, text: &str) {
        if let Some(element) = self.element_mut(element) {
            element.text = Some(text.to_string());
        }
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
