//! Renderable content tree.
//!
//! Shells produce and consume [`Node`] values. A node is either an element,
//! escaped text, trusted raw markup, or a fragment of siblings. Elements can
//! be tagged with the [`Region`] they represent in a shell and with a
//! [`Visibility`] that ties them to a viewport breakpoint.

use std::fmt::{self, Write};

use crate::ui::tokens::Breakpoint;

/// A named slot in a shell's output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Site-wide header.
    Header,
    /// Page content between header and footer.
    Content,
    /// Site-wide footer.
    Footer,
    /// Account navigation column.
    Sidebar,
    /// Account page content.
    Main,
}

impl Region {
    /// Name emitted as the `data-region` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Content => "content",
            Self::Footer => "footer",
            Self::Sidebar => "sidebar",
            Self::Main => "main",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an element exists at a given viewport width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Present at every width.
    #[default]
    Always,
    /// Present only at or above the breakpoint's minimum width.
    FromBreakpoint(Breakpoint),
}

impl Visibility {
    /// Returns `true` if an element with this visibility exists at `width`.
    pub fn is_visible_at(self, width: u32) -> bool {
        match self {
            Self::Always => true,
            Self::FromBreakpoint(bp) => width >= bp.min_width(),
        }
    }
}

/// An HTML element with optional region metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(String, String)>,
    pub region: Option<Region>,
    pub visibility: Visibility,
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            region: None,
            visibility: Visibility::Always,
            children: Vec::new(),
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Adds a `class` attribute.
    #[must_use]
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Marks the element as a shell region.
    #[must_use]
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Ties the element's existence to a viewport breakpoint.
    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends every node from `children`.
    #[must_use]
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Looks up an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn is_void(&self) -> bool {
        matches!(
            self.tag,
            "area" | "br" | "hr" | "img" | "input" | "link" | "meta" | "source" | "wbr"
        )
    }
}

/// A renderable content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text, escaped on output.
    Text(String),
    /// Trusted markup written verbatim.
    Raw(String),
    /// Sibling nodes without a wrapping element.
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn raw(markup: impl Into<String>) -> Self {
        Self::Raw(markup.into())
    }

    /// An empty fragment.
    pub fn empty() -> Self {
        Self::Fragment(Vec::new())
    }

    /// Returns `true` if the node renders to nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Element(_) => false,
            Self::Text(s) | Self::Raw(s) => s.is_empty(),
            Self::Fragment(nodes) => nodes.iter().all(Node::is_empty),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Every element in the tree, depth-first in document order.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_elements(&mut out);
        out
    }

    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        match self {
            Self::Element(el) => {
                out.push(el);
                for child in &el.children {
                    child.collect_elements(out);
                }
            }
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.collect_elements(out);
                }
            }
            Self::Text(_) | Self::Raw(_) => {}
        }
    }

    /// Returns a copy of the tree without elements hidden at `width`.
    #[must_use]
    pub fn resolve(&self, width: u32) -> Option<Self> {
        match self {
            Self::Element(el) => {
                if !el.visibility.is_visible_at(width) {
                    return None;
                }
                Some(Self::Element(Element {
                    tag: el.tag,
                    attrs: el.attrs.clone(),
                    region: el.region,
                    visibility: el.visibility,
                    children: el.children.iter().filter_map(|c| c.resolve(width)).collect(),
                }))
            }
            Self::Fragment(nodes) => Some(Self::Fragment(
                nodes.iter().filter_map(|n| n.resolve(width)).collect(),
            )),
            other => Some(other.clone()),
        }
    }

    /// Serialises the tree as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut impl Write) -> fmt::Result {
        match self {
            Self::Text(s) => escape_into(out, s, false),
            Self::Raw(s) => out.write_str(s),
            Self::Fragment(nodes) => nodes.iter().try_for_each(|n| n.write_html(&mut *out)),
            Self::Element(el) => {
                write!(out, "<{}", el.tag)?;
                for (name, value) in &el.attrs {
                    write!(out, " {name}=\"")?;
                    escape_into(out, value, true)?;
                    out.write_char('"')?;
                }
                if let Some(region) = el.region {
                    write!(out, " data-region=\"{region}\"")?;
                }
                out.write_char('>')?;
                if el.is_void() {
                    return Ok(());
                }
                for child in &el.children {
                    child.write_html(out)?;
                }
                write!(out, "</{}>", el.tag)
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_html(f)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Fragment(nodes)
    }
}

fn escape_into(out: &mut impl Write, s: &str, attr: bool) -> fmt::Result {
    for c in s.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' if attr => out.write_str("&quot;")?,
            '\'' if attr => out.write_str("&#39;")?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}
