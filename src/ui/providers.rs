//! Collaborators that fill the shell regions the caller does not supply.
//!
//! The shells take no position on what a header, footer, or account nav looks
//! like; they ask a provider for a [`Node`] and place it. Any fault inside a
//! provider propagates to whoever invoked the shell.

use crate::ui::node::{Element, Node};

/// Supplies the site-wide header.
pub trait HeaderProvider {
    fn header(&self) -> Node;
}

/// Supplies the site-wide footer.
pub trait FooterProvider {
    fn footer(&self) -> Node;
}

/// Supplies account-section navigation.
///
/// Implementations decide which link is active on their own.
pub trait AccountNavProvider {
    fn account_nav(&self) -> Node;
}

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

const SPARKLES_PATH: &str = "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z";

/// Brand link plus primary navigation.
#[derive(Debug, Clone)]
pub struct SiteHeader {
    title: String,
    links: Vec<NavLink>,
    current_path: Option<String>,
}

impl SiteHeader {
    pub fn new(title: impl Into<String>, links: Vec<NavLink>) -> Self {
        Self {
            title: title.into(),
            links,
            current_path: None,
        }
    }

    /// Highlights the link matching `path`.
    #[must_use]
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.current_path = Some(path.into());
        self
    }
}

impl HeaderProvider for SiteHeader {
    fn header(&self) -> Node {
        let brand = Element::new("a")
            .attr("href", "/")
            .class("flex items-center gap-2 font-semibold")
            .child(Node::raw(format!(
                r#"<svg class="icon text-primary" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="{SPARKLES_PATH}"/></svg>"#
            )))
            .child(Element::new("span").class("text-lg").child(self.title.as_str()));

        let nav = Element::new("nav").class("flex items-center gap-1").children(
            self.links
                .iter()
                .map(|link| nav_anchor(link, self.current_path.as_deref(), "nav-link")),
        );

        Element::new("div")
            .class("mx-auto flex items-center justify-between px-4 py-3")
            .child(brand)
            .child(nav)
            .into()
    }
}

/// Footer with a single line of text.
#[derive(Debug, Clone)]
pub struct SiteFooter {
    text: String,
}

impl SiteFooter {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl FooterProvider for SiteFooter {
    fn footer(&self) -> Node {
        Element::new("div")
            .class("mx-auto px-4")
            .child(
                Element::new("p")
                    .class("text-sm text-muted text-center")
                    .child(self.text.as_str()),
            )
            .into()
    }
}

/// Account section links.
#[derive(Debug, Clone)]
pub struct AccountNav {
    links: Vec<NavLink>,
    current_path: Option<String>,
}

impl AccountNav {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self {
            links,
            current_path: None,
        }
    }

    /// The standard account section: overview, profile, settings.
    pub fn standard() -> Self {
        Self::new(vec![
            NavLink::new("/account", "Overview"),
            NavLink::new("/account/profile", "Profile"),
            NavLink::new("/account/settings", "Settings"),
        ])
    }

    /// Highlights the link matching `path`.
    #[must_use]
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.current_path = Some(path.into());
        self
    }
}

impl AccountNavProvider for AccountNav {
    fn account_nav(&self) -> Node {
        Element::new("nav")
            .class("flex flex-col gap-1")
            .attr("aria-label", "Account")
            .children(
                self.links
                    .iter()
                    .map(|link| nav_anchor(link, self.current_path.as_deref(), "nav-link block")),
            )
            .into()
    }
}

fn nav_anchor(link: &NavLink, current_path: Option<&str>, class: &str) -> Element {
    let anchor = Element::new("a")
        .attr("href", link.href.as_str())
        .class(class);
    let anchor = if current_path == Some(link.href.as_str()) {
        anchor.attr("aria-current", "page")
    } else {
        anchor
    };
    anchor.child(link.label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_nav_marks_active_link() {
        let html = AccountNav::standard()
            .at("/account/profile")
            .account_nav()
            .to_html();
        assert!(html.contains(
            r#"<a href="/account/profile" class="nav-link block" aria-current="page">Profile</a>"#
        ));
        assert_eq!(html.matches("aria-current").count(), 1);
    }

    #[test]
    fn account_nav_without_path_has_no_active_link() {
        let html = AccountNav::standard().account_nav().to_html();
        assert!(!html.contains("aria-current"));
        assert_eq!(html.matches("<a ").count(), 3);
    }

    #[test]
    fn header_renders_title_and_links() {
        let header = SiteHeader::new("Acme", vec![NavLink::new("/about", "About")]).at("/about");
        let html = header.header().to_html();
        assert!(html.contains("<span class=\"text-lg\">Acme</span>"));
        assert!(html.contains("aria-current=\"page\">About</a>"));
    }

    #[test]
    fn header_needs_no_scripts() {
        let html = SiteHeader::new("Acme", vec![NavLink::new("/", "Home")])
            .header()
            .to_html();
        assert!(!html.contains("hx-"));
        assert!(!html.contains("theme-switcher"));
    }

    #[test]
    fn footer_escapes_text() {
        let html = SiteFooter::new("A & B").footer().to_html();
        assert!(html.contains("A &amp; B"));
    }
}
