//! Header / content / footer shell for public pages.

use crate::ui::node::{Element, Region};
use crate::ui::providers::{FooterProvider, HeaderProvider};
use crate::ui::shell::{LayoutSlot, RenderedTree};
use crate::ui::tokens::LayoutTokens;

/// Wraps page content between the site header and footer.
///
/// The content region grows to fill the viewport height; header and footer
/// keep their natural size.
///
/// # Example
///
/// ```rust,ignore
/// let shell = PublicShell::new(header, footer, LayoutTokens::default());
/// let tree = shell.render("Hello".into());
/// assert_eq!(tree.regions(), [Region::Header, Region::Content, Region::Footer]);
/// ```
#[derive(Debug, Clone)]
pub struct PublicShell<H, F> {
    header: H,
    footer: F,
    tokens: LayoutTokens,
}

impl<H, F> PublicShell<H, F>
where
    H: HeaderProvider,
    F: FooterProvider,
{
    pub fn new(header: H, footer: F, tokens: LayoutTokens) -> Self {
        Self {
            header,
            footer,
            tokens,
        }
    }

    pub fn render(&self, content: LayoutSlot) -> RenderedTree {
        let LayoutTokens {
            max_content_width,
            outer_padding,
            ..
        } = self.tokens;

        let header = Element::new("header")
            .region(Region::Header)
            .class("sticky top-0 w-full bg-surface border-b shrink-0")
            .child(self.header.header());

        let main = Element::new("main")
            .region(Region::Content)
            .attr("id", "app")
            .class("flex-1 w-full mx-auto")
            .attr(
                "style",
                format!("max-width: {max_content_width}px; padding: {outer_padding}px"),
            )
            .children(content.into_payload());

        let footer = Element::new("footer")
            .region(Region::Footer)
            .class("bg-surface border-t py-3 shrink-0")
            .child(self.footer.footer());

        RenderedTree::new(
            Element::new("div")
                .attr("id", "app-shell")
                .class("flex flex-col min-h-screen")
                .child(header)
                .child(main)
                .child(footer),
        )
    }
}
