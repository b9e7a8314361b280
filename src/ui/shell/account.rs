//! Two-column shell for the account section.

use crate::ui::node::{Element, Region, Visibility};
use crate::ui::providers::AccountNavProvider;
use crate::ui::shell::{LayoutSlot, RenderedTree};
use crate::ui::tokens::LayoutTokens;

/// Places account content beside the account navigation.
///
/// At or above the configured breakpoint the sidebar sits at a fixed width
/// to the left of the main region. Below it the sidebar does not exist and
/// the main region takes the full width.
#[derive(Debug, Clone)]
pub struct AccountShell<N> {
    nav: N,
    tokens: LayoutTokens,
    padded: bool,
}

impl<N: AccountNavProvider> AccountShell<N> {
    pub fn new(nav: N, tokens: LayoutTokens) -> Self {
        Self {
            nav,
            tokens,
            padded: true,
        }
    }

    /// Drops the outer padding, for use inside a region that already pads.
    #[must_use]
    pub fn without_outer_padding(mut self) -> Self {
        self.padded = false;
        self
    }

    pub fn render(&self, content: LayoutSlot) -> RenderedTree {
        let LayoutTokens {
            breakpoint,
            sidebar_width,
            max_content_width,
            outer_padding,
        } = self.tokens;
        let bp = breakpoint.prefix();

        let sidebar = Element::new("aside")
            .region(Region::Sidebar)
            .visibility(Visibility::FromBreakpoint(breakpoint))
            .class(format!("hidden {bp}:block shrink-0"))
            .attr(
                "style",
                format!("width: {sidebar_width}px; flex: 0 0 {sidebar_width}px"),
            )
            .child(self.nav.account_nav());

        let main = Element::new("section")
            .region(Region::Main)
            .class("flex-1 min-w-0")
            .children(content.into_payload());

        let frame = if self.padded {
            format!("max-width: {max_content_width}px; padding: {outer_padding}px")
        } else {
            format!("max-width: {max_content_width}px")
        };

        RenderedTree::new(
            Element::new("div")
                .class("mx-auto w-full")
                .attr("style", frame)
                .child(
                    Element::new("div")
                        .class(format!("flex flex-col {bp}:flex-row"))
                        .attr("style", format!("gap: {outer_padding}px"))
                        .child(sidebar)
                        .child(main),
                ),
        )
    }
}
