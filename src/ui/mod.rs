//! Server-rendered UI: content trees, layout tokens, and page shells.

pub mod document;
pub mod node;
pub mod providers;
pub mod shell;
pub mod tokens;

pub use node::{Element, Node, Region, Visibility};
pub use providers::{
    AccountNav, AccountNavProvider, FooterProvider, HeaderProvider, NavLink, SiteFooter,
    SiteHeader,
};
pub use shell::{AccountShell, LayoutSlot, PublicShell, RenderedTree};
pub use tokens::{Breakpoint, LayoutTokens};
