//! Page bodies handed to the shells.
//!
//! These know nothing about the header, footer, or account nav; the router
//! picks a shell and passes the page in as its slot.

use crate::ui::{Element, LayoutSlot};

fn card(heading: &str, body: &str) -> Element {
    Element::new("div")
        .class("rounded-lg bg-muted p-4")
        .child(Element::new("h3").class("font-semibold mb-2").child(heading))
        .child(Element::new("p").class("text-sm text-muted").child(body))
}

fn panel(title: &str, intro: &str) -> Element {
    Element::new("div")
        .class("rounded-lg bg-surface p-8")
        .child(Element::new("h1").class("text-2xl font-bold mb-4").child(title))
        .child(Element::new("p").class("text-muted mb-8").child(intro))
}

fn card_grid() -> Element {
    Element::new("div").class("grid card-grid gap-4")
}

pub fn home() -> LayoutSlot {
    panel(
        "Welcome",
        "Pages on this site are rendered on the server and wrapped in a shared shell.",
    )
    .child(
        Element::new("a")
            .attr("href", "/account")
            .class("button")
            .child("Go to your account"),
    )
    .into()
}

pub fn about() -> LayoutSlot {
    panel(
        "About",
        "Every page is composed from a shell and a body. The shell owns the regions, the page owns the content.",
    )
    .child(
        card_grid()
            .child(card(
                "Public shell",
                "Header, growing content area, footer.",
            ))
            .child(card(
                "Account shell",
                "Fixed-width navigation beside the page, dropped on narrow screens.",
            ))
            .child(card(
                "HTML-first",
                "Plain server-rendered markup and one stylesheet; no scripts required.",
            ))
            .child(card(
                "Configurable layout",
                "Breakpoint, sidebar width and spacing come from configuration.",
            )),
    )
    .into()
}

pub fn account_overview() -> LayoutSlot {
    panel("Account", "Manage your profile and preferences.")
        .child(
            card_grid()
                .child(card("Profile", "Name and email."))
                .child(card("Settings", "Notification preferences.")),
        )
        .into()
}

fn field(id: &str, label: &str, kind: &str) -> Element {
    Element::new("div")
        .class("flex flex-col gap-1")
        .child(
            Element::new("label")
                .attr("for", id)
                .class("text-sm font-semibold")
                .child(label),
        )
        .child(
            Element::new("input")
                .attr("id", id)
                .attr("name", id)
                .attr("type", kind)
                .class("input"),
        )
}

fn form() -> Element {
    Element::new("form").class("flex flex-col gap-4")
}

pub fn profile() -> LayoutSlot {
    panel("Profile", "How you appear to others.")
        .child(
            form()
                .child(field("display_name", "Display name", "text"))
                .child(field("email", "Email", "email")),
        )
        .into()
}

pub fn settings() -> LayoutSlot {
    panel("Settings", "Choose what we send you.")
        .child(
            form()
                .child(field("notify_email", "Email notifications", "checkbox"))
                .child(field("notify_digest", "Weekly digest", "checkbox")),
        )
        .into()
}

pub fn not_found(path: &str) -> LayoutSlot {
    panel("Page not found", &format!("Nothing lives at {path}."))
        .child(
            Element::new("a")
                .attr("href", "/")
                .class("text-primary")
                .child("Back home"),
        )
        .into()
}
