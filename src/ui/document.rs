//! Full HTML document around a rendered shell.

use crate::ui::node::Node;
use crate::ui::shell::RenderedTree;

/// Wraps `body` in the application document: head, assets, and `<body>`.
pub fn html_document(title: &str, site_title: &str, body: &RenderedTree) -> String {
    let page_title = Node::text(format!("{title} - {site_title}"));
    let body = body.to_html();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{page_title}</title>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body>
{body}
</body>
</html>"#
    )
}
