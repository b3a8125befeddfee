//! Server-rendered pages for the demo.
//!
//! Each page is a Dioxus component rendered once to an HTML string with `dioxus-ssr`.
//! Text interpolated with `"{value}"` is escaped by the renderer; the only raw HTML
//! path is `dangerous_inner_html`, used by the comment list when the viewer's session
//! has XSS enabled.

use dioxus::prelude::*;

mod navbar;
pub use navbar::{Layout, Navbar};

pub mod views;
pub use views::{
    render_attacker, render_comments, render_home, render_login, render_login_result,
    render_profile,
};

/// Render a page element to a complete HTML document.
///
/// `page` supplies the `head` and `body`; the root element is added here because
/// `dioxus_elements` has no `html`.
pub(crate) fn document(page: Element) -> String {
    format!(
        r#"<!DOCTYPE html><html lang="en">{}</html>"#,
        dioxus_ssr::render_element(page)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_wraps_page() {
        let html = document(rsx! {
            Layout { title: "Shell", p { "content" } }
        });
        assert!(html.starts_with(r#"<!DOCTYPE html><html lang="en"><head>"#));
        assert!(html.ends_with("</body></html>"));
        assert!(html.contains("<title>Shell · Insecure demo</title>"));
        assert!(html.contains("<p>content</p>"));
    }
}
