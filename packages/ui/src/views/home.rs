//! Home page with the vulnerability toggles.

use dioxus::prelude::*;

use crate::{document, Layout};

/// A checkbox that is rendered `checked` only when `on` is true.
#[component]
fn Toggle(name: String, label: String, on: bool) -> Element {
    rsx! {
        label {
            class: "toggle",
            if on {
                input { r#type: "checkbox", name: "{name}", checked: true }
            } else {
                input { r#type: "checkbox", name: "{name}" }
            }
            " {label}"
        }
    }
}

#[component]
pub fn HomePage(
    xss_vulnerable: bool,
    csrf_vulnerable: bool,
    user: Option<String>,
) -> Element {
    let xss_state = if xss_vulnerable { "ON (vulnerable)" } else { "OFF (escaped)" };
    let csrf_state = if csrf_vulnerable { "ON (vulnerable)" } else { "OFF (token required)" };

    rsx! {
        Layout {
            title: "Insecure web demo",
            user: user.clone(),
            p {
                "This application deliberately contains stored XSS and CSRF. "
                "Use the switches below to turn each vulnerability on or off for your session."
            }
            ul {
                class: "state",
                li { id: "xss-state", "Stored XSS: {xss_state}" }
                li { id: "csrf-state", "CSRF: {csrf_state}" }
            }
            form {
                method: "post",
                action: "/toggle",
                Toggle { name: "xssvuln", label: "Stored XSS vulnerability", on: xss_vulnerable }
                Toggle { name: "csrfvuln", label: "CSRF vulnerability", on: csrf_vulnerable }
                button { r#type: "submit", "Save" }
            }
            form {
                method: "post",
                action: "/clear-comments",
                button { r#type: "submit", class: "danger", "Clear all comments" }
            }
        }
    }
}

pub fn render_home(xss_vulnerable: bool, csrf_vulnerable: bool, user: Option<&str>) -> String {
    let user = user.map(str::to_string);
    document(rsx! {
        HomePage {
            xss_vulnerable: xss_vulnerable,
            csrf_vulnerable: csrf_vulnerable,
            user: user,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkbox<'a>(html: &'a str, name: &str) -> &'a str {
        let needle = format!(r#"name="{name}""#);
        let at = html.find(&needle).expect("checkbox present");
        let start = html[..at].rfind("<input").expect("input start");
        let end = at + html[at..].find('>').expect("input end");
        &html[start..end]
    }

    #[test]
    fn test_home_checked_state_follows_flags() {
        let html = render_home(true, false, None);
        assert!(checkbox(&html, "xssvuln").contains("checked"));
        assert!(!checkbox(&html, "csrfvuln").contains("checked"));
        assert!(html.contains("Stored XSS: ON (vulnerable)"));
        assert!(html.contains("CSRF: OFF (token required)"));

        let html = render_home(false, true, None);
        assert!(!checkbox(&html, "xssvuln").contains("checked"));
        assert!(checkbox(&html, "csrfvuln").contains("checked"));
        assert!(html.contains("Stored XSS: OFF (escaped)"));
        assert!(html.contains("CSRF: ON (vulnerable)"));
    }

    #[test]
    fn test_home_posts_to_toggle_and_clear() {
        let html = render_home(true, true, Some("bob"));
        assert!(html.contains(r#"action="/toggle""#));
        assert!(html.contains(r#"action="/clear-comments""#));
        assert!(html.contains("Signed in as: bob"));
    }
}
