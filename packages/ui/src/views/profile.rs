//! # Profile page — CSRF target
//!
//! The change-email form only carries a `csrfToken` field when the session has CSRF
//! protection on. With protection off the form is indistinguishable from the one on the
//! attacker page, which is the point of the demo.

use dioxus::prelude::*;

use crate::{document, Layout};

#[component]
pub fn ProfilePage(user: String, email: String, csrf_vulnerable: bool, csrf_token: String) -> Element {
    rsx! {
        Layout {
            title: "Profile",
            user: Some(user.clone()),
            dl {
                dt { "User" }
                dd { id: "profile-user", "{user}" }
                dt { "Email" }
                dd { id: "profile-email", "{email}" }
            }
            if csrf_vulnerable {
                p { class: "warning", "CSRF protection is off: this form carries no token." }
            } else {
                p { class: "success", "CSRF protection is on. Session token: " code { "{csrf_token}" } }
            }
            h2 { "Change email" }
            form {
                method: "post",
                action: "/change-email",
                label { r#for: "email", "New email" }
                input { id: "email", r#type: "email", name: "email", value: "{email}" }
                if !csrf_vulnerable {
                    input { r#type: "hidden", name: "csrfToken", value: "{csrf_token}" }
                }
                button { r#type: "submit", "Update" }
            }
        }
    }
}

pub fn render_profile(user: &str, email: &str, csrf_vulnerable: bool, csrf_token: &str) -> String {
    let (user, email, csrf_token) = (user.to_string(), email.to_string(), csrf_token.to_string());
    document(rsx! {
        ProfilePage {
            user: user,
            email: email,
            csrf_vulnerable: csrf_vulnerable,
            csrf_token: csrf_token,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_field_only_when_protected() {
        let html = render_profile("alice", "alice@example.com", true, "");
        assert!(html.contains("alice@example.com"));
        assert!(!html.contains("csrfToken"));

        let html = render_profile("alice", "alice@example.com", false, "k3y");
        assert!(html.contains("csrfToken"));
        assert!(html.contains("k3y"));
    }
}
