//! Login form and the page shown after a successful login.

use dioxus::prelude::*;

use crate::{document, Layout};

#[component]
pub fn LoginPage(message: String) -> Element {
    rsx! {
        Layout {
            title: "Login",
            if !message.is_empty() {
                p { class: "error", "{message}" }
            }
            form {
                method: "post",
                action: "/login",
                label { r#for: "username", "Username" }
                input { id: "username", r#type: "text", name: "username" }
                label { r#for: "password", "Password" }
                input { id: "password", r#type: "password", name: "password" }
                button { r#type: "submit", "Log in" }
            }
        }
    }
}

#[component]
pub fn LoginResultPage(user: String) -> Element {
    rsx! {
        Layout {
            title: "Logged in",
            user: Some(user.clone()),
            p { class: "success", "Welcome, {user}!" }
            p {
                a { href: "/profile", "Go to your profile" }
                " or "
                a { href: "/comments", "leave a comment" }
                "."
            }
        }
    }
}

/// Login form, with an error line when `message` is not empty.
pub fn render_login(message: &str) -> String {
    let message = message.to_string();
    document(rsx! {
        LoginPage { message: message }
    })
}

pub fn render_login_result(user: &str) -> String {
    let user = user.to_string();
    document(rsx! {
        LoginResultPage { user: user }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_line() {
        let html = render_login("Login failed");
        assert!(html.contains(r#"<p class="error">Login failed</p>"#));
        assert!(html.contains(r#"action="/login""#));

        let html = render_login("");
        assert!(!html.contains(r#"class="error""#));
    }

    #[test]
    fn test_login_result_escapes_username() {
        let html = render_login_result("<b>eve</b>");
        assert!(html.contains("Welcome, &lt;b&gt;eve&lt;"));
        assert!(!html.contains("<b>eve"));
    }
}
