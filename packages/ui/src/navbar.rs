use dioxus::prelude::*;

/// Stylesheet served from `public/` by the web crate.
const STYLE_CSS: &str = "/style.css";

#[component]
pub fn Navbar(user: Option<String>) -> Element {
    let who = user.clone().unwrap_or_else(|| "anonymous".to_string());

    rsx! {
        nav {
            class: "navbar",
            a { href: "/", "Home" }
            a { href: "/comments", "Comments" }
            a { href: "/profile", "Profile" }
            a { href: "/attacker", "Attacker page" }
            if user.is_some() {
                a { href: "/logout", "Logout" }
            } else {
                a { href: "/login", "Login" }
            }
            span { class: "navbar-user", "Signed in as: {who}" }
        }
    }
}

/// Page shell shared by every view.
#[component]
pub fn Layout(title: String, user: Option<String>, children: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title} · Insecure demo" }
            link { rel: "stylesheet", href: STYLE_CSS }
        }
        body {
            Navbar { user: user.clone() }
            main {
                class: "container",
                h1 { "{title}" }
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_navbar(user: Option<&str>) -> String {
        let user = user.map(str::to_string);
        dioxus_ssr::render_element(rsx! {
            Navbar { user: user }
        })
    }

    #[test]
    fn test_navbar_anonymous() {
        let html = render_navbar(None);
        assert!(html.contains("Signed in as: anonymous"));
        assert!(html.contains(r#"href="/login""#));
        assert!(!html.contains(r#"href="/logout""#));
    }

    #[test]
    fn test_navbar_signed_in() {
        let html = render_navbar(Some("alice"));
        assert!(html.contains("Signed in as: alice"));
        assert!(html.contains(r#"href="/logout""#));
        assert!(!html.contains(r#"href="/login""#));
    }
}
