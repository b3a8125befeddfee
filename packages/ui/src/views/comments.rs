//! # Comment board — stored XSS
//!
//! With the viewer's XSS flag on, comment text goes through `dangerous_inner_html` and
//! reaches the browser as live markup. With it off the text is interpolated normally and
//! the renderer escapes it.

use api::Comment;
use dioxus::prelude::*;

use crate::{document, Layout};

#[component]
fn CommentItem(comment: Comment, raw: bool) -> Element {
    rsx! {
        li {
            class: "comment",
            id: "comment-{comment.id}",
            span { class: "comment-meta", "#{comment.id} {comment.author}: " }
            if raw {
                span { class: "comment-text", dangerous_inner_html: "{comment.text}" }
            } else {
                span { class: "comment-text", "{comment.text}" }
            }
        }
    }
}

#[component]
pub fn CommentsPage(comments: Vec<Comment>, xss_vulnerable: bool, user: Option<String>) -> Element {
    let who = user.clone().unwrap_or_else(|| "anonymous".to_string());
    let mode = if xss_vulnerable {
        "Comments are rendered without escaping."
    } else {
        "Comments are escaped before rendering."
    };

    rsx! {
        Layout {
            title: "Comments",
            user: user.clone(),
            p { class: "mode", "{mode}" }
            if comments.is_empty() {
                p { class: "empty", "No comments yet." }
            } else {
                ul {
                    class: "comments",
                    for comment in comments.iter() {
                        CommentItem { key: "{comment.id}", comment: comment.clone(), raw: xss_vulnerable }
                    }
                }
            }
            h2 { "Leave a comment" }
            form {
                method: "post",
                action: "/comments",
                p { "Posting as {who}" }
                if user.is_none() {
                    label { r#for: "author", "Name" }
                    input { id: "author", r#type: "text", name: "author" }
                }
                label { r#for: "text", "Comment" }
                textarea { id: "text", name: "text", rows: "4" }
                button { r#type: "submit", "Post" }
            }
        }
    }
}

pub fn render_comments(comments: Vec<Comment>, xss_vulnerable: bool, user: Option<&str>) -> String {
    let user = user.map(str::to_string);
    document(rsx! {
        CommentsPage {
            comments: comments,
            xss_vulnerable: xss_vulnerable,
            user: user,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> Vec<Comment> {
        vec![Comment {
            id: 1,
            author: "mallory".into(),
            text: "<script>alert(1)</script>".into(),
        }]
    }

    #[test]
    fn test_vulnerable_rendering_keeps_markup() {
        let html = render_comments(payload(), true, None);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<script>alert(1)</script>"));
        assert!(html.contains("mallory"));
    }

    #[test]
    fn test_safe_rendering_escapes_markup() {
        let html = render_comments(payload(), false, Some("alice"));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)"));
        assert!(html.contains("Posting as alice"));
    }

    #[test]
    fn test_empty_board() {
        let html = render_comments(Vec::new(), true, None);
        assert!(html.contains("No comments yet."));
        assert!(html.contains("Posting as anonymous"));
    }
}
