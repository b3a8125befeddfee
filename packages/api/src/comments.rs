//! # Comment board — the stored-XSS payload store
//!
//! [`CommentBoard`] owns the comment list and the id counter behind one mutex, so the
//! two always move together: `clear` empties the list and rewinds the counter to 1 in a
//! single critical section. Cloning the board is cheap and every clone sees the same
//! comments; the router keeps one in its state and tests build a fresh one per case.
//!
//! Text is never sanitised here. Whether it is escaped is decided at render time by the
//! viewer's session flag.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::Comment;

/// Fallback author when neither a session user nor a form field is present.
pub const ANONYMOUS_AUTHOR: &str = "anon";

#[derive(Debug)]
struct Board {
    comments: Vec<Comment>,
    next_id: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            comments: Vec::new(),
            next_id: 1,
        }
    }
}

/// Process-wide, in-memory list of comments.
#[derive(Clone, Debug, Default)]
pub struct CommentBoard {
    inner: Arc<Mutex<Board>>,
}

impl CommentBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Board> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a comment and return it with its assigned id.
    pub fn post(&self, author: impl Into<String>, text: impl Into<String>) -> Comment {
        let mut board = self.lock();
        let comment = Comment {
            id: board.next_id,
            author: author.into(),
            text: text.into(),
        };
        board.next_id += 1;
        board.comments.push(comment.clone());
        comment
    }

    /// Snapshot of every comment in posting order.
    pub fn list(&self) -> Vec<Comment> {
        self.lock().comments.clone()
    }

    /// Drop every comment and restart ids at 1.
    pub fn clear(&self) {
        *self.lock() = Board::default();
    }

    pub fn len(&self) -> usize {
        self.lock().comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pick the author of a new comment: session user, then the form field, then `anon`.
///
/// An empty form field counts as absent.
pub fn resolve_author(session_user: Option<&str>, submitted: Option<&str>) -> String {
    session_user
        .or(submitted.filter(|a| !a.is_empty()))
        .unwrap_or(ANONYMOUS_AUTHOR)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_assigns_sequential_ids() {
        let board = CommentBoard::new();
        assert!(board.is_empty());

        let first = board.post("alice", "hello");
        let second = board.post("bob", "<b>hi</b>");
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let comments = board.list();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[1].text, "<b>hi</b>");
    }

    #[test]
    fn test_clear_resets_counter() {
        let board = CommentBoard::new();
        board.post("a", "1");
        board.post("a", "2");
        board.clear();
        assert!(board.is_empty());
        assert_eq!(board.post("a", "3").id, 1);
    }

    #[test]
    fn test_clones_share_state() {
        let board = CommentBoard::new();
        let other = board.clone();
        other.post("a", "shared");
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_resolve_author() {
        assert_eq!(resolve_author(Some("alice"), Some("mallory")), "alice");
        assert_eq!(resolve_author(None, Some("mallory")), "mallory");
        assert_eq!(resolve_author(None, Some("")), "anon");
        assert_eq!(resolve_author(None, None), "anon");
    }
}
