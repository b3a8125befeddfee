use std::sync::Arc;

use api::{CommentBoard, UserStore};

/// Shared router state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub comments: CommentBoard,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, comments: CommentBoard) -> Self {
        Self { users, comments }
    }
}
