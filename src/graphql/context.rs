use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::LibraryStore;

/// Shared state handed to every resolver via `Schema::build(...).data(...)`.
#[derive(Clone)]
pub struct GraphQLContext {
    pub store: Arc<RwLock<LibraryStore>>,
    /// When set, `Author.books` matches on the book's `authorId` instead of
    /// the book's own id (the behavior the upstream service shipped with).
    pub link_books_by_author_id: bool,
}

impl GraphQLContext {
    pub fn new(store: Arc<RwLock<LibraryStore>>, link_books_by_author_id: bool) -> Self {
        Self {
            store,
            link_books_by_author_id,
        }
    }
}
