use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Author, Book};

pub struct Mutation;

#[Object]
impl Mutation {
    /// Add a book
    async fn add_book(&self, ctx: &Context<'_>, name: String, author_id: i32) -> Result<Book> {
        let context = ctx.data::<GraphQLContext>()?;
        let mut store = context.store.write().await;

        // Id assignment and append happen under the same write lock.
        let book = store.add_book(name, author_id);
        Ok(Book::from(book))
    }

    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Result<Author> {
        let context = ctx.data::<GraphQLContext>()?;
        let mut store = context.store.write().await;

        let author = store.add_author(name);
        Ok(Author::from(author))
    }
}
