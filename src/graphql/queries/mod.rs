use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Author, Book};

pub struct Query;

#[Object]
impl Query {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Book>> {
        let context = ctx.data::<GraphQLContext>()?;
        let store = context.store.read().await;

        let book = id.and_then(|id| store.find_book(id).cloned());
        Ok(book.map(Book::from))
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let context = ctx.data::<GraphQLContext>()?;
        let store = context.store.read().await;

        Ok(store.books().iter().cloned().map(Book::from).collect())
    }

    /// A single author
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Author>> {
        let context = ctx.data::<GraphQLContext>()?;
        let store = context.store.read().await;

        let author = id.and_then(|id| store.find_author(id).cloned());
        Ok(author.map(Author::from))
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let context = ctx.data::<GraphQLContext>()?;
        let store = context.store.read().await;

        Ok(store.authors().iter().cloned().map(Author::from).collect())
    }
}
