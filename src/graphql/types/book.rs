use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Author;
use crate::store;

/// This represents a book written by an author
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

impl From<store::Book> for Book {
    fn from(record: store::Book) -> Self {
        Self {
            id: record.id,
            name: record.name,
            author_id: record.author_id,
        }
    }
}

#[ComplexObject]
impl Book {
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let context = ctx.data::<GraphQLContext>()?;
        let store = context.store.read().await;

        Ok(store.find_author(self.author_id).cloned().map(Author::from))
    }
}
