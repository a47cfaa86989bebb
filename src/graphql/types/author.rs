use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Book;
use crate::store;

/// This represents an author of a book
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

impl From<store::Author> for Author {
    fn from(record: store::Author) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

#[ComplexObject]
impl Author {
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let context = ctx.data::<GraphQLContext>()?;
        let store = context.store.read().await;

        // The upstream service matched on the book's own id rather than its
        // authorId. That quirk stays the default; the context flag opts into
        // the authorId match.
        let books = store
            .books()
            .iter()
            .filter(|book| {
                if context.link_books_by_author_id {
                    book.author_id == self.id
                } else {
                    book.id == self.id
                }
            })
            .cloned()
            .map(Book::from)
            .collect();

        Ok(books)
    }
}
