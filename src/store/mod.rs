use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

/// In-memory record store backing the GraphQL resolvers. Records are
/// append-only: nothing is ever updated or deleted while the process runs.
#[derive(Debug)]
pub struct LibraryStore {
    books: Vec<Book>,
    authors: Vec<Author>,
    next_book_id: i32,
    next_author_id: i32,
}

impl LibraryStore {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            authors: Vec::new(),
            next_book_id: 1,
            next_author_id: 1,
        }
    }

    /// Store pre-populated with the sample catalog served at startup.
    pub fn seeded() -> Self {
        let mut store = Self::new();

        store.add_author("J. K. Rowling");
        store.add_author("J. R. R. Tolkien");

        store.add_book("Harry Potter and the Chamber of Secrets", 1);
        store.add_book("Harry Potter and the Prisoner of Azkaban", 1);
        store.add_book("The Fellowship of the Ring", 2);

        store
    }

    /// Append a book and return a copy of the stored record. The referenced
    /// author id is not checked for existence; dangling references are kept.
    pub fn add_book(&mut self, name: impl Into<String>, author_id: i32) -> Book {
        let book = Book {
            id: self.next_book_id,
            name: name.into(),
            author_id,
        };
        self.next_book_id += 1;
        self.books.push(book.clone());
        book
    }

    /// Append an author and return a copy of the stored record.
    pub fn add_author(&mut self, name: impl Into<String>) -> Author {
        let author = Author {
            id: self.next_author_id,
            name: name.into(),
        };
        self.next_author_id += 1;
        self.authors.push(author.clone());
        author
    }

    /// First book with the given id, if any.
    pub fn find_book(&self, id: i32) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// First author with the given id, if any.
    pub fn find_author(&self, id: i32) -> Option<&Author> {
        self.authors.iter().find(|author| author.id == id)
    }

    /// All books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All authors in insertion order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }
}
