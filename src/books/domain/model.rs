use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::repository::Searchable;

// BookEntity is the catalog's own record of a book, keyed by ISBN. Only the catalog
// mutates it; callers see BookDto copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub available: bool,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            available: true,
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
    fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

impl Searchable for BookEntity {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "isbn" => Some(self.isbn.as_str()),
            "title" => Some(self.title.as_str()),
            "author" => Some(self.author.as_str()),
            _ => None,
        }
    }
}
