use std::collections::HashMap;

use tracing::debug;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult, STALE_VERSION};
use crate::core::repository::{matches_predicate, Repository};

#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: HashMap<String, BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: HashMap::new(),
        }
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        if self.books.contains_key(entity.isbn.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {} already exists", entity.isbn).as_str()));
        }
        self.books.insert(entity.isbn.to_string(), entity.clone());
        debug!("stored book {}", entity.isbn);
        Ok(1)
    }

    fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        let existing = self.books.get_mut(entity.isbn.as_str()).ok_or_else(|| LibraryError::not_found(
            format!("book with isbn {} not found", entity.isbn).as_str()))?;
        if existing.version != entity.version {
            return Err(LibraryError::conflict(
                format!("book {} was changed, expected version {} but found {}",
                        entity.isbn, entity.version, existing.version).as_str(), Some(STALE_VERSION.to_string())));
        }
        *existing = BookEntity { version: entity.version + 1, ..entity.clone() };
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.get(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("book with isbn {} not found", id).as_str()))
    }

    fn delete(&mut self, id: &str) -> LibraryResult<usize> {
        self.books.remove(id).map(|_| 1).ok_or_else(|| LibraryError::not_found(
            format!("book with isbn {} not found", id).as_str()))
    }

    fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.values()
            .filter(|book| matches_predicate(*book, predicate))
            .cloned()
            .collect())
    }
}

impl BookRepository for MemoryBookRepository {}
