pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::patrons::dto::PatronDto;

// CatalogService owns both collections and is the only way to change them, so rules
// spanning books and patrons hold after every call. Reads return copies.
pub trait CatalogService: Sync + Send {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto>;
    fn remove_book(&mut self, isbn: &str) -> LibraryResult<()>;
    fn get_book(&self, isbn: &str) -> LibraryResult<BookDto>;
    fn search_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>>;
    fn search_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>>;
    fn list_books(&self) -> LibraryResult<Vec<BookDto>>;

    fn add_patron(&mut self, patron: &PatronDto) -> LibraryResult<PatronDto>;
    fn remove_patron(&mut self, patron_id: &str) -> LibraryResult<()>;
    fn get_patron(&self, patron_id: &str) -> LibraryResult<PatronDto>;
    fn list_patrons(&self) -> LibraryResult<Vec<PatronDto>>;
    fn borrowed_by(&self, patron_id: &str) -> LibraryResult<Vec<BookDto>>;

    fn borrow_book(&mut self, patron_id: &str, isbn: &str) -> LibraryResult<BookDto>;
    fn return_book(&mut self, patron_id: &str, isbn: &str) -> LibraryResult<BookDto>;
}
