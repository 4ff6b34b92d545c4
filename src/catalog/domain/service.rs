use std::collections::HashMap;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{is_empty_key, Configuration};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, BOOK_BORROWED, BOOK_UNAVAILABLE, NOT_BORROWED, PATRON_HAS_LOANS};
use crate::gateway::events::EventPublisher;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::PatronDto;
use crate::patrons::repository::PatronRepository;
use crate::patrons::Patron;

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    patron_repository: Box<dyn PatronRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               patron_repository: Box<dyn PatronRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            patron_repository,
            events_publisher,
        }
    }

    // Runs after the change is stored; a failed event is logged and the change stands.
    fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = event.map_err(LibraryError::from).and_then(|event| self.events_publisher.publish(
            &event.with_metadata("branch_id", self.branch_id.as_str())));
        if let Err(err) = res {
            warn!("could not publish catalog event: {}", err);
        }
    }

    fn search(&self, field: &str, value: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.query(
            &HashMap::from([(field.to_string(), value.to_string())]))?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    // `book` is the entity as last written; puts availability back after the other half of a loan failed
    fn restore_book(&mut self, book: &BookEntity, available: bool) {
        let restored = BookEntity { version: book.version + 1, available, ..book.clone() };
        if let Err(err) = self.book_repository.update(&restored) {
            warn!("could not restore book {} after partial loan update: {}", book.isbn, err);
        }
    }

    fn restore_patron(&mut self, patron: &PatronEntity, isbn: &str) {
        let mut restored = PatronEntity { version: patron.version + 1, ..patron.clone() };
        restored.borrow(isbn);
        if let Err(err) = self.patron_repository.update(&restored) {
            warn!("could not restore patron {} after partial loan update: {}", patron.patron_id, err);
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto> {
        if is_empty_key(book.isbn.as_str()) {
            return Err(LibraryError::invalid_key("ISBN cannot be empty"));
        }
        let entity = BookEntity::new(book.isbn.as_str(), book.title.as_str(), book.author.as_str());
        self.book_repository.create(&entity)?;
        debug!("added book {} {:?}", entity.isbn, entity.title);
        let added = BookDto::from(&entity);
        self.publish(DomainEvent::added("book_added", "books", added.isbn(), &added));
        Ok(added)
    }

    fn remove_book(&mut self, isbn: &str) -> LibraryResult<()> {
        let book = self.book_repository.get(isbn)?;
        if !book.is_available() {
            return Err(LibraryError::conflict(
                format!("cannot remove book {} while it is borrowed", isbn).as_str(), Some(BOOK_BORROWED.to_string())));
        }
        self.book_repository.delete(isbn)?;
        debug!("removed book {}", isbn);
        self.publish(DomainEvent::deleted("book_removed", "books", isbn, &isbn));
        Ok(())
    }

    fn get_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).map(|b| BookDto::from(&b))
    }

    fn search_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        self.search("title", title)
    }

    fn search_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>> {
        self.search("author", author)
    }

    fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.query(&HashMap::new())?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    fn add_patron(&mut self, patron: &PatronDto) -> LibraryResult<PatronDto> {
        if is_empty_key(patron.patron_id.as_str()) {
            return Err(LibraryError::invalid_key("patron id cannot be empty"));
        }
        let entity = PatronEntity::new(patron.patron_id.as_str(), patron.name.as_str());
        self.patron_repository.create(&entity)?;
        debug!("added patron {} {:?}", entity.patron_id, entity.name);
        let added = PatronDto::from(&entity);
        self.publish(DomainEvent::added("patron_added", "patrons", added.patron_id.as_str(), &added));
        Ok(added)
    }

    fn remove_patron(&mut self, patron_id: &str) -> LibraryResult<()> {
        let patron = self.patron_repository.get(patron_id)?;
        if patron.borrowed_count() > 0 {
            return Err(LibraryError::conflict(
                format!("patron {} still has {} borrowed books", patron_id, patron.borrowed_count()).as_str(),
                Some(PATRON_HAS_LOANS.to_string())));
        }
        self.patron_repository.delete(patron_id)?;
        debug!("removed patron {}", patron_id);
        self.publish(DomainEvent::deleted("patron_removed", "patrons", patron_id, &patron_id));
        Ok(())
    }

    fn get_patron(&self, patron_id: &str) -> LibraryResult<PatronDto> {
        self.patron_repository.get(patron_id).map(|p| PatronDto::from(&p))
    }

    fn list_patrons(&self) -> LibraryResult<Vec<PatronDto>> {
        let res = self.patron_repository.query(&HashMap::new())?;
        Ok(res.iter().map(PatronDto::from).collect())
    }

    fn borrowed_by(&self, patron_id: &str) -> LibraryResult<Vec<BookDto>> {
        let patron = self.patron_repository.get(patron_id)?;
        patron.list_borrowed().iter()
            .map(|isbn| self.book_repository.get(isbn).map(|b| BookDto::from(&b)))
            .collect()
    }

    fn borrow_book(&mut self, patron_id: &str, isbn: &str) -> LibraryResult<BookDto> {
        let mut patron = self.patron_repository.get(patron_id)?;
        let mut book = self.book_repository.get(isbn)?;
        if !book.is_available() {
            return Err(LibraryError::conflict(
                format!("book {} is not available", isbn).as_str(), Some(BOOK_UNAVAILABLE.to_string())));
        }

        book.set_available(false);
        self.book_repository.update(&book)?;
        patron.borrow(isbn);
        if let Err(err) = self.patron_repository.update(&patron) {
            self.restore_book(&book, true);
            return Err(err);
        }
        info!("patron {} borrowed book {}", patron_id, isbn);

        let borrowed = self.get_book(isbn)?;
        self.publish(DomainEvent::updated("book_borrowed", "checkout", isbn, &borrowed)
            .map(|event| event.with_metadata("patron_id", patron_id)));
        Ok(borrowed)
    }

    fn return_book(&mut self, patron_id: &str, isbn: &str) -> LibraryResult<BookDto> {
        let mut patron = self.patron_repository.get(patron_id)?;
        let mut book = self.book_repository.get(isbn)?;
        if !patron.has_borrowed(isbn) {
            return Err(LibraryError::conflict(
                format!("patron {} did not borrow book {}", patron_id, isbn).as_str(), Some(NOT_BORROWED.to_string())));
        }

        patron.give_back(isbn);
        self.patron_repository.update(&patron)?;
        book.set_available(true);
        if let Err(err) = self.book_repository.update(&book) {
            self.restore_patron(&patron, isbn);
            return Err(err);
        }
        info!("patron {} returned book {}", patron_id, isbn);

        let returned = self.get_book(isbn)?;
        self.publish(DomainEvent::updated("book_returned", "checkout", isbn, &returned)
            .map(|event| event.with_metadata("patron_id", patron_id)));
        Ok(returned)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            available: other.available,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            available: other.available,
        }
    }
}

impl From<&PatronEntity> for PatronDto {
    fn from(other: &PatronEntity) -> Self {
        Self {
            patron_id: other.patron_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            borrowed: other.borrowed.clone(),
        }
    }
}

impl From<&PatronDto> for PatronEntity {
    fn from(other: &PatronDto) -> Self {
        Self {
            patron_id: other.patron_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            borrowed: other.borrowed.clone(),
        }
    }
}


#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use crate::books::dto::BookDto;
    use crate::books::factory::create_book_repository;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::domain::Configuration;
    use crate::core::events::DomainEvent;
    use crate::core::library::{LibraryError, LibraryResult, BOOK_BORROWED, BOOK_UNAVAILABLE, NOT_BORROWED, PATRON_HAS_LOANS};
    use crate::core::repository::Repository;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::patrons::dto::PatronDto;
    use crate::patrons::factory::create_patron_repository;
    use crate::patrons::repository::PatronRepository;
    use crate::patrons::repository::memory_patron_repository::MemoryPatronRepository;

    // memory store whose updates fail while `failing` is set
    struct FlakyRepository<R> {
        inner: R,
        failing: Arc<AtomicBool>,
    }

    impl<R> FlakyRepository<R> {
        fn new(inner: R, failing: &Arc<AtomicBool>) -> Self {
            Self { inner, failing: failing.clone() }
        }
    }

    impl<E, R: Repository<E>> Repository<E> for FlakyRepository<R> {
        fn create(&mut self, entity: &E) -> LibraryResult<usize> {
            self.inner.create(entity)
        }

        fn update(&mut self, entity: &E) -> LibraryResult<usize> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(LibraryError::runtime("store offline", None));
            }
            self.inner.update(entity)
        }

        fn get(&self, id: &str) -> LibraryResult<E> {
            self.inner.get(id)
        }

        fn delete(&mut self, id: &str) -> LibraryResult<usize> {
            self.inner.delete(id)
        }

        fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<E>> {
            self.inner.query(predicate)
        }
    }

    impl BookRepository for FlakyRepository<MemoryBookRepository> {}

    impl PatronRepository for FlakyRepository<MemoryPatronRepository> {}

    struct OfflinePublisher;

    impl EventPublisher for OfflinePublisher {
        fn publish(&self, _event: &DomainEvent) -> Result<(), LibraryError> {
            Err(LibraryError::runtime("event bus offline", None))
        }
    }

    fn build_service(publisher: &MemoryPublisher) -> CatalogServiceImpl {
        CatalogServiceImpl::new(&Configuration::new("test"), create_book_repository(),
                                create_patron_repository(), Box::new(publisher.clone()))
    }

    fn seeded_service(publisher: &MemoryPublisher) -> CatalogServiceImpl {
        let mut svc = build_service(publisher);
        svc.add_book(&BookDto::new("ISBN-001", "Introduction to C++", "Bjarne Stroustrup")).expect("should add book");
        svc.add_book(&BookDto::new("ISBN-002", "Programming Principles", "Jane Doe")).expect("should add book");
        svc.add_book(&BookDto::new("ISBN-003", "Algorithms in Depth", "Robert Sedgewick")).expect("should add book");
        svc.add_patron(&PatronDto::new("U001", "Alice")).expect("should add patron");
        svc.add_patron(&PatronDto::new("U002", "Bob")).expect("should add patron");
        svc
    }

    fn isbns(books: &[BookDto]) -> HashSet<String> {
        books.iter().map(|b| b.isbn.to_string()).collect()
    }

    // every book is unavailable iff exactly one patron holds it
    fn assert_loans_consistent(svc: &CatalogServiceImpl) {
        let mut holders: HashMap<String, usize> = HashMap::new();
        for patron in svc.list_patrons().expect("should list patrons") {
            for isbn in patron.borrowed {
                *holders.entry(isbn).or_insert(0) += 1;
            }
        }
        for book in svc.list_books().expect("should list books") {
            let held = holders.get(book.isbn.as_str()).copied().unwrap_or(0);
            if book.available {
                assert_eq!(0, held, "available book {} is held", book.isbn);
            } else {
                assert_eq!(1, held, "unavailable book {} has {} holders", book.isbn, held);
            }
        }
    }

    #[test]
    fn test_should_add_book() {
        let publisher = MemoryPublisher::new();
        let mut svc = build_service(&publisher);

        let mut book = BookDto::new("ISBN-010", "Rust in Action", "Tim McNamara");
        book.available = false;
        let added = svc.add_book(&book).expect("should add book");
        assert!(added.available);

        let loaded = svc.get_book("ISBN-010").expect("should return book");
        assert_eq!(added, loaded);
        assert_eq!(vec!["book_added".to_string()], publisher.names());
        assert_eq!(Some(&"test".to_string()), publisher.events()[0].metadata.get("branch_id"));
    }

    #[test]
    fn test_should_reject_empty_keys() {
        let publisher = MemoryPublisher::new();
        let mut svc = build_service(&publisher);
        assert!(matches!(svc.add_book(&BookDto::new("", "t", "a")), Err(LibraryError::InvalidKey { .. })));
        assert!(matches!(svc.add_patron(&PatronDto::new("", "nobody")), Err(LibraryError::InvalidKey { .. })));
        assert!(publisher.events().is_empty());
    }

    #[test]
    fn test_should_accept_whitespace_keys() {
        let publisher = MemoryPublisher::new();
        let mut svc = build_service(&publisher);
        svc.add_book(&BookDto::new(" ", "Spaces", "Anon")).expect("should add book");
        svc.add_patron(&PatronDto::new("\t", "Tab")).expect("should add patron");
        assert_eq!("Spaces", svc.get_book(" ").expect("should return book").title.as_str());
        assert!(matches!(svc.get_book(""), Err(LibraryError::NotFound { .. })));

        svc.borrow_book("\t", " ").expect("should borrow");
        assert!(svc.get_patron("\t").expect("should return patron").borrowed.contains(" "));
        assert!(matches!(svc.add_book(&BookDto::new(" ", "Again", "Anon")), Err(LibraryError::DuplicateKey { .. })));
    }

    #[test]
    fn test_should_reject_duplicates_without_mutation() {
        let publisher = MemoryPublisher::new();
        let mut svc = seeded_service(&publisher);
        svc.borrow_book("U001", "ISBN-001").expect("should borrow");

        let res = svc.add_book(&BookDto::new("ISBN-001", "Another Title", "Another Author"));
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        let existing = svc.get_book("ISBN-001").expect("should return book");
        assert_eq!("Introduction to C++", existing.title.as_str());
        assert!(!existing.available);

        let res = svc.add_patron(&PatronDto::new("U001", "Mallory"));
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        let existing = svc.get_patron("U001").expect("should return patron");
        assert_eq!("Alice", existing.name.as_str());
        assert!(existing.borrowed.contains("ISBN-001"));
    }

    #[test]
    fn test_should_return_copies() {
        let publisher = MemoryPublisher::new();
        let svc = seeded_service(&publisher);
        let mut copy = svc.get_book("ISBN-002").expect("should return book");
        copy.available = false;
        copy.title = "changed".to_string();
        let loaded = svc.get_book("ISBN-002").expect("should return book");
        assert!(loaded.available);
        assert_eq!("Programming Principles", loaded.title.as_str());
    }

    #[test]
    fn test_should_search_ignoring_case() {
        let publisher = MemoryPublisher::new();
        let svc = seeded_service(&publisher);

        let res = svc.search_by_title("c++").expect("should search");
        assert_eq!(HashSet::from(["ISBN-001".to_string()]), isbns(&res));

        let res = svc.search_by_author("DOE").expect("should search");
        assert_eq!(HashSet::from(["ISBN-002".to_string()]), isbns(&res));

        let res = svc.search_by_title("missing").expect("should search");
        assert!(res.is_empty());
    }

    #[test]
    fn test_should_match_everything_on_empty_search() {
        let publisher = MemoryPublisher::new();
        let svc = seeded_service(&publisher);
        let res = svc.search_by_title("").expect("should search");
        assert_eq!(3, res.len());
        assert_eq!(HashSet::from(["ISBN-001".to_string(), "ISBN-002".to_string(), "ISBN-003".to_string()]), isbns(&res));
        assert_eq!(3, svc.search_by_author("").expect("should search").len());
    }

    #[test]
    fn test_should_borrow_and_return() {
        let publisher = MemoryPublisher::new();
        let mut svc = seeded_service(&publisher);

        let borrowed = svc.borrow_book("U001", "ISBN-001").expect("should borrow");
        assert!(!borrowed.available);
        assert!(svc.get_patron("U001").expect("should return patron").borrowed.contains("ISBN-001"));
        assert_eq!(HashSet::from(["ISBN-001".to_string()]), isbns(&svc.borrowed_by("U001").expect("should list")));
        assert_loans_consistent(&svc);

        let returned = svc.return_book("U001", "ISBN-001").expect("should return");
        assert!(returned.available);
        assert!(svc.get_patron("U001").expect("should return patron").borrowed.is_empty());
        assert_loans_consistent(&svc);

        let res = svc.return_book("U001", "ISBN-001");
        assert!(matches!(res, Err(LibraryError::Conflict { .. })));
        assert_eq!(Some(NOT_BORROWED), res.err().as_ref().and_then(|e| e.reason_code()));

        let names = publisher.names();
        assert_eq!(Some(&"book_borrowed".to_string()), names.get(names.len() - 2));
        assert_eq!(Some(&"book_returned".to_string()), names.last());
    }

    #[test]
    fn test_should_reject_borrow_of_unavailable_book() {
        let publisher = MemoryPublisher::new();
        let mut svc = seeded_service(&publisher);
        svc.borrow_book("U001", "ISBN-001").expect("should borrow");

        let res = svc.borrow_book("U002", "ISBN-001");
        assert_eq!(Some(BOOK_UNAVAILABLE), res.err().as_ref().and_then(|e| e.reason_code()));
        assert!(svc.get_patron("U002").expect("should return patron").borrowed.is_empty());

        let res = svc.borrow_book("U001", "ISBN-001");
        assert!(matches!(res, Err(LibraryError::Conflict { .. })));
        assert_loans_consistent(&svc);
    }

    #[test]
    fn test_should_report_missing_keys_on_loans() {
        let publisher = MemoryPublisher::new();
        let mut svc = seeded_service(&publisher);
        assert!(matches!(svc.borrow_book("U404", "ISBN-001"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(svc.borrow_book("U001", "ISBN-404"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(svc.return_book("U404", "ISBN-001"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(svc.return_book("U001", "ISBN-404"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(svc.borrowed_by("U404"), Err(LibraryError::NotFound { .. })));
        assert!(svc.get_book("ISBN-001").expect("should return book").available);
    }

    #[test]
    fn test_should_block_removal_of_borrowed_book() {
        let publisher = MemoryPublisher::new();
        let mut svc = seeded_service(&publisher);
        svc.borrow_book("U002", "ISBN-002").expect("should borrow");

        let res = svc.remove_book("ISBN-002");
        assert_eq!(Some(BOOK_BORROWED), res.err().as_ref().and_then(|e| e.reason_code()));
        assert!(svc.get_book("ISBN-002").is_ok());

        svc.return_book("U002", "ISBN-002").expect("should return");
        svc.remove_book("ISBN-002").expect("should remove book");
        assert!(matches!(svc.get_book("ISBN-002"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(svc.remove_book("ISBN-002"), Err(LibraryError::NotFound { .. })));
    }

    #[test]
    fn test_should_block_removal_of_patron_with_loans() {
        let publisher = MemoryPublisher::new();
        let mut svc = seeded_service(&publisher);
        svc.borrow_book("U001", "ISBN-003").expect("should borrow");

        let res = svc.remove_patron("U001");
        assert_eq!(Some(PATRON_HAS_LOANS), res.err().as_ref().and_then(|e| e.reason_code()));
        assert!(svc.get_patron("U001").is_ok());

        svc.return_book("U001", "ISBN-003").expect("should return");
        svc.remove_patron("U001").expect("should remove patron");
        assert!(matches!(svc.get_patron("U001"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(svc.remove_patron("U001"), Err(LibraryError::NotFound { .. })));
        assert_eq!(Some(&"patron_removed".to_string()), publisher.names().last());
    }

    #[test]
    fn test_should_run_reference_scenario() {
        let publisher = MemoryPublisher::new();
        let mut svc = seeded_service(&publisher);

        let res = svc.search_by_title("c++").expect("should search");
        assert_eq!(1, res.len());
        assert_eq!("ISBN-001", res[0].isbn.as_str());

        svc.borrow_book("U001", "ISBN-001").expect("should borrow");
        assert!(!svc.get_book("ISBN-001").expect("should return book").available);

        assert!(matches!(svc.borrow_book("U002", "ISBN-001"), Err(LibraryError::Conflict { .. })));

        svc.return_book("U001", "ISBN-001").expect("should return");
        assert!(svc.get_book("ISBN-001").expect("should return book").available);

        assert!(svc.return_book("U002", "ISBN-002").is_err());
        assert!(matches!(svc.remove_book("ISBN-999"), Err(LibraryError::NotFound { .. })));

        svc.borrow_book("U002", "ISBN-002").expect("should borrow");
        assert!(matches!(svc.remove_book("ISBN-002"), Err(LibraryError::Conflict { .. })));
        svc.return_book("U002", "ISBN-002").expect("should return");
        svc.remove_book("ISBN-002").expect("should remove book");

        assert_eq!(2, svc.list_books().expect("should list books").len());
        assert_loans_consistent(&svc);
    }

    #[test]
    fn test_should_restore_book_when_patron_update_fails() {
        let publisher = MemoryPublisher::new();
        let failing = Arc::new(AtomicBool::new(false));
        let mut svc = CatalogServiceImpl::new(&Configuration::new("test"), create_book_repository(),
                                              Box::new(FlakyRepository::new(MemoryPatronRepository::new(), &failing)),
                                              Box::new(publisher.clone()));
        svc.add_book(&BookDto::new("ISBN-001", "Introduction to C++", "Bjarne Stroustrup")).expect("should add book");
        svc.add_patron(&PatronDto::new("U001", "Alice")).expect("should add patron");

        failing.store(true, Ordering::SeqCst);
        let res = svc.borrow_book("U001", "ISBN-001");
        assert!(matches!(res, Err(LibraryError::Runtime { .. })));
        assert!(svc.get_book("ISBN-001").expect("should return book").available);
        assert!(svc.get_patron("U001").expect("should return patron").borrowed.is_empty());
        assert_loans_consistent(&svc);
        assert!(!publisher.names().contains(&"book_borrowed".to_string()));

        failing.store(false, Ordering::SeqCst);
        svc.borrow_book("U001", "ISBN-001").expect("should borrow");
        assert_loans_consistent(&svc);
    }

    #[test]
    fn test_should_restore_patron_when_book_update_fails() {
        let publisher = MemoryPublisher::new();
        let failing = Arc::new(AtomicBool::new(false));
        let mut svc = CatalogServiceImpl::new(&Configuration::new("test"),
                                              Box::new(FlakyRepository::new(MemoryBookRepository::new(), &failing)),
                                              create_patron_repository(), Box::new(publisher.clone()));
        svc.add_book(&BookDto::new("ISBN-002", "Programming Principles", "Jane Doe")).expect("should add book");
        svc.add_patron(&PatronDto::new("U002", "Bob")).expect("should add patron");
        svc.borrow_book("U002", "ISBN-002").expect("should borrow");

        failing.store(true, Ordering::SeqCst);
        let res = svc.return_book("U002", "ISBN-002");
        assert!(matches!(res, Err(LibraryError::Runtime { .. })));
        assert!(svc.get_patron("U002").expect("should return patron").borrowed.contains("ISBN-002"));
        assert!(!svc.get_book("ISBN-002").expect("should return book").available);
        assert_loans_consistent(&svc);

        failing.store(false, Ordering::SeqCst);
        svc.return_book("U002", "ISBN-002").expect("should return");
        assert_loans_consistent(&svc);
    }

    #[test]
    fn test_should_keep_changes_when_publisher_fails() {
        let mut svc = CatalogServiceImpl::new(&Configuration::new("test"), create_book_repository(),
                                              create_patron_repository(), Box::new(OfflinePublisher));
        let added = svc.add_book(&BookDto::new("ISBN-003", "Algorithms in Depth", "Robert Sedgewick"))
            .expect("should add book");
        assert!(added.available);
        svc.add_patron(&PatronDto::new("U001", "Alice")).expect("should add patron");

        let borrowed = svc.borrow_book("U001", "ISBN-003").expect("should borrow");
        assert!(!borrowed.available);
        let returned = svc.return_book("U001", "ISBN-003").expect("should return");
        assert!(returned.available);
        assert_loans_consistent(&svc);

        svc.remove_book("ISBN-003").expect("should remove book");
        svc.remove_patron("U001").expect("should remove patron");
        assert!(svc.list_books().expect("should list books").is_empty());
        assert!(svc.list_patrons().expect("should list patrons").is_empty());
    }
}
