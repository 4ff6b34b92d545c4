use crate::patrons::repository::PatronRepository;
use crate::patrons::repository::memory_patron_repository::MemoryPatronRepository;

pub fn create_patron_repository() -> Box<dyn PatronRepository> {
    Box::new(MemoryPatronRepository::new())
}
