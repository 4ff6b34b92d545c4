use std::collections::HashMap;

use tracing::debug;

use crate::core::library::{LibraryError, LibraryResult, STALE_VERSION};
use crate::core::repository::{matches_predicate, Repository};
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::repository::PatronRepository;

#[derive(Debug, Default)]
pub struct MemoryPatronRepository {
    patrons: HashMap<String, PatronEntity>,
}

impl MemoryPatronRepository {
    pub fn new() -> Self {
        Self {
            patrons: HashMap::new(),
        }
    }
}

impl Repository<PatronEntity> for MemoryPatronRepository {
    fn create(&mut self, entity: &PatronEntity) -> LibraryResult<usize> {
        if self.patrons.contains_key(entity.patron_id.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("patron with id {} already exists", entity.patron_id).as_str()));
        }
        self.patrons.insert(entity.patron_id.to_string(), entity.clone());
        debug!("stored patron {}", entity.patron_id);
        Ok(1)
    }

    fn update(&mut self, entity: &PatronEntity) -> LibraryResult<usize> {
        let existing = self.patrons.get_mut(entity.patron_id.as_str()).ok_or_else(|| LibraryError::not_found(
            format!("patron with id {} not found", entity.patron_id).as_str()))?;
        if existing.version != entity.version {
            return Err(LibraryError::conflict(
                format!("patron {} was changed, expected version {} but found {}",
                        entity.patron_id, entity.version, existing.version).as_str(), Some(STALE_VERSION.to_string())));
        }
        *existing = PatronEntity { version: entity.version + 1, ..entity.clone() };
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<PatronEntity> {
        self.patrons.get(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("patron with id {} not found", id).as_str()))
    }

    fn delete(&mut self, id: &str) -> LibraryResult<usize> {
        self.patrons.remove(id).map(|_| 1).ok_or_else(|| LibraryError::not_found(
            format!("patron with id {} not found", id).as_str()))
    }

    fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<PatronEntity>> {
        Ok(self.patrons.values()
            .filter(|patron| matches_predicate(*patron, predicate))
            .cloned()
            .collect())
    }
}

impl PatronRepository for MemoryPatronRepository {}
