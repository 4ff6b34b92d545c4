use std::collections::HashMap;
use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;

pub trait Repository<Entity>: Sync + Send {
    // create an entity
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity, the stored version must match the entity's version
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    fn delete(&mut self, id: &str) -> LibraryResult<usize>;

    // find entities whose fields contain every predicate value, ignoring case
    fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<Entity>>;
}

// Searchable exposes named text fields to repository queries
pub trait Searchable: Identifiable {
    fn field(&self, name: &str) -> Option<&str>;
}

// Case-insensitive substring match of every predicate entry. An empty value matches
// anything, an unknown field matches nothing.
pub fn matches_predicate<E: Searchable>(entity: &E, predicate: &HashMap<String, String>) -> bool {
    predicate.iter().all(|(name, value)| {
        entity.field(name)
            .map(|field| field.to_lowercase().contains(value.to_lowercase().as_str()))
            .unwrap_or(false)
    })
}
