use crate::core::domain::Identifiable;

pub mod command;
pub mod domain;
pub mod dto;
pub mod factory;
pub mod repository;

// Patron is the read view of a library member and the ISBNs they currently hold
pub trait Patron: Identifiable {
    fn name(&self) -> &str;
    fn has_borrowed(&self, isbn: &str) -> bool;
    fn borrowed_count(&self) -> usize;
    fn list_borrowed(&self) -> Vec<String>;
}
