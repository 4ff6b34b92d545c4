use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::repository::Searchable;
use crate::patrons::Patron;

// PatronEntity abstracts library member as stored by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatronEntity {
    pub patron_id: String,
    pub version: i64,
    pub name: String,
    pub borrowed: HashSet<String>,
}

impl PatronEntity {
    pub fn new(patron_id: &str, name: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            version: 0,
            name: name.to_string(),
            borrowed: HashSet::new(),
        }
    }

    // Records a loan. No check that the ISBN exists, the catalog does that.
    pub fn borrow(&mut self, isbn: &str) {
        self.borrowed.insert(isbn.to_string());
    }

    pub fn give_back(&mut self, isbn: &str) {
        self.borrowed.remove(isbn);
    }
}

impl Identifiable for PatronEntity {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Patron for PatronEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn has_borrowed(&self, isbn: &str) -> bool {
        self.borrowed.contains(isbn)
    }

    fn borrowed_count(&self) -> usize {
        self.borrowed.len()
    }

    fn list_borrowed(&self) -> Vec<String> {
        self.borrowed.iter().cloned().collect()
    }
}

impl Searchable for PatronEntity {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "patron_id" => Some(self.patron_id.as_str()),
            "name" => Some(self.name.as_str()),
            _ => None,
        }
    }
}
