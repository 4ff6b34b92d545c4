use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::patrons::Patron;


// PatronDto is the copy of a library member handed out by the catalog.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronDto {
    pub patron_id: String,
    pub version: i64,
    pub name: String,
    pub borrowed: HashSet<String>,
}

impl PatronDto {
    pub fn new(patron_id: &str, name: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            version: 0,
            name: name.to_string(),
            borrowed: HashSet::new(),
        }
    }
}

impl Identifiable for PatronDto {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Patron for PatronDto {
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
        let mut isbns: Vec<String> = self.borrowed.iter().cloned().collect();
        isbns.sort();
        isbns
    }
}

impl Display for PatronDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Patron ID: {}, Name: {}, Borrowed count: {}", self.patron_id, self.name, self.borrowed.len())
    }
}
