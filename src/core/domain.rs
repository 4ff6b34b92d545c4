use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by catalog entries
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
        }
    }
}

// Keys are stored and compared exactly as given, so " " is a valid key.
pub(crate) fn is_empty_key(key: &str) -> bool {
    key.is_empty()
}
