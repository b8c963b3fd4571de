//! Student records.

use serde::{Deserialize, Serialize};

/// A student row parsed from the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub score: i64,
}

impl Student {
    pub fn new(id: u32, name: impl Into<String>, score: i64) -> Self {
        Self {
            id,
            name: name.into(),
            score,
        }
    }
}
