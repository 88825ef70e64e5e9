use serde::{Deserialize, Serialize};
use std::fmt;

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    /// Credit weight used by the GPA average.
    pub credits: u32,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>, credits: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            credits,
        }
    }
}

impl Record for Course {
    const KIND: &'static str = "course";

    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Credits: {}",
            self.id, self.name, self.credits
        )
    }
}
