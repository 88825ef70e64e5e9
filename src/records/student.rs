use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    /// Date of birth exactly as entered.
    pub dob: String,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, dob: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dob: dob.into(),
        }
    }

    /// Parses the date of birth as `YYYY-MM-DD`, if it is one.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.dob.trim(), "%Y-%m-%d").ok()
    }
}

impl Record for Student {
    const KIND: &'static str = "student";

    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}, DoB: {}", self.id, self.name, self.dob)
    }
}
