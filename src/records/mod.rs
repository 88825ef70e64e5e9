//! Student and course records and the roster that holds them.
//!
//! [`Student`] and [`Course`] are independent record types that share the
//! [`Record`] capability: an identifier for lookup and a one-line text form
//! through [`std::fmt::Display`]. Populating a record from a source is left
//! to `serde::Deserialize`, which both types derive.

mod course;
mod roster;
mod student;

pub use course::Course;
pub use roster::Roster;
pub use student::Student;

use std::fmt::Display;

/// A record that can be stored in a [`Roster`] and listed as text.
pub trait Record: Display {
    /// Human-readable name of the record kind, used in log fields.
    const KIND: &'static str;

    /// The identifier the roster looks records up by.
    fn id(&self) -> &str;
}
