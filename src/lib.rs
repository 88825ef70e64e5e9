pub mod config;
pub mod gradebook;
pub mod grading;
pub mod input;
pub mod marks;
pub mod output;
pub mod records;
