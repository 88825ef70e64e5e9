//! GPA computation and ranking.
//!
//! A student's GPA is the credit-weighted mean of their recorded marks,
//! rounded to two decimals. Ranking orders every student on a roster by
//! GPA, highest first.

pub mod gpa;
pub mod rank;
pub mod utility;
