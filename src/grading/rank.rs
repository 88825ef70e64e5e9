use serde::Serialize;
use std::cmp::Ordering;

use crate::records::{Roster, Student};

/// One row of a GPA ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking<'a> {
    /// 1-based position, unique per row.
    pub rank: usize,
    pub student: &'a Student,
    pub gpa: f64,
}

/// Orders every student by GPA, highest first.
///
/// GPAs are computed in roster order and sorted with a stable sort, so
/// students with equal GPA keep their roster order (`-0.0` equals `0.0`).
/// A NaN GPA sorts last. Ranks run `1..=N`; ties get consecutive ranks,
/// never a shared one.
pub fn rank<'a, F>(students: &'a Roster<Student>, mut gpa_of: F) -> Vec<Ranking<'a>>
where
    F: FnMut(&Student) -> f64,
{
    let mut scored: Vec<(&Student, f64)> = students.iter().map(|s| (s, gpa_of(s))).collect();

    scored.sort_by(|a, b| descending_gpa(a.1, b.1));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (student, gpa))| Ranking {
            rank: i + 1,
            student,
            gpa,
        })
        .collect()
}

fn descending_gpa(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
