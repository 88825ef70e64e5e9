//! Sparse (course, student) → mark table.

use std::collections::{BTreeMap, HashMap};

static NO_MARKS: BTreeMap<String, f64> = BTreeMap::new();

/// Truncates a raw mark to one decimal place, rounding toward negative
/// infinity (`15.97` becomes `15.9`).
pub fn truncate_mark(raw: f64) -> f64 {
    (raw * 10.0).floor() / 10.0
}

/// Marks keyed first by course, then by student.
///
/// Courses iterate in the order they first received a mark, which is the
/// order [`MarkTable::get_marks_for_student`] reports them in.
#[derive(Debug, Clone, Default)]
pub struct MarkTable {
    courses: Vec<(String, BTreeMap<String, f64>)>,
    index: HashMap<String, usize>,
}

impl MarkTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the truncated mark, replacing any earlier one for the pair.
    ///
    /// Neither identifier is checked against a roster and the value is not
    /// range-checked.
    pub fn set_mark(&mut self, course_id: &str, student_id: &str, raw_mark: f64) {
        let slot = match self.index.get(course_id) {
            Some(&i) => i,
            None => {
                self.courses.push((course_id.to_string(), BTreeMap::new()));
                self.index.insert(course_id.to_string(), self.courses.len() - 1);
                self.courses.len() - 1
            }
        };

        self.courses[slot]
            .1
            .insert(student_id.to_string(), truncate_mark(raw_mark));
    }

    pub fn get_mark(&self, course_id: &str, student_id: &str) -> Option<f64> {
        self.get_marks_for_course(course_id).get(student_id).copied()
    }

    /// Student id → mark for one course; empty when the course has no marks.
    pub fn get_marks_for_course(&self, course_id: &str) -> &BTreeMap<String, f64> {
        self.index
            .get(course_id)
            .map(|&i| &self.courses[i].1)
            .unwrap_or(&NO_MARKS)
    }

    /// Every `(mark, course_id)` recorded for a student, in course order.
    pub fn get_marks_for_student(&self, student_id: &str) -> Vec<(f64, &str)> {
        self.courses
            .iter()
            .filter_map(|(course_id, marks)| {
                marks
                    .get(student_id)
                    .map(|&mark| (mark, course_id.as_str()))
            })
            .collect()
    }

    /// Number of recorded marks across all courses.
    pub fn len(&self) -> usize {
        self.courses.iter().map(|(_, marks)| marks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
