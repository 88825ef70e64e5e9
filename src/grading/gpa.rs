use tracing::debug;

use crate::grading::utility::{round_to, weighted_mean};
use crate::marks::MarkTable;
use crate::records::{Course, Roster};

/// Computes the credit-weighted GPA of one student.
///
/// Each recorded mark is weighted by its course's credits. A mark whose
/// course is not on the roster weighs 0, so it drops out of both sums.
/// A student with no marks, or whose marks carry no credit at all, gets
/// `0.0`. The result is rounded to two decimals.
pub fn compute(student_id: &str, courses: &Roster<Course>, marks: &MarkTable) -> f64 {
    let pairs: Vec<(f64, f64)> = marks
        .get_marks_for_student(student_id)
        .into_iter()
        .map(|(mark, course_id)| {
            let credits = courses.find_by_id(course_id).map_or(0, |c| c.credits);
            (mark, f64::from(credits))
        })
        .collect();

    let gpa = round_to(weighted_mean(&pairs), 2);
    debug!(student_id, marks = pairs.len(), gpa, "GPA computed");
    gpa
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_marks_is_zero() {
        let courses = create_courses(&[("C1", 3)]);
        assert_eq!(compute("S1", &courses, &MarkTable::new()), 0.0);
    }

    #[test]
    fn test_zero_credit_sum_is_zero() {
        let courses = create_courses(&[("C1", 0), ("C2", 0)]);
        let mut marks = MarkTable::new();
        marks.set_mark("C1", "S1", 18.0);
        marks.set_mark("C2", "S1", 14.0);

        assert_eq!(compute("S1", &courses, &marks), 0.0);
    }

    #[test]
    fn test_credit_weighted_mean() {
        let courses = create_courses(&[("C1", 3), ("C2", 1)]);
        let mut marks = MarkTable::new();
        marks.set_mark("C1", "S1", 10.0);
        marks.set_mark("C2", "S1", 20.0);

        assert_eq!(compute("S1", &courses, &marks), 12.5);
    }

    #[test]
    fn test_unknown_course_is_excluded() {
        let courses = create_courses(&[("C1", 2)]);
        let mut marks = MarkTable::new();
        marks.set_mark("C1", "S1", 14.0);
        marks.set_mark("GONE", "S1", 2.0);

        assert_eq!(compute("S1", &courses, &marks), 14.0);
    }

    #[test]
    fn test_only_unknown_courses_is_zero() {
        let courses = create_courses(&[]);
        let mut marks = MarkTable::new();
        marks.set_mark("GONE", "S1", 17.0);

        assert_eq!(compute("S1", &courses, &marks), 0.0);
    }

    #[test]
    fn test_result_is_rounded_to_two_places() {
        let courses = create_courses(&[("C1", 1), ("C2", 1), ("C3", 1)]);
        let mut marks = MarkTable::new();
        marks.set_mark("C1", "S1", 10.0);
        marks.set_mark("C2", "S1", 10.0);
        marks.set_mark("C3", "S1", 11.0);

        // 31 / 3 = 10.333..
        assert_eq!(compute("S1", &courses, &marks), 10.33);
    }

    #[test]
    fn test_other_students_marks_are_ignored() {
        let courses = create_courses(&[("C1", 2)]);
        let mut marks = MarkTable::new();
        marks.set_mark("C1", "S1", 8.0);
        marks.set_mark("C1", "S2", 19.0);

        assert_eq!(compute("S1", &courses, &marks), 8.0);
    }

    fn create_courses(specs: &[(&str, u32)]) -> Roster<Course> {
        specs
            .iter()
            .map(|&(id, credits)| Course::new(id, format!("Course {id}"), credits))
            .collect()
    }
}
