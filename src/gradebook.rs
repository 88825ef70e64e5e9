//! The gradebook owns the student and course rosters together with the
//! mark table, and answers the questions front ends ask of them.

use anyhow::{Result, bail};
use tracing::{debug, info};

use crate::grading::gpa;
use crate::grading::rank::{Ranking, rank};
use crate::marks::MarkTable;
use crate::records::{Course, Roster, Student};

/// One line of a course mark report: a student and their mark, if any.
pub type CourseReportRow<'a> = (&'a Student, Option<f64>);

#[derive(Debug, Clone, Default)]
pub struct Gradebook {
    pub students: Roster<Student>,
    pub courses: Roster<Course>,
    pub marks: MarkTable,
}

impl Gradebook {
    pub fn new(students: Roster<Student>, courses: Roster<Course>, marks: MarkTable) -> Self {
        Self {
            students,
            courses,
            marks,
        }
    }

    /// GPA of `student_id`, or `None` when the student is not on the roster.
    pub fn student_gpa(&self, student_id: &str) -> Option<(&Student, f64)> {
        let student = self.students.find_by_id(student_id)?;
        Some((student, gpa::compute(&student.id, &self.courses, &self.marks)))
    }

    /// Every student ordered by GPA, highest first.
    pub fn ranking(&self) -> Vec<Ranking<'_>> {
        rank(&self.students, |s| {
            gpa::compute(&s.id, &self.courses, &self.marks)
        })
    }

    /// Each roster student with their mark for `course_id`, in roster order.
    ///
    /// Returns `None` when nobody has a mark for the course yet.
    pub fn course_report(&self, course_id: &str) -> Option<Vec<CourseReportRow<'_>>> {
        if self.marks.get_marks_for_course(course_id).is_empty() {
            return None;
        }

        Some(
            self.students
                .iter()
                .map(|s| (s, self.marks.get_mark(course_id, &s.id)))
                .collect(),
        )
    }

    /// Enters marks for one course, as `(student_id, raw_mark)` pairs.
    ///
    /// Fails without recording anything when the course is not on the
    /// roster. Student ids are not checked.
    pub fn record_course_marks<'m, I>(&mut self, course_id: &str, marks: I) -> Result<usize>
    where
        I: IntoIterator<Item = (&'m str, f64)>,
    {
        if self.courses.find_by_id(course_id).is_none() {
            bail!("course '{course_id}' not found");
        }

        let mut count = 0;
        for (student_id, mark) in marks {
            debug!(course_id, student_id, mark, "Recording mark");
            self.marks.set_mark(course_id, student_id, mark);
            count += 1;
        }

        info!(course_id, count, "Course marks recorded");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_gpa_unknown_student() {
        let book = create_gradebook();
        assert!(book.student_gpa("S9").is_none());
    }

    #[test]
    fn test_student_gpa() {
        let book = create_gradebook();
        let (student, gpa) = book.student_gpa("S1").unwrap();

        assert_eq!(student.name, "An");
        // (10*3 + 20*1) / 4
        assert_eq!(gpa, 12.5);
    }

    #[test]
    fn test_student_without_marks_has_zero_gpa() {
        let mut book = create_gradebook();
        book.students.add(Student::new("S4", "Dung", "2006-04-04"));

        assert_eq!(book.student_gpa("S4").map(|(_, g)| g), Some(0.0));
    }

    #[test]
    fn test_ranking() {
        let book = create_gradebook();
        let rows: Vec<_> = book
            .ranking()
            .iter()
            .map(|r| (r.rank, r.student.id.clone(), r.gpa))
            .collect();

        assert_eq!(
            rows,
            vec![
                (1, "S2".to_string(), 15.0),
                (2, "S3".to_string(), 15.0),
                (3, "S1".to_string(), 12.5),
            ]
        );
    }

    #[test]
    fn test_course_report_marks_missing_students() {
        let mut book = create_gradebook();
        book.marks.set_mark("C3", "S2", 11.0);

        let report = book.course_report("C3").unwrap();
        let rows: Vec<_> = report.iter().map(|(s, m)| (s.id.as_str(), *m)).collect();

        assert_eq!(rows, vec![("S1", None), ("S2", Some(11.0)), ("S3", None)]);
    }

    #[test]
    fn test_course_report_without_marks_is_none() {
        let book = create_gradebook();
        assert!(book.course_report("C9").is_none());
    }

    #[test]
    fn test_record_course_marks_unknown_course() {
        let mut book = create_gradebook();
        let before = book.marks.len();

        assert!(book.record_course_marks("C9", [("S1", 12.0)]).is_err());
        assert_eq!(book.marks.len(), before);
    }

    #[test]
    fn test_record_course_marks_truncates() {
        let mut book = create_gradebook();
        let count = book
            .record_course_marks("C2", [("S1", 15.97), ("S2", 8.04)])
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(book.marks.get_mark("C2", "S1"), Some(15.9));
        assert_eq!(book.marks.get_mark("C2", "S2"), Some(8.0));
    }

    fn create_gradebook() -> Gradebook {
        let students = [("S1", "An"), ("S2", "Binh"), ("S3", "Chi")]
            .into_iter()
            .map(|(id, name)| Student::new(id, name, "2006-01-01"))
            .collect();
        let courses = [
            Course::new("C1", "Algebra", 3),
            Course::new("C2", "Physics", 1),
            Course::new("C3", "History", 2),
        ]
        .into_iter()
        .collect();

        let mut marks = MarkTable::new();
        marks.set_mark("C1", "S1", 10.0);
        marks.set_mark("C2", "S1", 20.0);
        marks.set_mark("C1", "S2", 15.0);
        marks.set_mark("C1", "S3", 15.0);

        Gradebook::new(students, courses, marks)
    }
}
