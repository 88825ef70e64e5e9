//! CSV loaders for students, courses and marks.
//!
//! Every loader reads a headed CSV source through serde and is generic over
//! [`std::io::Read`]; the `*_file` wrappers open a path first. Malformed
//! rows fail the whole load with the source name and row attached.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use tracing::{debug, info, warn};

use crate::config::MarkScale;
use crate::gradebook::Gradebook;
use crate::marks::MarkTable;
use crate::records::{Course, Record, Roster, Student};

/// A single row of a marks CSV: `course_id,student_id,mark`.
#[derive(Debug, Deserialize)]
pub struct MarkRow {
    pub course_id: String,
    pub student_id: String,
    pub mark: f64,
}

/// Reads a roster of `T` records from a headed CSV source.
///
/// # Errors
///
/// Returns an error naming `source` and the row if any row fails to
/// deserialize (for example, non-numeric credits).
pub fn read_roster<T, R>(reader: R, source: &str) -> Result<Roster<T>>
where
    T: Record + DeserializeOwned,
    R: Read,
{
    let mut rdr = csv::Reader::from_reader(reader);
    let mut roster = Roster::new();

    for (row, result) in rdr.deserialize().enumerate() {
        let record: T =
            result.with_context(|| format!("{source}: bad {} row {}", T::KIND, row + 1))?;
        roster.add(record);
    }

    debug!(source, kind = T::KIND, count = roster.len(), "Roster loaded");
    Ok(roster)
}

/// Reads mark rows, checking each against `scale`.
///
/// Non-finite marks always fail the load. Out-of-range marks fail it when
/// the scale is enforced, otherwise they are kept with a warning.
pub fn read_marks<R: Read>(reader: R, source: &str, scale: &MarkScale) -> Result<Vec<MarkRow>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for (row, result) in rdr.deserialize().enumerate() {
        let mark: MarkRow =
            result.with_context(|| format!("{source}: bad mark row {}", row + 1))?;

        if !mark.mark.is_finite() {
            bail!(
                "{source}: mark {} for student '{}' in course '{}' is not a number",
                mark.mark,
                mark.student_id,
                mark.course_id
            );
        }

        if !scale.contains(mark.mark) {
            if scale.enforce {
                bail!(
                    "{source}: mark {} for student '{}' in course '{}' is outside {}..={}",
                    mark.mark,
                    mark.student_id,
                    mark.course_id,
                    scale.min,
                    scale.max
                );
            }
            warn!(
                course_id = %mark.course_id,
                student_id = %mark.student_id,
                mark = mark.mark,
                "Mark outside scale, keeping it"
            );
        }

        rows.push(mark);
    }

    debug!(source, count = rows.len(), "Mark rows loaded");
    Ok(rows)
}

/// Enters mark rows course by course, in the order each course first
/// appears. Rows for a course missing from the roster are skipped with a
/// warning. Returns the number of marks recorded.
pub fn record_marks(book: &mut Gradebook, rows: &[MarkRow]) -> usize {
    let mut course_order: Vec<&str> = Vec::new();
    for row in rows {
        if !course_order.contains(&row.course_id.as_str()) {
            course_order.push(&row.course_id);
        }
    }

    let mut recorded = 0;
    for course_id in course_order {
        let marks = rows
            .iter()
            .filter(|r| r.course_id == course_id)
            .map(|r| (r.student_id.as_str(), r.mark));

        match book.record_course_marks(course_id, marks) {
            Ok(count) => recorded += count,
            Err(e) => warn!(course_id, error = %e, "Skipping marks for unknown course"),
        }
    }
    recorded
}

fn open(path: &str) -> Result<File> {
    File::open(path).with_context(|| format!("failed to open '{path}'"))
}

pub fn read_roster_file<T: Record + DeserializeOwned>(path: &str) -> Result<Roster<T>> {
    read_roster(open(path)?, path)
}

pub fn read_marks_file(path: &str, scale: &MarkScale) -> Result<Vec<MarkRow>> {
    read_marks(open(path)?, path, scale)
}

/// Builds a [`Gradebook`] from the three CSV files.
#[tracing::instrument(skip(scale))]
pub fn load_gradebook(
    students_path: &str,
    courses_path: &str,
    marks_path: &str,
    scale: &MarkScale,
) -> Result<Gradebook> {
    let students: Roster<Student> = read_roster_file(students_path)?;
    let courses: Roster<Course> = read_roster_file(courses_path)?;
    let rows = read_marks_file(marks_path, scale)?;

    for student in students.iter().filter(|s| s.birth_date().is_none()) {
        warn!(student_id = %student.id, dob = %student.dob, "Date of birth is not YYYY-MM-DD");
    }

    let mut book = Gradebook::new(students, courses, MarkTable::new());
    let recorded = record_marks(&mut book, &rows);

    info!(
        students = book.students.len(),
        courses = book.courses.len(),
        marks = recorded,
        skipped = rows.len() - recorded,
        "Gradebook loaded"
    );

    Ok(book)
}
