//! Text and JSON rendering of rosters, marks, GPAs and rankings.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::gradebook::{CourseReportRow, Gradebook};
use crate::grading::rank::Ranking;
use crate::records::{Record, Roster, Student};

/// A ranking with the time it was produced, for JSON output.
#[derive(Debug, Serialize)]
pub struct RankingReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub students: Vec<Ranking<'a>>,
}

impl<'a> RankingReport<'a> {
    pub fn new(students: Vec<Ranking<'a>>) -> Self {
        Self {
            generated_at: Utc::now(),
            students,
        }
    }
}

/// Formats a mark or GPA, keeping the `.0` on whole numbers (`20.0`, not `20`).
pub fn format_score(value: f64) -> String {
    format!("{value:?}")
}

/// Lists every record under a `**** title ****` banner.
pub fn render_roster<T: Record>(title: &str, roster: &Roster<T>) -> String {
    let mut out = format!("**** {title} ****\n");
    for record in roster.iter() {
        out.push_str(&format!("{record}\n"));
    }
    out
}

/// Renders one course's marks, one line per student.
pub fn render_course_marks(course_id: &str, report: Option<&[CourseReportRow<'_>]>) -> String {
    let Some(rows) = report else {
        return "No marks found for this course!\n".to_string();
    };

    let mut out = format!("Marks for course: {course_id}\n");
    for (student, mark) in rows {
        let mark = mark.map_or_else(|| "Not Found".to_string(), format_score);
        out.push_str(&format!("Student: {} - Mark: {mark}\n", student.name));
    }
    out
}

pub fn render_student_gpa(student: &Student, gpa: f64) -> String {
    format!(
        "Student: {} (ID: {})\nWeighted GPA: {}\n",
        student.name,
        student.id,
        format_score(gpa)
    )
}

/// Looks up a student's GPA and renders it, or the not-found line.
pub fn render_gpa_lookup(book: &Gradebook, student_id: &str) -> String {
    match book.student_gpa(student_id) {
        Some((student, gpa)) => render_student_gpa(student, gpa),
        None => "Student not found!\n".to_string(),
    }
}

/// Renders a ranking as a fixed-width table.
pub fn render_ranking(ranking: &[Ranking<'_>]) -> String {
    let mut out = String::from("**** Students Sorted by GPA (Descending) ****\n");
    out.push_str(&format!(
        "{:<6}{:<12}{:<20}{:<10}\n",
        "Rank", "ID", "Name", "GPA"
    ));
    out.push_str(&format!("{}\n", "-".repeat(48)));

    for row in ranking {
        out.push_str(&format!(
            "{:<6}{:<12}{:<20}{:<10}\n",
            row.rank,
            row.student.id,
            row.student.name,
            format_score(row.gpa)
        ));
    }
    out
}

/// Serializes a ranking report as pretty-printed JSON.
pub fn ranking_json(report: &RankingReport<'_>) -> Result<String> {
    debug!(students = report.students.len(), "Serializing ranking");
    Ok(serde_json::to_string_pretty(report)?)
}
