//! CLI entry point for the student mark tool.
//!
//! Loads students, courses and marks from CSV files and answers one
//! question per invocation: list a roster, show a course's marks, show one
//! student's GPA, or rank every student by GPA.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use student_marks::config::MarkScale;
use student_marks::input::load_gradebook;
use student_marks::output::{
    RankingReport, ranking_json, render_course_marks, render_gpa_lookup, render_ranking,
    render_roster,
};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "student_marks")]
#[command(about = "Keep student marks and rank students by weighted GPA", long_about = None)]
struct Cli {
    #[command(flatten)]
    sources: Sources,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Sources {
    /// Students CSV (id,name,dob)
    #[arg(long, global = true, default_value = "students.csv")]
    students: String,

    /// Courses CSV (id,name,credits)
    #[arg(long, global = true, default_value = "courses.csv")]
    courses: String,

    /// Marks CSV (course_id,student_id,mark)
    #[arg(long, global = true, default_value = "marks.csv")]
    marks: String,

    /// Optional JSON mark scale (min, max, enforce); defaults to 0..=20, enforced
    #[arg(long, global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List students
    Students,
    /// List courses
    Courses,
    /// Show marks for a course
    Marks {
        /// Course ID
        #[arg(short, long)]
        course: String,
    },
    /// Show a student's weighted GPA
    Gpa {
        /// Student ID
        #[arg(short, long)]
        student: String,
    },
    /// Rank all students by GPA, highest first
    Rank {
        /// Print the ranking as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/student_marks.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("student_marks.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let scale = match &cli.sources.config {
        Some(path) => MarkScale::load(path)?,
        None => MarkScale::default(),
    };
    let book = load_gradebook(
        &cli.sources.students,
        &cli.sources.courses,
        &cli.sources.marks,
        &scale,
    )?;

    match cli.command {
        Commands::Students => {
            print!("{}", render_roster("Student List", &book.students));
        }
        Commands::Courses => {
            print!("{}", render_roster("Courses list", &book.courses));
        }
        Commands::Marks { course } => {
            let report = book.course_report(&course);
            if report.is_none() {
                info!(course_id = %course, "No marks recorded for course");
            }
            print!("{}", render_course_marks(&course, report.as_deref()));
        }
        Commands::Gpa { student } => {
            if book.students.find_by_id(&student).is_none() {
                warn!(student_id = %student, "Student not found");
            }
            print!("{}", render_gpa_lookup(&book, &student));
        }
        Commands::Rank { json } => {
            let ranking = book.ranking();
            info!(students = ranking.len(), "Ranking computed");
            if json {
                println!("{}", ranking_json(&RankingReport::new(ranking))?);
            } else {
                print!("{}", render_ranking(&ranking));
            }
        }
    }

    Ok(())
}
