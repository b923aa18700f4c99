//! Roster report driver.
//!
//! # Responsibility
//! - Provide the out-of-core entry point: argument handling, report
//!   rendering, and error reporting.
//! - Keep output deterministic for quick local checks.

use std::process::ExitCode;
use stockroom_core::{core_version, load_roster, Grade, StudentRecord};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("report") if args.len() == 2 => run_report(&args[1]),
        Some("version") => {
            println!("stockroom_core version={}", core_version());
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("usage: stockroom_cli report <roster.csv> | version");
            ExitCode::FAILURE
        }
    }
}

fn run_report(path: &str) -> ExitCode {
    match load_roster(path) {
        Ok(students) => {
            for student in &students {
                println!("{}", report_line(student));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            // One bad line invalidates the whole batch; nothing is rendered.
            eprintln!("roster ingestion failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn report_line(student: &StudentRecord) -> String {
    format!(
        "{} (ID: {}): Score = {}, Grade = {}",
        student.name,
        student.id,
        student.score,
        Grade::from_score(student.score)
    )
}
