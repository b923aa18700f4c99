//! Delimited roster ingestion and grade derivation.
//!
//! # Responsibility
//! - Parse `id,name,score` lines into student records.
//! - Derive letter grades from whole-number scores.
//!
//! # Invariants
//! - The first malformed line aborts the whole batch; no partial roster is
//!   ever returned.
//! - Every ingestion error carries the offending 1-based line number.

use crate::model::entity::{EntityId, FieldValidationError};
use crate::model::student::StudentRecord;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const ROSTER_FIELD_COUNT: usize = 3;

pub type RosterResult<T> = Result<T, RosterError>;

/// Ingestion error for delimited roster input.
#[derive(Debug)]
pub enum RosterError {
    /// Underlying read failure.
    Io(std::io::Error),
    /// A line does not carry exactly three non-empty fields.
    MissingField { line: usize, found: usize },
    /// A field value failed numeric or range validation.
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::MissingField { line, found } => write!(
                f,
                "Line {line}: expected {ROSTER_FIELD_COUNT} fields (id,name,score), found {found}"
            ),
            Self::InvalidField { line, field, value } => {
                write!(f, "Line {line}: invalid {field} value `{value}`")
            }
        }
    }
}

impl Error for RosterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RosterError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Letter grade over four closed score bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Derives the grade for a whole-number score, top band checked first.
    ///
    /// Bands are inclusive on both ends: `80..=100` is an A, `70..=79` a B,
    /// `60..=69` a C, `50..=59` a D, everything else an F.
    pub fn from_score(score: u32) -> Self {
        match score {
            80..=100 => Self::A,
            70..=79 => Self::B,
            60..=69 => Self::C,
            50..=59 => Self::D,
            _ => Self::F,
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        write!(f, "{letter}")
    }
}

/// Parses one `id,name,score` line into a student record.
///
/// Fields are comma-delimited; surrounding whitespace is trimmed. `id` and
/// `score` must be whole numbers, `score` inside `0..=100`.
///
/// # Errors
/// - `MissingField` when the line does not split into exactly three
///   non-empty fields.
/// - `InvalidField` when `id` or `score` is non-numeric or `score` is out of
///   range; the error names the failing field.
pub fn parse_line(line: &str, line_number: usize) -> RosterResult<StudentRecord> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != ROSTER_FIELD_COUNT || fields.iter().any(|field| field.is_empty()) {
        let found = fields.iter().filter(|field| !field.is_empty()).count();
        return Err(RosterError::MissingField {
            line: line_number,
            found,
        });
    }

    let id = fields[0]
        .parse::<EntityId>()
        .map_err(|_| RosterError::InvalidField {
            line: line_number,
            field: "id",
            value: fields[0].to_string(),
        })?;
    let score = fields[2]
        .parse::<i64>()
        .map_err(|_| RosterError::InvalidField {
            line: line_number,
            field: "score",
            value: fields[2].to_string(),
        })?;

    StudentRecord::try_new(id, fields[1], score).map_err(|err| match err {
        FieldValidationError::EmptyName => RosterError::MissingField {
            line: line_number,
            found: ROSTER_FIELD_COUNT - 1,
        },
        _ => RosterError::InvalidField {
            line: line_number,
            field: "score",
            value: fields[2].to_string(),
        },
    })
}

/// Parses a full roster from `reader`, aborting on the first bad line.
///
/// Blank lines are skipped but keep their place in line numbering.
pub fn parse_roster(reader: impl Read) -> RosterResult<Vec<StudentRecord>> {
    let mut students = Vec::new();
    for (position, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        students.push(parse_line(&line, position + 1)?);
    }
    Ok(students)
}

/// Reads and parses a roster file.
///
/// Unlike the persisted movement log, a missing roster file is an error: the
/// caller asked to ingest a specific batch.
pub fn load_roster(path: impl AsRef<Path>) -> RosterResult<Vec<StudentRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let students = parse_roster(file)?;
    info!(
        "event=roster_load module=roster status=ok records={} path={}",
        students.len(),
        path.display()
    );
    Ok(students)
}
