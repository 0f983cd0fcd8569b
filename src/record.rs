//! Record Module
//!
//! A single student entry and its line format.
//!
//! ## Line Format
//! ```text
//! ┌─────────┬──────┬───────┬────────┬───────┐
//! │ roll_no │ name │ email │ course │ marks │
//! └─────────┴──────┴───────┴────────┴───────┘
//!   joined by '|', one record per line
//! ```
//!
//! String fields are written verbatim. A `|` or newline inside a field is
//! not escaped and breaks the line on reload.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RosterError};

/// Field separator within a line
pub const DELIMITER: char = '|';

/// Number of fields on every line
pub const FIELD_COUNT: usize = 5;

/// One student entry
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub roll_no: i32,
    pub name: String,
    pub email: String,
    pub course: String,
    pub marks: f64,
}

impl Record {
    /// Create a record from its five fields
    pub fn new(
        roll_no: i32,
        name: impl Into<String>,
        email: impl Into<String>,
        course: impl Into<String>,
        marks: f64,
    ) -> Self {
        Self {
            roll_no,
            name: name.into(),
            email: email.into(),
            course: course.into(),
            marks,
        }
    }

    /// Serialize to a single line (no trailing newline)
    pub fn to_line(&self) -> String {
        format!(
            "{}{d}{}{d}{}{d}{}{d}{}",
            self.roll_no,
            self.name,
            self.email,
            self.course,
            format_marks(self.marks),
            d = DELIMITER,
        )
    }

    /// Parse a line produced by [`Record::to_line`]
    ///
    /// The line must split into exactly [`FIELD_COUNT`] fields. Numeric
    /// fields are trimmed before parsing; string fields are kept as-is.
    pub fn from_line(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return Err(RosterError::Format(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                fields.len()
            )));
        }

        let roll_no = parse_roll_no(fields[0])
            .map_err(|_| RosterError::Format(format!("invalid roll number {:?}", fields[0])))?;
        let marks = parse_marks(fields[4])
            .map_err(|_| RosterError::Format(format!("invalid marks {:?}", fields[4])))?;

        Ok(Self::new(roll_no, fields[1], fields[2], fields[3], marks))
    }

    /// Exact name comparison ignoring case
    pub fn matches_name(&self, name: &str) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }
}

impl FromStr for Record {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_line(s)
    }
}

/// Multi-line rendering, one field per line
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Roll No: {}", self.roll_no)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Email: {}", self.email)?;
        writeln!(f, "Course: {}", self.course)?;
        write!(f, "Marks: {}", format_marks(self.marks))
    }
}

/// Parse a roll number as typed by a user or stored on disk
pub fn parse_roll_no(input: &str) -> std::result::Result<i32, std::num::ParseIntError> {
    input.trim().parse()
}

/// Parse marks as typed by a user or stored on disk
pub fn parse_marks(input: &str) -> std::result::Result<f64, std::num::ParseFloatError> {
    input.trim().parse()
}

/// Decode one raw line, replacing invalid UTF-8 and stripping the terminator
pub fn decode_line(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.trim_end_matches(['\n', '\r']).to_string()
}

/// Shortest round-tripping form that always shows a fraction or exponent
/// ("72.0", "88.5", "1e21")
fn format_marks(marks: f64) -> String {
    format!("{:?}", marks)
}
