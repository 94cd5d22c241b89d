//! Upstream course-table expansion.
//!
//! Strictly upstream of the engine: turns already-parsed course rows
//! (one per subject, as they appear in the uploaded sheet) into one
//! [`Course`] record per (subject, batch) pair. File parsing itself —
//! Excel, CSV, whatever the front end accepts — stays an external
//! collaborator; this module only normalizes fields:
//!
//! - L-T-P strings are normalized (`/` and `\` as separators,
//!   non-numeric parts zeroed, padded to three parts) before the
//!   lenient parse.
//! - Teacher lists are `+`-separated; the first entry is the primary
//!   faculty the engine constrains on.
//! - Batch lists are `,`-separated numerals mapped to ordinal names
//!   (`1` → `1st`); a missing batch is inferred from the subject code's
//!   leading digits.

use serde::Deserialize;

use crate::models::Course;

/// One raw row of the normalized course table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseRow {
    /// Subject code, e.g. `"AE21202/AE21002"`.
    pub subject_code: String,
    /// Subject name.
    pub subject_name: String,
    /// Raw L-T-P string, e.g. `"3-1-0"`.
    pub ltp: String,
    /// Raw teacher list, e.g. `"MK+SMD"`.
    pub teachers: String,
    /// Raw batch list, e.g. `"2,3"`. May be empty.
    #[serde(default)]
    pub batch: String,
    /// Preferred room. May be empty.
    #[serde(default)]
    pub room: String,
}

/// Expands every row into one course per batch, in row order.
pub fn expand_rows(rows: &[CourseRow]) -> Vec<Course> {
    rows.iter().flat_map(expand_row).collect()
}

/// Expands one row: one course per listed batch, or a single course
/// with the batch inferred from the subject code when none is listed.
pub fn expand_row(row: &CourseRow) -> Vec<Course> {
    let ltp = normalize_ltp(&row.ltp);
    let faculty = primary_faculty(&row.teachers);

    let mut batches = batch_names(&row.batch);
    if batches.is_empty() {
        batches.push(infer_batch_from_code(&row.subject_code));
    }

    batches
        .into_iter()
        .map(|batch| {
            let mut course = Course::new(row.subject_code.trim())
                .with_name(row.subject_name.trim())
                .with_ltp(&ltp)
                .with_faculty(&faculty)
                .with_batch(batch);
            let room = row.room.trim();
            if !room.is_empty() {
                course = course.with_room(room);
            }
            course
        })
        .collect()
}

/// Normalizes an L-T-P string to exactly three `-`-separated counts.
///
/// `/` and `\` act as separators (a common artifact of spreadsheet
/// reformatting), non-numeric parts become 0, and short triples are
/// padded with zeros.
pub fn normalize_ltp(raw: &str) -> String {
    let cleaned = raw.replace(['/', '\\'], "-");
    let mut parts: Vec<u32> = cleaned
        .trim()
        .split('-')
        .map(|p| p.trim().parse().unwrap_or(0))
        .collect();
    parts.truncate(3);
    while parts.len() < 3 {
        parts.push(0);
    }
    format!("{}-{}-{}", parts[0], parts[1], parts[2])
}

/// First entry of a `+`-separated teacher list.
pub fn primary_faculty(raw: &str) -> String {
    raw.split('+')
        .next()
        .map(str::trim)
        .unwrap_or("")
        .to_string()
}

/// Maps a `,`-separated list of batch numerals to ordinal names.
/// Non-numeric entries are dropped.
fn batch_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
        .map(ordinal_name)
        .collect()
}

fn ordinal_name(numeral: &str) -> String {
    match numeral {
        "1" => "1st".to_string(),
        "2" => "2nd".to_string(),
        "3" => "3rd".to_string(),
        _ => format!("{numeral}th"),
    }
}

/// Infers the batch year from the leading digits of the subject code
/// (the part before any `/` alias). Codes with fewer than three digits
/// stay `"Unknown"`.
fn infer_batch_from_code(subject_code: &str) -> String {
    let head = subject_code.split('/').next().unwrap_or("").trim();
    let digits: String = head.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 3 {
        return "Unknown".to_string();
    }
    match digits.as_bytes()[0] {
        b'1' => "1st",
        b'2' => "2nd",
        b'3' | b'4' => "3rd",
        b'5' | b'6' => "4th",
        _ => "Unknown",
    }
    .to_string()
}
