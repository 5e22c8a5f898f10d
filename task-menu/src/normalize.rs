//! Normalization of free-text user input.
//!
//! Every text field a user types goes through one of these functions before it
//! reaches a [`crate::Task`]. Functions never fail: unrecognised input comes
//! back as `None` (or a sentinel) and the caller picks the default.

use crate::task::{Difficulty, Status};
use chrono::{DateTime, Datelike, NaiveDate};
use log::debug;

/// Shown wherever a value is missing.
pub const NO_DATA: &str = "Sin datos";
/// Title used when the user leaves it blank.
pub const UNTITLED: &str = "Sin título";

pub const DEFAULT_TITLE_MAX_CHARS: usize = 100;
pub const DEFAULT_DESCRIPTION_MAX_CHARS: usize = 500;

/// Expected shape of a typed due date.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn normalize_status(input: &str) -> Option<Status> {
    input.parse().ok()
}

/// Matches the difficulty labels ignoring case, and accepts `facil` for
/// [`Difficulty::Easy`].
pub fn normalize_difficulty(input: &str) -> Option<Difficulty> {
    input.parse().ok()
}

/// Parses a calendar date typed as `YYYY-MM-DD`.
///
/// A full RFC 3339 timestamp is accepted as well, keeping only its date.
/// Blank or unparsable input gives `None`.
pub fn parse_due_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(input, DUE_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(input).map(|stamp| stamp.date_naive()))
        .inspect_err(|err| debug!("Ignoring due date '{}': {}", input, err))
        .ok()
}

/// Renders a date as `DD/MM/YYYY`, or [`NO_DATA`] when there is nothing to
/// render.
pub fn format_date<D: Datelike>(date: Option<&D>) -> String {
    match date {
        Some(date) if (0..=9999).contains(&date.year()) => {
            format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
        }
        _ => NO_DATA.to_string(),
    }
}

pub fn sanitize_title(input: &str, max_chars: usize) -> String {
    let title: String = input.trim().chars().take(max_chars).collect();
    if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title
    }
}

pub fn sanitize_description(input: &str, max_chars: usize) -> String {
    input.chars().take(max_chars).collect()
}
