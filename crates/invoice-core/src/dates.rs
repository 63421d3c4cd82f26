//! Calendar-date display helpers.

use chrono::{Datelike, NaiveDate};

/// Render an ISO `YYYY-MM-DD` date the way the preview shows it
/// (`M/D/YYYY`). Unparsable input is shown verbatim.
pub fn display_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        Err(_) => iso.to_string(),
    }
}
