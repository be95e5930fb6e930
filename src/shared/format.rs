//! Report date formatting

use chrono::{DateTime, Utc};

/// Format a timestamp as `DD/MM/YYYY` for report projections.
pub fn format_br_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}
