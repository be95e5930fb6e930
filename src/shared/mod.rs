//! Cross-cutting helpers

pub mod format;

pub use format::format_br_date;
