//! Catalog operations over a fetched lesson list.
//!
//! The list view shows lessons most recent first; a selection resolves
//! back to a lesson by id, and a miss is the not-found state rather than
//! an error.

use chrono::{DateTime, Utc};

use crate::model::Lesson;

/// Order lessons by publication date, most recent first.
pub fn sort_most_recent_first(lessons: &mut [Lesson]) {
    lessons.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Look up a lesson by its identifier.
///
/// `None` means the id is absent from the currently held list — a stale
/// cache or a mistyped id. Callers render a not-found state for it.
pub fn find_lesson<'a>(lessons: &'a [Lesson], id: &str) -> Option<&'a Lesson> {
    lessons.iter().find(|l| l.id == id)
}

/// Format a lesson date as a long-form display date, e.g. "June 1, 2024".
pub fn format_lesson_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
