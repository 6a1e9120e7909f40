//! Core data model types for histquiz.
//!
//! These are the wire types the lessons API serves. Lessons are immutable
//! once fetched; the whole list is replaced on every successful fetch,
//! never merged or patched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A topic unit bundling a video reference and a list of quiz questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Unique identifier assigned by the API.
    pub id: String,
    /// Human-readable topic title.
    pub topic: String,
    /// Link to the video lesson.
    pub youtube_link: String,
    /// When the lesson was published.
    pub date: DateTime<Utc>,
    /// The lesson's multiple-choice questions.
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A single multiple-choice question.
///
/// Invariant: `correct_option_index < options.len()`. The API owns the
/// data contract; a violation is an upstream bug, not something this
/// model defends against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Identifier, when the API assigns one.
    #[serde(default)]
    pub id: Option<String>,
    /// The question text.
    pub text: String,
    /// Question kind as reported by the API (e.g. "MULTIPLE_CHOICE").
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Answer options; four in practice.
    pub options: Vec<String>,
    /// Index into `options` of the single correct answer.
    pub correct_option_index: usize,
    /// Points awarded when the correct option is selected.
    pub points: u32,
    /// Nudge available before answering.
    #[serde(default)]
    pub hint: String,
    /// Revealed once the question has been answered.
    #[serde(default)]
    pub explanation: String,
}
