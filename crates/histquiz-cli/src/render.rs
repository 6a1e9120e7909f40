//! Shared terminal rendering for the list, detail, and quiz views.

use comfy_table::{Cell, Table};

use histquiz_core::catalog::format_lesson_date;
use histquiz_core::model::Lesson;
use histquiz_core::session::{AnswerState, OptionAppearance, QuizSession};

/// Letter label for an option position: 0 → "A", 1 → "B", ...
pub fn option_label(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// The lesson list as a table, in the order given (most recent first).
pub fn lesson_table(lessons: &[Lesson]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Id", "Topic", "Date", "Questions"]);

    for (i, lesson) in lessons.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&lesson.id),
            Cell::new(&lesson.topic),
            Cell::new(format_lesson_date(&lesson.date)),
            Cell::new(lesson.questions.len()),
        ]);
    }

    table
}

/// One option line, rendered per the question's answer state.
pub fn option_line(index: usize, text: &str, appearance: OptionAppearance) -> String {
    let label = option_label(index);
    match appearance {
        OptionAppearance::Neutral | OptionAppearance::Dimmed => {
            format!("  [{label}] {text}")
        }
        OptionAppearance::SelectedCorrect => {
            format!("> [{label}] {text}   (your answer: correct)")
        }
        OptionAppearance::SelectedIncorrect => {
            format!("> [{label}] {text}   (your answer: incorrect)")
        }
        OptionAppearance::RevealedCorrect => {
            format!("  [{label}] {text}   (correct answer)")
        }
    }
}

/// The aggregate header: answered count and running score.
pub fn header_line(answered: usize, total: usize, score: u32) -> String {
    format!("{answered} of {total} answered | Score: {score}")
}

/// The not-found state for a lesson id missing from the loaded list.
pub fn print_not_found(lesson_id: &str) {
    println!("Lesson not found: {lesson_id}");
    println!("It isn't in the currently loaded list; the id may be stale.");
    println!("Run `histquiz lessons` to see what's available.");
}

/// Per-question results for the end-of-session summary.
pub fn results_table(session: &QuizSession) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Result", "Points"]);

    for (i, question) in session.questions().iter().enumerate() {
        let (result, points) = match session.state(i) {
            AnswerState::Unanswered => ("skipped", 0),
            AnswerState::Answered { selected } => {
                if selected == question.correct_option_index {
                    ("correct", question.points)
                } else {
                    ("incorrect", 0)
                }
            }
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(truncate(&question.text, 48)),
            Cell::new(result),
            Cell::new(points),
        ]);
    }

    table
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{head}...")
}
