//! The `histquiz play` command — an interactive quiz session.
//!
//! Without a lesson id the command renders the list and reads a
//! selection; with one it goes straight to the quiz. All quiz state lives
//! in a `QuizSession` for the lifetime of the invocation.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use histquiz_client::{load_config_from, LessonService};
use histquiz_core::catalog::{find_lesson, format_lesson_date};
use histquiz_core::model::Lesson;
use histquiz_core::search::search_url;
use histquiz_core::session::{QuizSession, SelectionOutcome};

use crate::render;

pub async fn execute(
    lesson_id: Option<String>,
    refresh: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let service = LessonService::from_config(&config);

    eprintln!("Loading lessons...");
    let lessons = match super::load_lessons(&service, refresh).await {
        Ok(lessons) => lessons,
        Err(e) => {
            super::report_fetch_failure(&e);
            return Ok(());
        }
    };

    if lessons.is_empty() {
        println!("No lessons available.");
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    let lesson = match lesson_id {
        Some(id) => match find_lesson(&lessons, &id) {
            Some(lesson) => lesson.clone(),
            None => {
                render::print_not_found(&id);
                println!();
                match pick_lesson(&lessons, &mut input)? {
                    Some(lesson) => lesson,
                    None => return Ok(()),
                }
            }
        },
        None => match pick_lesson(&lessons, &mut input)? {
            Some(lesson) => lesson,
            None => return Ok(()),
        },
    };

    run_quiz(&lesson, &mut input)
}

/// The list-to-detail navigation: show the list, read a selection.
/// Returns `None` when the user backs out.
fn pick_lesson<I>(lessons: &[Lesson], input: &mut I) -> Result<Option<Lesson>>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("{}", render::lesson_table(lessons));

    loop {
        print!("Select a lesson [1-{}, q to quit]: ", lessons.len());
        io::stdout().flush()?;

        let Some(line) = input.next() else {
            return Ok(None);
        };
        let line = line?;
        let answer = line.trim();

        if answer.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=lessons.len()).contains(&n) => {
                return Ok(Some(lessons[n - 1].clone()));
            }
            _ => println!("Enter a number between 1 and {}.", lessons.len()),
        }
    }
}

fn run_quiz<I>(lesson: &Lesson, input: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!();
    println!("{}", lesson.topic);
    println!("Published {}", format_lesson_date(&lesson.date));
    println!("Video: {}", lesson.youtube_link);
    println!();

    let mut session = QuizSession::new(lesson.questions.clone());
    if session.total() == 0 {
        println!("This lesson has no questions yet.");
        return Ok(());
    }

    'questions: for index in 0..session.total() {
        let question = session.questions()[index].clone();
        let last_label = render::option_label(question.options.len() - 1);

        println!("{}. {}", index + 1, question.text);
        for (i, option) in question.options.iter().enumerate() {
            println!(
                "{}",
                render::option_line(i, option, session.option_appearance(index, i))
            );
        }

        loop {
            print!("Answer [A-{last_label}, h = hint, s = skip, q = quit]: ");
            io::stdout().flush()?;

            let Some(line) = input.next() else {
                break 'questions;
            };
            let line = line?;
            let answer = line.trim();

            if answer.eq_ignore_ascii_case("q") {
                break 'questions;
            }
            if answer.eq_ignore_ascii_case("s") {
                println!("Skipped.");
                break;
            }
            if answer.eq_ignore_ascii_case("h") {
                if question.hint.is_empty() {
                    println!("No hint for this one.");
                } else {
                    println!("Hint: {}", question.hint);
                }
                continue;
            }

            let Some(option) = parse_option_letter(answer, question.options.len()) else {
                println!("Pick one of A-{last_label}.");
                continue;
            };

            let outcome = session.answer(index, option);
            debug_assert!(matches!(outcome, SelectionOutcome::Recorded { .. }));

            println!();
            for (i, text) in question.options.iter().enumerate() {
                println!(
                    "{}",
                    render::option_line(i, text, session.option_appearance(index, i))
                );
            }
            if !question.explanation.is_empty() {
                println!();
                println!("{}", question.explanation);
            }
            println!("Look it up: {}", search_url(&question.text));
            println!(
                "{}",
                render::header_line(session.answered_count(), session.total(), session.score())
            );
            break;
        }

        println!();
    }

    println!(
        "{}",
        render::header_line(session.answered_count(), session.total(), session.score())
    );
    println!("{}", render::results_table(&session));

    Ok(())
}

/// Map an answer letter to an option index, if it names one.
fn parse_option_letter(answer: &str, option_count: usize) -> Option<usize> {
    let mut chars = answer.chars();
    let letter = chars.next()?;
    if chars.next().is_some() || !letter.is_ascii_alphabetic() {
        return None;
    }
    let index = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
    (index < option_count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letters_in_range() {
        assert_eq!(parse_option_letter("A", 4), Some(0));
        assert_eq!(parse_option_letter("d", 4), Some(3));
        assert_eq!(parse_option_letter("b", 2), Some(1));
    }

    #[test]
    fn rejects_out_of_range_and_junk() {
        assert_eq!(parse_option_letter("E", 4), None);
        assert_eq!(parse_option_letter("c", 2), None);
        assert_eq!(parse_option_letter("", 4), None);
        assert_eq!(parse_option_letter("AB", 4), None);
        assert_eq!(parse_option_letter("1", 4), None);
    }
}
