//! The `histquiz show` command — the lesson detail view.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use histquiz_client::{load_config_from, LessonService};
use histquiz_core::catalog::{find_lesson, format_lesson_date};
use histquiz_core::model::Lesson;

use crate::render;

pub async fn execute(lesson_id: String, refresh: bool, config_path: Option<PathBuf>) -> Result<()> {
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

    match find_lesson(&lessons, &lesson_id) {
        Some(lesson) => print_detail(lesson),
        None => render::print_not_found(&lesson_id),
    }

    Ok(())
}

fn print_detail(lesson: &Lesson) {
    println!("{}", lesson.topic);
    println!("Published {}", format_lesson_date(&lesson.date));
    println!("Video: {}", lesson.youtube_link);
    println!();

    if lesson.questions.is_empty() {
        println!("This lesson has no questions yet.");
        return;
    }

    let total_points: u32 = lesson.questions.iter().map(|q| q.points).sum();
    println!(
        "{} questions, {} points total:",
        lesson.questions.len(),
        total_points
    );

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Options", "Points"]);
    for (i, question) in lesson.questions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&question.text),
            Cell::new(question.options.len()),
            Cell::new(question.points),
        ]);
    }
    println!("{table}");

    println!();
    println!("Start the quiz with: histquiz play {}", lesson.id);
}
