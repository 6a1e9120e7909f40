//! The `histquiz lessons` command — the lesson list view.

use std::path::PathBuf;

use anyhow::Result;

use histquiz_client::{load_config_from, LessonService};

use crate::render;

pub async fn execute(refresh: bool, config_path: Option<PathBuf>) -> Result<()> {
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

    println!("{}", render::lesson_table(&lessons));
    if lessons.is_empty() {
        println!("No lessons found for subject '{}'.", config.subject);
    }

    Ok(())
}
