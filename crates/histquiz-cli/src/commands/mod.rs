//! CLI subcommands.

pub mod init;
pub mod lessons;
pub mod play;
pub mod show;

use histquiz_client::{FetchError, HttpLessonSource, LessonService};
use histquiz_core::model::Lesson;

/// Fetch the lesson list, honoring `--refresh`.
pub(crate) async fn load_lessons(
    service: &LessonService<HttpLessonSource>,
    refresh: bool,
) -> Result<Vec<Lesson>, FetchError> {
    if refresh {
        service.refresh().await
    } else {
        service.lessons().await
    }
}

/// Report a fetch failure and degrade to the empty state.
pub(crate) fn report_fetch_failure(err: &FetchError) {
    tracing::error!("failed to fetch lessons: {err}");
    eprintln!("Could not load lessons: {err}");
    println!("No lessons available.");
}
