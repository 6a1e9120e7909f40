//! The lessons API surface.
//!
//! `LessonSource` is the seam between the caching service and the wire;
//! `HttpLessonSource` is the real implementation — one GET against the
//! lessons-by-subject endpoint, no auth, no retries.

use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;

use histquiz_core::model::Lesson;

use crate::error::FetchError;

/// A source of the full lesson list for the configured subject.
#[async_trait]
pub trait LessonSource: Send + Sync {
    /// Fetch the lesson list, unordered, as the API serves it.
    async fn fetch_lessons(&self) -> Result<Vec<Lesson>, FetchError>;
}

/// HTTP implementation of [`LessonSource`].
pub struct HttpLessonSource {
    base_url: String,
    subject: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpLessonSource {
    pub fn new(base_url: &str, subject: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            subject: subject.to_string(),
            timeout_secs,
            client,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/api/v1/lessons/subject/{}",
            self.base_url, self.subject
        )
    }
}

#[async_trait]
impl LessonSource for HttpLessonSource {
    #[instrument(skip(self), fields(subject = %self.subject))]
    async fn fetch_lessons(&self) -> Result<Vec<Lesson>, FetchError> {
        let response = self
            .client
            .get(self.endpoint())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout(self.timeout_secs)
                } else {
                    FetchError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(FetchError::Api { status });
        }

        response
            .json::<Vec<Lesson>>()
            .await
            .map_err(|e| FetchError::InvalidBody(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn lessons_body() -> serde_json::Value {
        serde_json::json!([
            {
                "id": "l1",
                "topic": "The Fall of Rome",
                "youtubeLink": "https://youtu.be/rome",
                "date": "2024-01-01T00:00:00Z",
                "questions": []
            },
            {
                "id": "l2",
                "topic": "The French Revolution",
                "youtubeLink": "https://youtu.be/fr",
                "date": "2024-06-01T00:00:00Z",
                "questions": []
            }
        ])
    }

    #[tokio::test]
    async fn successful_fetch() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/lessons/subject/History"))
            .respond_with(ResponseTemplate::new(200).set_body_json(lessons_body()))
            .mount(&server)
            .await;

        let source = HttpLessonSource::new(&server.uri(), "History", 30);
        let lessons = source.fetch_lessons().await.unwrap();

        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0].id, "l1");
        assert_eq!(lessons[1].topic, "The French Revolution");
    }

    #[tokio::test]
    async fn server_error_maps_to_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/lessons/subject/History"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let source = HttpLessonSource::new(&server.uri(), "History", 30);
        let err = source.fetch_lessons().await.unwrap_err();

        assert!(matches!(err, FetchError::Api { status: 500 }));
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn non_json_body_maps_to_invalid_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/lessons/subject/History"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let source = HttpLessonSource::new(&server.uri(), "History", 30);
        let err = source.fetch_lessons().await.unwrap_err();

        assert!(matches!(err, FetchError::InvalidBody(_)));
    }

    #[tokio::test]
    async fn wrong_shape_body_maps_to_invalid_body() {
        let server = MockServer::start().await;

        // An object where an array of lessons is expected.
        Mock::given(method("GET"))
            .and(path("/api/v1/lessons/subject/History"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"lessons": []})),
            )
            .mount(&server)
            .await;

        let source = HttpLessonSource::new(&server.uri(), "History", 30);
        let err = source.fetch_lessons().await.unwrap_err();

        assert!(matches!(err, FetchError::InvalidBody(_)));
    }

    #[tokio::test]
    async fn connection_refused_maps_to_network_error() {
        // Nothing is listening on this port.
        let source = HttpLessonSource::new("http://127.0.0.1:1", "History", 30);
        let err = source.fetch_lessons().await.unwrap_err();

        assert!(err.is_transport());
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let source = HttpLessonSource::new("http://example.test/", "History", 30);
        assert_eq!(
            source.endpoint(),
            "http://example.test/api/v1/lessons/subject/History"
        );
    }
}
