use crate::domain::model::{ContextLookup, GradingContext};
use crate::domain::ports::ContextStore;
use crate::utils::error::{PoemError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Context lookup over HTTP: `GET {base}/{actor}`. A 404 means the actor is
/// acting outside any external session and maps to `ContextLookup::Absent`;
/// every other non-success status is an infrastructure error.
pub struct HttpContextStore {
    base_url: String,
    client: Client,
}

impl HttpContextStore {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    fn actor_url(&self, actor: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), actor)
    }
}

#[async_trait]
impl ContextStore for HttpContextStore {
    async fn lookup(&self, actor: &str) -> Result<ContextLookup> {
        let url = self.actor_url(actor);
        tracing::debug!("Looking up grading context at {}", url);

        let response = self.client.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => {
                tracing::debug!("No grading context stored for {}", actor);
                Ok(ContextLookup::Absent)
            }
            status if status.is_success() => {
                let context: GradingContext = response.json().await?;
                Ok(ContextLookup::Present(context))
            }
            status => Err(PoemError::Lookup {
                message: format!("context lookup for {} returned status {}", actor, status),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CORRELATION_KEY, OUTCOME_SERVICE_URL};
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_lookup_present_parses_parameter_set() {
        let server = MockServer::start();
        let context_mock = server.mock(|when, then| {
            when.method(GET).path("/contexts/student_user");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "outcome_service_url": "https://lms.example.com/outcomes",
                    "correlation_key": "unit-3-poetry"
                }));
        });

        let store = HttpContextStore::new(server.url("/contexts"));
        let lookup = store.lookup("student_user").await.unwrap();

        context_mock.assert();
        let ContextLookup::Present(context) = lookup else {
            panic!("expected Present, got {:?}", lookup);
        };
        assert_eq!(
            context.parameters.get(OUTCOME_SERVICE_URL).unwrap(),
            "https://lms.example.com/outcomes"
        );
        assert_eq!(
            context.parameters.get(CORRELATION_KEY).unwrap(),
            "unit-3-poetry"
        );
    }

    #[tokio::test]
    async fn test_lookup_miss_is_absent_not_an_error() {
        let server = MockServer::start();
        let context_mock = server.mock(|when, then| {
            when.method(GET).path("/contexts/student_user");
            then.status(404);
        });

        let store = HttpContextStore::new(server.url("/contexts"));
        let lookup = store.lookup("student_user").await.unwrap();

        context_mock.assert();
        assert_eq!(lookup, ContextLookup::Absent);
    }

    #[tokio::test]
    async fn test_lookup_server_error_propagates() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/contexts/student_user");
            then.status(500);
        });

        let store = HttpContextStore::new(server.url("/contexts"));
        let result = store.lookup("student_user").await;

        assert!(matches!(result, Err(PoemError::Lookup { .. })));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url_is_tolerated() {
        let server = MockServer::start();
        let context_mock = server.mock(|when, then| {
            when.method(GET).path("/contexts/student_user");
            then.status(404);
        });

        let store = HttpContextStore::new(format!("{}/", server.url("/contexts")));
        store.lookup("student_user").await.unwrap();

        context_mock.assert();
    }
}
