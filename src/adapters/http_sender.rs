use crate::domain::ports::OutcomeSender;
use crate::utils::error::{PoemError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct OutcomePayload<'a> {
    actor: &'a str,
    grade: f64,
    correlation_key: &'a str,
}

/// Delivers grades to the grading authority as a single JSON POST. Transport
/// and auth beyond this call are the authority's concern; no retries here.
pub struct HttpOutcomeSender {
    endpoint: String,
    client: Client,
}

impl HttpOutcomeSender {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl OutcomeSender for HttpOutcomeSender {
    async fn send(&self, actor: &str, grade: f64, correlation_key: &str) -> Result<()> {
        let payload = OutcomePayload {
            actor,
            grade,
            correlation_key,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PoemError::Outcome {
                message: format!("outcome endpoint returned status {}", response.status()),
            });
        }

        tracing::debug!("Delivered grade {:.3} for {} to {}", grade, actor, self.endpoint);
        Ok(())
    }
}
