use crate::core::{ContextLookup, OutcomeSender, Result};

/// Decides whether a computed grade is reported to the external grading
/// authority, and performs at most one send per invocation.
pub struct OutcomeReporter<O: OutcomeSender> {
    sender: O,
}

impl<O: OutcomeSender> OutcomeReporter<O> {
    pub fn new(sender: O) -> Self {
        Self { sender }
    }

    /// Reporting policy, in order: no context, or a context without a
    /// non-empty outcome service URL, means no send at all. Otherwise the
    /// grade goes out exactly once with the context's correlation key
    /// (empty string when the session did not provide one). A sender failure
    /// propagates; the already-persisted submission is never rolled back.
    pub async fn report_if_applicable(
        &self,
        actor: &str,
        lookup: &ContextLookup,
        grade: f64,
    ) -> Result<()> {
        let context = match lookup {
            ContextLookup::Absent => {
                tracing::debug!("No grading context for {}, skipping outcome report", actor);
                return Ok(());
            }
            ContextLookup::Present(context) => context,
        };

        let Some(service_url) = context.outcome_service_url() else {
            tracing::debug!(
                "Grading context for {} has no outcome service URL, skipping outcome report",
                actor
            );
            return Ok(());
        };

        let correlation_key = context.correlation_key();
        tracing::info!(
            "Reporting grade {:.3} for {} to {} (correlation key: {:?})",
            grade,
            actor,
            service_url,
            correlation_key
        );
        self.sender.send(actor, grade, correlation_key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{GradingContext, CORRELATION_KEY, OUTCOME_SERVICE_URL};
    use crate::utils::error::PoemError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct RecordingSender {
        calls: Arc<Mutex<Vec<(String, f64, String)>>>,
        fail: bool,
    }

    impl RecordingSender {
        fn new() -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                fail: true,
            }
        }

        async fn calls(&self) -> Vec<(String, f64, String)> {
            self.calls.lock().await.clone()
        }
    }

    #[async_trait]
    impl crate::domain::ports::OutcomeSender for RecordingSender {
        async fn send(&self, actor: &str, grade: f64, correlation_key: &str) -> Result<()> {
            self.calls
                .lock()
                .await
                .push((actor.to_string(), grade, correlation_key.to_string()));
            if self.fail {
                return Err(PoemError::Outcome {
                    message: "sender unavailable".to_string(),
                });
            }
            Ok(())
        }
    }

    fn context(pairs: &[(&str, &str)]) -> GradingContext {
        GradingContext {
            parameters: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_absent_context_sends_nothing() {
        let sender = RecordingSender::new();
        let reporter = OutcomeReporter::new(sender.clone());

        reporter
            .report_if_applicable("student_user", &ContextLookup::Absent, 1.0)
            .await
            .unwrap();

        assert!(sender.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_context_without_service_url_sends_nothing() {
        let sender = RecordingSender::new();
        let reporter = OutcomeReporter::new(sender.clone());
        let lookup = ContextLookup::Present(context(&[(CORRELATION_KEY, "unit-3")]));

        reporter
            .report_if_applicable("student_user", &lookup, 1.0)
            .await
            .unwrap();

        assert!(sender.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_context_with_empty_service_url_sends_nothing() {
        let sender = RecordingSender::new();
        let reporter = OutcomeReporter::new(sender.clone());
        let lookup = ContextLookup::Present(context(&[(OUTCOME_SERVICE_URL, "")]));

        reporter
            .report_if_applicable("student_user", &lookup, 2.0 / 3.0)
            .await
            .unwrap();

        assert!(sender.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_sends_exactly_once_with_full_tuple() {
        let sender = RecordingSender::new();
        let reporter = OutcomeReporter::new(sender.clone());
        let lookup = ContextLookup::Present(context(&[
            (OUTCOME_SERVICE_URL, "https://lms.example.com/outcomes"),
            (CORRELATION_KEY, "unit-3-poetry"),
        ]));

        reporter
            .report_if_applicable("student_user", &lookup, 2.0 / 3.0)
            .await
            .unwrap();

        let calls = sender.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            (
                "student_user".to_string(),
                2.0 / 3.0,
                "unit-3-poetry".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_missing_correlation_key_defaults_to_empty_string() {
        let sender = RecordingSender::new();
        let reporter = OutcomeReporter::new(sender.clone());
        let lookup = ContextLookup::Present(context(&[(
            OUTCOME_SERVICE_URL,
            "https://lms.example.com/outcomes",
        )]));

        reporter
            .report_if_applicable("student_user", &lookup, 1.0 / 3.0)
            .await
            .unwrap();

        let calls = sender.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].2, "");
    }

    #[tokio::test]
    async fn test_sender_failure_propagates() {
        let sender = RecordingSender::failing();
        let reporter = OutcomeReporter::new(sender.clone());
        let lookup = ContextLookup::Present(context(&[(
            OUTCOME_SERVICE_URL,
            "https://lms.example.com/outcomes",
        )]));

        let result = reporter
            .report_if_applicable("student_user", &lookup, 1.0)
            .await;

        assert!(matches!(result, Err(PoemError::Outcome { .. })));
        assert_eq!(sender.calls().await.len(), 1);
    }
}
