use crate::core::grade::compute_grade;
use crate::core::reporter::OutcomeReporter;
use crate::core::{ContextStore, OutcomeSender, Result, SubmissionStore};
use crate::utils::validation::poem_field_errors;

/// What the actor is doing with the submitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionAction {
    Create,
    Edit(u64),
}

/// Terminal state of one submission request. `Rejected` re-renders the form
/// with field errors (200), `Forbidden` is a 403 for a non-owner edit, and
/// `Saved` redirects to the detail view of the persisted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Saved { id: u64 },
    Rejected { errors: Vec<String> },
    Forbidden,
}

/// Drives one submission through validate -> persist -> resolve context ->
/// grade -> report. Collaborators are injected so tests can substitute fakes.
pub struct SubmissionWorkflow<S, C, O>
where
    S: SubmissionStore,
    C: ContextStore,
    O: OutcomeSender,
{
    store: S,
    contexts: C,
    reporter: OutcomeReporter<O>,
}

impl<S, C, O> SubmissionWorkflow<S, C, O>
where
    S: SubmissionStore,
    C: ContextStore,
    O: OutcomeSender,
{
    pub fn new(store: S, contexts: C, sender: O) -> Self {
        Self {
            store,
            contexts,
            reporter: OutcomeReporter::new(sender),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handles a create or edit request for `actor`. Validation failures and
    /// ownership violations stop the sequence before any mutation; grading
    /// and reporting run only after the text is persisted. Infrastructure
    /// errors from any collaborator propagate uncaught — a reporting failure
    /// in particular does not undo the committed write.
    pub async fn submit(
        &self,
        actor: &str,
        action: SubmissionAction,
        text: &str,
    ) -> Result<SubmissionOutcome> {
        let errors = poem_field_errors(text);
        if !errors.is_empty() {
            tracing::debug!("Submission by {} rejected: {:?}", actor, errors);
            return Ok(SubmissionOutcome::Rejected { errors });
        }

        let id = match action {
            SubmissionAction::Create => {
                let id = self.store.create(text, actor).await?;
                tracing::info!("Created submission {} for {}", id, actor);
                id
            }
            SubmissionAction::Edit(id) => {
                let existing = self.store.get(id).await?;
                if existing.owner != actor {
                    tracing::warn!(
                        "{} attempted to edit submission {} owned by {}",
                        actor,
                        id,
                        existing.owner
                    );
                    return Ok(SubmissionOutcome::Forbidden);
                }
                self.store.update(id, text).await?;
                tracing::info!("Updated submission {} for {}", id, actor);
                id
            }
        };

        let lookup = self.contexts.lookup(actor).await?;
        let grade = compute_grade(text);
        self.reporter
            .report_if_applicable(actor, &lookup, grade)
            .await?;

        Ok(SubmissionOutcome::Saved { id })
    }
}
