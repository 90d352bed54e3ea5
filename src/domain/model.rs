use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A persisted poem record owned by exactly one actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: u64,
    pub text: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-actor data attached by an external learning session. The parameter set
/// is opaque key/value pairs; only two keys matter to the reporting decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradingContext {
    pub parameters: HashMap<String, String>,
}

pub const OUTCOME_SERVICE_URL: &str = "outcome_service_url";
pub const CORRELATION_KEY: &str = "correlation_key";

impl GradingContext {
    /// Destination for outcome reporting, if the session provided one.
    /// An empty value counts as not provided.
    pub fn outcome_service_url(&self) -> Option<&str> {
        self.parameters
            .get(OUTCOME_SERVICE_URL)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }

    /// Opaque key distinguishing which external activity a grade belongs to.
    pub fn correlation_key(&self) -> &str {
        self.parameters
            .get(CORRELATION_KEY)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Result of resolving an actor's grading context. Absent is the common case
/// of an actor acting outside any external session, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextLookup {
    Present(GradingContext),
    Absent,
}
