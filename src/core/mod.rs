pub mod dispatch;
pub mod grade;
pub mod reporter;
pub mod workflow;

pub use crate::domain::model::{ContextLookup, GradingContext, Submission};
pub use crate::domain::ports::{ContextStore, OutcomeSender, SubmissionStore};
pub use crate::utils::error::Result;
