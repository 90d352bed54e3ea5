pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{HttpContextStore, HttpOutcomeSender, JsonFileStore};
pub use config::CliConfig;
pub use core::dispatch::{dispatch, Landing};
pub use core::grade::compute_grade;
pub use core::reporter::OutcomeReporter;
pub use core::workflow::{SubmissionAction, SubmissionOutcome, SubmissionWorkflow};
pub use domain::model::{ContextLookup, GradingContext, Submission};
pub use domain::ports::{ContextStore, OutcomeSender, SubmissionStore};
pub use utils::error::{PoemError, Result};
