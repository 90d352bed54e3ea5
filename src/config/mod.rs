use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "poem-grader")]
#[command(about = "Submit short poems and report structural grades to an external grading service")]
pub struct CliConfig {
    /// Acting user; owns created submissions and keys the context lookup.
    #[arg(long)]
    pub actor: String,

    /// Poem text to submit. When omitted, the landing route for the actor is
    /// printed instead.
    #[arg(long)]
    pub poem: Option<String>,

    /// Edit an existing submission instead of creating a new one.
    #[arg(long, value_name = "ID")]
    pub edit: Option<u64>,

    #[arg(long, default_value = "./poems.json")]
    pub store_path: String,

    #[arg(long, default_value = "http://localhost:8080/contexts")]
    pub context_endpoint: String,

    #[arg(long, default_value = "http://localhost:8080/outcomes")]
    pub outcome_endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("store_path", &self.store_path)?;
        validate_url("context_endpoint", &self.context_endpoint)?;
        validate_url("outcome_endpoint", &self.outcome_endpoint)?;
        Ok(())
    }
}
