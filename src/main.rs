use anyhow::Context;
use clap::Parser;
use poem_grader::utils::{logger, validation::Validate};
use poem_grader::{
    dispatch, CliConfig, HttpContextStore, HttpOutcomeSender, JsonFileStore, Landing,
    SubmissionAction, SubmissionOutcome, SubmissionWorkflow,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting poem-grader CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = JsonFileStore::open(&config.store_path)
        .with_context(|| format!("opening submission store at {}", config.store_path))?;
    let contexts = HttpContextStore::new(config.context_endpoint.clone());
    let sender = HttpOutcomeSender::new(config.outcome_endpoint.clone());
    let workflow = SubmissionWorkflow::new(store, contexts, sender);

    let Some(poem) = config.poem else {
        // Landing request: print where the actor would be routed.
        let landing = dispatch(workflow.store(), &config.actor).await?;
        match landing {
            Landing::CreateForm => println!("➡️  create form"),
            Landing::Detail(id) => println!("➡️  detail view of submission {}", id),
            Landing::Listing => println!("➡️  submission listing"),
        }
        return Ok(());
    };

    let action = match config.edit {
        Some(id) => SubmissionAction::Edit(id),
        None => SubmissionAction::Create,
    };

    match workflow.submit(&config.actor, action, &poem).await? {
        SubmissionOutcome::Saved { id } => {
            tracing::info!("Submission {} saved", id);
            println!("✅ Saved submission {}", id);
        }
        SubmissionOutcome::Rejected { errors } => {
            for error in &errors {
                eprintln!("❌ {}", error);
            }
            std::process::exit(1);
        }
        SubmissionOutcome::Forbidden => {
            eprintln!("❌ You do not own that submission (403)");
            std::process::exit(1);
        }
    }

    Ok(())
}
