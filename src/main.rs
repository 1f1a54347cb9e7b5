use std::env;
use std::process::exit;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use argocd_rollback_versions::cli::args::Input;
use argocd_rollback_versions::core::rollback_versions::get_rollback_versions;
use argocd_rollback_versions::core::select_version::{select_rollback_version, RollbackParameterValue};

#[tokio::main()]
async fn main() {
    // Validate inputs
    let input = Input::parse();

    // Set up logging. Stdout is reserved for the rollback versions themselves
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(input.log_level).into())
                .from_env_lossy(),
        )
        .init();
    debug!("Logging initialized");

    info!(
        app_name = %input.app_name,
        ordering = input.ordering.label(),
        "Using ArgoCD server url: {}",
        input.argocd_base_url
    );

    if env::var("ARGOCD_ROLLBACK_TEST").is_ok() {
        return;
    }

    let rollback_versions = match get_rollback_versions(
        &input.app_name,
        &input.argocd_base_url,
        input.token.as_ref(),
        &input.ordering,
    )
    .await
    {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to list rollback versions: {e}");
            exit(1);
        }
    };

    let Some(id) = input.select else {
        for rollback_version in &rollback_versions {
            println!("{rollback_version}");
        }
        return;
    };

    match select_rollback_version(&rollback_versions, id) {
        Ok(rollback_version) => {
            let value = RollbackParameterValue::new(&input.parameter_name, &input.app_name, rollback_version);
            debug!("Exposing {}", value.short_description());
            for (name, value) in value.environment() {
                println!("{name}={value}");
            }
        }
        Err(e) => {
            error!("Failed to select a rollback version: {e}");
            exit(1);
        }
    }
}
