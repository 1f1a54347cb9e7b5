use color_eyre::eyre::{eyre, Result};
use tracing::{debug, info};

use crate::cli::models::{Ordering, Token};
use crate::client::builder::ArgoCdClientBuilder;
use crate::core::format_versions::format_rollback_version;
use crate::core::sort_versions::sort_rollback_versions;

/// Fetch the deployment history of an application and render each revision
/// as a rollback version label, in the order the server lists them.
///
/// Every call builds its own client, and nothing carries over between calls.
pub async fn fetch_rollback_versions(
    app_name: &str,
    argocd_base_url: &str,
    token: Option<&Token>,
) -> Result<Vec<String>> {
    if app_name.trim().is_empty() {
        return Err(eyre!("The application name must not be empty"));
    }

    let client = ArgoCdClientBuilder::new()
        .set_http_headers(token)?
        .generate_urls(argocd_base_url)?
        .build()?;

    let history = client.fetch_revision_history(app_name).await?;
    debug!(app_name = app_name, "Formatting {} rollback version(s)", history.len());

    Ok(history.iter().map(format_rollback_version).collect())
}

/// Fetch, format and order the rollback versions of an application.
///
/// A failed fetch is returned as-is, without sorting anything.
pub async fn get_rollback_versions(
    app_name: &str,
    argocd_base_url: &str,
    token: Option<&Token>,
    ordering: &Ordering,
) -> Result<Vec<String>> {
    let rollback_versions = fetch_rollback_versions(app_name, argocd_base_url, token).await?;
    let rollback_versions = sort_rollback_versions(rollback_versions, ordering)?;
    info!(
        app_name = app_name,
        "Found {} rollback version(s)",
        rollback_versions.len()
    );
    Ok(rollback_versions)
}
