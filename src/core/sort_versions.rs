use color_eyre::eyre::{eyre, Result};
use tracing::info;

use crate::cli::models::Ordering;

/// Extract the revision id a rollback version label starts with.
///
/// The id is everything before the first `|`, with surrounding whitespace trimmed.
pub fn revision_id(label: &str) -> Result<i64> {
    let leading = label.split_once('|').map_or(label, |(id, _)| id).trim();
    match leading.parse::<i64>() {
        Ok(id) => Ok(id),
        Err(e) => Err(eyre!(
            "Failed to parse a revision id from rollback version \"{label}\": {e}"
        )),
    }
}

/// Sort rollback version labels by their revision id.
///
/// The sort is stable, so labels sharing an id keep their relative order in
/// either direction. If any label doesn't start with an integer id, nothing
/// is returned but the error.
pub fn sort_rollback_versions(labels: Vec<String>, ordering: &Ordering) -> Result<Vec<String>> {
    info!("Ordering rollback versions according to: {ordering}");

    let mut keyed = labels
        .into_iter()
        .map(|label| -> Result<(i64, String)> { Ok((revision_id(&label)?, label)) })
        .collect::<Result<Vec<_>>>()?;

    match ordering {
        Ordering::Ascending => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
        Ordering::Descending => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
    }

    Ok(keyed.into_iter().map(|(_, label)| label).collect())
}
