use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Asia::Jakarta;
use tracing::error;

use crate::client::models::RevisionRecord;

/// The format ArgoCD uses for `deployedAt`.
const DEPLOYED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Renders a UTC offset the way ISO 8601 allows it at its shortest: `Z`
/// for UTC, `+HH` for whole hours, and `+HHMM` otherwise.
fn format_utc_offset(offset: &FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    if seconds == 0 {
        return "Z".to_string();
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if minutes == 0 {
        format!("{sign}{hours:02}")
    } else {
        format!("{sign}{hours:02}{minutes:02}")
    }
}

/// Re-renders a UTC timestamp in the given timezone, e.g., `2024-01-01T07:00:00+07`.
pub fn to_local_time<Tz: TimeZone>(deployed_at: &DateTime<Utc>, timezone: &Tz) -> String {
    let local = deployed_at.with_timezone(timezone).fixed_offset();
    format!("{}{}", local.format("%Y-%m-%dT%H:%M:%S"), format_utc_offset(local.offset()))
}

/// Converts a `deployedAt` timestamp to Jakarta time.
///
/// A timestamp that can't be parsed is logged and rendered as an empty
/// string. It never fails the surrounding fetch.
pub fn jakarta_time(deployed_at: &str) -> String {
    match NaiveDateTime::parse_from_str(deployed_at, DEPLOYED_AT_FORMAT) {
        Ok(t) => to_local_time(&t.and_utc(), &Jakarta),
        Err(e) => {
            error!(deployed_at = deployed_at, "Failed to parse deployment timestamp: {e}");
            String::new()
        }
    }
}

/// Renders a list of images like `[app:v2, sidecar:v1]`.
fn format_images(images: &[String]) -> String {
    format!("[{}]", images.join(", "))
}

/// Builds the label a user picks a rollback version by: `<id> | <deployed at> | <images>`.
pub fn format_rollback_version(record: &RevisionRecord) -> String {
    format!(
        "{} | {} | {}",
        record.id,
        jakarta_time(&record.deployed_at),
        format_images(&record.images)
    )
}
