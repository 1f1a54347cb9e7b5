pub mod format_versions;
pub mod rollback_versions;
pub mod select_version;
pub mod sort_versions;
