//! Lists the deployment history of an ArgoCD application as rollback versions
//! a user can pick from, e.g., `2 | 2024-01-01T07:00:00+07 | [app:v2]`.
pub mod cli;
pub mod client;
pub mod core;

pub use crate::cli::models::{Ordering, Token};
pub use crate::core::rollback_versions::{fetch_rollback_versions, get_rollback_versions};
pub use crate::core::select_version::{select_rollback_version, RollbackParameterValue};
pub use crate::core::sort_versions::sort_rollback_versions;
