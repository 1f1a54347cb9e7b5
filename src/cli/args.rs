use clap::Parser;
use tracing::Level;

use crate::cli::models::{try_parse_app_name, Ordering, Token};

pub const DEFAULT_PARAMETER_NAME: &str = "ROLLBACK_VERSION";

#[derive(Parser)]
#[clap(version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Input {
    /// The ArgoCD application to list rollback versions for
    #[arg(long, env = "ARGOCD_APP_NAME", value_parser = try_parse_app_name)]
    pub app_name: String,

    /// The base URL of the ArgoCD server, e.g., https://argocd.example.com
    #[arg(long, env = "ARGOCD_BASE_URL")]
    pub argocd_base_url: String,

    /// The token to authenticate with. Requests are unauthenticated when omitted
    #[arg(long, env = "ARGOCD_TOKEN", hide_env_values = true, value_parser = Token::try_from_str)]
    pub token: Option<Token>,

    /// Whether to list the newest or the oldest versions first
    #[arg(long, env = "ARGOCD_ORDERING", value_enum, default_value = "descending")]
    pub ordering: Ordering,

    /// Select the rollback version with this revision id, instead of listing all of them
    #[arg(long)]
    pub select: Option<i64>,

    /// The variable name a selected rollback version is exposed as
    #[arg(long, default_value = DEFAULT_PARAMETER_NAME)]
    pub parameter_name: String,

    /// The log level to use for the tracing subscriber
    #[arg(long, global = true, default_value = "info")]
    pub log_level: Level,
}
