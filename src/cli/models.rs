use std::fmt;

use clap::ValueEnum;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// The direction rollback versions are listed in, keyed on their revision id.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum Ordering {
    #[default]
    Descending,
    Ascending,
}

impl Ordering {
    /// The label shown to a user choosing an ordering.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Descending => "New Versions First",
            Self::Ascending => "Older Version First",
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An ArgoCD session or project token.
///
/// ArgoCD accepts these through the `argocd.token` cookie. An empty token
/// means requests go out unauthenticated.
#[derive(Debug, Clone)]
pub struct Token(SecretString);

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Token {
    pub fn new(value: &str) -> Self {
        Self(SecretString::from(value.to_string()))
    }

    pub fn try_from_str(value: &str) -> Result<Self, String> {
        let trimmed_value = value.trim().trim_matches('"'); // Remove surrounding quotes
        if trimmed_value.is_empty() {
            debug!("Received an empty token, requests will be unauthenticated");
        }
        Ok(Self::new(trimmed_value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Validates the name of an ArgoCD application.
pub fn try_parse_app_name(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("`app-name` must be set to the name of an ArgoCD application".to_string());
    }
    Ok(value.to_string())
}
