use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// The subset of an ArgoCD `Application` resource we read.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Application {
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApplicationStatus {
    pub history: Vec<RevisionHistory>,
}

/// One entry of `status.history`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevisionHistory {
    #[serde(deserialize_with = "revision_id")]
    pub id: String,
    pub deployed_at: String,
    pub source: ApplicationSource,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApplicationSource {
    pub kustomize: KustomizeSource,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct KustomizeSource {
    pub images: Vec<String>,
}

/// ArgoCD serializes revision ids as integers, but older servers and
/// hand-written fixtures use strings. Both end up as decimal text.
fn revision_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct RevisionIdVisitor;

    impl Visitor<'_> for RevisionIdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a revision id as a string or integer")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }
    }

    deserializer.deserialize_any(RevisionIdVisitor)
}

/// A single deployment snapshot, flattened out of a [`RevisionHistory`] entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RevisionRecord {
    pub id: String,
    pub deployed_at: String,
    pub images: Vec<String>,
}

impl From<RevisionHistory> for RevisionRecord {
    fn from(value: RevisionHistory) -> Self {
        Self {
            id: value.id,
            deployed_at: value.deployed_at,
            images: value.source.kustomize.images,
        }
    }
}
