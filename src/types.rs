//! Core types for ko-hub

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Value stored in a freshly built record's `hash` field
pub const CID_PLACEHOLDER: &str = "CID_PLACEHOLDER";

/// Content address of a proposal body
///
/// Records are always built with [`ContentHash::Placeholder`]. Computing the
/// real content identifier is left to the system that ingests the proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentHash {
    /// Not yet computed
    Placeholder,
    /// A real content identifier
    Cid(String),
}

impl ContentHash {
    /// Whether the hash still needs to be filled in
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

impl From<String> for ContentHash {
    fn from(value: String) -> Self {
        if value == CID_PLACEHOLDER {
            Self::Placeholder
        } else {
            Self::Cid(value)
        }
    }
}

impl From<ContentHash> for String {
    fn from(value: ContentHash) -> Self {
        match value {
            ContentHash::Placeholder => CID_PLACEHOLDER.to_string(),
            ContentHash::Cid(cid) => cid,
        }
    }
}

/// Where a proposal came from and who vouches for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Source references, in the order given
    pub sources: Vec<String>,
    /// Signatures over the record (empty at creation)
    pub signatures: Vec<String>,
    /// Creation instant
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

/// A Knowledge Object proposal, as committed to the target repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalRecord {
    /// `ko-` followed by the slugified title
    pub id: String,
    /// Human-readable title
    pub title: String,
    /// Category tag chosen by the proposer
    pub kind: String,
    /// Record format version
    pub version: String,
    /// Authors, in the order given
    pub authors: Vec<String>,
    /// License identifier
    pub license: String,
    /// Content address (placeholder until computed downstream)
    #[serde(rename = "hash")]
    pub content_hash: ContentHash,
    /// Provenance block
    pub provenance: Provenance,
    /// Free-form tags, in the order given
    pub tags: Vec<String>,
    /// Moderation labels
    pub moderation: Vec<String>,
}

/// A pull request on the hosting platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
    /// PR title
    pub title: String,
}

/// Target repository on the hosting platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}

impl PlatformConfig {
    /// `owner/repo`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// One entry of the repository registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry {
    /// Display name
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// GitHub URL
    #[serde(default)]
    pub github: Option<String>,
    /// Hugging Face URL
    #[serde(default)]
    pub huggingface: Option<String>,
    /// Replit URL
    #[serde(default)]
    pub replit: Option<String>,
    /// IPFS content identifier
    #[serde(default)]
    pub ipfs_cid: Option<String>,
}

/// JS-style ISO 8601 timestamps: UTC, millisecond precision, `Z` suffix
mod iso_millis {
    use super::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_content_hash_placeholder_serializes_as_marker() {
        let json = serde_json::to_string(&ContentHash::Placeholder).unwrap();
        assert_eq!(json, "\"CID_PLACEHOLDER\"");

        let parsed: ContentHash = serde_json::from_str("\"bafy123\"").unwrap();
        assert_eq!(parsed, ContentHash::Cid("bafy123".to_string()));
        assert!(!parsed.is_placeholder());
    }

    #[test]
    fn test_provenance_timestamp_has_millis_and_z() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::milliseconds(678);
        let provenance = Provenance {
            sources: vec![],
            signatures: vec![],
            timestamp: ts,
        };

        let json = serde_json::to_value(&provenance).unwrap();
        assert_eq!(json["timestamp"], "2025-01-02T03:04:05.678Z");

        let back: Provenance = serde_json::from_value(json).unwrap();
        assert_eq!(back.timestamp, ts);
    }

    #[test]
    fn test_repo_entry_optional_links() {
        let entry: RepoEntry = serde_json::from_str(r#"{"name": "atlas"}"#).unwrap();
        assert_eq!(entry.name, "atlas");
        assert!(entry.description.is_none());
        assert!(entry.ipfs_cid.is_none());
    }

    #[test]
    fn test_platform_config_slug() {
        let config = PlatformConfig {
            owner: "acme".to_string(),
            repo: "repo".to_string(),
            host: None,
        };
        assert_eq!(config.slug(), "acme/repo");
    }
}
