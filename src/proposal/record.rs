//! Proposal record construction

use crate::proposal::slug::{slugify, split_list};
use crate::types::{ContentHash, ProposalRecord, Provenance};
use chrono::{DateTime, Utc};

/// Prefix of every proposal id
pub const ID_PREFIX: &str = "ko-";

/// Prefix of every proposal branch
pub const BRANCH_PREFIX: &str = "ko/add-";

/// Directory proposals are committed into
pub const PROPOSALS_DIR: &str = "ko/proposals";

/// License used when none is given
pub const DEFAULT_LICENSE: &str = "CC-BY-SA-4.0";

/// Record format version stamped on new proposals
pub const RECORD_VERSION: &str = "v1.0.0";

/// Moderation label applied to every new proposal
pub const RESEARCH_SAFE: &str = "research-safe";

/// Raw proposal fields as entered by the proposer
#[derive(Debug, Clone, Default)]
pub struct ProposalDraft {
    /// Title (required)
    pub title: String,
    /// Category tag
    pub kind: String,
    /// License; empty means [`DEFAULT_LICENSE`]
    pub license: String,
    /// Comma-separated authors
    pub authors_csv: String,
    /// Comma-separated source references
    pub sources_csv: String,
    /// Comma-separated tags
    pub tags_csv: String,
}

/// Identifiers derived from a proposal title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalIds {
    /// Record id, e.g. `ko-photon-drift`
    pub id: String,
    /// Branch name, e.g. `ko/add-photon-drift`
    pub branch: String,
    /// Repository path, e.g. `ko/proposals/ko-photon-drift.json`
    pub path: String,
}

impl ProposalIds {
    /// Derive id, branch and path from a title
    ///
    /// Pure in `title`: resubmitting the same title targets the same branch
    /// and path.
    pub fn for_title(title: &str) -> Self {
        let slug = slugify(title);
        let id = format!("{ID_PREFIX}{slug}");
        Self {
            branch: format!("{BRANCH_PREFIX}{slug}"),
            path: format!("{PROPOSALS_DIR}/{id}.json"),
            id,
        }
    }
}

/// Build the proposal record for a draft at the given instant
pub fn build_record(draft: &ProposalDraft, now: DateTime<Utc>) -> ProposalRecord {
    let title = draft.title.trim().to_string();
    let license = match draft.license.trim() {
        "" => DEFAULT_LICENSE,
        license => license,
    };

    ProposalRecord {
        id: ProposalIds::for_title(&title).id,
        title,
        kind: draft.kind.trim().to_string(),
        version: RECORD_VERSION.to_string(),
        authors: split_list(&draft.authors_csv),
        license: license.to_string(),
        content_hash: ContentHash::Placeholder,
        provenance: Provenance {
            sources: split_list(&draft.sources_csv),
            signatures: Vec::new(),
            timestamp: now,
        },
        tags: split_list(&draft.tags_csv),
        moderation: vec![RESEARCH_SAFE.to_string()],
    }
}
