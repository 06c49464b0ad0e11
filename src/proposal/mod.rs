//! Knowledge Object proposals
//!
//! Turns free-text form input into a [`ProposalRecord`](crate::types::ProposalRecord)
//! and the identifiers (id, branch, file path) derived from its title.

mod record;
mod slug;

pub use record::{
    build_record, ProposalDraft, ProposalIds, BRANCH_PREFIX, DEFAULT_LICENSE, ID_PREFIX,
    PROPOSALS_DIR, RECORD_VERSION, RESEARCH_SAFE,
};
pub use slug::{slugify, split_list};
