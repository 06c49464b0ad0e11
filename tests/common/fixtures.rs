//! Test data factories for ko-hub types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use ko_hub::proposal::ProposalDraft;
use ko_hub::submit::SubmissionRequest;
use ko_hub::types::{PlatformConfig, RepoEntry};

/// github.com config for `acme/repo`
pub fn acme_config() -> PlatformConfig {
    PlatformConfig {
        owner: "acme".to_string(),
        repo: "repo".to_string(),
        host: None,
    }
}

/// A valid request against `acme/repo` with the given title
pub fn make_request(title: &str) -> SubmissionRequest {
    SubmissionRequest {
        repo: "acme/repo".to_string(),
        base_branch: String::new(),
        access_token: "ghp_test".to_string(),
        draft: ProposalDraft {
            title: title.to_string(),
            kind: "dataset".to_string(),
            ..ProposalDraft::default()
        },
    }
}

/// A registry entry with only a name
pub fn make_repo(name: &str) -> RepoEntry {
    RepoEntry {
        name: name.to_string(),
        description: None,
        github: None,
        huggingface: None,
        replit: None,
        ipfs_cid: None,
    }
}
