//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use ko_hub::error::{Error, Result};
use ko_hub::platform::PlatformService;
use ko_hub::types::{PlatformConfig, PullRequest};
use std::sync::Mutex;

/// Call record for `create_branch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBranchCall {
    pub branch: String,
    pub sha: String,
}

/// Call record for `create_file`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFileCall {
    pub path: String,
    pub branch: String,
    pub message: String,
    pub content: String,
}

/// Call record for `create_pr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePrCall {
    pub head: String,
    pub base: String,
    pub title: String,
    pub body: String,
}

/// Which call to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    GetRef,
    CreateBranch,
    CreateFile,
    CreatePr,
}

/// Simple mock platform service for testing
///
/// Features:
/// - Call tracking for verification (ordered log plus per-call records)
/// - Configurable base SHA and PR URL
/// - Error injection for failure path testing
pub struct MockPlatformService {
    config: PlatformConfig,
    base_sha: String,
    pr_url: String,
    pr_number: u64,
    failure: Mutex<Option<(FailOn, u16, String)>>,
    // Call tracking
    call_log: Mutex<Vec<&'static str>>,
    get_ref_calls: Mutex<Vec<String>>,
    create_branch_calls: Mutex<Vec<CreateBranchCall>>,
    create_file_calls: Mutex<Vec<CreateFileCall>>,
    create_pr_calls: Mutex<Vec<CreatePrCall>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            base_sha: "0123456789abcdef0123456789abcdef01234567".to_string(),
            pr_url: "https://github.com/test/repo/pull/1".to_string(),
            pr_number: 1,
            failure: Mutex::new(None),
            call_log: Mutex::new(Vec::new()),
            get_ref_calls: Mutex::new(Vec::new()),
            create_branch_calls: Mutex::new(Vec::new()),
            create_file_calls: Mutex::new(Vec::new()),
            create_pr_calls: Mutex::new(Vec::new()),
        }
    }

    /// Set the PR the mock reports as created
    #[must_use]
    pub fn with_pr(mut self, number: u64, url: &str) -> Self {
        self.pr_number = number;
        self.pr_url = url.to_string();
        self
    }

    /// Set the SHA the base branch resolves to
    #[must_use]
    pub fn with_base_sha(mut self, sha: &str) -> Self {
        self.base_sha = sha.to_string();
        self
    }

    // === Error injection ===

    /// Make one call answer with a non-success status
    pub fn fail(&self, on: FailOn, status: u16, body: &str) {
        *self.failure.lock().unwrap() = Some((on, status, body.to_string()));
    }

    fn injected(&self, call: FailOn) -> Result<()> {
        match self.failure.lock().unwrap().as_ref() {
            Some((on, status, body)) if *on == call => Err(Error::Api {
                status: *status,
                body: body.clone(),
            }),
            _ => Ok(()),
        }
    }

    // === Call verification ===

    /// Every call in the order it was made
    pub fn call_log(&self) -> Vec<&'static str> {
        self.call_log.lock().unwrap().clone()
    }

    /// Total number of calls made
    pub fn call_count(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }

    pub fn get_ref_calls(&self) -> Vec<String> {
        self.get_ref_calls.lock().unwrap().clone()
    }

    pub fn create_branch_calls(&self) -> Vec<CreateBranchCall> {
        self.create_branch_calls.lock().unwrap().clone()
    }

    pub fn create_file_calls(&self) -> Vec<CreateFileCall> {
        self.create_file_calls.lock().unwrap().clone()
    }

    pub fn create_pr_calls(&self) -> Vec<CreatePrCall> {
        self.create_pr_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn get_branch_sha(&self, branch: &str) -> Result<String> {
        self.call_log.lock().unwrap().push("get_ref");
        self.get_ref_calls.lock().unwrap().push(branch.to_string());
        self.injected(FailOn::GetRef)?;
        Ok(self.base_sha.clone())
    }

    async fn create_branch(&self, branch: &str, sha: &str) -> Result<()> {
        self.call_log.lock().unwrap().push("create_branch");
        self.create_branch_calls
            .lock()
            .unwrap()
            .push(CreateBranchCall {
                branch: branch.to_string(),
                sha: sha.to_string(),
            });
        self.injected(FailOn::CreateBranch)
    }

    async fn create_file(
        &self,
        path: &str,
        branch: &str,
        message: &str,
        content: &str,
    ) -> Result<()> {
        self.call_log.lock().unwrap().push("create_file");
        self.create_file_calls.lock().unwrap().push(CreateFileCall {
            path: path.to_string(),
            branch: branch.to_string(),
            message: message.to_string(),
            content: content.to_string(),
        });
        self.injected(FailOn::CreateFile)
    }

    async fn create_pr(&self, head: &str, base: &str, title: &str, body: &str) -> Result<PullRequest> {
        self.call_log.lock().unwrap().push("create_pr");
        self.create_pr_calls.lock().unwrap().push(CreatePrCall {
            head: head.to_string(),
            base: base.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        });
        self.injected(FailOn::CreatePr)?;

        Ok(PullRequest {
            number: self.pr_number,
            html_url: self.pr_url.clone(),
            base_ref: base.to_string(),
            head_ref: head.to_string(),
            title: title.to_string(),
        })
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
