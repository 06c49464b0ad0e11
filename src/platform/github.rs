//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PlatformConfig, PullRequest};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Media type selecting GitHub's structured JSON responses
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// GitHub service using reqwest
pub struct GitHubService {
    client: Client,
    api_base: String,
    config: PlatformConfig,
}

#[derive(Deserialize)]
struct GitRef {
    object: GitObject,
}

#[derive(Deserialize)]
struct GitObject {
    sha: String,
}

#[derive(Serialize)]
struct CreateRefPayload<'a> {
    #[serde(rename = "ref")]
    ref_name: String,
    sha: &'a str,
}

#[derive(Serialize)]
struct PutContentsPayload<'a> {
    message: &'a str,
    content: String,
    branch: &'a str,
}

#[derive(Serialize)]
struct CreatePullPayload<'a> {
    title: &'a str,
    head: &'a str,
    base: &'a str,
    body: &'a str,
}

#[derive(Deserialize)]
struct PullResponse {
    #[serde(default)]
    number: u64,
    html_url: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    head: Option<BranchRef>,
    #[serde(default)]
    base: Option<BranchRef>,
}

#[derive(Deserialize)]
struct BranchRef {
    #[serde(rename = "ref")]
    ref_field: String,
}

/// Base64 of the UTF-8 bytes of a file body, as the contents API expects
pub fn encode_content(content: &str) -> String {
    BASE64.encode(content.as_bytes())
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `api_base` is the REST root, e.g. `https://api.github.com`.
    pub fn new(token: &str, config: PlatformConfig, api_base: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| Error::Auth("access token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("ko-hub/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            config,
        })
    }

    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.api_base, self.config.owner, self.config.repo, path
        )
    }
}

/// Turn a non-success response into [`Error::Api`] with its raw body
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn get_branch_sha(&self, branch: &str) -> Result<String> {
        let url = self.repo_url(&format!("/git/ref/heads/{branch}"));
        debug!("GET {url}");

        let git_ref: GitRef = check_status(self.client.get(&url).send().await?)
            .await?
            .json()
            .await?;

        debug!("{branch} is at {}", git_ref.object.sha);
        Ok(git_ref.object.sha)
    }

    async fn create_branch(&self, branch: &str, sha: &str) -> Result<()> {
        let url = self.repo_url("/git/refs");
        debug!("POST {url} ({branch} at {sha})");

        let payload = CreateRefPayload {
            ref_name: format!("refs/heads/{branch}"),
            sha,
        };

        check_status(self.client.post(&url).json(&payload).send().await?).await?;
        Ok(())
    }

    async fn create_file(
        &self,
        path: &str,
        branch: &str,
        message: &str,
        content: &str,
    ) -> Result<()> {
        let url = self.repo_url(&format!("/contents/{}", urlencoding::encode(path)));
        debug!("PUT {url} on {branch}");

        let payload = PutContentsPayload {
            message,
            content: encode_content(content),
            branch,
        };

        check_status(self.client.put(&url).json(&payload).send().await?).await?;
        Ok(())
    }

    async fn create_pr(&self, head: &str, base: &str, title: &str, body: &str) -> Result<PullRequest> {
        let url = self.repo_url("/pulls");
        debug!("POST {url} ({head} -> {base})");

        let payload = CreatePullPayload {
            title,
            head,
            base,
            body,
        };

        let pr: PullResponse = check_status(self.client.post(&url).json(&payload).send().await?)
            .await?
            .json()
            .await?;

        Ok(PullRequest {
            number: pr.number,
            html_url: pr.html_url,
            base_ref: pr.base.map_or_else(|| base.to_string(), |b| b.ref_field),
            head_ref: pr.head.map_or_else(|| head.to_string(), |h| h.ref_field),
            title: pr.title.unwrap_or_else(|| title.to_string()),
        })
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
