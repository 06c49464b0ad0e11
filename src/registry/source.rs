//! Where a registry document lives

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// A registry document location: a local path or an HTTP(S) URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Local file
    Path(PathBuf),
    /// Remote document
    Url(url::Url),
}

impl FromStr for DataSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with("http://") || s.starts_with("https://") {
            let url = url::Url::parse(s).map_err(|e| Error::Parse(format!("{s}: {e}")))?;
            Ok(Self::Url(url))
        } else {
            Ok(Self::Path(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

impl DataSource {
    /// Fetch and decode the document
    pub async fn load<T: DeserializeOwned>(&self) -> Result<T> {
        debug!("Loading {self}");
        match self {
            Self::Path(path) => {
                let raw = tokio::fs::read_to_string(path).await?;
                Ok(serde_json::from_str(&raw)?)
            }
            Self::Url(url) => {
                let value = reqwest::get(url.clone())
                    .await?
                    .error_for_status()?
                    .json()
                    .await?;
                Ok(value)
            }
        }
    }
}
