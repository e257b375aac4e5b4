//! Release host abstraction.
//!
//! The release host is an external collaborator that exposes the latest
//! release of an owner/repository pair. Only the fields needed to compare
//! versions and pick a download are modelled here.

mod github;

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

pub use github::GitHubReleases;

/// Repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            anyhow::bail!("Invalid repository format '{}'. Expected 'owner/repo'.", s)
        } else {
            Ok(RepoId {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
            })
        }
    }
}

/// A downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseAsset {
    pub name: String,
    pub download_url: String,
}

/// Metadata of the latest release, discarded after the run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseMetadata {
    /// Version tag (e.g., "v1.2.0")
    pub tag: String,
    /// Downloadable assets, in the order the host lists them
    pub assets: Vec<ReleaseAsset>,
}

impl ReleaseMetadata {
    /// Finds the asset whose name equals `name`. Position in the list is irrelevant.
    pub fn find_asset(&self, name: &str) -> Option<&ReleaseAsset> {
        self.assets.iter().find(|a| a.name == name)
    }
}

/// Source of release metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Base URL of the release host API.
    fn api_url(&self) -> &str;

    /// Fetches the latest release of `repo`.
    async fn latest_release(&self, repo: &RepoId) -> Result<ReleaseMetadata>;
}
