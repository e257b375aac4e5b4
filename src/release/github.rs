//! GitHub release host implementation.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
#[cfg(test)]
use reqwest::Client;

use crate::http::HttpClient;

use super::{ReleaseAsset, ReleaseMetadata, ReleaseSource, RepoId};

/// GitHub API response types (internal).
mod api {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Release {
        pub tag_name: String,
        #[serde(default)]
        pub assets: Vec<Asset>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Asset {
        pub name: String,
        pub browser_download_url: String,
    }
}

/// Reads the latest release from the GitHub REST API.
pub struct GitHubReleases {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubReleases {
    /// Create with the public GitHub API URL.
    #[cfg(test)]
    pub fn new(client: Client) -> Self {
        Self::from_http_client(HttpClient::new(client), "https://api.github.com")
    }

    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ReleaseSource for GitHubReleases {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    #[tracing::instrument(skip(self))]
    async fn latest_release(&self, repo: &RepoId) -> Result<ReleaseMetadata> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url, repo.owner, repo.repo
        );
        debug!("Fetching latest release from {}...", url);

        let release: api::Release = self.http_client.get_json(&url).await?;
        Ok(release.into())
    }
}

impl From<api::Release> for ReleaseMetadata {
    fn from(r: api::Release) -> Self {
        ReleaseMetadata {
            tag: r.tag_name,
            assets: r.assets.into_iter().map(|a| a.into()).collect(),
        }
    }
}

impl From<api::Asset> for ReleaseAsset {
    fn from(a: api::Asset) -> Self {
        ReleaseAsset {
            name: a.name,
            download_url: a.browser_download_url,
        }
    }
}
