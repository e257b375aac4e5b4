//! Run configuration and HTTP client construction.

use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use std::path::PathBuf;

use crate::http::HttpClient;
use crate::release::{GitHubReleases, RepoId};
use crate::runtime::Runtime;

/// Default release host API URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repository whose releases carry the application binary.
pub const DEFAULT_REPO: &str = "Huggepugge1/achievements-enhanced";

/// Resolved configuration for one update attempt.
#[derive(Debug, Clone)]
pub struct Config {
    /// Release host API URL
    pub api_url: String,
    /// Repository to query for the latest release
    pub repo: RepoId,
    /// Bearer token sent to the release host, from GITHUB_TOKEN
    pub token: Option<String>,
    /// Skip the interactive confirmation
    pub assume_yes: bool,
    /// Directory the binary is written into (the working directory)
    pub install_dir: PathBuf,
}

impl Config {
    /// Resolve configuration from command-line overrides and the environment.
    pub fn load<R: Runtime>(
        runtime: &R,
        api_url: Option<String>,
        repo: Option<String>,
        assume_yes: bool,
    ) -> Result<Self> {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let repo = repo.as_deref().unwrap_or(DEFAULT_REPO).parse::<RepoId>()?;
        let token = runtime
            .env_var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
        let install_dir = runtime.current_dir()?;

        debug!(
            "Config: api_url={}, repo={}, token={}, install_dir={:?}",
            api_url,
            repo,
            if token.is_some() { "set" } else { "unset" },
            install_dir
        );

        Ok(Self {
            api_url,
            repo,
            token,
            assume_yes,
            install_dir,
        })
    }

    #[cfg(test)]
    pub fn for_test(api_url: &str, install_dir: PathBuf) -> Self {
        Self {
            api_url: api_url.to_string(),
            repo: RepoId {
                owner: "owner".to_string(),
                repo: "repo".to_string(),
            },
            token: None,
            assume_yes: false,
            install_dir,
        }
    }
}

/// Services built from the configuration: the release source and the
/// client used for asset downloads share one connection pool.
pub struct Services {
    pub source: GitHubReleases,
    pub http_client: HttpClient,
}

impl Services {
    pub fn from_config(config: &Config) -> Result<Self> {
        let http_client = build_http_client(config.token.as_deref())?;
        let source = GitHubReleases::from_http_client(http_client.clone(), &config.api_url);
        Ok(Self {
            source,
            http_client,
        })
    }
}

/// Build an HTTP client with optional authentication token.
///
/// No request timeout is set; an unresponsive host blocks the run.
pub fn build_http_client(token: Option<&str>) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();

    if let Some(token) = token {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("HTTP client configured with authentication");
    }

    let client = Client::builder()
        .user_agent("achievements-updater")
        .default_headers(headers)
        .build()?;

    Ok(HttpClient::new(client))
}
