//! Update checker - compares the running version with the latest release and
//! replaces the local binary when the user agrees.
//!
//! The pipeline is strictly linear:
//! 1. Query the latest release
//! 2. Compare with the running version and ask for consent
//! 3. Download the platform asset and write it to the install directory
//!
//! It stops early when the version is already current or the user declines.

use anyhow::Result;
use log::{debug, info};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::UpdateError;
use crate::http::HttpClient;
use crate::platform::PlatformKind;
use crate::release::{ReleaseMetadata, ReleaseSource, RepoId};
use crate::runtime::Runtime;

/// Outcome of the version query and consent step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateCheck {
    /// The latest release tag equals the running version
    UpToDate { version: String },
    /// An update exists but the user did not accept it
    Declined { current: String, latest: String },
    /// The user accepted the update
    Accepted {
        current: String,
        metadata: ReleaseMetadata,
    },
}

/// What was installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub version: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Final outcome of a full run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    UpToDate,
    Declined,
    Installed(InstallReport),
}

pub struct Updater<R: Runtime, S: ReleaseSource> {
    runtime: R,
    source: S,
    http_client: HttpClient,
    repo: RepoId,
    install_dir: PathBuf,
    assume_yes: bool,
}

impl<R: Runtime, S: ReleaseSource> Updater<R, S> {
    pub fn new(runtime: R, source: S, http_client: HttpClient, config: &Config) -> Self {
        Self {
            runtime,
            source,
            http_client,
            repo: config.repo.clone(),
            install_dir: config.install_dir.clone(),
            assume_yes: config.assume_yes,
        }
    }

    /// Fetch the latest release and decide whether to install it.
    #[tracing::instrument(skip(self))]
    pub async fn check_for_update(&self, current_version: &str) -> Result<UpdateCheck> {
        if current_version.is_empty() {
            anyhow::bail!("The current version must not be empty");
        }

        println!("Checking for updates");
        debug!("Querying {} at {}", self.repo, self.source.api_url());

        let metadata = self.source.latest_release(&self.repo).await?;
        info!("Latest release of {} is {}", self.repo, metadata.tag);

        if metadata.tag == current_version {
            println!("Already up to date ({})", current_version);
            return Ok(UpdateCheck::UpToDate {
                version: metadata.tag,
            });
        }

        println!("Update available: {} -> {}", current_version, metadata.tag);

        let accepted = if self.assume_yes {
            debug!("Confirmation skipped");
            true
        } else {
            self.runtime.confirm("Do you want to update?")?
        };

        if !accepted {
            println!("Update declined.");
            return Ok(UpdateCheck::Declined {
                current: current_version.to_string(),
                latest: metadata.tag,
            });
        }

        Ok(UpdateCheck::Accepted {
            current: current_version.to_string(),
            metadata,
        })
    }

    /// Download the asset for `platform` and write it over the local binary.
    ///
    /// Nothing is written when the release has no matching asset or the
    /// download fails.
    #[tracing::instrument(skip(self, metadata))]
    pub async fn fetch_and_install(
        &self,
        metadata: &ReleaseMetadata,
        platform: PlatformKind,
    ) -> Result<InstallReport> {
        let name = platform.asset_name();

        let asset = metadata
            .find_asset(&name)
            .ok_or_else(|| UpdateError::AssetNotFound(name.clone()))?;
        debug!("Selected asset {} from {}", asset.name, asset.download_url);

        let body = self.http_client.download(&asset.download_url).await?;
        println!("Downloaded latest release");

        let path = self.install_dir.join(&name);
        self.runtime
            .write(&path, &body)
            .map_err(|e| UpdateError::Write(format!("{}: {:#}", path.display(), e)))?;
        info!("Wrote {} bytes to {:?}", body.len(), path);

        if platform.needs_executable_bit() {
            self.runtime
                .make_executable(&path)
                .map_err(|e| UpdateError::Write(format!("{}: {:#}", path.display(), e)))?;
        }

        println!("Update installed");
        println!("Restart the program to apply changes");

        Ok(InstallReport {
            version: metadata.tag.clone(),
            path,
            bytes: body.len() as u64,
        })
    }

    /// Run the whole pipeline for the current platform.
    pub async fn run(&self, current_version: &str) -> Result<UpdateOutcome> {
        self.run_for(current_version, PlatformKind::current()).await
    }

    /// Run the whole pipeline for an explicit platform.
    #[tracing::instrument(skip(self))]
    pub async fn run_for(
        &self,
        current_version: &str,
        platform: PlatformKind,
    ) -> Result<UpdateOutcome> {
        match self.check_for_update(current_version).await? {
            UpdateCheck::UpToDate { .. } => Ok(UpdateOutcome::UpToDate),
            UpdateCheck::Declined { .. } => Ok(UpdateOutcome::Declined),
            UpdateCheck::Accepted { metadata, .. } => {
                let report = self.fetch_and_install(&metadata, platform).await?;
                Ok(UpdateOutcome::Installed(report))
            }
        }
    }
}
