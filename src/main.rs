use achievements_updater::config::{Config, Services};
use achievements_updater::runtime::RealRuntime;
use achievements_updater::updater::Updater;
use anyhow::Result;
use clap::Parser;

/// achievements-updater - keeps achievements_enhanced current
///
/// Checks the latest release on GitHub and, after confirmation, replaces the
/// achievements_enhanced binary in the working directory.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
///
/// Examples:
///   achievements-updater v1.0.0     # Update from v1.0.0 if a newer release exists
#[derive(Parser, Debug)]
#[command(author, about, version = env!("UPDATER_VERSION"))]
struct Cli {
    /// Version of the running application, compared with the latest release tag
    #[arg(value_name = "CURRENT_VERSION")]
    current_version: String,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,

    /// Repository publishing the releases (defaults to Huggepugge1/achievements-enhanced)
    #[arg(long = "repo", value_name = "OWNER/REPO")]
    repo: Option<String>,

    /// Install without asking for confirmation
    #[arg(short = 'y', long = "yes")]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    let config = Config::load(&runtime, cli.api_url, cli.repo, cli.yes)?;
    let services = Services::from_config(&config)?;
    let updater = Updater::new(runtime, services.source, services.http_client, &config);

    updater.run(&cli.current_version).await?;
    Ok(())
}
