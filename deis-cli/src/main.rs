// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  deis — profile tooling for the Deis Workflow client
//
//  Settings:  <home>/.deis/<profile>.json, one file per profile
//  Profile:   --profile, then DEIS_PROFILE, then config file, then "client"
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use anyhow::Context;
use clap::{Parser, Subcommand};
use deis_core::config::ClientConfig;
use deis_store::{ProfileEnv, Settings, StoreError, locate};
use std::ffi::OsStr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "deis", version, about = "Deis Workflow client profiles")]
struct Cli {
    /// Optional YAML client configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Profile to operate on (overrides DEIS_PROFILE)
    #[arg(short, long)]
    profile: Option<String>,

    /// Log level (overrides DEIS_LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the settings file path of the active profile
    Path,
    /// Print the stored session state of the active profile
    Show,
    /// Replace the active profile with a fresh, logged-out one
    Reset,
    /// Remove the active profile's settings file
    Logout,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ClientConfig::load(cli.config.as_deref()).context("loading client config")?;
    let log_level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());

    // ── Tracing ──
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut env = ProfileEnv::from_process();
    // DEIS_PROFILE is read raw from the environment; the config file only
    // fills in when it is unset.
    let env_profile_unset = env.profile.as_deref().is_none_or(OsStr::is_empty);
    if let Some(profile) = cli.profile {
        env.profile = Some(profile.into());
    } else if env_profile_unset && let Some(profile) = config.profile {
        env.profile = Some(profile.into());
    }
    let path = locate(&env);

    match cli.command {
        Command::Path => println!("{}", path.display()),
        Command::Show => match Settings::load(&path) {
            Ok(settings) => {
                let mut shown = settings;
                if !shown.token.is_empty() {
                    shown.token = "<redacted>".into();
                }
                println!("{}", serde_json::to_string_pretty(&shown)?);
            }
            Err(StoreError::NotFound { .. }) => {
                anyhow::bail!(
                    "profile '{}' has no settings yet, log in first ({})",
                    env.profile_name().to_string_lossy(),
                    path.display()
                );
            }
            Err(e @ StoreError::Malformed { .. }) => {
                return Err(e).context("settings file is corrupted, run `deis reset`");
            }
            Err(e) => return Err(e.into()),
        },
        Command::Reset => {
            Settings::default().save(&path)?;
            info!(profile = %env.profile_name().to_string_lossy(), path = %path.display(), "profile reset");
        }
        Command::Logout => {
            Settings::delete(&path)?;
            info!(profile = %env.profile_name().to_string_lossy(), path = %path.display(), "logged out");
        }
    }

    Ok(())
}
