use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use skyview_core::{Config, OpenWeatherProvider};
use std::env;

use crate::app;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skyview", version, about = "Single-screen weather display")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the platform config directory.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => show().await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(key);
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show() -> Result<()> {
    let provider = OpenWeatherProvider::new(resolve_api_key()?);
    app::run(&provider).await
}

/// Environment variable wins over the config file.
fn resolve_api_key() -> Result<String> {
    match env::var("OPENWEATHER_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Ok(Config::load()?.api_key()?.to_owned()),
    }
}
