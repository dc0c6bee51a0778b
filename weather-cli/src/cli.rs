use std::io::Write;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Confirm, CustomUserError, Password, PasswordDisplayMode, validator::Validation};
use tokio::io::BufReader;
use weather_core::{Config, QueryController, RequestStatus, WeatherCard, provider_from_config};

use crate::{session, view};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city, rendered as a card")]
pub struct Cli {
    /// WeatherAPI.com key; takes precedence over WEATHERAPI_KEY and the config file.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Without a subcommand, starts an interactive session.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key in the config file.
    Configure,

    /// Show current weather for a city and exit.
    Show {
        /// City name, e.g. "London" or "New York".
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,

        /// Print the record, UV category and advice as JSON instead of a card.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Cli { api_key, command } = self;

        match command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city, json }) => {
                let controller = build_controller(api_key)?;
                show(controller, city.join(" "), json, &mut std::io::stdout()).await
            }
            None => {
                let controller = build_controller(api_key)?;
                let input = BufReader::new(tokio::io::stdin());
                session::run(controller, input, &mut std::io::stdout()).await
            }
        }
    }
}

/// Resolve the API key once at startup and inject it into the provider.
fn build_controller(api_key: Option<String>) -> anyhow::Result<QueryController> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key(api_key)?;
    let provider = provider_from_config(&config, api_key)?;

    Ok(QueryController::new(provider))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    if config.api_key().is_some() {
        let replace = Confirm::new("An API key is already configured. Replace it?")
            .with_default(false)
            .prompt()?;
        if !replace {
            println!("Keeping the existing API key.");
            return Ok(());
        }
    }

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get a free key at https://www.weatherapi.com/")
        .with_validator(|input: &str| -> Result<Validation, CustomUserError> {
            if input.trim().is_empty() {
                Ok(Validation::Invalid("API key must not be empty".into()))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt()?;

    config.set_api_key(api_key.trim().to_string());
    let path = config.save()?;

    println!("Saved API key to {}", path.display());
    Ok(())
}

async fn show(
    mut controller: QueryController,
    city: String,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    controller.update_query(city);

    if !controller.submit().await {
        writeln!(out, "{}", view::HINT)?;
        return Ok(());
    }

    match controller.status() {
        RequestStatus::Success(record) if json => {
            let card = WeatherCard::new(record);
            let doc = serde_json::json!({
                "record": record,
                "uv_category": card.uv_category.label(),
                "advice": card.advice,
            });
            let text =
                serde_json::to_string_pretty(&doc).context("Failed to serialize weather record")?;
            writeln!(out, "{text}")?;
        }
        RequestStatus::Success(record) => write!(out, "{}", WeatherCard::new(record))?,
        RequestStatus::Failed(message) => anyhow::bail!("{message}"),
        RequestStatus::Idle | RequestStatus::Loading => {}
    }

    Ok(())
}
