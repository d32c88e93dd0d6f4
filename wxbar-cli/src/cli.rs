use clap::{Parser, Subcommand};
use inquire::{Confirm, CustomType, Password, Text};
use std::io::Write;
use std::time::Duration;
use wxbar_core::{Config, StatusPoller};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wxbar", version, about = "Weather status line for desktop bars")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set up OpenWeather credentials and display options interactively.
    Configure,

    /// Print the current status line once and exit.
    Show,

    /// Print the status line on every tick of the update interval.
    Watch {
        /// Seconds between polls; overrides the configured interval.
        #[arg(long)]
        interval: Option<u64>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show => show().await,
            Command::Watch { interval } => watch(interval).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()?;

    let mut city = Text::new("City ID:").with_help_message("Numeric id from openweathermap.org");
    if let Some(existing) = config.city_id.as_deref() {
        city = city.with_default(existing);
    }
    let city_id = city.prompt()?;

    let metric = Confirm::new("Use metric units (°C)?")
        .with_default(config.metric)
        .prompt()?;

    let update_interval = CustomType::<u64>::new("Update interval in seconds:")
        .with_default(config.update_interval)
        .prompt()?;

    config.api_key = Some(api_key);
    config.city_id = Some(city_id);
    config.metric = metric;
    config.update_interval = update_interval;
    config.save()?;

    println!("Saved {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show() -> anyhow::Result<()> {
    let poller = StatusPoller::new(load_config()?);
    println!("{}", poller.poll().await);
    Ok(())
}

async fn watch(interval: Option<u64>) -> anyhow::Result<()> {
    let config = load_config()?;
    let secs = interval.unwrap_or(config.update_interval).max(1);
    let poller = StatusPoller::new(config);

    // First tick fires immediately, so the bar is never empty at startup.
    let mut ticker = tokio::time::interval(Duration::from_secs(secs));
    let mut stdout = std::io::stdout();

    loop {
        ticker.tick().await;
        let line = poller.poll().await;

        // Bars read stdout line by line; without the flush a buffered
        // line would not show until the next tick.
        writeln!(stdout, "{line}")?;
        stdout.flush()?;
    }
}

fn load_config() -> anyhow::Result<Config> {
    let mut config = Config::load()?;
    config.apply_env();
    Ok(config)
}
