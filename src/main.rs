// src/main.rs

use anyhow::Context;
use blikk::config::{ClientConfig, Command, CommandLineInput};
use blikk::{Client, Project, TimeReport, User, UserDayStatistics, UserSummary};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use serde::Serialize;

/// Sets up logging configuration.
///
/// Logs go to stderr so stdout carries only the JSON result.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .build(Root::builder().appender("stderr").build(log_level))?;

    log4rs::init_config(config)?;
    Ok(())
}

fn render<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("failed to render result as JSON")
}

/// Runs one CLI command and returns its JSON output.
fn run(client: &Client, config: &ClientConfig, command: &Command) -> anyhow::Result<String> {
    let now = chrono::Utc::now();
    match command {
        Command::Users => render(&client.list::<UserSummary>(config.list_options())?),
        Command::Projects => render(&client.list::<Project>(config.list_options())?),
        Command::TimeReports(filters) => {
            let options = filters.apply(config.list_options(), &now);
            render(&client.list::<TimeReport>(options)?)
        }
        Command::Statistics(filters) => {
            let options = filters.apply(config.list_options(), &now);
            render(&client.list::<UserDayStatistics>(options)?)
        }
        Command::User { id } => {
            let user: User = client
                .get(id)
                .with_context(|| format!("failed to fetch user {}", id))?;
            render(&user)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let config = ClientConfig::resolve(&cli).context("failed to resolve configuration")?;
    let client = config.build_client()?;

    let output = run(&client, &config, &cli.command)?;
    println!("{}", output);
    Ok(())
}
