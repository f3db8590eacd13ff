//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `macvendors` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process;

use macvendors::config::DEFAULT_API_BASE_URL;
use macvendors::initialization::init_logger_with;
use macvendors::{Config, LogFormat, LogLevel, LookupError, VendorRecord, VendorResolver};

#[derive(Debug, Parser)]
#[command(name = "macvendors", version, about = "Look up the vendor of a MAC address")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    log_format: LogFormat,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long, global = true)]
    timeout_seconds: Option<u64>,

    /// Base URL of the macvendors API
    #[arg(long, default_value = DEFAULT_API_BASE_URL, global = true)]
    api_base_url: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the full registration block of a MAC address
    Lookup {
        /// MAC address, colon-, hyphen- or dot-separated
        mac: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print only the vendor name of a MAC address
    Name {
        /// MAC address, colon-, hyphen- or dot-separated
        mac: String,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            api_base_url: self.api_base_url.clone(),
            timeout_seconds: self.timeout_seconds,
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            ..Default::default()
        }
    }
}

fn print_record(record: &VendorRecord) {
    println!("{}", record.address);
    println!("{}", record.company);
    println!("{}", record.country);
    println!("{}", record.block_type);
    println!("{}", record.mac_prefix);
    println!("{}", record.start_hex);
    println!("{}", record.end_hex);
}

async fn run(config: Config, command: Command) -> Result<()> {
    let resolver =
        VendorResolver::with_config(config).context("Failed to initialize HTTP client")?;

    match command {
        Command::Lookup { mac, json } => {
            let record = resolver.lookup(&mac).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_record(&record);
            }
        }
        Command::Name { mac } => {
            let name = resolver.name(&mac).await?;
            println!("{}", name);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(config, cli.command).await {
        match e.downcast_ref::<LookupError>() {
            Some(lookup) if lookup.is_usage_error() => {
                eprintln!("macvendors: {}", lookup);
            }
            _ => eprintln!("macvendors error: {:#}", e),
        }
        process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup_with_json() {
        let cli = Cli::try_parse_from(["macvendors", "lookup", "28:18:78:6D:64:42", "--json"])
            .unwrap();
        match cli.command {
            Command::Lookup { mac, json } => {
                assert_eq!(mac, "28:18:78:6D:64:42");
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(cli.timeout_seconds.is_none());
        assert_eq!(cli.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_parse_name_with_global_flags() {
        let cli = Cli::try_parse_from([
            "macvendors",
            "name",
            "xx",
            "--timeout-seconds",
            "4",
            "--log-format",
            "json",
            "--api-base-url",
            "http://127.0.0.1:9/api",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.timeout_seconds, Some(4));
        assert_eq!(config.api_base_url, "http://127.0.0.1:9/api");
        assert_eq!(config.user_agent, "API Browser");
        assert!(matches!(config.log_format, LogFormat::Json));
    }

    #[test]
    fn test_logging_flags_flow_into_config() {
        let cli = Cli::try_parse_from(["macvendors", "lookup", "xx"]).unwrap();
        let config = cli.config();
        assert_eq!(
            log::LevelFilter::from(config.log_level),
            log::LevelFilter::Warn
        );
        assert!(matches!(config.log_format, LogFormat::Plain));

        let cli = Cli::try_parse_from(["macvendors", "name", "xx", "--log-level", "debug"]).unwrap();
        assert_eq!(
            log::LevelFilter::from(cli.config().log_level),
            log::LevelFilter::Debug
        );
    }

    #[test]
    fn test_missing_mac_is_rejected() {
        assert!(Cli::try_parse_from(["macvendors", "lookup"]).is_err());
    }
}
