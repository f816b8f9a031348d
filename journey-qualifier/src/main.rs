use std::convert::Infallible;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use journey_qualifier::input::{load_config, load_journeys};
use journey_qualifier::qualifier::{QualifierConfig, RequestType, qualifier_one};

/// Tag the candidate journeys of a planner response.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding a journeys list or a planner response
    #[arg(value_name = "*.json")]
    journeys: PathBuf,

    /// Request orientation; anything but "arrival" means departure
    #[arg(default_value = "departure", value_parser = parse_request_type)]
    request_type: RequestType,

    /// JSON qualifier configuration; missing fields keep their defaults
    #[arg(long, env = "QUALIFIER_CONFIG", value_name = "*.json")]
    config: Option<PathBuf>,
}

fn parse_request_type(s: &str) -> Result<RequestType, Infallible> {
    Ok(RequestType::parse(s))
}

fn init_logger() {
    let default_level = LevelFilter::INFO;
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    let env_filter = EnvFilter::try_new(rust_log).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            default_level,
            err,
        );
        EnvFilter::new(default_level.to_string())
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> ExitCode {
    init_logger();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(config_path) => match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => QualifierConfig::default(),
    };

    let mut journeys = match load_journeys(&cli.journeys) {
        Ok(journeys) => journeys,
        Err(e) => {
            eprintln!("Failed to load journeys: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = qualifier_one(&mut journeys, cli.request_type, &config) {
        eprintln!("Qualification failed: {e}");
        return ExitCode::FAILURE;
    }

    for (i, journey) in journeys.iter().enumerate() {
        let tag = if journey.journey_type.is_unset() {
            "none"
        } else {
            journey.journey_type.as_str()
        };
        println!("{i}\t{tag}");
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn request_type_defaults_to_departure() {
        let cli = Cli::try_parse_from(["journey-qualifier", "journeys.json"]).unwrap();
        assert_eq!(cli.journeys, PathBuf::from("journeys.json"));
        assert_eq!(cli.request_type, RequestType::Departure);
    }

    #[test]
    fn request_type_keeps_exact_match_semantics() {
        let cli = Cli::try_parse_from(["journey-qualifier", "j.json", "arrival"]).unwrap();
        assert_eq!(cli.request_type, RequestType::Arrival);

        let cli = Cli::try_parse_from(["journey-qualifier", "j.json", "Arrival"]).unwrap();
        assert_eq!(cli.request_type, RequestType::Departure);
    }

    #[test]
    fn config_flag() {
        let cli = Cli::try_parse_from([
            "journey-qualifier",
            "j.json",
            "--config",
            "qualifier.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("qualifier.json")));
    }

    #[test]
    fn journeys_path_is_required() {
        assert!(Cli::try_parse_from(["journey-qualifier"]).is_err());
    }
}
