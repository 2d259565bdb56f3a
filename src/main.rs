//! Main binary entry point for json-model.

use clap::Parser;
use json_model::errors::JsonModelError;
use json_model::{Config, OutputStyle};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Output file; omit to print to stdout"
    )]
    output: Option<PathBuf>,

    #[arg(long, help = "Emit compact JSON instead of pretty, key-sorted JSON")]
    compact: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter_level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter(None, filter_level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run_app() -> Result<(), JsonModelError> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let style = if cli.compact {
        OutputStyle::Compact
    } else {
        OutputStyle::PrettySorted
    };

    let config = Config {
        input_file: cli.input,
        output_file: cli.output,
        style,
    };

    json_model::run(config)
}

fn main() -> ExitCode {
    match run_app() {
        Ok(_) => {
            log::info!("Reformat completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("A fatal error occurred:");
            log::error!("{}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(s) = source {
                log::error!("  Caused by: {}", s);
                source = std::error::Error::source(s);
            }
            ExitCode::FAILURE
        }
    }
}
