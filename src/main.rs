//*** START FILE: src/main.rs ***//
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use teidict::config::{Config, DEFAULT_CONFIG_PATH};
use teidict::pipeline::{describe_failure, run, RunArgs};
use teidict::TranslationPolicy;

#[derive(Parser, Debug)]
#[command(name = "teidict", version, about = "Convert a TEI bilingual dictionary to JSON and merge it with a supplementary dictionary")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the TEI-derived dictionary only
    Convert(SourceFlags),
    /// Write the TEI-derived dictionary, then merge the supplementary one over it
    Combine {
        #[command(flatten)]
        source: SourceFlags,
        /// Supplementary JSON dictionary; its values win on collision
        #[arg(long)]
        supplementary: Option<PathBuf>,
        #[arg(long)]
        combined_output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct SourceFlags {
    /// Local TEI file or http(s) URL
    #[arg(long)]
    source: Option<String>,
    /// Where the TEI-only JSON goes
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long, value_enum)]
    policy: Option<TranslationPolicy>,
}

impl SourceFlags {
    fn apply(self, config: &mut Config) {
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(output) = self.output {
            config.tei_output = output;
        }
        if let Some(policy) = self.policy {
            config.translation_policy = policy;
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let mut config = match Config::load_or_default(&config_path, cli.config.is_some()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", describe_failure(&e));
            return ExitCode::FAILURE;
        }
    };

    let with_combine = match cli.command {
        Command::Convert(flags) => {
            flags.apply(&mut config);
            false
        }
        Command::Combine {
            source,
            supplementary,
            combined_output,
        } => {
            source.apply(&mut config);
            if let Some(path) = supplementary {
                config.supplementary = path;
            }
            if let Some(path) = combined_output {
                config.combined_output = path;
            }
            true
        }
    };
    if let Err(e) = config.validate(&config_path) {
        error!("{}", describe_failure(&e));
        return ExitCode::FAILURE;
    }

    match run(&RunArgs::from_config(&config, with_combine)) {
        Ok(report) => {
            if let Some(Err(e)) = &report.combined {
                error!("{}", describe_failure(e));
                info!("{} kept; combined output not written", config.tei_output.display());
            }
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("{}", describe_failure(&e));
            ExitCode::FAILURE
        }
    }
}
//*** END FILE: src/main.rs ***//
