// Rust guideline compliant 2026-10-15

//! ofp CLI Application
//!
//! Command-line viewer for the Open Finance Brasil participant directory.

use anyhow::Result;
use clap::Parser;
use ofp_cli::commands::show::{self, ShowOptions};
use ofp_cli::logging::init_tracing;
use ofp_cli::{create_formatter, should_use_color};
use ofp_core::{Config, OutputFormat, Role};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "ofp",
    version,
    about = "Visualize information about Open Finance Brasil participants",
    long_about = "ofp fetches the public Open Finance Brasil participant directory and prints organizations, their role claims and their Authorization Servers.",
    after_help = "Examples:\n  ofp --search \"Banco Inter\"\n  ofp --search 00000000\n  ofp --role PAGTO --json\n  ofp --auth-server 9d5b8c38-0a3f-4d5a-9c2e-0f1f2a3b4c5d\n  ofp --directory-file participants.json --search inter\n"
)]
struct Cli {
    /// Search by Organization ID, Name, Registration Number (CNPJ), Registration ID (ISPB), or fuzzy name matching
    #[arg(long)]
    search: Option<String>,

    /// Filter by role (e.g. DADOS, PAGTO)
    #[arg(long)]
    role: Option<Role>,

    /// Show detailed information for a specific Authorization Server ID
    #[arg(long)]
    auth_server: Option<String>,

    /// Print raw JSON output
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Custom config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read the directory from a JSON snapshot instead of the network
    #[arg(long)]
    directory_file: Option<PathBuf>,

    /// Log level
    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(path) = &cli.directory_file {
        config.directory_file = Some(path.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if cli.json {
        config.output_format = OutputFormat::Json;
    }

    Ok(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let use_color = !cli.no_color && should_use_color();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            let formatter = create_formatter(OutputFormat::Table, use_color);
            eprintln!("{}", formatter.format_error(&format!("{:#}", error)));
            return ExitCode::FAILURE;
        }
    };

    let formatter = create_formatter(config.output_format, use_color);

    if let Err(error) = init_tracing(&config.log_level, cli.log_json) {
        eprintln!("{}", formatter.format_error(&format!("{:#}", error)));
        return ExitCode::FAILURE;
    }

    let options = ShowOptions {
        search: cli.search,
        role: cli.role,
        auth_server: cli.auth_server,
        json: config.output_format == OutputFormat::Json,
    };
    let source = config.source();

    let result = show::execute(
        &options,
        source.as_ref(),
        formatter.as_ref(),
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr(),
    );

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", formatter.format_error(&format!("{:#}", error)));
            let code = error
                .downcast_ref::<ofp_core::Error>()
                .map(ofp_core::Error::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
