mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use blindly_config::{Config, ConfigError};
use blindly_core::Bridge;

use crate::cli::{Cli, Command, GlobalOpts, OutputFormat};
use crate::error::CliError;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a hub connection
        Command::Config(args) => commands::config_cmd::handle(&args, cli.global.quiet),

        // Shell completions generation
        Command::Completions { shell } => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "blindly", &mut std::io::stdout());
            Ok(())
        }

        // All other commands talk to the hub
        cmd => {
            let config = merged_config(&cli.global);
            let output = resolve_output(&cli.global, &config);

            let bridge_config = blindly_config::to_bridge_config(&config).map_err(|e| match e {
                ConfigError::NoKey => CliError::NoKey,
                other => CliError::Config(other),
            })?;
            let mut bridge = Bridge::new(bridge_config);

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &mut bridge, output, cli.global.quiet)
        }
    }
}

/// Load the config file + environment, then apply CLI flag overrides.
fn merged_config(global: &GlobalOpts) -> Config {
    let mut config = blindly_config::load_config_or_default();

    if let Some(ref key) = global.key {
        config.key = Some(key.clone());
    }
    if let Some(ref addr) = global.hub_addr {
        config.hub_addr = Some(addr.clone());
    }
    if let Some(timeout) = global.timeout {
        config.timeout = timeout;
    }

    config
}

/// `--output` beats the config file's `output`; unknown file values fall
/// back to the table format.
fn resolve_output(global: &GlobalOpts, config: &Config) -> OutputFormat {
    if let Some(format) = global.output {
        return format;
    }
    match config.output.as_str() {
        "json" => OutputFormat::Json,
        "json-compact" => OutputFormat::JsonCompact,
        "yaml" => OutputFormat::Yaml,
        "plain" => OutputFormat::Plain,
        _ => OutputFormat::Table,
    }
}
