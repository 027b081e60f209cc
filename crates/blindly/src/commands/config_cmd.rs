//! Config file management.

use blindly_config::{Config, ConfigError, config_path, load_config_or_default, save_config};

use crate::cli::{ConfigArgs, ConfigCommand};
use crate::error::CliError;

pub fn handle(args: &ConfigArgs, quiet: bool) -> Result<(), CliError> {
    match &args.command {
        ConfigCommand::Init { key } => {
            let config = Config {
                key: Some(key.clone()),
                ..Config::default()
            };
            save_config(&config)?;
            if !quiet {
                eprintln!("Config written to {}", config_path().display());
            }
            Ok(())
        }

        ConfigCommand::Show => {
            let mut config = load_config_or_default();
            if config.key.is_some() {
                config.key = Some("<redacted>".into());
            }
            let rendered = toml::to_string_pretty(&config).map_err(ConfigError::from)?;
            println!("{rendered}");
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", config_path().display());
            Ok(())
        }
    }
}
