//! Command handlers.

pub mod config_cmd;
pub mod control;
pub mod devices;
pub mod discover;

use blindly_core::Bridge;

use crate::cli::{Command, DevicesCommand, OutputFormat};
use crate::error::CliError;

/// Route a parsed command (other than `config`/`completions`) to its handler.
pub fn dispatch(
    cmd: Command,
    bridge: &mut Bridge,
    output: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    match cmd {
        Command::Discover => discover::handle(bridge, output, quiet),
        Command::Hub => discover::handle_hub(bridge, output, quiet),

        Command::Devices(args) => match args.command {
            DevicesCommand::List => devices::list(bridge, output, quiet),
            DevicesCommand::Status { mac } => devices::status(bridge, &mac, output, quiet),
        },

        Command::Open(args) => control::open(bridge, &args, quiet),
        Command::Close(args) => control::close(bridge, &args, quiet),
        Command::Stop { mac } => control::stop(bridge, &mac, quiet),

        // Handled before a Bridge is built.
        Command::Config(_) | Command::Completions { .. } => unreachable!("handled in run()"),
    }
}
