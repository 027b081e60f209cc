//! Write-command handlers (open / close / stop).

use blindly_core::{Bridge, Command};

use crate::cli::MoveArgs;
use crate::error::CliError;

pub fn open(bridge: &mut Bridge, args: &MoveArgs, quiet: bool) -> Result<(), CliError> {
    let mut command = Command::open();
    if let Some(p) = args.position {
        command = command.with_position(p);
    }
    send(bridge, &args.mac, command, "Open", quiet)
}

pub fn close(bridge: &mut Bridge, args: &MoveArgs, quiet: bool) -> Result<(), CliError> {
    let mut command = Command::close();
    if let Some(p) = args.position {
        command = command.with_position(p);
    }
    send(bridge, &args.mac, command, "Close", quiet)
}

pub fn stop(bridge: &mut Bridge, mac: &str, quiet: bool) -> Result<(), CliError> {
    send(bridge, mac, Command::stop(), "Stop", quiet)
}

/// Connect (discovery + token refresh), then dispatch one command.
fn send(
    bridge: &mut Bridge,
    mac: &str,
    command: Command,
    verb: &str,
    quiet: bool,
) -> Result<(), CliError> {
    bridge.connect()?;
    bridge.send_command(mac, command)?;

    if !quiet {
        // The ack's success/failure semantics are unconfirmed, so this
        // only means the hub replied.
        eprintln!("{verb} command sent");
    }
    Ok(())
}
