//! Clap derive structures for the `blindly` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// blindly -- control Connector motorized-blinds hubs from the command line
#[derive(Debug, Parser)]
#[command(
    name = "blindly",
    version,
    about = "Discover and control motorized blinds on the local network",
    long_about = "A CLI for the Connector blinds hub's multicast LAN protocol.\n\n\
        Discovers the hub over UDP multicast, derives the per-session access\n\
        token from your factory key, and issues open/close/stop commands.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Factory key from the Connector app (Settings > About, tap 4 times)
    #[arg(long, short = 'k', env = "BLINDLY_KEY", global = true, hide_env = true)]
    pub key: Option<String>,

    /// Hub address override (unicast ip:port instead of multicast)
    #[arg(long, env = "BLINDLY_HUB_ADDR", global = true)]
    pub hub_addr: Option<String>,

    /// Reply wait in seconds
    #[arg(long, env = "BLINDLY_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Output format (defaults to the config file's setting)
    #[arg(long, short = 'o', env = "BLINDLY_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Discover the hub and list attached devices
    #[command(alias = "d")]
    Discover,

    /// Show hub identity (firmware, protocol version, device count)
    Hub,

    /// Inspect attached devices
    #[command(alias = "dev")]
    Devices(DevicesArgs),

    /// Open a blind, optionally to a target position
    Open(MoveArgs),

    /// Close a blind, optionally to a target position
    Close(MoveArgs),

    /// Stop a blind mid-travel
    Stop {
        /// Device mac address
        mac: String,
    },

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Device mac address
    pub mac: String,

    /// Target position percentage (0-100)
    #[arg(long, short = 'p')]
    pub position: Option<u8>,
}

#[derive(Debug, Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    /// List devices from a fresh discovery
    List,

    /// Fetch detailed status for one device
    Status {
        /// Device mac address
        mac: String,
    },
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create the config file with the given factory key
    Init {
        /// Factory key from the Connector app
        #[arg(long, short = 'k')]
        key: String,
    },

    /// Print the effective configuration (key redacted)
    Show,

    /// Print the config file path
    Path,
}
