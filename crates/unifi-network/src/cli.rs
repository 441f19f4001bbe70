//! Clap derive structures for the `unifi-network` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// unifi-network -- CRUD for UniFi Network controller configuration
#[derive(Debug, Parser)]
#[command(
    name = "unifi-network",
    version,
    about = "Read and change UniFi Network controller configuration",
    long_about = "Lists, reads, creates, updates and deletes configuration records\n\
        (networks, WLANs, firewall rules, static routes, ...) through the\n\
        controller's REST and v2 APIs.\n\n\
        Settings come from the config file, then UNIFI_* environment\n\
        variables, then the flags below.",
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
    /// Controller URL, e.g. https://192.168.1.1
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Site name
    #[arg(long, short = 's', global = true)]
    pub site: Option<String>,

    /// Username for session login
    #[arg(long, short = 'u', global = true)]
    pub username: Option<String>,

    /// Password for session login
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// API key (takes precedence over username/password)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', global = true)]
    pub insecure: bool,

    /// Standalone Network Application (no /proxy/network prefix)
    #[arg(long, global = true)]
    pub standalone: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', default_value = "json", global = true)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every record of a kind
    #[command(alias = "ls")]
    List { kind: ResourceKind },

    /// Show one record
    Get { kind: ResourceKind, id: String },

    /// Show the first record with an exact name (a hostname for `static-dns`)
    Find {
        kind: ResourceKind,
        #[arg(long, short = 'n')]
        name: String,
    },

    /// Create a record from a JSON file ("-" reads stdin)
    Create {
        kind: ResourceKind,
        #[arg(long, short = 'f')]
        file: PathBuf,
    },

    /// Replace a record from a JSON file ("-" reads stdin)
    Update {
        kind: ResourceKind,
        id: String,
        #[arg(long, short = 'f')]
        file: PathBuf,
    },

    /// Delete a record (for `user`, the id is the client MAC)
    #[command(alias = "rm")]
    Delete { kind: ResourceKind, id: String },
}

impl Command {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::List { kind }
            | Self::Get { kind, .. }
            | Self::Find { kind, .. }
            | Self::Create { kind, .. }
            | Self::Update { kind, .. }
            | Self::Delete { kind, .. } => *kind,
        }
    }
}

/// Configuration record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ResourceKind {
    #[value(alias = "networks")]
    Network,
    FirewallRule,
    FirewallGroup,
    PortForward,
    PortProfile,
    #[value(alias = "wifi")]
    Wlan,
    ApGroup,
    UserGroup,
    #[value(alias = "client")]
    User,
    RadiusProfile,
    StaticRoute,
    StaticDns,
    TrafficRule,
}
