//! Command line definition

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use dnscli_pdns::{ObjectType, ZoneKind};

use crate::output::OutputType;

#[derive(Debug, Parser)]
#[command(name = "dnscli", version, about = "Command line client for the PowerDNS HTTP API")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every command.
///
/// Everything is optional here so the config file can fill the gaps.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Config file (default is $HOME/.dnscli.yaml)
    #[arg(long, global = true, env = "DNSCLI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the PowerDNS API [default: http://127.0.0.1:8081]
    #[arg(short = 'b', long = "baseURL", global = true, env = "DNSCLI_BASEURL")]
    pub base_url: Option<String>,

    /// Use mutual TLS
    #[arg(
        short = 'T',
        long,
        global = true,
        env = "DNSCLI_TLS",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub tls: Option<bool>,

    /// CA certificate used to verify the server
    #[arg(short = 'A', long, global = true, env = "DNSCLI_CACERT")]
    pub cacert: Option<PathBuf>,

    /// Client certificate (PEM)
    #[arg(short = 'C', long, global = true, env = "DNSCLI_CERT")]
    pub cert: Option<PathBuf>,

    /// Client private key (PEM)
    #[arg(short = 'K', long, global = true, env = "DNSCLI_KEY")]
    pub key: Option<PathBuf>,

    /// API key sent as X-API-Key
    #[arg(long = "api-key", global = true, env = "DNSCLI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds [default: 5]
    #[arg(
        long,
        global = true,
        env = "DNSCLI_TIMEOUT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// Output format [default: text]
    #[arg(short = 'o', long = "output-type", global = true, env = "DNSCLI_OUTPUT_TYPE")]
    pub output_type: Option<OutputType>,

    /// Log requests and responses to stderr
    #[arg(
        short = 'd',
        long,
        global = true,
        env = "DNSCLI_DEBUG",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub debug: Option<bool>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage resource record sets
    #[command(subcommand)]
    Rr(RrCommand),

    /// Manage forwarding zones
    #[command(subcommand)]
    Fz(FzCommand),

    /// Manage zones
    #[command(subcommand)]
    Zone(ZoneCommand),

    /// Search the data inside PowerDNS
    Search(SearchArgs),

    /// Show information about the PowerDNS server
    Info,
}

// ============ rr ============

#[derive(Debug, Subcommand)]
pub enum RrCommand {
    /// Replace a record set (all existing values of the name and type are overwritten)
    #[command(visible_aliases = ["add", "change", "mv", "new", "update"])]
    Replace(RrReplaceArgs),

    /// Delete a record set
    #[command(visible_aliases = ["del", "rm", "remove"])]
    Delete(RrTarget),
}

/// Name, zone and type addressing one record set.
#[derive(Debug, Clone, Args)]
pub struct RrTarget {
    /// Record name relative to the zone (`@` for the apex)
    #[arg(short = 'n', long)]
    pub name: String,

    /// Zone the record belongs to
    #[arg(short = 'z', long)]
    pub zone: String,

    /// Record type (A, AAAA, CNAME, TXT, ...)
    #[arg(short = 't', long = "type")]
    pub record_type: String,
}

#[derive(Debug, Clone, Args)]
pub struct RrReplaceArgs {
    #[command(flatten)]
    pub target: RrTarget,

    /// Time to live in seconds
    #[arg(short = 'l', long, default_value_t = 1800)]
    pub ttl: u32,

    /// Comma separated record values
    #[arg(short = 'c', long)]
    pub content: String,

    /// Create matching PTR records
    #[arg(
        short = 'p',
        long = "set-ptr",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub set_ptr: bool,
}

// ============ fz ============

#[derive(Debug, Subcommand)]
pub enum FzCommand {
    /// Remove a forwarding zone
    #[command(visible_alias = "rm")]
    Del(NameArg),

    /// List forwarding zones
    #[command(visible_alias = "ls")]
    List,

    /// Add a forwarding zone
    #[command(visible_aliases = ["create", "new"])]
    Add(FzAddArgs),
}

#[derive(Debug, Clone, Args)]
pub struct NameArg {
    /// Domain name
    #[arg(short = 'n', long)]
    pub name: String,
}

#[derive(Debug, Clone, Args)]
pub struct FzAddArgs {
    /// Domain name
    #[arg(short = 'n', long)]
    pub name: String,

    /// Comma separated name servers queries are forwarded to
    #[arg(short = 's', long, value_delimiter = ',', required = true)]
    pub nameservers: Vec<String>,
}

// ============ zone ============

#[derive(Debug, Subcommand)]
pub enum ZoneCommand {
    /// List zones
    #[command(visible_alias = "ls")]
    List,

    /// Show a zone and its record sets
    #[command(visible_aliases = ["get", "info"])]
    Show(NameArg),

    /// Create a zone
    #[command(visible_aliases = ["create", "new"])]
    Add(ZoneAddArgs),

    /// Delete a zone
    #[command(visible_aliases = ["rm", "delete"])]
    Del(NameArg),
}

#[derive(Debug, Clone, Args)]
pub struct ZoneAddArgs {
    /// Zone name
    #[arg(short = 'n', long)]
    pub name: String,

    /// Zone kind (Native, Master, Slave, Producer, Consumer)
    #[arg(short = 'k', long, default_value_t = ZoneKind::Native)]
    pub kind: ZoneKind,

    /// Comma separated name servers for the apex NS set
    #[arg(short = 's', long, value_delimiter = ',')]
    pub nameservers: Vec<String>,

    /// Comma separated primaries (Slave zones)
    #[arg(short = 'm', long, value_delimiter = ',')]
    pub masters: Vec<String>,
}

// ============ search ============

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Search term, `*` and `?` act as wildcards
    #[arg(short = 'q', long)]
    pub query: String,

    /// Maximum number of results
    #[arg(short = 'm', long, default_value_t = 100)]
    pub max: u32,

    /// Restrict the search to one object type (all, zone, record, comment)
    #[arg(short = 't', long = "type", default_value_t = ObjectType::All)]
    pub object_type: ObjectType,
}
