pub mod estimate;
pub mod generate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use discogen_common::config::{Config, DEFAULT_ONMS_HOME};

#[derive(Parser)]
#[command(name = "discogen")]
#[command(about = "Generates OpenNMS discovery configurations from address inventories.")]
pub struct CommandLine {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build discovery-configuration.xml from the given sources
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Merge an existing configuration and count the addresses it covers
    #[command(alias = "e")]
    Estimate { file: PathBuf },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// File with CIDR blocks to include, one per line
    #[arg(long = "inc-cidr", value_name = "FILE")]
    pub include_cidr: Option<PathBuf>,
    /// File with CIDR blocks to exclude, one per line
    #[arg(long = "exc-cidr", value_name = "FILE")]
    pub exclude_cidr: Option<PathBuf>,
    /// File with single addresses to include, one per line
    #[arg(long = "inc-list", value_name = "FILE")]
    pub include_list: Option<PathBuf>,
    /// File with single addresses that are never included
    #[arg(long = "exc-list", value_name = "FILE")]
    pub exclude_list: Option<PathBuf>,
    /// DNS export with `ipv4addr:` records
    #[arg(long = "inc-dns", value_name = "FILE")]
    pub include_dns: Option<PathBuf>,
    /// NNMi export with hex-encoded IPv4 addresses
    #[arg(long = "inc-hexnnmi", value_name = "FILE")]
    pub include_nnmi_hex: Option<PathBuf>,
    /// OpenNMS installation directory
    #[arg(long = "onms-home", value_name = "DIR", default_value = DEFAULT_ONMS_HOME)]
    pub onms_home: PathBuf,
    /// Write here instead of <onms-home>/etc/discovery-configuration.xml
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Print the generated document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn into_config(self) -> Config {
        Config {
            include_cidr: self.include_cidr,
            exclude_cidr: self.exclude_cidr,
            include_list: self.include_list,
            exclude_list: self.exclude_list,
            include_dns: self.include_dns,
            include_nnmi_hex: self.include_nnmi_hex,
            onms_home: self.onms_home,
            output: self.output,
            dry_run: self.dry_run,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
