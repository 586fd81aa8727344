//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use classclash::util::ColorChoice;

/// classclash - find duplicate classes across a JBoss/WildFly deployment's jars
#[derive(Parser)]
#[command(name = "classclash")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto", value_parser = parse_color)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the default `scan` command
    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a deployment for duplicate classes (default)
    Scan(ScanArgs),

    /// Show the resolved layout and the deployable archives
    Layout(LayoutArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// JBoss/WildFly home directory (prompted for when omitted)
    pub root: Option<PathBuf>,

    /// Deployable archive to analyse, by 1-based index or file name
    #[arg(long, value_name = "INDEX|NAME")]
    pub war: Option<String>,

    /// Directory to write the reports to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// TOML file overriding report names and scan conventions
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// JBoss/WildFly home directory (prompted for when omitted)
    pub root: Option<PathBuf>,

    /// TOML file overriding scan conventions
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

fn parse_color(s: &str) -> Result<ColorChoice, String> {
    s.parse()
}
