//! Command-line interface definitions.

pub mod check;
pub mod depth;
pub mod output;
pub mod simulate;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use crate::config::Config;
use crate::domain::Side;
use crate::error::Result;

/// Fillcast - pre-trade execution simulation for prediction-market books.
#[derive(Parser, Debug)]
#[command(name = "fillcast")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate a trade against an order book snapshot
    Simulate(SimulateArgs),

    /// Show depth and best quotes for an order book snapshot
    Depth(DepthArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `fillcast check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config,
}

/// Order side, as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SideArg {
    Buy,
    Sell,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Buy => Self::Buy,
            SideArg::Sell => Self::Sell,
        }
    }
}

/// Arguments for the `simulate` subcommand.
#[derive(Parser, Debug)]
pub struct SimulateArgs {
    /// Path to an order book snapshot JSON file
    #[arg(short, long)]
    pub book: PathBuf,

    /// Token ID the snapshot belongs to
    #[arg(long, default_value = "snapshot")]
    pub token_id: String,

    /// Side of the simulated trade
    #[arg(short, long, value_enum)]
    pub side: SideArg,

    /// Trade size in shares
    #[arg(long)]
    pub size: Decimal,

    /// Limit price; omit for a market order
    #[arg(long)]
    pub limit_price: Option<Decimal>,

    /// Emit the raw JSON result instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `depth` subcommand.
#[derive(Parser, Debug)]
pub struct DepthArgs {
    /// Path to an order book snapshot JSON file
    #[arg(short, long)]
    pub book: PathBuf,

    /// Token ID the snapshot belongs to
    #[arg(long, default_value = "snapshot")]
    pub token_id: String,
}

/// Dispatch a parsed command line.
pub fn dispatch(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::Simulate(args) => simulate::run(args, config),
        Commands::Depth(args) => depth::run(args),
        Commands::Check(CheckCommand::Config) => check::config(&cli.config),
    }
}
