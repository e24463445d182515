use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dobs::ConvertRequest;
use dobs::cli::convert::parse_amount;
use dobs::core::Direction;
use dobs::core::log::init_logging;
use rust_decimal::Decimal;

/// Converts between US dollars and bolívares using the official BCV rate
#[derive(Parser)]
#[command(version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
}

#[derive(Args)]
struct ConvertArgs {
    /// Amount to convert
    #[arg(default_value = "1", value_parser = parse_amount, allow_negative_numbers = true)]
    amount: Decimal,

    /// Convert from bolívares to US dollars
    #[arg(short = 'u', long)]
    convert_to_us_dollars: bool,

    /// Only use the latest rate
    #[arg(short, long)]
    last_rate_only: bool,

    /// Number of decimals to display
    #[arg(short, long, default_value_t = 2)]
    decimals_to_display: u32,

    /// Do not read or write the cached rates
    #[arg(short, long)]
    no_cache: bool,
}

impl From<ConvertArgs> for ConvertRequest {
    fn from(args: ConvertArgs) -> Self {
        ConvertRequest {
            amount: args.amount,
            direction: if args.convert_to_us_dollars {
                Direction::VesToUsd
            } else {
                Direction::UsdToVes
            },
            last_rate_only: args.last_rate_only,
            no_cache: args.no_cache,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => dobs::cli::setup::setup(),
        None => {
            let decimals = cli.convert.decimals_to_display;
            dobs::run(cli.convert.into(), decimals, cli.config_path.as_deref()).await
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
