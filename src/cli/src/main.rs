#![warn(clippy::pedantic)]

mod plan;

use clap::{ArgAction, Parser, Subcommand};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};
use parking::find_moves_sequence;
use plan::{Plan, parse_layout};
use std::path::PathBuf;

/// Plans how to rearrange cars in a parking lot with one empty spot
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print only the number of moves instead of the moves themselves
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan the moves between two layouts given on the command line
    Moves {
        /// The start layout, e.g. "1 2 0 3". Use 0 for the empty spot.
        start: String,
        /// The desired layout, e.g. "3,0,1,2"
        desired: String,
    },
    /// Plan the moves between the layouts in a plan file
    Plan {
        /// A TOML file with `start` and `desired` arrays
        file: PathBuf,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let plan = match cli.command {
        Commands::Moves { start, desired } => Plan {
            start: parse_layout(&start)?,
            desired: parse_layout(&desired)?,
        },
        Commands::Plan { file } => Plan::load(&file)?,
    };
    info!(
        "Planning {} spots: start={:?} desired={:?}",
        plan.start.len(),
        plan.start,
        plan.desired
    );

    let moves = find_moves_sequence(&plan.start, &plan.desired, !cli.quiet)?;
    if cli.quiet {
        println!("{}", moves.len());
    }

    Ok(())
}
