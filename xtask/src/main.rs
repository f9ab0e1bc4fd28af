// Licensed under the Apache-2.0 license

use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

mod lookup_gen;

#[derive(Parser)]
#[command(author, version, about, long_about = None, name = "xtask")]
struct Xtask {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    xtask: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the embedded register lookup header from a register map
    LookupGen {
        /// JSON register map
        #[arg(short, long)]
        input: PathBuf,

        /// Header file to write; printed to stdout if not given
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write the generated tables as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Constants version to define; defaults to the register map's
        #[arg(long)]
        constants_version: Option<String>,

        /// Prefix for the C symbols in the header
        #[arg(long)]
        symbol_prefix: Option<String>,

        /// Prefix for conflict table names
        #[arg(long)]
        table_prefix: Option<String>,
    },
}

fn main() {
    let cli = Xtask::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = SimpleLogger::new().with_level(level).init();

    let result = match &cli.xtask {
        Commands::LookupGen {
            input,
            output,
            json,
            constants_version,
            symbol_prefix,
            table_prefix,
        } => lookup_gen::generate(
            input,
            output.as_deref(),
            json.as_deref(),
            constants_version.as_deref(),
            symbol_prefix.as_deref(),
            table_prefix.as_deref(),
        ),
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    });
}
