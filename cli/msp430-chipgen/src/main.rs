//! msp430-chipgen — generate MSP430 compiler spec fragments from the chip table.

mod commands;
mod source;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use source::TableSource;

#[derive(Parser)]
#[command(
    name = "msp430-chipgen",
    version,
    about = "Generate MSP430 multilib, cpp, link, and crt specs from the chip table"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write MULTILIB_MATCHES, CPP_SPEC, LINK_SPEC, and CRT_BINUTILS_SPECS
    Generate {
        #[command(flatten)]
        source: TableSource,
        /// Directory to write into (default: current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Also write MCU_TYPES, the msp430_mcu_types[] initializer
        #[arg(long)]
        mcu_types: bool,
    },
    /// Convert a legacy msp430_mcu_types[] block into a TOML chip table
    Import {
        /// File holding the legacy initializer lines
        legacy: PathBuf,
        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Report duplicates, fallback classifications, and missing exemplary chips
    Check {
        #[command(flatten)]
        source: TableSource,
    },
    /// Show every chip with its multilib group
    List {
        #[command(flatten)]
        source: TableSource,
        /// Output format (default: human-readable, "json" for JSON)
        #[arg(long)]
        format: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            source,
            out_dir,
            mcu_types,
        } => {
            let out_dir = match out_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            commands::generate::run(&source, &out_dir, mcu_types)
        }
        Commands::Import { legacy, output } => {
            commands::import::run(&legacy, output.as_deref())
        }
        Commands::Check { source } => commands::check::run(&source),
        Commands::List { source, format } => commands::list::run(&source, format.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn table_and_legacy_conflict() {
        let result = Cli::try_parse_from([
            "msp430-chipgen",
            "generate",
            "--table",
            "a.toml",
            "--legacy",
            "b.c",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["msp430-chipgen", "list", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
