//! Where the chip table comes from.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use msp430_chipdata::{builtin_table, legacy, load_chip_table, ChipTable};

/// Table selection shared by every command that reads the chip table.
///
/// With neither flag, the table shipped with the tool is used.
#[derive(Debug, Clone, Default, Args)]
pub struct TableSource {
    /// TOML chip table to read instead of the built-in one
    #[arg(long, conflicts_with = "legacy")]
    pub table: Option<PathBuf>,
    /// Legacy msp430_mcu_types[] block to read instead of the built-in table
    #[arg(long)]
    pub legacy: Option<PathBuf>,
}

impl TableSource {
    pub fn load(&self) -> Result<ChipTable> {
        let table = match (&self.table, &self.legacy) {
            (Some(path), _) => load_chip_table(path)
                .with_context(|| format!("loading chip table {}", path.display()))?,
            (None, Some(path)) => legacy::load_legacy_table(path)
                .with_context(|| format!("loading legacy table {}", path.display()))?,
            (None, None) => builtin_table().context("parsing built-in chip table")?,
        };
        tracing::info!(chips = table.len(), "chip table loaded");
        Ok(table)
    }
}
