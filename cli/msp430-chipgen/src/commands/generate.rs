//! `msp430-chipgen generate` — write the spec fragment files.

use std::path::Path;

use anyhow::{Context, Result};
use msp430_chipdata::{generate, write_output, GenerateOptions};

use crate::source::TableSource;

/// Generate every category from the selected table into `out_dir`.
pub fn run(source: &TableSource, out_dir: &Path, mcu_types: bool) -> Result<()> {
    let table = source.load()?;
    let output = generate(&table, &GenerateOptions { mcu_types });
    let written = write_output(&output, out_dir)
        .with_context(|| format!("writing spec files to {}", out_dir.display()))?;

    for path in &written {
        println!("wrote {}", path.display());
    }
    if written.is_empty() {
        println!("chip table is empty; nothing written");
    }
    Ok(())
}
