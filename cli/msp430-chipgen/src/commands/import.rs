//! `msp430-chipgen import` — convert a legacy block into a TOML chip table.

use std::path::Path;

use anyhow::{bail, Context, Result};
use msp430_chipdata::legacy::load_legacy_table;
use msp430_chipdata::parse::chip_table_to_toml;

/// Read `legacy`, and write the equivalent TOML table to `output` or stdout.
pub fn run(legacy: &Path, output: Option<&Path>) -> Result<()> {
    let table = load_legacy_table(legacy)
        .with_context(|| format!("loading legacy table {}", legacy.display()))?;
    if table.is_empty() {
        bail!("no chip entries found in {}", legacy.display());
    }
    let toml_str = chip_table_to_toml(&table).context("serializing chip table")?;

    match output {
        Some(path) => {
            std::fs::write(path, &toml_str)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Imported {} chips into {}", table.len(), path.display());
        }
        None => print!("{toml_str}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use msp430_chipdata::{load_chip_table, ChipRecord};

    #[test]
    fn import_writes_toml() {
        let dir = tempfile::tempdir().unwrap();
        let legacy = dir.path().join("msp430.c");
        std::fs::write(
            &legacy,
            "\t/* F4xx family */\n\t{\"msp430xG4616\", MSP430_ISA_46, 1},\n\t{\"msp430x412\",   MSP430_ISA_41, 0},\n",
        )
        .unwrap();
        let out = dir.path().join("chips.toml");

        run(&legacy, Some(&out)).unwrap();

        let table = load_chip_table(&out).unwrap();
        assert_eq!(
            table.chips,
            [
                ChipRecord::new("msp430xG4616", 46, true),
                ChipRecord::new("msp430x412", 41, false),
            ]
        );
    }

    #[test]
    fn import_rejects_block_without_entries() {
        let dir = tempfile::tempdir().unwrap();
        let legacy = dir.path().join("empty.c");
        std::fs::write(&legacy, "/* nothing here */\n").unwrap();
        assert!(run(&legacy, None).is_err());
    }
}
