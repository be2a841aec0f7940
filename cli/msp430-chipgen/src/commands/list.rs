//! `msp430-chipgen list` — show chips and their multilib groups.

use anyhow::{bail, Result};
use msp430_chipdata::{ChipTable, MultilibGroup};
use serde::Serialize;

use crate::source::TableSource;

/// One row of `list --format json`.
#[derive(Debug, Serialize)]
struct ChipRow<'a> {
    name: &'a str,
    isa: u32,
    hwmult: bool,
    group: MultilibGroup,
    exemplary: bool,
}

fn rows(table: &ChipTable) -> Vec<ChipRow<'_>> {
    table
        .iter()
        .map(|chip| {
            let group = chip.multilib_group();
            ChipRow {
                name: &chip.name,
                isa: chip.isa,
                hwmult: chip.hwmult,
                group,
                exemplary: group.is_exemplary(&chip.name),
            }
        })
        .collect()
}

/// List the selected table.
pub fn run(source: &TableSource, format: Option<&str>) -> Result<()> {
    let table = source.load()?;
    let rows = rows(&table);

    match format {
        Some("json") => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        None | Some("text") => {
            println!("{:<16} {:>5}  {:<6} group", "chip", "isa", "hwmult");
            for row in &rows {
                println!(
                    "{:<16} {:>5}  {:<6} {}{}",
                    row.name,
                    row.isa,
                    if row.hwmult { "yes" } else { "no" },
                    row.group,
                    if row.exemplary { " (exemplary)" } else { "" },
                );
            }
        }
        Some(other) => bail!("unknown format: '{other}'. Expected 'text' or 'json'."),
    }
    Ok(())
}
