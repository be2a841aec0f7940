//! `msp430-chipgen check` — advisory table checks.

use anyhow::Result;
use msp430_chipdata::check_table;

use crate::source::TableSource;

/// Print every issue found in the selected table. Issues never fail the command.
pub fn run(source: &TableSource) -> Result<()> {
    let table = source.load()?;
    let issues = check_table(&table);

    for issue in &issues {
        println!("{issue}");
    }
    println!();
    println!("{} chips, {} issues", table.len(), issues.len());
    Ok(())
}
