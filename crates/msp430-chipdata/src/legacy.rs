//! The legacy chip table format.
//!
//! Before the chip list lived in its own data file, it was maintained as the
//! `msp430_mcu_types[]` initializer in the compiler's `msp430.c`:
//!
//! ```text
//! 	/* F5xxx family */
//! 	{"msp430x5418",  MSP430_ISA_54, 1},
//! 	{"msp430x2201",  MSP430_ISA_22, 0}, /* Value-Line */
//! ```
//!
//! This module scrapes records out of such a block, and renders a table back
//! into the same shape so the array can be refreshed from the data file.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::chip::{ChipRecord, ChipTable};
use crate::error::{ChipDataError, Result};

/// Column at which the `MSP430_ISA_` field starts, counted from the opening brace.
const NAME_COLUMN_WIDTH: usize = 16;

fn entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^.*"(.*)".*MSP430_ISA_(\d+),\s*([01])"#).expect("valid entry pattern")
    })
}

/// Parse a single line of the legacy block.
///
/// Returns `None` for anything that is not a chip entry: blank lines, comments,
/// family headers, or an ISA number too large to represent.
pub fn parse_line(line: &str) -> Option<ChipRecord> {
    let caps = entry_pattern().captures(line)?;
    let isa = caps[2].parse::<u32>().ok()?;
    Some(ChipRecord::new(&caps[1], isa, &caps[3] == "1"))
}

/// Extract every chip entry from a legacy block, in order.
pub fn parse_legacy_table(text: &str) -> ChipTable {
    text.lines()
        .filter_map(|line| {
            let record = parse_line(line);
            if record.is_none() && !line.trim().is_empty() {
                tracing::trace!(line, "skipping non-entry line");
            }
            record
        })
        .collect()
}

/// Load a legacy block from a file.
pub fn load_legacy_table(path: &Path) -> Result<ChipTable> {
    if !path.exists() {
        return Err(ChipDataError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| ChipDataError::io(path, e))?;
    let table = parse_legacy_table(&text);
    tracing::debug!(path = %path.display(), chips = table.len(), "loaded legacy chip table");
    Ok(table)
}

/// Render one chip as a legacy initializer entry, without indentation.
pub fn render_entry(chip: &ChipRecord) -> String {
    let name = format!("{{\"{}\",", chip.name);
    format!(
        "{name:<width$} MSP430_ISA_{}, {}}},",
        chip.isa,
        u8::from(chip.hwmult),
        width = NAME_COLUMN_WIDTH
    )
}

/// Render a table as tab-indented initializer lines, one per chip.
pub fn render_mcu_types(table: &ChipTable) -> Vec<String> {
    table.iter().map(|chip| format!("\t{}", render_entry(chip))).collect()
}
