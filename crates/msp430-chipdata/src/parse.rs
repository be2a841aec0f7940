//! TOML parsing, serialization, and consistency checks for chip tables.
//!
//! The chip table is stored as an array of `[[chip]]` tables, one per device,
//! in the order the generated spec lines should appear. The table shipped with
//! this crate is embedded at build time and available via [`builtin_table`].

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::path::Path;

use crate::chip::ChipTable;
use crate::error::{ChipDataError, Result};
use crate::multilib::MultilibGroup;

/// The chip table shipped with this crate.
pub const BUILTIN_TABLE_TOML: &str = include_str!("../data/msp430-chips.toml");

/// Device name prefixes of the supported families.
const FAMILY_PREFIXES: [&str; 2] = ["msp430", "cc430"];

/// Severity of a [`TableIssue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Note => f.write_str("note"),
        }
    }
}

/// An advisory finding about a chip table. Never blocks generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableIssue {
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for TableIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Load a chip table from a TOML file.
pub fn load_chip_table(path: &Path) -> Result<ChipTable> {
    if !path.exists() {
        return Err(ChipDataError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| ChipDataError::io(path, e))?;
    let table = parse_chip_table(&content)?;
    tracing::debug!(path = %path.display(), chips = table.len(), "loaded chip table");
    Ok(table)
}

/// Parse a chip table from a TOML string.
pub fn parse_chip_table(toml_str: &str) -> Result<ChipTable> {
    let table: ChipTable = toml::from_str(toml_str)?;
    Ok(table)
}

/// Serialize a chip table to pretty TOML.
pub fn chip_table_to_toml(table: &ChipTable) -> Result<String> {
    let toml_str = toml::to_string_pretty(table)?;
    Ok(toml_str)
}

/// Parse the embedded chip table.
pub fn builtin_table() -> Result<ChipTable> {
    parse_chip_table(BUILTIN_TABLE_TOML)
}

/// Look for problems a maintainer probably wants to know about.
///
/// Nothing reported here changes what [`crate::generate`] produces: duplicates
/// still yield duplicated lines and unlisted ISA classes still map to `msp2`.
pub fn check_table(table: &ChipTable) -> Vec<TableIssue> {
    let mut issues = Vec::new();

    // 1. Duplicate names
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for chip in table {
        if !seen.insert(chip.name.as_str()) && reported.insert(chip.name.as_str()) {
            issues.push(TableIssue {
                severity: Severity::Warning,
                message: format!("chip '{}' is listed more than once", chip.name),
            });
        }
    }

    // 2. Unknown family prefix
    for chip in table {
        if !FAMILY_PREFIXES.iter().any(|p| chip.name.starts_with(p)) {
            issues.push(TableIssue {
                severity: Severity::Warning,
                message: format!(
                    "chip '{}' does not start with a known family prefix ({})",
                    chip.name,
                    FAMILY_PREFIXES.join(", ")
                ),
            });
        }
    }

    // 3. Multiplier chips on ISA classes the classifier does not name
    let fallback: BTreeSet<u32> = table
        .iter()
        .filter(|c| c.hwmult && !MultilibGroup::is_explicit(c.isa))
        .map(|c| c.isa)
        .collect();
    for isa in fallback {
        issues.push(TableIssue {
            severity: Severity::Note,
            message: format!(
                "ISA class {isa} with hardware multiplier has no dedicated multilib group; using {}",
                MultilibGroup::Msp2
            ),
        });
    }

    // 4. Groups whose exemplary chip is missing
    for group in MultilibGroup::ALL {
        let present = table
            .iter()
            .any(|c| group.is_exemplary(&c.name) && c.multilib_group() == group);
        if !present {
            issues.push(TableIssue {
                severity: Severity::Warning,
                message: format!(
                    "exemplary chip '{}' for {group} is not in the table; no crt spec will answer -mmcu={group}",
                    group.exemplary_chip()
                ),
            });
        }
    }

    issues
}
