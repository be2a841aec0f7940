//! Chip records and the chip table.

use serde::{Deserialize, Serialize};

use crate::multilib::{classify, MultilibGroup};

/// One device entry: name, ISA class, and hardware multiplier presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipRecord {
    /// Device name as passed to `-mmcu=` (e.g., "msp430x5418", "cc430x6137").
    pub name: String,
    /// The `MSP430_ISA_<n>` class number.
    pub isa: u32,
    /// Whether the device has a hardware multiplier.
    pub hwmult: bool,
}

impl ChipRecord {
    pub fn new(name: impl Into<String>, isa: u32, hwmult: bool) -> Self {
        Self {
            name: name.into(),
            isa,
            hwmult,
        }
    }

    /// The multilib group this chip links against.
    pub fn multilib_group(&self) -> MultilibGroup {
        classify(self.isa, self.hwmult)
    }
}

/// An ordered list of chips.
///
/// Order is significant: generated spec lines follow it exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipTable {
    #[serde(rename = "chip", default)]
    pub chips: Vec<ChipRecord>,
}

impl ChipTable {
    pub fn new(chips: Vec<ChipRecord>) -> Self {
        Self { chips }
    }

    pub fn len(&self) -> usize {
        self.chips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChipRecord> {
        self.chips.iter()
    }

    /// Look up the first chip with the given name.
    pub fn chip(&self, name: &str) -> Option<&ChipRecord> {
        self.chips.iter().find(|c| c.name == name)
    }
}

impl FromIterator<ChipRecord> for ChipTable {
    fn from_iter<I: IntoIterator<Item = ChipRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ChipTable {
    type Item = &'a ChipRecord;
    type IntoIter = std::slice::Iter<'a, ChipRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.chips.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_group() {
        assert_eq!(
            ChipRecord::new("msp430x5418", 54, true).multilib_group(),
            MultilibGroup::Msp6
        );
        assert_eq!(
            ChipRecord::new("msp430x110", 11, false).multilib_group(),
            MultilibGroup::Msp1
        );
    }

    #[test]
    fn lookup_returns_first_duplicate() {
        let table: ChipTable = [
            ChipRecord::new("msp430x149", 14, true),
            ChipRecord::new("msp430x149", 14, false),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.len(), 2);
        assert!(table.chip("msp430x149").unwrap().hwmult);
        assert!(table.chip("msp430x150").is_none());
    }
}
