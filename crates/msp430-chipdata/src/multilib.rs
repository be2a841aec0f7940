//! Multilib group classification.
//!
//! Every chip is assigned to one of six bundles of precompiled runtime
//! libraries, based on its ISA class and whether it carries a hardware
//! multiplier. Each bundle also names one exemplary chip, which the generated
//! crt spec treats as the default target for the group's generic `-mmcu` alias.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A multilib group (`msp1` through `msp6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MultilibGroup {
    /// No hardware multiplier.
    Msp1,
    /// Hardware multiplier, ISA class not listed below.
    Msp2,
    /// Hardware multiplier on ISA classes 26, 241, and 46.
    Msp3,
    /// Hardware multiplier on ISA class 47.
    Msp4,
    /// Hardware multiplier on ISA class 471.
    Msp5,
    /// Hardware multiplier on ISA class 54 (F5xxx, CC430).
    Msp6,
}

/// ISA classes with a dedicated group when the chip has a hardware multiplier.
const EXPLICIT_ISA_CLASSES: [(u32, MultilibGroup); 6] = [
    (26, MultilibGroup::Msp3),
    (241, MultilibGroup::Msp3),
    (46, MultilibGroup::Msp3),
    (47, MultilibGroup::Msp4),
    (471, MultilibGroup::Msp5),
    (54, MultilibGroup::Msp6),
];

impl MultilibGroup {
    /// All groups, in order.
    pub const ALL: [MultilibGroup; 6] = [
        MultilibGroup::Msp1,
        MultilibGroup::Msp2,
        MultilibGroup::Msp3,
        MultilibGroup::Msp4,
        MultilibGroup::Msp5,
        MultilibGroup::Msp6,
    ];

    /// Group name as used in multilib options and spec names.
    pub fn as_str(self) -> &'static str {
        match self {
            MultilibGroup::Msp1 => "msp1",
            MultilibGroup::Msp2 => "msp2",
            MultilibGroup::Msp3 => "msp3",
            MultilibGroup::Msp4 => "msp4",
            MultilibGroup::Msp5 => "msp5",
            MultilibGroup::Msp6 => "msp6",
        }
    }

    /// The chip designated as this group's representative target.
    pub fn exemplary_chip(self) -> &'static str {
        match self {
            MultilibGroup::Msp1 => "msp430x110",
            MultilibGroup::Msp2 => "msp430x336",
            MultilibGroup::Msp3 => "msp430xG4616",
            MultilibGroup::Msp4 => "msp430x4783",
            MultilibGroup::Msp5 => "msp430x47166",
            MultilibGroup::Msp6 => "msp430x5418",
        }
    }

    /// Whether `chip` is the exemplary chip of this group.
    pub fn is_exemplary(self, chip: &str) -> bool {
        self.exemplary_chip() == chip
    }

    /// Whether `isa` has its own entry in the classification table.
    ///
    /// Classes without an entry land in [`MultilibGroup::Msp2`] when the chip
    /// has a hardware multiplier.
    pub fn is_explicit(isa: u32) -> bool {
        EXPLICIT_ISA_CLASSES.iter().any(|&(class, _)| class == isa)
    }
}

impl fmt::Display for MultilibGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assign a chip to its multilib group.
///
/// Total: chips without a hardware multiplier are always `msp1`, and a
/// multiplier chip whose ISA class is not listed falls back to `msp2`.
pub fn classify(isa: u32, hwmult: bool) -> MultilibGroup {
    if !hwmult {
        return MultilibGroup::Msp1;
    }
    EXPLICIT_ISA_CLASSES
        .iter()
        .find(|&&(class, _)| class == isa)
        .map(|&(_, group)| group)
        .unwrap_or(MultilibGroup::Msp2)
}
