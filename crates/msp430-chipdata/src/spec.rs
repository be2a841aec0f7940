//! Compiler spec fragments derived from the chip table.
//!
//! Each chip contributes one line to each [`SpecCategory`]. The categories map
//! onto places in the compiler sources:
//!
//! - `MULTILIB_MATCHES` in `t-msp430`
//! - `CPP_SPEC`, `LINK_SPEC`, and `CRT_BINUTILS_SPECS` in `msp430.h`
//! - `MCU_TYPES`, optionally, for the `msp430_mcu_types[]` array in `msp430.c`

use std::fmt;

use crate::chip::{ChipRecord, ChipTable};
use crate::legacy;
use crate::multilib::MultilibGroup;

/// Separator between lines of a macro-continued spec: space, backslash, newline.
pub const CONTINUATION: &str = " \\\n";

/// One generated output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpecCategory {
    MultilibMatches,
    CppSpec,
    LinkSpec,
    CrtBinutilsSpecs,
    McuTypes,
}

impl SpecCategory {
    /// The categories always generated, in emission order.
    pub const SPECS: [SpecCategory; 4] = [
        SpecCategory::MultilibMatches,
        SpecCategory::CppSpec,
        SpecCategory::LinkSpec,
        SpecCategory::CrtBinutilsSpecs,
    ];

    /// Output file name, which is also the name of the macro being replaced.
    pub fn file_name(self) -> &'static str {
        match self {
            SpecCategory::MultilibMatches => "MULTILIB_MATCHES",
            SpecCategory::CppSpec => "CPP_SPEC",
            SpecCategory::LinkSpec => "LINK_SPEC",
            SpecCategory::CrtBinutilsSpecs => "CRT_BINUTILS_SPECS",
            SpecCategory::McuTypes => "MCU_TYPES",
        }
    }

    /// Separator placed between lines when the category is written out.
    ///
    /// Everything except `MCU_TYPES` is pasted into a macro definition and
    /// needs line continuations.
    pub fn separator(self) -> &'static str {
        match self {
            SpecCategory::McuTypes => "\n",
            _ => CONTINUATION,
        }
    }

    /// Format the line this category holds for `chip` in `group`.
    pub fn format_line(self, chip: &ChipRecord, group: MultilibGroup) -> String {
        let c = chip.name.as_str();
        match self {
            SpecCategory::MultilibMatches => format!("\tmmcu?{group}=mmcu?{c}"),
            SpecCategory::CppSpec => {
                format!("%{{mmcu={c}:%(cpp_{group}) -D__{}__}}", cpp_macro_name(c))
            }
            SpecCategory::LinkSpec => format!("%{{mmcu={c}:-m {c} }}"),
            SpecCategory::CrtBinutilsSpecs => {
                let aux = if group.is_exemplary(c) {
                    format!("|mmcu={group}")
                } else {
                    String::new()
                };
                format!("%{{mmcu={c}{aux}:crt{}.o%s}}", c.replace("msp", ""))
            }
            SpecCategory::McuTypes => format!("\t{}", legacy::render_entry(chip)),
        }
    }
}

impl fmt::Display for SpecCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// The predefined device macro body: `msp430x5418` becomes `MSP430_5418`.
pub fn cpp_macro_name(chip: &str) -> String {
    chip.replace('x', "_").to_uppercase()
}

/// Options for [`generate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Also render the `msp430_mcu_types[]` initializer.
    pub mcu_types: bool,
}

impl GenerateOptions {
    /// Categories produced under these options, in emission order.
    pub fn categories(&self) -> Vec<SpecCategory> {
        let mut categories = SpecCategory::SPECS.to_vec();
        if self.mcu_types {
            categories.push(SpecCategory::McuTypes);
        }
        categories
    }
}

/// Generated lines grouped by category, each in chip order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedOutput {
    sections: Vec<(SpecCategory, Vec<String>)>,
}

impl GeneratedOutput {
    /// Append a line to `category`, creating the category on first use.
    pub fn push(&mut self, category: SpecCategory, line: String) {
        match self.sections.iter_mut().find(|(c, _)| *c == category) {
            Some((_, lines)) => lines.push(line),
            None => self.sections.push((category, vec![line])),
        }
    }

    /// Lines for `category`, or `None` if nothing was generated for it.
    pub fn lines(&self, category: SpecCategory) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, lines)| lines.as_slice())
    }

    /// Categories present, in the order they were first filled.
    pub fn categories(&self) -> impl Iterator<Item = SpecCategory> + '_ {
        self.sections.iter().map(|(c, _)| *c)
    }

    /// The file contents for `category`: lines joined by its separator.
    pub fn render(&self, category: SpecCategory) -> Option<String> {
        self.lines(category)
            .map(|lines| lines.join(category.separator()))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Classify every chip and format its lines, in table order.
pub fn generate(table: &ChipTable, options: &GenerateOptions) -> GeneratedOutput {
    let categories = options.categories();
    let mut output = GeneratedOutput::default();
    for chip in table {
        let group = chip.multilib_group();
        tracing::trace!(chip = %chip.name, isa = chip.isa, hwmult = chip.hwmult, %group, "classified");
        for &category in &categories {
            output.push(category, category.format_line(chip, group));
        }
    }
    tracing::debug!(chips = table.len(), "generated spec lines");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(category: SpecCategory, name: &str, isa: u32, hwmult: bool) -> String {
        let chip = ChipRecord::new(name, isa, hwmult);
        category.format_line(&chip, chip.multilib_group())
    }

    #[test]
    fn msp430x5418_lines() {
        assert_eq!(
            line(SpecCategory::MultilibMatches, "msp430x5418", 54, true),
            "\tmmcu?msp6=mmcu?msp430x5418"
        );
        assert_eq!(
            line(SpecCategory::CppSpec, "msp430x5418", 54, true),
            "%{mmcu=msp430x5418:%(cpp_msp6) -D__MSP430_5418__}"
        );
        assert_eq!(
            line(SpecCategory::LinkSpec, "msp430x5418", 54, true),
            "%{mmcu=msp430x5418:-m msp430x5418 }"
        );
        assert_eq!(
            line(SpecCategory::CrtBinutilsSpecs, "msp430x5418", 54, true),
            "%{mmcu=msp430x5418|mmcu=msp6:crt430x5418.o%s}"
        );
    }

    #[test]
    fn msp430x110_multilib_match() {
        assert_eq!(
            line(SpecCategory::MultilibMatches, "msp430x110", 11, false),
            "\tmmcu?msp1=mmcu?msp430x110"
        );
    }

    #[test]
    fn crt_alias_only_for_exemplary_chip() {
        assert_eq!(
            line(SpecCategory::CrtBinutilsSpecs, "msp430x5419", 54, true),
            "%{mmcu=msp430x5419:crt430x5419.o%s}"
        );
        // Exemplary name, but it lands in a different group.
        assert_eq!(
            line(SpecCategory::CrtBinutilsSpecs, "msp430x5418", 54, false),
            "%{mmcu=msp430x5418:crt430x5418.o%s}"
        );
    }

    #[test]
    fn crt_for_cc430_keeps_full_name() {
        assert_eq!(
            line(SpecCategory::CrtBinutilsSpecs, "cc430x6137", 54, true),
            "%{mmcu=cc430x6137:crtcc430x6137.o%s}"
        );
    }

    #[test]
    fn cpp_macro_replaces_lowercase_x_only() {
        assert_eq!(cpp_macro_name("msp430xG4616"), "MSP430_G4616");
        assert_eq!(cpp_macro_name("cc430x6137"), "CC430_6137");
        assert_eq!(
            line(SpecCategory::CppSpec, "msp430xE4232", 42, true),
            "%{mmcu=msp430xE4232:%(cpp_msp2) -D__MSP430_E4232__}"
        );
    }

    #[test]
    fn mcu_types_line() {
        assert_eq!(
            line(SpecCategory::McuTypes, "msp430x47166", 471, true),
            "\t{\"msp430x47166\", MSP430_ISA_471, 1},"
        );
    }

    #[test]
    fn generate_keeps_table_order() {
        let table = ChipTable::new(vec![
            ChipRecord::new("msp430x149", 14, true),
            ChipRecord::new("msp430x110", 11, false),
            ChipRecord::new("msp430x149", 14, true),
        ]);
        let output = generate(&table, &GenerateOptions::default());
        assert_eq!(
            output.lines(SpecCategory::LinkSpec).unwrap(),
            [
                "%{mmcu=msp430x149:-m msp430x149 }",
                "%{mmcu=msp430x110:-m msp430x110 }",
                "%{mmcu=msp430x149:-m msp430x149 }",
            ]
        );
        assert_eq!(
            output.categories().collect::<Vec<_>>(),
            SpecCategory::SPECS
        );
    }

    #[test]
    fn render_joins_with_continuation() {
        let table = ChipTable::new(vec![
            ChipRecord::new("msp430x110", 11, false),
            ChipRecord::new("msp430x112", 11, false),
        ]);
        let output = generate(&table, &GenerateOptions::default());
        assert_eq!(
            output.render(SpecCategory::MultilibMatches).unwrap(),
            "\tmmcu?msp1=mmcu?msp430x110 \\\n\tmmcu?msp1=mmcu?msp430x112"
        );
    }

    #[test]
    fn mcu_types_is_opt_in() {
        let table = ChipTable::new(vec![ChipRecord::new("msp430x110", 11, false)]);
        let plain = generate(&table, &GenerateOptions::default());
        assert!(plain.lines(SpecCategory::McuTypes).is_none());

        let with = generate(&table, &GenerateOptions { mcu_types: true });
        assert_eq!(
            with.render(SpecCategory::McuTypes).unwrap(),
            "\t{\"msp430x110\",   MSP430_ISA_11, 0},"
        );
    }

    #[test]
    fn empty_table_generates_nothing() {
        let output = generate(&ChipTable::default(), &GenerateOptions { mcu_types: true });
        assert!(output.is_empty());
        assert!(output.render(SpecCategory::CppSpec).is_none());
    }
}
