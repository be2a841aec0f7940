//! MSP430 chip data and compiler spec generation.
//!
//! Turns the chip table (device name, ISA class, hardware multiplier flag)
//! into the spec fragments the MSP430 compiler port needs for each device:
//!
//! - **Multilib matches:** which runtime library bundle a `-mmcu` selects
//! - **CPP spec:** the predefined device macro
//! - **Link spec:** the emulation passed to the linker
//! - **CRT spec:** the startup object, plus the generic `-mmcu=mspN` alias
//!
//! The table itself is maintained as TOML (see [`parse`]); the older
//! C-initializer form is still accepted through [`legacy`].

pub mod chip;
pub mod emit;
pub mod error;
pub mod legacy;
pub mod multilib;
pub mod parse;
pub mod spec;

pub use chip::{ChipRecord, ChipTable};
pub use emit::write_output;
pub use error::{ChipDataError, Result};
pub use multilib::{classify, MultilibGroup};
pub use parse::{builtin_table, check_table, load_chip_table, TableIssue};
pub use spec::{generate, GenerateOptions, GeneratedOutput, SpecCategory};
