// Licensed under the Apache-2.0 license

//! Lookup table generation.
//!
//! Generation runs in three strictly sequential phases, each consuming the
//! previous phase's output by value:
//! - `classify`: one register at a time, builds the primary directory and the
//!   conflict tables
//! - `resolve`: picks the disambiguating number of every conflict table,
//!   repairs the primary directory and drops tables that are not real conflicts
//! - `emit`: sorts the primary directory by CRC and produces the output records

mod classify;
mod emit;
mod resolve;


use std::path::Path;

use crate::config::{GeneratorConfig, HeaderConfig};
use crate::error::Result;
use crate::header::render_c_header;
use crate::input::load_register_map;
use crate::output::LookupTables;
use crate::types::Register;

use classify::{Classification, Classifier};

/// Build the lookup tables for `registers` with the default configuration.
///
/// `registers` must already be free of repeated full names.
pub fn generate_lookup_tables(registers: &[Register]) -> Result<LookupTables> {
    generate_lookup_tables_with_config(registers, &GeneratorConfig::with_defaults())
}

/// Build the lookup tables for `registers`.
pub fn generate_lookup_tables_with_config(
    registers: &[Register],
    config: &GeneratorConfig,
) -> Result<LookupTables> {
    let classification = classify(registers, config)?;
    let resolution = resolve::resolve(classification)?;
    Ok(emit::emit(resolution))
}

/// Load a register map file and render the C header for it.
///
/// The constants version is taken from the file unless `header_config`
/// already sets one.
pub fn generate_header_from_file(
    path: &Path,
    config: &GeneratorConfig,
    header_config: &HeaderConfig,
) -> Result<String> {
    let map = load_register_map(path)?;
    let tables = generate_lookup_tables_with_config(&map.registers, config)?;
    let mut header_config = header_config.clone();
    if header_config.constants_version.is_none() {
        header_config.constants_version = map.version;
    }
    Ok(render_c_header(&tables, &header_config))
}

pub(crate) fn classify(registers: &[Register], config: &GeneratorConfig) -> Result<Classification> {
    let mut classifier = Classifier::new(config);
    for register in registers {
        classifier.classify(register)?;
    }
    Ok(classifier.finish())
}
