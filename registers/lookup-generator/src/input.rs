// Licensed under the Apache-2.0 license

//! Loading of normalized register maps.
//!
//! Two JSON shapes are accepted: a bare array of registers, or an object with
//! an optional `header.version` and a `registers` array:
//!
//! ```json
//! {
//!     "header": { "version": "1.0.0" },
//!     "registers": [
//!         { "name": "AIN#(0:13)", "address": 0, "type": "FLOAT32" }
//!     ]
//! }
//! ```
//!
//! Registers that repeat an earlier full name are dropped, so the result can
//! be fed straight into the generator.

use std::collections::HashSet;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::Result;
use crate::types::Register;

/// A loaded register map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterMap {
    pub version: Option<String>,
    pub registers: Vec<Register>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMap {
    Bare(Vec<RawRegister>),
    Document {
        #[serde(default)]
        header: Option<RawHeader>,
        registers: Vec<RawRegister>,
    },
}

#[derive(Deserialize)]
struct RawHeader {
    version: Option<String>,
}

#[derive(Deserialize)]
struct RawRegister {
    name: String,
    address: u32,
    #[serde(rename = "type")]
    type_name: String,
}

/// Load a register map from a JSON file.
pub fn load_register_map(path: &Path) -> Result<RegisterMap> {
    let contents = std::fs::read_to_string(path)?;
    parse_register_map(&contents)
}

/// Parse a register map from JSON text.
pub fn parse_register_map(json: &str) -> Result<RegisterMap> {
    let (version, raw) = match serde_json::from_str::<RawMap>(json)? {
        RawMap::Bare(registers) => (None, registers),
        RawMap::Document { header, registers } => {
            (header.and_then(|header| header.version), registers)
        }
    };

    let mut seen = HashSet::new();
    let mut registers = Vec::with_capacity(raw.len());
    for reg in raw {
        if !seen.insert(reg.name.clone()) {
            debug!("dropping repeated register name {}", reg.name);
            continue;
        }
        registers.push(Register::with_type_name(&reg.name, reg.address, &reg.type_name)?);
    }
    Ok(RegisterMap { version, registers })
}
