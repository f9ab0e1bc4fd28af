// Licensed under the Apache-2.0 license

//! First pass: sort registers into the primary directory and conflict tables.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, warn};

use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, Result};
use crate::hash::short_name_crc;
use crate::short_name::{shorten, ShortName};
use crate::types::{ConflictEntry, ConflictTable, Register, RegisterType, NO_INDEX_NIBBLE};

/// Primary directory entry before conflicts are resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PendingPrimary {
    pub crc: u32,
    pub short_name: String,
    pub kind: PendingKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PendingKind {
    Direct {
        address: u32,
        data_type: RegisterType,
    },
    /// Position of the owned table in the conflict directory at creation time.
    Conflict { table: usize },
}

/// A conflict table together with the bookkeeping the resolver needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PendingTable {
    pub table: ConflictTable,
    /// Primary entry pointing at this table. `None` when that entry was
    /// dropped because its CRC was already taken.
    pub owner: Option<usize>,
    /// Position of the register index among the numbers of the name.
    pub index_position: Option<u8>,
}

/// Output of the classification pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Classification {
    pub primary: Vec<PendingPrimary>,
    /// Conflict tables keyed by table name, in creation order.
    pub tables: IndexMap<String, PendingTable>,
    pub duplicates: usize,
    pub wide_names: usize,
}

pub(crate) struct Classifier<'a> {
    config: &'a GeneratorConfig,
    crcs: HashSet<u32>,
    state: Classification,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            crcs: HashSet::new(),
            state: Classification::default(),
        }
    }

    /// Classify one register.
    pub fn classify(&mut self, register: &Register) -> Result<()> {
        let ShortName {
            short_name,
            numbers,
            index_location,
        } = shorten(&register.name)?;
        let crc = short_name_crc(&short_name);

        let Some(&first_number) = numbers.first() else {
            if self.crcs.insert(crc) {
                self.state.primary.push(PendingPrimary {
                    crc,
                    short_name,
                    kind: PendingKind::Direct {
                        address: register.address,
                        data_type: register.data_type,
                    },
                });
            } else {
                debug!("{}: CRC of {short_name} already taken, dropping", register.name);
                self.state.duplicates += 1;
            }
            return Ok(());
        };

        if numbers.len() > self.config.max_validated_numbers {
            warn!(
                "register {} has {} numbers in it, conflict resolution may pick the wrong one",
                register.name,
                numbers.len()
            );
            self.state.wide_names += 1;
        }

        let entry = ConflictEntry {
            conflict_num: first_number,
            address: register.address,
            data_type: register.data_type,
            numbers,
        };
        let table_name = self.config.table_name(&short_name);
        if let Some(pending) = self.state.tables.get_mut(&table_name) {
            pending.table.entries.push(entry);
            return Ok(());
        }

        let index_position = index_location
            .map(|location| index_nibble(&register.name, location))
            .transpose()?;
        let owner = if self.crcs.insert(crc) {
            self.state.primary.push(PendingPrimary {
                crc,
                short_name: short_name.clone(),
                kind: PendingKind::Conflict {
                    table: self.state.tables.len(),
                },
            });
            Some(self.state.primary.len() - 1)
        } else {
            debug!("{}: CRC of {short_name} already taken, dropping", register.name);
            self.state.duplicates += 1;
            None
        };
        self.state.tables.insert(
            table_name.clone(),
            PendingTable {
                table: ConflictTable {
                    name: table_name,
                    short_name,
                    entries: vec![entry],
                },
                owner,
                index_position,
            },
        );
        Ok(())
    }

    pub fn finish(self) -> Classification {
        self.state
    }
}

/// The index position shares a nibble with the "no index" sentinel.
fn index_nibble(name: &str, location: usize) -> Result<u8> {
    u8::try_from(location)
        .ok()
        .filter(|position| *position < NO_INDEX_NIBBLE)
        .ok_or_else(|| {
            GeneratorError::name_shape(name, format!("index position {location} does not fit a nibble"))
        })
}
