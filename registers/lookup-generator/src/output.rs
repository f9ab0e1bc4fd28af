// Licensed under the Apache-2.0 license

//! Output types of lookup generation.
//!
//! ```text
//! Register[] → classify → resolve → LookupTables
//!                                   ├── PrimaryRecord[]          sorted by CRC
//!                                   ├── ConflictTableRecord[]    creation order
//!                                   └── ConflictDirectoryEntry[] same order
//! ```
//!
//! Every record is a plain value; rendering them as source text is left to
//! [`crate::header`] or any other consumer.

use serde::Serialize;

use crate::hash::crc_hex;
use crate::types::{ConflictEntry, PrimaryData, PrimaryEntry};

/// One row of the primary directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PrimaryRecord {
    pub crc: u32,
    /// Register address, or conflict directory position when
    /// `conflict_mode == 1`.
    pub address: u32,
    /// Type code, or nibble-packed digit positions when `conflict_mode == 1`.
    pub data_type: u8,
    pub conflict_mode: u8,
    pub short_name: String,
}

impl PrimaryRecord {
    pub fn crc_hex(&self) -> String {
        crc_hex(self.crc)
    }
}

impl From<&PrimaryEntry> for PrimaryRecord {
    fn from(entry: &PrimaryEntry) -> Self {
        Self {
            crc: entry.crc,
            address: entry.data.address(),
            data_type: entry.data.data_type(),
            conflict_mode: entry.data.conflict_mode(),
            short_name: entry.short_name.clone(),
        }
    }
}

/// One row of a conflict table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConflictRecord {
    pub conflict_num: u32,
    pub address: u32,
    pub data_type: u8,
    pub conflict_mode: u8,
}

impl From<&ConflictEntry> for ConflictRecord {
    fn from(entry: &ConflictEntry) -> Self {
        Self {
            conflict_num: entry.conflict_num,
            address: entry.address,
            data_type: entry.data_type.code(),
            conflict_mode: PrimaryData::CONFLICT_MODE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConflictTableRecord {
    pub name: String,
    pub short_name: String,
    pub entries: Vec<ConflictRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConflictDirectoryEntry {
    pub name: String,
    pub entry_count: usize,
}

/// Counters reported alongside the tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Registers dropped because their CRC was taken or their conflict number
    /// repeated the previous entry's.
    pub duplicates: usize,
    /// Conflicting registers with more numbers in their name than conflict
    /// resolution is known to handle.
    pub wide_names: usize,
}

/// The complete output of one generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LookupTables {
    pub registers: Vec<PrimaryRecord>,
    pub conflict_tables: Vec<ConflictTableRecord>,
    pub conflict_directory: Vec<ConflictDirectoryEntry>,
    pub diagnostics: Diagnostics,
}

impl LookupTables {
    pub fn num_registers(&self) -> usize {
        self.registers.len()
    }

    pub fn register(&self, short_name: &str) -> Option<&PrimaryRecord> {
        self.registers.iter().find(|r| r.short_name == short_name)
    }

    pub fn conflict_table(&self, name: &str) -> Option<&ConflictTableRecord> {
        self.conflict_tables.iter().find(|t| t.name == name)
    }

    /// Binary search by CRC, as the firmware does.
    pub fn lookup_crc(&self, crc: u32) -> Option<&PrimaryRecord> {
        self.registers
            .binary_search_by_key(&crc, |r| r.crc)
            .ok()
            .map(|i| &self.registers[i])
    }
}
