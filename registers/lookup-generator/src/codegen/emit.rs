// Licensed under the Apache-2.0 license

//! Last pass: sort the primary directory and produce the output records.

use super::resolve::Resolution;
use crate::output::{
    ConflictDirectoryEntry, ConflictRecord, ConflictTableRecord, Diagnostics, LookupTables,
    PrimaryRecord,
};

pub(crate) fn emit(resolution: Resolution) -> LookupTables {
    let Resolution {
        mut primary,
        tables,
        duplicates,
        wide_names,
    } = resolution;

    // Stable, so equal CRCs (which classification never lets through) would
    // keep their input order.
    primary.sort_by_key(|entry| entry.crc);

    let registers = primary.iter().map(PrimaryRecord::from).collect();
    let conflict_directory = tables
        .iter()
        .map(|table| ConflictDirectoryEntry {
            name: table.name.clone(),
            entry_count: table.entries.len(),
        })
        .collect();
    let conflict_tables = tables
        .into_iter()
        .map(|table| ConflictTableRecord {
            entries: table.entries.iter().map(ConflictRecord::from).collect(),
            name: table.name,
            short_name: table.short_name,
        })
        .collect();

    LookupTables {
        registers,
        conflict_tables,
        conflict_directory,
        diagnostics: Diagnostics {
            duplicates,
            wide_names,
        },
    }
}
