// Licensed under the Apache-2.0 license

//! Second pass: settle every conflict table.
//!
//! For each table, in creation order:
//! 1. a single unindexed register is folded back into the primary directory
//! 2. otherwise the first number position whose values differ between every
//!    pair of adjacent entries becomes the conflict number
//! 3. the owner's data type records where that number sits in the name
//! 4. adjacent entries with the same conflict number are dropped
//!
//! Folded tables are removed last and the survivors are renumbered, so the
//! owners' addresses match the emitted conflict directory.

use log::{debug, warn};

use super::classify::{Classification, PendingKind, PendingTable};
use crate::error::{GeneratorError, Result};
use crate::types::{ConflictEntry, ConflictNibbles, ConflictTable, PrimaryData, PrimaryEntry};

/// Output of the resolution pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Resolution {
    pub primary: Vec<PrimaryEntry>,
    pub tables: Vec<ConflictTable>,
    pub duplicates: usize,
    pub wide_names: usize,
}

enum Outcome {
    /// Fold the only register back into the owner.
    Folded(PrimaryData),
    Kept {
        table: ConflictTable,
        nibbles: ConflictNibbles,
    },
    /// Orphaned single-entry table; nothing can reach it.
    Dropped,
}

pub(crate) fn resolve(classification: Classification) -> Result<Resolution> {
    let Classification {
        primary,
        tables,
        mut duplicates,
        wide_names,
    } = classification;

    let mut outcomes = Vec::with_capacity(tables.len());
    for pending in tables.into_values() {
        outcomes.push(resolve_table(pending, &mut duplicates)?);
    }

    // Survivors get dense positions in creation order.
    let mut owner_data = Vec::with_capacity(outcomes.len());
    let mut kept_tables = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Folded(data) => owner_data.push(Some(data)),
            Outcome::Kept { table, nibbles } => {
                owner_data.push(Some(PrimaryData::Conflict {
                    table: kept_tables.len() as u32,
                    nibbles,
                }));
                kept_tables.push(table);
            }
            Outcome::Dropped => owner_data.push(None),
        }
    }

    let primary = primary
        .into_iter()
        .map(|pending| -> Result<PrimaryEntry> {
            let data = match pending.kind {
                PendingKind::Direct { address, data_type } => {
                    PrimaryData::Direct { address, data_type }
                }
                PendingKind::Conflict { table } => owner_data
                    .get(table)
                    .copied()
                    .flatten()
                    .ok_or_else(|| {
                        GeneratorError::name_shape(
                            &pending.short_name,
                            "conflict table vanished during resolution",
                        )
                    })?,
            };
            Ok(PrimaryEntry {
                crc: pending.crc,
                short_name: pending.short_name,
                data,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Resolution {
        primary,
        tables: kept_tables,
        duplicates,
        wide_names,
    })
}

fn resolve_table(pending: PendingTable, duplicates: &mut usize) -> Result<Outcome> {
    let PendingTable {
        mut table,
        owner,
        index_position,
    } = pending;

    if let [only] = table.entries.as_slice() {
        match (owner, index_position) {
            (Some(_), None) => {
                debug!("{}: single unindexed register, folding", table.name);
                return Ok(Outcome::Folded(PrimaryData::Folded {
                    address: only.address,
                    data_type: only.data_type,
                }));
            }
            (None, _) => {
                debug!("{}: orphaned single-entry table, dropping", table.name);
                return Ok(Outcome::Dropped);
            }
            // The index position still has to be tracked for lookups.
            (Some(_), Some(_)) => {}
        }
    }
    if owner.is_none() {
        warn!(
            "{}: no primary entry points at this table, its CRC is taken by another short name",
            table.name
        );
    }

    let position = disambiguating_position(&table.entries).unwrap_or_else(|| {
        debug!("{}: no number position tells adjacent entries apart", table.name);
        0
    });
    for entry in &mut table.entries {
        entry.conflict_num = entry.numbers[position];
    }
    let nibbles = ConflictNibbles {
        index_position,
        conflict_position: conflict_nibble(&table, position, index_position)?,
    };

    let before = table.entries.len();
    table.entries.dedup_by_key(|entry| entry.conflict_num);
    *duplicates += before - table.entries.len();

    Ok(Outcome::Kept { table, nibbles })
}

/// First number position at which no entry repeats the previous entry's
/// number. Only adjacent entries are compared.
pub(crate) fn disambiguating_position(entries: &[ConflictEntry]) -> Option<usize> {
    let bound = entries.iter().map(|entry| entry.numbers.len()).min()?;
    (0..bound).find(|&position| {
        entries
            .windows(2)
            .all(|pair| pair[0].numbers[position] != pair[1].numbers[position])
    })
}

/// Where the conflict number sits among the numbers of the expanded name.
/// The index occupies a slot of its own, so positions at or after it shift
/// by one.
fn conflict_nibble(table: &ConflictTable, position: usize, index: Option<u8>) -> Result<u8> {
    let digit_position = match index {
        Some(index) if position >= usize::from(index) => position + 1,
        _ => position,
    };
    u8::try_from(digit_position)
        .ok()
        .filter(|nibble| *nibble <= 0x0F)
        .ok_or_else(|| {
            GeneratorError::name_shape(
                &table.short_name,
                format!("conflict position {digit_position} does not fit a nibble"),
            )
        })
}
