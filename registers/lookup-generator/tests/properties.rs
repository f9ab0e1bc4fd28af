// Licensed under the Apache-2.0 license

//! Property-based tests for lookup generation.
//!
//! Random register lists are run through the generator to check that:
//! 1. plain names each get exactly one mode 0 entry keyed by their CRC
//! 2. a group of names differing only in one number forms one conflict table
//! 3. every register is accounted for and the directory stays sorted

use std::collections::HashSet;

use mcu_registers_lookup::hash::short_name_crc;
use mcu_registers_lookup::{generate_lookup_tables, LookupTables, Register, RegisterType};
use proptest::prelude::*;

fn plain_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][A-Z_]{0,12}").expect("valid regex")
}

fn numbered_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-C][A-C0-9_]{0,6}").expect("valid regex")
}

fn unique(names: Vec<String>) -> Vec<Register> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .enumerate()
        .map(|(i, name)| Register::new(&name, i as u32, RegisterType::Uint32))
        .collect()
}

fn assert_sorted_unique(tables: &LookupTables) -> Result<(), TestCaseError> {
    for pair in tables.registers.windows(2) {
        prop_assert!(pair[0].crc < pair[1].crc);
    }
    Ok(())
}

proptest! {
    #[test]
    fn plain_names_get_direct_entries(names in proptest::collection::vec(plain_name_strategy(), 0..40)) {
        let registers = unique(names);
        let tables = generate_lookup_tables(&registers).unwrap();
        let crcs: HashSet<_> = registers.iter().map(|r| short_name_crc(&r.name)).collect();

        prop_assert_eq!(tables.num_registers(), crcs.len());
        prop_assert!(tables.conflict_tables.is_empty());
        for register in &registers {
            let record = tables.lookup_crc(short_name_crc(&register.name)).unwrap();
            prop_assert_eq!(record.conflict_mode, 0);
        }
        assert_sorted_unique(&tables)?;
    }

    #[test]
    fn numbered_group_forms_one_table(
        base in "[A-Z][A-Z_]{0,8}[A-Z]",
        numbers in proptest::collection::btree_set(0u32..100_000, 2..8),
    ) {
        let registers: Vec<_> = numbers
            .iter()
            .enumerate()
            .map(|(i, n)| Register::new(&format!("{base}{n}"), i as u32, RegisterType::Uint16))
            .collect();
        let tables = generate_lookup_tables(&registers).unwrap();

        prop_assert_eq!(tables.num_registers(), 1);
        prop_assert_eq!(tables.registers[0].conflict_mode, 1);
        prop_assert_eq!(tables.registers[0].data_type, 0xF0);
        prop_assert_eq!(tables.conflict_tables.len(), 1);
        let table = &tables.conflict_tables[0];
        let conflict_nums: Vec<u32> = table.entries.iter().map(|e| e.conflict_num).collect();
        prop_assert_eq!(conflict_nums, numbers.iter().copied().collect::<Vec<_>>());
        prop_assert_eq!(tables.diagnostics.duplicates, 0);

        // Same input, same tables.
        prop_assert_eq!(generate_lookup_tables(&registers).unwrap(), tables);
    }

    #[test]
    fn every_register_is_accounted_for(names in proptest::collection::vec(numbered_name_strategy(), 0..60)) {
        let registers = unique(names);
        let tables = generate_lookup_tables(&registers).unwrap();

        let rows: usize = tables.conflict_tables.iter().map(|t| t.entries.len()).sum();
        prop_assert_eq!(
            tables.num_registers() + tables.diagnostics.duplicates + rows - tables.conflict_tables.len(),
            registers.len()
        );
        prop_assert_eq!(tables.conflict_tables.len(), tables.conflict_directory.len());
        for table in &tables.conflict_tables {
            for pair in table.entries.windows(2) {
                prop_assert_ne!(pair[0].conflict_num, pair[1].conflict_num);
            }
        }
        // Every mode 1 entry points at a table in the directory.
        for record in tables.registers.iter().filter(|r| r.conflict_mode == 1) {
            prop_assert!((record.address as usize) < tables.conflict_directory.len());
        }
        assert_sorted_unique(&tables)?;
    }
}
