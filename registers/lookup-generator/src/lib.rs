// Licensed under the Apache-2.0 license

//! Embedded register lookup table generator.
//!
//! This crate turns a list of registers (name, address, type) into tables
//! that let firmware resolve a register name to its address and type without
//! storing the names on the device. Names are reduced to short names with all
//! digits removed and hashed with CRC-32/POSIX; registers that collapse onto
//! the same short name are moved into conflict tables and told apart by one
//! of the numbers taken out of their names.
//!
//! ## Usage
//!
//! ```
//! use mcu_registers_lookup::{generate_lookup_tables, Register, RegisterType};
//!
//! let tables = generate_lookup_tables(&[
//!     Register::new("TEST_A", 0, RegisterType::Uint32),
//!     Register::new("TEST_F32", 1, RegisterType::Uint16),
//!     Register::new("TEST_F64", 2, RegisterType::Uint16),
//! ])
//! .unwrap();
//! assert_eq!(tables.num_registers(), 2);
//! assert_eq!(tables.conflict_directory.len(), 1);
//! ```
//!
//! ## Module Organization
//!
//! - [`short_name`]: Short name and number extraction
//! - [`hash`]: CRC-32/POSIX of short names
//! - [`types`]: Registers and directory entries
//! - [`config`]: Generator and header configuration
//! - [`output`]: Generated tables ([`LookupTables`])
//! - [`header`]: C header rendering
//! - [`input`]: JSON register map loading

pub mod config;
pub mod error;
pub mod hash;
pub mod header;
pub mod input;
pub mod output;
pub mod short_name;
pub mod types;

mod codegen;

// Re-export main public API
pub use codegen::{
    generate_header_from_file, generate_lookup_tables, generate_lookup_tables_with_config,
};
pub use config::{GeneratorConfig, HeaderConfig};
pub use error::{GeneratorError, Result};
pub use header::render_c_header;
pub use input::{load_register_map, parse_register_map, RegisterMap};
pub use output::{
    ConflictDirectoryEntry, ConflictRecord, ConflictTableRecord, Diagnostics, LookupTables,
    PrimaryRecord,
};
pub use types::{Register, RegisterType};
