// Licensed under the Apache-2.0 license

//! Data structures shared by the generator phases.
//!
//! Input registers ([`Register`]) flow through classification and
//! resolution as [`PrimaryEntry`] and [`ConflictTable`] values. The
//! nibble-packed data type used by conflicting entries is kept as a
//! [`ConflictNibbles`] pair until the output boundary.

use std::fmt;
use std::str::FromStr;

use crate::error::GeneratorError;

/// Register data types understood by the firmware lookup code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterType {
    Uint16,
    Uint32,
    Int32,
    Float32,
    Uint64,
    String,
    Byte,
}

impl RegisterType {
    /// Firmware encoding of the type.
    pub const fn code(self) -> u8 {
        match self {
            RegisterType::Uint16 => 0,
            RegisterType::Uint32 => 1,
            RegisterType::Int32 => 2,
            RegisterType::Float32 => 3,
            RegisterType::Uint64 => 4,
            RegisterType::String => 98,
            RegisterType::Byte => 99,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RegisterType::Uint16 => "UINT16",
            RegisterType::Uint32 => "UINT32",
            RegisterType::Int32 => "INT32",
            RegisterType::Float32 => "FLOAT32",
            RegisterType::Uint64 => "UINT64",
            RegisterType::String => "STRING",
            RegisterType::Byte => "BYTE",
        }
    }
}

impl fmt::Display for RegisterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive parse of the type names used in register maps.
///
/// The error carries an empty register name; callers that know the register
/// should use [`Register::with_type_name`] instead.
impl FromStr for RegisterType {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UINT16" => Ok(RegisterType::Uint16),
            "UINT32" => Ok(RegisterType::Uint32),
            "INT32" => Ok(RegisterType::Int32),
            "FLOAT32" => Ok(RegisterType::Float32),
            "UINT64" => Ok(RegisterType::Uint64),
            "STRING" => Ok(RegisterType::String),
            "BYTE" => Ok(RegisterType::Byte),
            _ => Err(GeneratorError::UnknownType {
                name: String::new(),
                type_name: s.to_string(),
            }),
        }
    }
}

/// A concrete register as handed to the generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Register {
    pub name: String,
    pub address: u32,
    pub data_type: RegisterType,
}

impl Register {
    pub fn new(name: &str, address: u32, data_type: RegisterType) -> Self {
        Self {
            name: name.to_string(),
            address,
            data_type,
        }
    }

    /// Build a register from a textual type name, reporting unknown types
    /// against the register name.
    pub fn with_type_name(name: &str, address: u32, type_name: &str) -> crate::Result<Self> {
        let data_type = type_name.parse::<RegisterType>().map_err(|err| match err {
            GeneratorError::UnknownType { type_name, .. } => GeneratorError::UnknownType {
                name: name.to_string(),
                type_name,
            },
            other => other,
        })?;
        Ok(Self::new(name, address, data_type))
    }
}

/// Value of the upper nibble when the register name has no index.
pub const NO_INDEX_NIBBLE: u8 = 0xF;

/// Digit positions packed into the data type of a conflicting primary entry.
///
/// `index_position` is where the register index sits among the numbers of
/// the expanded register name; `conflict_position` is where the number that
/// selects an entry of the conflict table sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConflictNibbles {
    pub index_position: Option<u8>,
    pub conflict_position: u8,
}

impl ConflictNibbles {
    /// Pack into `0xHL`: high nibble index position (`0xF` if none), low
    /// nibble conflict position.
    pub const fn packed(self) -> u8 {
        let high = match self.index_position {
            Some(position) => position,
            None => NO_INDEX_NIBBLE,
        };
        (high << 4) | (self.conflict_position & 0x0F)
    }
}

/// What a primary directory entry points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryData {
    /// The short name maps to exactly one register.
    Direct { address: u32, data_type: RegisterType },
    /// The short name maps to a conflict table.
    Conflict { table: u32, nibbles: ConflictNibbles },
    /// A conflict table turned out to hold a single unindexed register and was
    /// folded back into the primary directory.
    Folded { address: u32, data_type: RegisterType },
}

impl PrimaryData {
    /// Conflict mode of entries that point at a conflict table, and of every
    /// conflict table row.
    pub const CONFLICT_MODE: u8 = 1;

    /// Conflict mode as seen by the firmware.
    pub const fn conflict_mode(&self) -> u8 {
        match self {
            PrimaryData::Direct { .. } => 0,
            PrimaryData::Conflict { .. } => Self::CONFLICT_MODE,
            PrimaryData::Folded { .. } => 2,
        }
    }

    /// The address column: the register address, or the conflict directory
    /// position for mode 1.
    pub const fn address(&self) -> u32 {
        match *self {
            PrimaryData::Direct { address, .. } | PrimaryData::Folded { address, .. } => address,
            PrimaryData::Conflict { table, .. } => table,
        }
    }

    /// The data type column.
    pub const fn data_type(&self) -> u8 {
        match *self {
            PrimaryData::Direct { data_type, .. } | PrimaryData::Folded { data_type, .. } => {
                data_type.code()
            }
            PrimaryData::Conflict { nibbles, .. } => nibbles.packed(),
        }
    }
}

/// Entry of the primary directory after resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimaryEntry {
    pub crc: u32,
    pub short_name: String,
    pub data: PrimaryData,
}

/// One register inside a conflict table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConflictEntry {
    /// Number that selects this entry at lookup time.
    pub conflict_num: u32,
    pub address: u32,
    pub data_type: RegisterType,
    /// All numbers pulled out of the register name, in order.
    pub numbers: Vec<u32>,
}

/// All registers sharing one short name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConflictTable {
    pub name: String,
    pub short_name: String,
    pub entries: Vec<ConflictEntry>,
}
