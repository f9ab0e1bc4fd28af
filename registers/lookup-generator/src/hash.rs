// Licensed under the Apache-2.0 license

//! CRC-32/POSIX hashing of short names.
//!
//! This is the non-reflected CRC-32 variant (polynomial `0x04C11DB7`, initial
//! value 0, final XOR `0xFFFFFFFF`) that the firmware recomputes at lookup
//! time.

use ::crc::{Crc, CRC_32_CKSUM};

const CRC32_POSIX: Crc<u32> = Crc::<u32>::new(&CRC_32_CKSUM);

/// Hash a short name.
///
/// ```
/// use mcu_registers_lookup::hash::short_name_crc;
/// assert_eq!(short_name_crc("DIO"), 0x9B68_4F2B);
/// ```
pub fn short_name_crc(short_name: &str) -> u32 {
    CRC32_POSIX.checksum(short_name.as_bytes())
}

/// Render a CRC the way it appears in the generated tables: `0x` followed by
/// eight uppercase hex digits.
pub fn crc_hex(crc: u32) -> String {
    format!("0x{crc:08X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(short_name_crc("ONEWIRE_ROM_BRANCHS_FOUND_H"), 0x0073_4919);
        assert_eq!(short_name_crc("STREAM_OUT_BUFFER_F"), 0x4477_BBF5);
        assert_eq!(short_name_crc("DIO"), 0x9B68_4F2B);
        assert_eq!(short_name_crc("TEST_A"), 0x6CCC_0749);
    }

    #[test]
    fn test_crc_hex_is_zero_padded() {
        assert_eq!(crc_hex(0x0073_4919), "0x00734919");
        assert_eq!(crc_hex(0x9B68_4F2B), "0x9B684F2B");
        assert_eq!(crc_hex(0), "0x00000000");
    }
}
