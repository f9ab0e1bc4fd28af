// Licensed under the Apache-2.0 license

//! Reduction of full register names to short names.
//!
//! The short name drops every digit and the index markup characters
//! (`(`, `:`, `)` and `#`), so that e.g. `AIN#(0:13)_RANGE` and `AIN3_RANGE`
//! both become `AIN_RANGE`. Digits outside the markup are kept as numbers so
//! registers that collapse to the same short name can be told apart later.

use crate::error::{GeneratorError, Result};

const MARKERS: &[char] = &['(', ':', ')', '#'];

/// Result of shortening a register name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortName {
    pub short_name: String,
    /// Numbers found outside the index markup, in order of appearance.
    pub numbers: Vec<u32>,
    /// Position among `numbers` that the register index occupies once the
    /// markup is expanded, if the name had markup.
    pub index_location: Option<usize>,
}

/// Shorten a register name.
///
/// # Examples
/// ```
/// use mcu_registers_lookup::short_name::shorten;
/// let short = shorten("TEST1(0:3)_FB32").unwrap();
/// assert_eq!(short.short_name, "TEST_FB");
/// assert_eq!(short.numbers, vec![1, 32]);
/// assert_eq!(short.index_location, Some(1));
/// ```
pub fn shorten(name: &str) -> Result<ShortName> {
    let mut result = ShortName::default();
    let mut number = String::new();
    let mut between_markers = false;

    for c in name.chars() {
        if MARKERS.contains(&c) {
            let pending = usize::from(!number.is_empty());
            result.index_location = Some(result.numbers.len() + pending);
            between_markers = true;
        } else if c.is_ascii_digit() {
            // Digits inside the markup describe the index range, not the name.
            if !between_markers {
                number.push(c);
            }
        } else {
            flush_number(name, &mut number, &mut result.numbers)?;
            between_markers = false;
            result.short_name.push(c);
        }
    }
    flush_number(name, &mut number, &mut result.numbers)?;

    if result.short_name.is_empty() {
        return Err(GeneratorError::name_shape(name, "no characters left after shortening"));
    }
    Ok(result)
}

fn flush_number(name: &str, number: &mut String, numbers: &mut Vec<u32>) -> Result<()> {
    if number.is_empty() {
        return Ok(());
    }
    let value = number
        .parse::<u32>()
        .map_err(|_| GeneratorError::name_shape(name, format!("number {number} is too large")))?;
    numbers.push(value);
    number.clear();
    Ok(())
}
