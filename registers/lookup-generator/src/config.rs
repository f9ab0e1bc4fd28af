// Licensed under the Apache-2.0 license

//! Configuration for lookup generation and header rendering.
//!
//! [`GeneratorConfig`] controls how conflict tables are named and when the
//! generator warns about names it cannot reliably disambiguate.
//! [`HeaderConfig`] controls the C symbols used when the tables are rendered
//! as a header.

/// Configuration for the classification and resolution passes.
///
/// # Example
///
/// ```
/// use mcu_registers_lookup::config::GeneratorConfig;
///
/// let config = GeneratorConfig::with_defaults();
/// assert_eq!(config.table_name("TEST_F"), "Conflict_TEST_F");
///
/// let config = GeneratorConfig::with_defaults().table_prefix("Alt_");
/// assert_eq!(config.table_name("TEST_F"), "Alt_TEST_F");
/// ```
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Prefix prepended to a short name to form its conflict table name.
    pub table_prefix: String,

    /// Names with more numbers than this are reported as wide names.
    /// Disambiguation is only known to be correct up to two numbers.
    pub max_validated_numbers: usize,
}

impl GeneratorConfig {
    pub fn with_defaults() -> Self {
        Self {
            table_prefix: "Conflict_".to_string(),
            max_validated_numbers: 2,
        }
    }

    pub fn table_prefix(mut self, prefix: &str) -> Self {
        self.table_prefix = prefix.to_string();
        self
    }

    pub fn max_validated_numbers(mut self, max: usize) -> Self {
        self.max_validated_numbers = max;
        self
    }

    /// Name of the conflict table holding registers that shorten to `short_name`.
    pub fn table_name(&self, short_name: &str) -> String {
        format!("{}{}", self.table_prefix, short_name)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Configuration for the rendered C header.
///
/// # Example
///
/// ```
/// use mcu_registers_lookup::config::HeaderConfig;
///
/// let config = HeaderConfig::with_defaults().constants_version("1.0.0");
/// assert_eq!(config.symbol("Regs"), "LJM_EC_Regs");
/// assert_eq!(config.constants_version.as_deref(), Some("1.0.0"));
/// ```
#[derive(Clone, Debug)]
pub struct HeaderConfig {
    /// Prefix for every emitted C symbol.
    pub symbol_prefix: String,
    pub include_guard: String,
    /// Name of the define holding the constants version string.
    pub version_define: String,
    /// Version of the register map the tables were built from.
    pub constants_version: Option<String>,
    /// Headers to `#include`, in order.
    pub includes: Vec<String>,
}

impl HeaderConfig {
    pub fn with_defaults() -> Self {
        Self {
            symbol_prefix: "LJM_EC_".to_string(),
            include_guard: "LJM_EMBEDDED_CONSTANTS_H".to_string(),
            version_define: "LABJACKM_CONSTANTS_VERSION".to_string(),
            constants_version: None,
            includes: vec!["Defines.h".to_string()],
        }
    }

    pub fn symbol_prefix(mut self, prefix: &str) -> Self {
        self.symbol_prefix = prefix.to_string();
        self
    }

    pub fn include_guard(mut self, guard: &str) -> Self {
        self.include_guard = guard.to_string();
        self
    }

    pub fn constants_version(mut self, version: &str) -> Self {
        self.constants_version = Some(version.to_string());
        self
    }

    pub fn add_include(mut self, include: &str) -> Self {
        self.includes.push(include.to_string());
        self
    }

    /// Prefix a symbol name.
    pub fn symbol(&self, name: &str) -> String {
        format!("{}{}", self.symbol_prefix, name)
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}
