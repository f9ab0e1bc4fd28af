// Licensed under the Apache-2.0 license

//! Command to generate the embedded register lookup header.

use anyhow::{Context, Result};
use log::{info, warn};
use mcu_registers_lookup::{
    generate_lookup_tables_with_config, load_register_map, render_c_header, GeneratorConfig,
    HeaderConfig,
};
use std::path::Path;

/// Generate the lookup header from a JSON register map.
pub(crate) fn generate(
    input: &Path,
    output: Option<&Path>,
    json_output: Option<&Path>,
    constants_version: Option<&str>,
    symbol_prefix: Option<&str>,
    table_prefix: Option<&str>,
) -> Result<()> {
    info!("Generating lookup tables from: {}", input.display());

    let map = load_register_map(input)
        .with_context(|| format!("failed to load register map {}", input.display()))?;

    let mut config = GeneratorConfig::with_defaults();
    if let Some(prefix) = table_prefix {
        config = config.table_prefix(prefix);
    }
    let tables = generate_lookup_tables_with_config(&map.registers, &config)?;

    info!(
        "{} registers in, {} primary entries, {} conflict tables",
        map.registers.len(),
        tables.num_registers(),
        tables.conflict_tables.len()
    );
    if tables.diagnostics.duplicates > 0 {
        warn!(
            "{} duplicate registers dropped",
            tables.diagnostics.duplicates
        );
    }
    if tables.diagnostics.wide_names > 0 {
        warn!(
            "{} registers have more than {} numbers in their name",
            tables.diagnostics.wide_names, config.max_validated_numbers
        );
    }

    let mut header_config = HeaderConfig::with_defaults();
    if let Some(prefix) = symbol_prefix {
        header_config = header_config.symbol_prefix(prefix);
    }
    match constants_version.map(str::to_string).or(map.version) {
        Some(version) => header_config = header_config.constants_version(&version),
        None => warn!("no constants version given, header will not define one"),
    }

    let header = render_c_header(&tables, &header_config);
    if let Some(output_path) = output {
        std::fs::write(output_path, &header)?;
        println!("Output written to: {}", output_path.display());
    } else {
        println!("{}", header);
    }

    if let Some(json_path) = json_output {
        std::fs::write(json_path, serde_json::to_string_pretty(&tables)?)?;
        println!("Tables written to: {}", json_path.display());
    }

    Ok(())
}
