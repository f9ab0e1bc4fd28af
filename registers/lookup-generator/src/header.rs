// Licensed under the Apache-2.0 license

//! Rendering of [`LookupTables`] as a C header.
//!
//! For the default [`HeaderConfig`] the generated header looks like:
//!
//! ```text
//! const LJM_EC_Reg LJM_EC_Regs[] = {
//!     {0x6CCC0749, 0, 1,  0},     // TEST_A
//!     {0x728B574C, 0, 0xF0,   1}      // TEST_F
//! };
//!
//! const LJM_EC_Reg LJM_EC_Conflict_TEST_F[] = {
//!     {32, 1, 0, 1},
//!     {64, 2, 0, 1}
//! };
//! const LJM_EC_Conflict_Directory LJM_EC_ConflictDirectory[] = {
//!     {LJM_EC_Conflict_TEST_F, 2}
//! };
//! ```

use std::fmt::Write;

use crate::config::HeaderConfig;
use crate::output::{LookupTables, PrimaryRecord};
use crate::types::PrimaryData;

/// Render the complete header.
pub fn render_c_header(tables: &LookupTables, config: &HeaderConfig) -> String {
    let mut output = String::new();
    render_prologue(&mut output, tables, config);
    render_registers(&mut output, tables, config);
    render_conflict_tables(&mut output, tables, config);
    render_conflict_directory(&mut output, tables, config);
    writeln!(output, "\n").unwrap();
    render_epilogue(&mut output, config);
    output
}

fn render_prologue(output: &mut String, tables: &LookupTables, config: &HeaderConfig) {
    let guard = &config.include_guard;
    writeln!(output, "// LabJack Embedded Constants").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "#ifndef {guard}").unwrap();
    writeln!(output, "#define {guard}").unwrap();
    writeln!(output).unwrap();
    if let Some(version) = &config.constants_version {
        writeln!(output, "#define {} \"{version}\"", config.version_define).unwrap();
        writeln!(output).unwrap();
    }
    writeln!(output, "#ifdef __cplusplus").unwrap();
    writeln!(output, "extern \"C\" {{").unwrap();
    writeln!(output, "#endif").unwrap();
    writeln!(output).unwrap();
    for include in &config.includes {
        writeln!(output, "#include \"{include}\"").unwrap();
    }
    if !config.includes.is_empty() {
        writeln!(output).unwrap();
    }
    writeln!(output, "#define {}  1", config.symbol("version")).unwrap();
    writeln!(
        output,
        "#define {}  {}",
        config.symbol("NumRegs"),
        tables.num_registers()
    )
    .unwrap();
    writeln!(output).unwrap();
}

fn render_epilogue(output: &mut String, config: &HeaderConfig) {
    writeln!(output, "#ifdef __cplusplus").unwrap();
    writeln!(output, "}}").unwrap();
    writeln!(output, "#endif").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "#endif // #define {}", config.include_guard).unwrap();
}

/// Mode 1 data types are two nibbles, so they are rendered in hex.
fn data_type_literal(record: &PrimaryRecord) -> String {
    if record.conflict_mode == PrimaryData::CONFLICT_MODE {
        format!("0x{:02X}", record.data_type)
    } else {
        record.data_type.to_string()
    }
}

fn separator(i: usize, len: usize) -> &'static str {
    if i + 1 < len {
        ","
    } else {
        ""
    }
}

fn render_registers(output: &mut String, tables: &LookupTables, config: &HeaderConfig) {
    writeln!(
        output,
        "const {} {}[] = {{",
        config.symbol("Reg"),
        config.symbol("Regs")
    )
    .unwrap();
    let len = tables.registers.len();
    for (i, record) in tables.registers.iter().enumerate() {
        writeln!(
            output,
            "\t{{{}, {}, {},\t{}}}{}\t\t// {}",
            record.crc_hex(),
            record.address,
            data_type_literal(record),
            record.conflict_mode,
            separator(i, len),
            record.short_name
        )
        .unwrap();
    }
    writeln!(output, "}};\n").unwrap();
}

fn render_conflict_tables(output: &mut String, tables: &LookupTables, config: &HeaderConfig) {
    for table in &tables.conflict_tables {
        writeln!(
            output,
            "const {} {}[] = {{",
            config.symbol("Reg"),
            config.symbol(&table.name)
        )
        .unwrap();
        let len = table.entries.len();
        for (i, entry) in table.entries.iter().enumerate() {
            writeln!(
                output,
                "\t{{{}, {}, {}, {}}}{}",
                entry.conflict_num,
                entry.address,
                entry.data_type,
                entry.conflict_mode,
                separator(i, len)
            )
            .unwrap();
        }
        writeln!(output, "}};").unwrap();
    }
}

fn render_conflict_directory(output: &mut String, tables: &LookupTables, config: &HeaderConfig) {
    writeln!(
        output,
        "const {} {}[] = {{",
        config.symbol("Conflict_Directory"),
        config.symbol("ConflictDirectory")
    )
    .unwrap();
    let len = tables.conflict_directory.len();
    for (i, entry) in tables.conflict_directory.iter().enumerate() {
        writeln!(
            output,
            "\t{{{}, {}}}{}",
            config.symbol(&entry.name),
            entry.entry_count,
            separator(i, len)
        )
        .unwrap();
    }
    writeln!(output, "}};").unwrap();
}
