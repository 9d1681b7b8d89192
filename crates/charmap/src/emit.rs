//! Rust source emission for built charmaps.
//!
//! Generates one `static` per encoding plus a `static` slice listing every
//! table (aliases included). The generated code assumes the consuming crate
//! defines the runtime types:
//!
//! ```text
//! pub struct Utf8Enc { pub len: u8, pub data: [u8; 3] }
//! pub struct Charmap {
//!     pub name: &'static str,
//!     pub ascii_superset: bool,
//!     pub low: u8,
//!     pub replacement: u8,
//!     pub decode: [Utf8Enc; 256],
//!     pub encode: [u32; 256],
//! }
//! ```

use crate::pipeline::BuiltEncoding;

/// Estimated in-memory size of one table: two 256-entry arrays of 4 bytes
/// plus the scalar fields, aligned to three `u64`s.
pub const TABLE_SIZE_ESTIMATE: usize = 2 * 4 * 256 + 3 * 8;

/// Options for Rust source generation.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Name of the runtime table type. Default: `"Charmap"`.
    pub charmap_type: String,
    /// Name of the runtime UTF-8 entry type. Default: `"Utf8Enc"`.
    pub enc_type: String,
    /// Name of the static listing every table. Default: `"LIST_ALL"`.
    pub list_name: String,
    /// Emit the "generated, do not edit" header. Default: `true`.
    pub header: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            charmap_type: "Charmap".to_string(),
            enc_type: "Utf8Enc".to_string(),
            list_name: "LIST_ALL".to_string(),
            header: true,
        }
    }
}

/// Renders built encodings as Rust source.
pub struct RustEmitter {
    options: EmitOptions,
}

impl RustEmitter {
    /// Create a new emitter.
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    /// Generate a complete Rust source file for `encodings`.
    pub fn to_rust(&self, encodings: &[BuiltEncoding]) -> String {
        let mut out = String::new();

        if self.options.header {
            out.push_str("// Code generated by charmapgen. DO NOT EDIT.\n\n");
        }

        for built in encodings {
            self.push_table(&mut out, built);
        }
        self.push_list(&mut out, encodings);

        let size = TABLE_SIZE_ESTIMATE * encodings.len();
        out.push_str(&format!(
            "// Total table size {size} bytes ({}KiB)\n",
            size / 1024
        ));
        out
    }

    fn push_table(&self, out: &mut String, built: &BuiltEncoding) {
        let def = &built.def;
        let cm = &built.charmap;
        let ty = &self.options.charmap_type;
        let enc = &self.options.enc_type;

        out.push_str(&format!("/// {} is the {} encoding.\n", def.var_name, def.name));
        if !def.comment.is_empty() {
            out.push_str("///\n");
            for line in def.comment.lines() {
                out.push_str(&format!("/// {line}\n"));
            }
        }
        out.push_str(&format!("pub static {}: {ty} = {ty} {{\n", def.var_name));
        out.push_str(&format!("    name: {:?},\n", cm.name()));
        out.push_str(&format!("    ascii_superset: {},\n", cm.ascii_superset()));
        out.push_str(&format!("    low: 0x{:02x},\n", cm.low()));
        out.push_str(&format!("    replacement: 0x{:02x},\n", cm.replacement()));

        out.push_str("    decode: [\n");
        for pair in cm.decode_table().chunks(2) {
            out.push_str("        ");
            let entries: Vec<String> = pair
                .iter()
                .map(|e| {
                    format!(
                        "{enc} {{ len: {}, data: [0x{:02x}, 0x{:02x}, 0x{:02x}] }},",
                        e.len, e.data[0], e.data[1], e.data[2]
                    )
                })
                .collect();
            out.push_str(&entries.join(" "));
            out.push('\n');
        }
        out.push_str("    ],\n");

        out.push_str("    encode: [\n");
        for row in cm.encode_table().keys().chunks(8) {
            out.push_str("        ");
            let keys: Vec<String> = row.iter().map(|k| format!("0x{k:08x},")).collect();
            out.push_str(&keys.join(" "));
            out.push('\n');
        }
        out.push_str("    ],\n};\n\n");

        for alias in &def.aliases {
            out.push_str(&format!(
                "/// {alias} is an alias of [`{}`].\npub static {alias}: &{ty} = &{};\n\n",
                def.var_name, def.var_name
            ));
        }
    }

    fn push_list(&self, out: &mut String, encodings: &[BuiltEncoding]) {
        let ty = &self.options.charmap_type;
        out.push_str("/// Every generated table, aliases included.\n");
        out.push_str(&format!(
            "pub static {}: &[&{ty}] = &[\n",
            self.options.list_name
        ));
        for built in encodings {
            out.push_str(&format!("    &{},\n", built.def.var_name));
            for alias in &built.def.aliases {
                out.push_str(&format!("    {alias},\n"));
            }
        }
        out.push_str("];\n\n");
    }
}
