use std::path::Path;

use charmap::{DefaultSource, EncodingDef, build_encoding};

use crate::cli::OutputFormat;
use crate::shared::byte_list;

pub fn run(
    locator: &str,
    root: &Path,
    name: Option<&str>,
    replacement: Option<u8>,
    format: OutputFormat,
) -> Result<(), i32> {
    let def = EncodingDef {
        name: name.unwrap_or(locator).to_string(),
        comment: String::new(),
        var_name: "INSPECT".to_string(),
        aliases: Vec::new(),
        replacement,
        mapping: locator.to_string(),
    };

    let built = build_encoding(&def, &DefaultSource::new(root)).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    let summary = built.charmap.summary();

    match format {
        OutputFormat::Text => {
            println!("name:            {}", summary.name);
            println!(
                "code set:        {}",
                built.header.code_set_name.as_deref().unwrap_or("-")
            );
            println!("ascii superset:  {}", summary.ascii_superset);
            println!("low:             0x{:02x}", summary.low);
            println!("replacement:     0x{:02x}", summary.replacement);
            println!("mapped bytes:    {}", summary.mapped_bytes);
            println!("distinct chars:  {}", summary.distinct_chars);
            println!("unmapped:        {}", byte_list(&summary.unmapped_bytes));
        }
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "summary": summary,
                "code_set_name": built.header.code_set_name,
                "subchar": built.header.subchar,
            });
            println!("{obj}");
        }
    }
    Ok(())
}
