use std::path::Path;

use crate::cli::OutputFormat;
use crate::shared::load_manifest;

pub fn run(manifest: Option<&Path>, format: OutputFormat) -> Result<(), i32> {
    let manifest = load_manifest(manifest)?;

    match format {
        OutputFormat::Text => {
            for def in &manifest.encodings {
                let replacement = def
                    .replacement
                    .map(|b| format!("0x{b:02x}"))
                    .unwrap_or_else(|| "auto".to_string());
                println!(
                    "{}\t{}\t{}\treplacement={replacement}",
                    def.var_names().collect::<Vec<_>>().join(","),
                    def.name,
                    def.mapping
                );
            }
        }
        OutputFormat::Json => println!("{}", manifest.to_json()),
    }
    Ok(())
}
