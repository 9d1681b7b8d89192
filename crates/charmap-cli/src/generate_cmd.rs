use std::path::Path;

use charmap::{DefaultSource, EmitOptions, RustEmitter, build_all};

use crate::shared::{load_manifest, resolve_root};

pub struct GenerateArgs<'a> {
    pub manifest: Option<&'a Path>,
    pub root: Option<&'a Path>,
    pub output: Option<&'a Path>,
    pub emit: EmitOptions,
}

pub fn run(args: GenerateArgs<'_>) -> Result<(), i32> {
    let manifest = load_manifest(args.manifest)?;
    let root = resolve_root(args.root, args.manifest);
    tracing::info!(
        encodings = manifest.encodings.len(),
        root = %root.display(),
        "generating tables"
    );

    let built = build_all(&manifest, &DefaultSource::new(root)).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    let source = RustEmitter::new(args.emit).to_rust(&built);

    match args.output {
        Some(path) => {
            std::fs::write(path, source).map_err(|e| {
                eprintln!("Error: failed to write {}: {e}", path.display());
                1
            })?;
            tracing::info!(path = %path.display(), "wrote generated tables");
        }
        None => print!("{source}"),
    }
    Ok(())
}
