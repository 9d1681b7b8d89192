use std::path::{Path, PathBuf};

use charmap::Manifest;

/// Load a manifest with user-friendly error messages, or the built-in one.
///
/// Returns `Err(1)` with a message printed to stderr if the file is missing
/// or invalid.
pub fn load_manifest(path: Option<&Path>) -> Result<Manifest, i32> {
    let Some(path) = path else {
        return Ok(Manifest::builtin());
    };
    if !path.exists() {
        eprintln!("Error: manifest not found: {}", path.display());
        return Err(1);
    }
    Manifest::load(path).map_err(|e| {
        eprintln!("Error: {}: {e}", path.display());
        1
    })
}

/// Directory relative locators resolve against.
///
/// An explicit `root` wins; otherwise the manifest's directory; otherwise `.`.
pub fn resolve_root(root: Option<&Path>, manifest: Option<&Path>) -> PathBuf {
    if let Some(root) = root {
        return root.to_path_buf();
    }
    manifest
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Format a byte list as `0x81 0x8d ...`, or `(none)`.
pub fn byte_list(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "(none)".to_string();
    }
    bytes
        .iter()
        .map(|b| format!("0x{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_manifest_none_is_builtin() {
        let manifest = load_manifest(None).unwrap();
        assert_eq!(manifest, Manifest::builtin());
    }

    #[test]
    fn load_manifest_file_not_found() {
        let result = load_manifest(Some(Path::new("/nonexistent/encodings.json")));
        assert_eq!(result.unwrap_err(), 1);
    }

    #[test]
    fn resolve_root_explicit_wins() {
        let root = resolve_root(Some(Path::new("/data")), Some(Path::new("/etc/m.json")));
        assert_eq!(root, PathBuf::from("/data"));
    }

    #[test]
    fn resolve_root_from_manifest_dir() {
        let root = resolve_root(None, Some(Path::new("/etc/charmap/m.json")));
        assert_eq!(root, PathBuf::from("/etc/charmap"));
    }

    #[test]
    fn resolve_root_bare_manifest_name_is_cwd() {
        assert_eq!(resolve_root(None, Some(Path::new("m.json"))), PathBuf::from("."));
        assert_eq!(resolve_root(None, None), PathBuf::from("."));
    }

    #[test]
    fn byte_list_formats() {
        assert_eq!(byte_list(&[]), "(none)");
        assert_eq!(byte_list(&[0x81, 0x8d]), "0x81 0x8d");
    }
}
