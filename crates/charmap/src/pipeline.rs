//! Fetch -> parse -> build for one encoding or a whole manifest.

use charmap_core::{Charmap, build_charmap};
use charmap_parse::{MappingSource, ParseError, UcmHeader, load_ucm};

use crate::encoding::{DEFAULT_REPLACEMENT, EncodingDef, Manifest};
use crate::error::Error;

/// A successfully built encoding, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltEncoding {
    /// The definition it was built from.
    pub def: EncodingDef,
    /// The constructed table.
    pub charmap: Charmap,
    /// Header values read from the UCM file.
    pub header: UcmHeader,
}

/// Build one encoding.
///
/// The replacement byte is taken from the definition, else from the UCM
/// `<subchar>` header, else [`DEFAULT_REPLACEMENT`].
///
/// # Errors
///
/// Returns [`Error::Encoding`] naming the definition if fetching, parsing,
/// or table construction fails.
pub fn build_encoding<S: MappingSource + ?Sized>(
    def: &EncodingDef,
    source: &S,
) -> Result<BuiltEncoding, Error> {
    let wrap = |source: ParseError| Error::Encoding {
        name: def.name.clone(),
        source,
    };

    let ucm = load_ucm(source, &def.mapping).map_err(wrap)?;
    let replacement = def
        .replacement
        .or(ucm.header.subchar)
        .unwrap_or(DEFAULT_REPLACEMENT);
    let charmap =
        build_charmap(&ucm.raw, &def.name, replacement).map_err(|e| wrap(e.into()))?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        name = def.name.as_str(),
        mapped_bytes = ucm.mapped_bytes,
        distinct_chars = charmap.distinct_chars(),
        ascii_superset = charmap.ascii_superset(),
        replacement,
        "built charmap"
    );

    Ok(BuiltEncoding {
        def: def.clone(),
        charmap,
        header: ucm.header,
    })
}

/// Build every encoding in `manifest`, in manifest order.
///
/// With the `parallel` feature the encodings are built concurrently; the
/// result order is unchanged.
///
/// # Errors
///
/// Returns the first failure; no partial result is produced.
pub fn build_all<S: MappingSource + Sync + ?Sized>(
    manifest: &Manifest,
    source: &S,
) -> Result<Vec<BuiltEncoding>, Error> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        manifest
            .encodings
            .par_iter()
            .map(|def| build_encoding(def, source))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        manifest
            .encodings
            .iter()
            .map(|def| build_encoding(def, source))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charmap_parse::MemorySource;

    fn ascii_ucm(header: &str, extra: &str) -> String {
        let mut text = String::from(header);
        text.push_str("CHARMAP\n");
        for b in 0u32..0x80 {
            text.push_str(&format!("<U{b:04X}> \\x{b:02X} |0\n"));
        }
        text.push_str(extra);
        text.push_str("END CHARMAP\n");
        text
    }

    fn def(name: &str, mapping: &str, replacement: Option<u8>) -> EncodingDef {
        EncodingDef {
            name: name.to_string(),
            comment: String::new(),
            var_name: name.to_uppercase().replace('-', "_"),
            aliases: Vec::new(),
            replacement,
            mapping: mapping.to_string(),
        }
    }

    #[test]
    fn replacement_prefers_definition() {
        let source = MemorySource::new().with("m", ascii_ucm("<subchar> \\x1A\n", ""));
        let built = build_encoding(&def("x", "m", Some(0x40)), &source).unwrap();
        assert_eq!(built.charmap.replacement(), 0x40);
    }

    #[test]
    fn replacement_falls_back_to_subchar() {
        let source = MemorySource::new().with("m", ascii_ucm("<subchar> \\x1A\n", ""));
        let built = build_encoding(&def("x", "m", None), &source).unwrap();
        assert_eq!(built.charmap.replacement(), 0x1a);
        assert_eq!(built.header.subchar, Some(0x1a));
    }

    #[test]
    fn replacement_defaults_to_question_mark() {
        let source = MemorySource::new().with("m", ascii_ucm("", ""));
        let built = build_encoding(&def("x", "m", None), &source).unwrap();
        assert_eq!(built.charmap.replacement(), DEFAULT_REPLACEMENT);
    }

    #[test]
    fn charmap_takes_definition_name() {
        let source = MemorySource::new().with("m", ascii_ucm("", "<U20AC> \\x80 |0\n"));
        let built = build_encoding(&def("windows-1252", "m", None), &source).unwrap();
        assert_eq!(built.charmap.name(), "windows-1252");
        assert_eq!(built.charmap.encode_char('€'), 0x80);
    }

    #[test]
    fn fetch_failure_names_encoding() {
        let err = build_encoding(&def("missing", "nowhere", None), &MemorySource::new()).unwrap_err();
        match err {
            Error::Encoding { name, source } => {
                assert_eq!(name, "missing");
                assert!(matches!(source, ParseError::Fetch { .. }));
            }
            other => panic!("expected Encoding error, got {other:?}"),
        }
    }

    #[test]
    fn too_long_character_aborts() {
        let source = MemorySource::new().with("m", ascii_ucm("", "<U1F600> \\x80 |0\n"));
        let err = build_encoding(&def("emoji", "m", None), &source).unwrap_err();
        assert!(matches!(
            err,
            Error::Encoding {
                source: ParseError::Core(_),
                ..
            }
        ));
    }

    #[test]
    fn build_all_keeps_manifest_order() {
        let source = MemorySource::new()
            .with("a", ascii_ucm("", ""))
            .with("b", ascii_ucm("", "<U00C1> \\xC1 |0\n"))
            .with("c", ascii_ucm("", "<U20AC> \\x80 |0\n"));
        let manifest = Manifest {
            encodings: vec![def("c", "c", None), def("a", "a", None), def("b", "b", None)],
        };
        let built = build_all(&manifest, &source).unwrap();
        let names: Vec<_> = built.iter().map(|b| b.charmap.name()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn build_all_fails_on_any_bad_encoding() {
        let source = MemorySource::new()
            .with("good", ascii_ucm("", ""))
            .with("bad", "<U0041> \\x41 |0\n");
        let manifest = Manifest {
            encodings: vec![def("good", "good", None), def("bad", "bad", None)],
        };
        let err = build_all(&manifest, &source).unwrap_err();
        assert!(err.to_string().starts_with("bad: bad: only 1 bytes mapped"));
    }
}
