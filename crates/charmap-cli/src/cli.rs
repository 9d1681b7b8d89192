use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Generate static single-byte codepage tables from UCM mapping files.
#[derive(Debug, Parser)]
#[command(name = "charmapgen", about, version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build every encoding in a manifest and emit Rust source
    Generate {
        /// JSON manifest listing the encodings. Default: built-in EBCDIC-K
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,

        /// Directory relative mapping locators resolve against.
        /// Default: the manifest's directory, or the current directory
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Write the generated source here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Name of the runtime table type
        #[arg(long, default_value = "Charmap")]
        charmap_type: String,

        /// Name of the runtime UTF-8 entry type
        #[arg(long, default_value = "Utf8Enc")]
        enc_type: String,

        /// Name of the static listing every table
        #[arg(long, default_value = "LIST_ALL")]
        list_name: String,

        /// Omit the "generated, do not edit" header
        #[arg(long)]
        no_header: bool,
    },

    /// Build one table from a mapping file and describe it
    Inspect {
        /// Path, file: URL or http(s):// URL of the UCM file
        #[arg(value_name = "LOCATOR")]
        locator: String,

        /// Directory relative paths resolve against
        #[arg(long, value_name = "DIR", default_value = ".")]
        root: PathBuf,

        /// Table name. Default: the locator
        #[arg(long)]
        name: Option<String>,

        /// Replacement byte (decimal or 0x-prefixed hex).
        /// Default: the file's <subchar>, else 0x3f
        #[arg(long, value_parser = parse_byte)]
        replacement: Option<u8>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the encodings a manifest defines
    List {
        /// JSON manifest. Default: built-in EBCDIC-K
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `inspect` and `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parse a byte given as decimal (`63`) or hex (`0x3f`, `0X3F`).
pub fn parse_byte(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|e| format!("invalid byte '{s}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_generate_defaults() {
        let cli = Cli::parse_from(["charmapgen", "generate"]);
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Generate {
                manifest,
                root,
                output,
                charmap_type,
                enc_type,
                list_name,
                no_header,
            } => {
                assert!(manifest.is_none());
                assert!(root.is_none());
                assert!(output.is_none());
                assert_eq!(charmap_type, "Charmap");
                assert_eq!(enc_type, "Utf8Enc");
                assert_eq!(list_name, "LIST_ALL");
                assert!(!no_header);
            }
            _ => panic!("expected Generate subcommand"),
        }
    }

    #[test]
    fn parse_generate_with_manifest_and_output() {
        let cli = Cli::parse_from([
            "charmapgen",
            "generate",
            "--manifest",
            "enc.json",
            "-o",
            "tables.rs",
            "--no-header",
        ]);
        match cli.command {
            Commands::Generate {
                ref manifest,
                ref output,
                no_header,
                ..
            } => {
                assert_eq!(manifest.as_deref(), Some(std::path::Path::new("enc.json")));
                assert_eq!(output.as_deref(), Some(std::path::Path::new("tables.rs")));
                assert!(no_header);
            }
            _ => panic!("expected Generate subcommand"),
        }
    }

    #[test]
    fn parse_inspect_with_hex_replacement() {
        let cli = Cli::parse_from([
            "charmapgen",
            "inspect",
            "file:ibm-037.ucm",
            "--replacement",
            "0x6f",
            "--format",
            "json",
        ]);
        match cli.command {
            Commands::Inspect {
                ref locator,
                replacement,
                format,
                ..
            } => {
                assert_eq!(locator, "file:ibm-037.ucm");
                assert_eq!(replacement, Some(0x6f));
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected Inspect subcommand"),
        }
    }

    #[test]
    fn verbose_is_global_and_counts() {
        let cli = Cli::parse_from(["charmapgen", "list", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_out_of_range_replacement() {
        let result = Cli::try_parse_from(["charmapgen", "inspect", "x.ucm", "--replacement", "256"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_byte_forms() {
        assert_eq!(parse_byte("63"), Ok(63));
        assert_eq!(parse_byte("0x3f"), Ok(0x3f));
        assert_eq!(parse_byte("0X3F"), Ok(0x3f));
        assert!(parse_byte("0x100").is_err());
        assert!(parse_byte("abc").is_err());
    }
}
