pub mod c_header;
pub mod rust_src;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TableEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The firmware's `matrix.h` header
    C,
    /// A Rust constant module for firmware written in Rust
    Rust,
    /// Machine-readable dump for tooling
    Json,
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown output format {0:?} (expected c, rust or json)")]
pub struct UnknownFormat(String);

impl std::str::FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "header" => Ok(Self::C),
            "rust" => Ok(Self::Rust),
            "json" => Ok(Self::Json),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Render the packed table in the requested format.
pub fn emit(format: OutputFormat, table: &[TableEntry]) -> Result<String> {
    Ok(match format {
        OutputFormat::C => c_header::emit(table),
        OutputFormat::Rust => rust_src::emit(table),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(table)?;
            out.push('\n');
            out
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("c".parse::<OutputFormat>().unwrap(), OutputFormat::C);
        assert_eq!("RUST".parse::<OutputFormat>().unwrap(), OutputFormat::Rust);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_json_round_trips() {
        let table = vec![TableEntry {
            index: 0,
            ident: "HALF".to_string(),
            bitmap: [0, 0, 0, 0, 0, 0, 0, 15],
        }];
        let out = emit(OutputFormat::Json, &table).unwrap();
        let parsed: Vec<TableEntry> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0].ident, "HALF");
        assert_eq!(parsed[0].bitmap, table[0].bitmap);
    }
}
