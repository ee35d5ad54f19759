// Licensed under the Apache-2.0 license

//! TOML register-map loader.
//!
//! Parses a register-map description into ordered raw register and field
//! records. Everything is kept as the text the map author wrote; the
//! `regblock-generator` crate canonicalizes names, applies defaulting rules,
//! and validates the result.
//!
//! ## Map format
//!
//! ```toml
//! [[register]]
//! name = "Bus Characteristics Register"
//! abbrev = "BCR"
//! offset = "0x0000"
//!
//! [[register.field]]
//! bits = "[7:6]"
//! name = "DEVICE_ROLE"
//! default = "2"
//! access = "RW"
//! description = "Device Role"
//! ```
//!
//! Field rows with an empty name or named `reserved` are passed through
//! unchanged; the model builder skips them.

use serde::Deserialize;
use std::path::Path;

/// Errors from reading or decoding a register map.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("failed to read register map {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("register map is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("register map contains no registers")]
    EmptyMap,
}

/// One field row, exactly as written in the map.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawField {
    /// Bit-range token, e.g. `"[7:6]"`, `"7:6"`, or `"5"`.
    pub bits: String,
    /// Field name; empty or `reserved` rows never become fields.
    #[serde(default)]
    pub name: String,
    /// Default-value literal; empty or unparsable text reads as zero.
    #[serde(default)]
    pub default: String,
    /// Access kind text (`RW`, `RO`, `WO`); missing means RW.
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// One register entry: the header row plus its ordered field rows.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawRegister {
    /// Full name, e.g. `"Bus Characteristics Register"`.
    pub name: String,
    /// Abbreviation used as the canonical register name, e.g. `"BCR"`.
    pub abbrev: String,
    /// Offset literal, hexadecimal (`"0x0000"`) or decimal text.
    pub offset: String,
    /// Field rows in declaration order.
    #[serde(default, rename = "field")]
    pub fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegisterMap {
    #[serde(default, rename = "register")]
    registers: Vec<RawRegister>,
}

/// Decode a register map from TOML text.
///
/// Register and field order follows the document order of the input.
pub fn load_str(input: &str) -> Result<Vec<RawRegister>, LoaderError> {
    let map: RegisterMap = toml::from_str(input)?;
    if map.registers.is_empty() {
        return Err(LoaderError::EmptyMap);
    }
    Ok(map.registers)
}

/// Read and decode a register map file.
pub fn load_file(path: &Path) -> Result<Vec<RawRegister>, LoaderError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[register]]
name = "Bus Characteristics Register"
abbrev = "BCR"
offset = "0x0000"

[[register.field]]
bits = "[7:6]"
name = "DEVICE_ROLE"
default = "2"
access = "RW"
description = "Device Role"

[[register.field]]
bits = "[5]"
name = "ADVANCED_CAPABILITIES"
default = "1"
description = "Advanced Capabilities support"

[[register.field]]
bits = "[4:0]"
name = "reserved"

[[register]]
name = "Device Control Register"
abbrev = "DCR"
offset = "0x0004"

[[register.field]]
bits = "3:0"
name = "MODE"
"#;

    #[test]
    fn test_sample_map() {
        let regs = load_str(SAMPLE).unwrap();
        assert_eq!(regs.len(), 2);
        assert_eq!(regs[0].abbrev, "BCR");
        assert_eq!(regs[0].offset, "0x0000");
        assert_eq!(regs[0].fields.len(), 3);
        assert_eq!(regs[0].fields[0].name, "DEVICE_ROLE");
        assert_eq!(regs[0].fields[0].access.as_deref(), Some("RW"));
        // Missing access and default come through as their raw absences.
        assert_eq!(regs[0].fields[1].access, None);
        assert_eq!(regs[0].fields[2].default, "");
        // Reserved rows are passed through for the builder to skip.
        assert_eq!(regs[0].fields[2].name, "reserved");
        assert_eq!(regs[1].abbrev, "DCR");
        assert_eq!(regs[1].fields[0].bits, "3:0");
    }

    #[test]
    fn test_missing_header_key_is_an_error() {
        let err = load_str("[[register]]\nname = \"X\"\noffset = \"0\"\n").unwrap_err();
        assert!(matches!(err, LoaderError::Toml(_)));
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let err = load_str("[[register]\nabbrev = ").unwrap_err();
        assert!(matches!(err, LoaderError::Toml(_)));
    }

    #[test]
    fn test_empty_map_is_an_error() {
        let err = load_str("").unwrap_err();
        assert!(matches!(err, LoaderError::EmptyMap));
    }

    #[test]
    fn test_load_file_missing_path() {
        let err = load_file(Path::new("/nonexistent/reg.toml")).unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
    }
}
