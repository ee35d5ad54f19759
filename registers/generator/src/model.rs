// Licensed under the Apache-2.0 license

//! Canonical register model.
//!
//! The model is built once per generation run from loader output and is
//! immutable from then on: [`Register`] keeps its parts private and exposes
//! read-only accessors, and the derived valid-bit mask and reset default are
//! computed exactly once, inside [`Register::new`].
//!
//! ```text
//! Vec<RawRegister>  (regblock-regmap)
//!     │  builder::build_register_block
//!     ▼
//! Vec<Register>                         # ordered, offsets unique
//!     ├── fields: Vec<Field>            # declaration order preserved
//!     ├── valid_mask: u32               # OR of shifted field masks
//!     └── reset_default: u32            # OR of shifted field defaults
//! ```

use crate::error::ModelError;

/// Software access kind for a field.
///
/// The register map may omit the access column entirely; RW is the single,
/// documented fallback, applied once at model construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccessKind {
    /// Read-write (the default).
    #[default]
    Rw,
    /// Read-only.
    Ro,
    /// Write-only.
    Wo,
}

impl AccessKind {
    /// Interprets loader access text. Missing, empty, or unrecognized text
    /// falls back to RW.
    pub fn from_loader(text: Option<&str>) -> AccessKind {
        match text.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("ro") => AccessKind::Ro,
            Some(s) if s.eq_ignore_ascii_case("wo") => AccessKind::Wo,
            _ => AccessKind::Rw,
        }
    }

    /// Lowercase token used in generated port names.
    pub fn token(&self) -> &'static str {
        match self {
            AccessKind::Rw => "rw",
            AccessKind::Ro => "ro",
            AccessKind::Wo => "wo",
        }
    }
}

/// An inclusive bit range within a 32-bit register, `msb >= lsb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitRange {
    pub msb: u8,
    pub lsb: u8,
}

impl BitRange {
    /// Field width in bits.
    pub fn width(&self) -> u8 {
        self.msb - self.lsb + 1
    }

    /// The field's mask shifted into register position.
    pub fn mask(&self) -> u32 {
        let ones = if self.width() == 32 {
            u32::MAX
        } else {
            (1u32 << self.width()) - 1
        };
        ones << self.lsb
    }

    /// SystemVerilog slice suffix: `[5]` for a single bit, `[7:6]` otherwise.
    pub fn slice(&self) -> String {
        if self.msb == self.lsb {
            format!("[{}]", self.lsb)
        } else {
            format!("[{}:{}]", self.msb, self.lsb)
        }
    }
}

/// A named sub-range of bits within a register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Canonical field name, unique within its register.
    pub name: String,
    pub range: BitRange,
    pub access: AccessKind,
    /// Reset default for this field, right-aligned (not shifted by lsb).
    pub default: u32,
    pub description: String,
}

impl Field {
    /// Output port name: fixed `o_` prefix, lowercase access token,
    /// lowercase field name.
    pub fn port_name(&self) -> String {
        format!("o_{}_{}", self.access.token(), self.name.to_lowercase())
    }
}

/// A named, address-mapped 32-bit storage unit composed of fields.
#[derive(Clone, Debug)]
pub struct Register {
    name: String,
    offset: u32,
    description: String,
    fields: Vec<Field>,
    valid_mask: u32,
    reset_default: u32,
}

impl Register {
    /// Builds a register from name-validated fields, deriving the valid-bit
    /// mask and reset default:
    ///
    /// - `valid_mask = OR over fields of ((1 << width) - 1) << lsb`
    /// - `reset_default = OR over fields of (default << lsb)`
    ///
    /// Fails with [`ModelError::OverlappingFields`] when a field's shifted
    /// mask intersects the running OR of earlier fields, and with
    /// [`ModelError::DefaultOutOfRange`] when a field's default does not fit
    /// its declared width.
    pub fn new(
        name: String,
        offset: u32,
        description: String,
        fields: Vec<Field>,
    ) -> Result<Register, ModelError> {
        let mut valid_mask = 0u32;
        let mut reset_default = 0u32;
        for field in &fields {
            let field_mask = field.range.mask();
            if valid_mask & field_mask != 0 {
                return Err(ModelError::OverlappingFields {
                    register: name,
                    field: field.name.clone(),
                    mask: valid_mask & field_mask,
                });
            }
            if field.default & !(field_mask >> field.range.lsb) != 0 {
                return Err(ModelError::DefaultOutOfRange {
                    register: name,
                    field: field.name.clone(),
                    default: field.default,
                    width: field.range.width(),
                });
            }
            valid_mask |= field_mask;
            reset_default |= field.default << field.range.lsb;
        }
        Ok(Register {
            name,
            offset,
            description,
            fields,
            valid_mask,
            reset_default,
        })
    }

    /// Canonical register name, uppercase, as used in constants.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase identifier used for storage and write-enable signals.
    pub fn ident(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Union of all field bit positions.
    pub fn valid_mask(&self) -> u32 {
        self.valid_mask
    }

    /// Value loaded into storage on reset.
    pub fn reset_default(&self) -> u32 {
        self.reset_default
    }
}
