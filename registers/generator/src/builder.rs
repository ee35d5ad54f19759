// Licensed under the Apache-2.0 license

//! Raw-record to model construction.
//!
//! Canonicalization and defaulting happen here, exactly once: field and
//! register names are normalized with [`canonical_token`], a missing access
//! column becomes RW, and missing or unparsable default text becomes zero.
//! Reserved rows never reach the model. Mask and default derivation is done
//! by [`Register::new`].

use crate::bits;
use crate::error::ModelError;
use crate::model::{AccessKind, Field, Register};
use crate::util::{canonical_token, parse_int_literal};
use regblock_regmap::RawRegister;

/// Field rows carrying this name mark reserved bits; they are skipped and
/// contribute nothing to the valid mask.
const RESERVED_MARKER: &str = "reserved";

/// Builds one register from its raw header and field rows.
pub fn build_register(raw: &RawRegister) -> Result<Register, ModelError> {
    let reg_name = canonical_token(&raw.abbrev);
    let offset = parse_int_literal(&raw.offset).ok_or_else(|| ModelError::MalformedOffset {
        register: reg_name.clone(),
        literal: raw.offset.clone(),
    })?;

    let mut fields: Vec<Field> = Vec::with_capacity(raw.fields.len());
    for row in &raw.fields {
        let raw_name = row.name.trim();
        if raw_name.is_empty() || raw_name.eq_ignore_ascii_case(RESERVED_MARKER) {
            continue;
        }
        let name = canonical_token(raw_name);
        if fields.iter().any(|f| f.name == name) {
            return Err(ModelError::DuplicateFieldName {
                register: reg_name,
                field: name,
            });
        }
        let range =
            bits::parse_bit_range(&row.bits).map_err(|reason| ModelError::MalformedBitRange {
                register: reg_name.clone(),
                field: name.clone(),
                token: row.bits.clone(),
                reason,
            })?;
        fields.push(Field {
            name,
            range,
            access: AccessKind::from_loader(row.access.as_deref()),
            default: parse_int_literal(&row.default).unwrap_or(0),
            description: row.description.trim().to_string(),
        });
    }

    let description = format!("{} ({})", raw.name.trim(), reg_name);
    Register::new(reg_name, offset, description, fields)
}

/// Builds the ordered register block, enforcing global offset uniqueness.
pub fn build_register_block(raw: &[RawRegister]) -> Result<Vec<Register>, ModelError> {
    let mut registers: Vec<Register> = Vec::with_capacity(raw.len());
    for entry in raw {
        let register = build_register(entry)?;
        if let Some(prev) = registers.iter().find(|r| r.offset() == register.offset()) {
            return Err(ModelError::DuplicateRegisterAddress {
                first: prev.name().to_string(),
                second: register.name().to_string(),
                offset: register.offset(),
            });
        }
        registers.push(register);
    }
    Ok(registers)
}
