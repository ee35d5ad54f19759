// Licensed under the Apache-2.0 license

//! Identifier and literal formatting helpers.

/// Canonicalizes a name from the register map: trimmed, whitespace runs
/// replaced with a single underscore, uppercased.
///
/// # Examples
/// ```
/// use regblock_generator::util::canonical_token;
/// assert_eq!(canonical_token("device role"), "DEVICE_ROLE");
/// assert_eq!(canonical_token(" bcr "), "BCR");
/// ```
pub fn canonical_token(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_underscore = false;
    for c in name.trim().chars() {
        if c.is_whitespace() {
            if !prev_underscore {
                result.push('_');
            }
            prev_underscore = true;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_underscore = false;
        }
    }
    result
}

/// Formats a value as a fixed-width SystemVerilog literal: `32'h` followed
/// by exactly eight lowercase hex digits.
pub fn hex32(val: u32) -> String {
    format!("32'h{val:08x}")
}

/// Parses an unsigned integer literal: `0x…` hex, `0b…` binary, or decimal.
///
/// Returns `None` for empty or non-numeric text; callers decide whether that
/// means "default to zero" (field defaults) or an error (offsets).
pub fn parse_int_literal(text: &str) -> Option<u32> {
    let s = text.trim().to_ascii_lowercase();
    if let Some(hex) = s.strip_prefix("0x") {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = s.strip_prefix("0b") {
        u32::from_str_radix(bin, 2).ok()
    } else {
        s.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_token() {
        assert_eq!(canonical_token("device role"), "DEVICE_ROLE");
        assert_eq!(canonical_token("DEVICE_ROLE"), "DEVICE_ROLE");
        assert_eq!(canonical_token(" bcr "), "BCR");
        assert_eq!(canonical_token("max  data  speed"), "MAX_DATA_SPEED");
    }

    #[test]
    fn test_hex32() {
        assert_eq!(hex32(0), "32'h00000000");
        assert_eq!(hex32(0xE0), "32'h000000e0");
        assert_eq!(hex32(0xDEAD_BEEF), "32'hdeadbeef");
    }

    #[test]
    fn test_parse_int_literal() {
        assert_eq!(parse_int_literal("0x0000"), Some(0));
        assert_eq!(parse_int_literal("0x1C"), Some(0x1c));
        assert_eq!(parse_int_literal("0b101"), Some(5));
        assert_eq!(parse_int_literal("10"), Some(10));
        assert_eq!(parse_int_literal(" 2 "), Some(2));
        assert_eq!(parse_int_literal(""), None);
        assert_eq!(parse_int_literal("N/A"), None);
    }
}
