// Licensed under the Apache-2.0 license

//! Bit-range token parsing.

use crate::model::BitRange;
use thiserror::Error;

/// Why a bit-range token was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BitRangeError {
    #[error("not an integer")]
    NotIntegral,
    #[error("msb {msb} is less than lsb {lsb}")]
    Inverted { msb: u8, lsb: u8 },
    #[error("bit index {0} is outside [0, 31]")]
    OutOfBounds(u32),
}

/// Parses a bit-range token into a [`BitRange`].
///
/// Accepted forms: `"5"` for a single bit, `"7:6"` or `"[7:6]"` for a range;
/// brackets and surrounding whitespace are optional. A single-bit token
/// yields `msb == lsb`.
pub fn parse_bit_range(token: &str) -> Result<BitRange, BitRangeError> {
    let inner = token.trim().trim_matches(['[', ']']).trim();
    let (msb, lsb) = match inner.split_once(':') {
        Some((msb, lsb)) => (parse_index(msb)?, parse_index(lsb)?),
        None => {
            let bit = parse_index(inner)?;
            (bit, bit)
        }
    };
    if msb < lsb {
        return Err(BitRangeError::Inverted { msb, lsb });
    }
    Ok(BitRange { msb, lsb })
}

fn parse_index(text: &str) -> Result<u8, BitRangeError> {
    let value: u32 = text
        .trim()
        .parse()
        .map_err(|_| BitRangeError::NotIntegral)?;
    if value > 31 {
        return Err(BitRangeError::OutOfBounds(value));
    }
    Ok(value as u8)
}
