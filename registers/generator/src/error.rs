// Licensed under the Apache-2.0 license

use crate::bits::BitRangeError;
use thiserror::Error;

/// Errors detected while building or validating the register model.
///
/// All variants are raised during model construction; emission is total over
/// a validated model and never fails. Every variant carries the register
/// (and where applicable field) name plus the offending literal, so the
/// message alone is actionable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("register {register}: field {field}: bad bit range {token:?}: {reason}")]
    MalformedBitRange {
        register: String,
        field: String,
        token: String,
        reason: BitRangeError,
    },

    #[error("register {register}: bad offset literal {literal:?}")]
    MalformedOffset { register: String, literal: String },

    #[error("register {register}: duplicate field name {field}")]
    DuplicateFieldName { register: String, field: String },

    #[error("registers {first} and {second} share address {offset:#010x}")]
    DuplicateRegisterAddress {
        first: String,
        second: String,
        offset: u32,
    },

    #[error("register {register}: field {field} overlaps already-claimed bits (mask {mask:#010x})")]
    OverlappingFields {
        register: String,
        field: String,
        /// The bits claimed by both this field and an earlier one.
        mask: u32,
    },

    #[error("register {register}: field {field}: default {default:#x} does not fit in {width} bits")]
    DefaultOutOfRange {
        register: String,
        field: String,
        default: u32,
        width: u8,
    },
}
