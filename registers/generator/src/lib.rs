// Licensed under the Apache-2.0 license

//! Register-map to SystemVerilog register-block generator.
//!
//! This crate turns the raw records produced by `regblock-regmap` into a
//! validated register model and renders a synthesizable memory-mapped
//! register block: address-decoded write enables, reset-initialized storage,
//! masked writes, combinational field outputs, and a synchronous read mux.
//!
//! ## Usage
//!
//! ```no_run
//! use regblock_generator::{build_register_block, generate_sv, EmitConfig};
//!
//! let records = regblock_regmap::load_file(std::path::Path::new("reg.toml")).unwrap();
//! let registers = build_register_block(&records).unwrap();
//! let code = generate_sv(&registers, &EmitConfig::default());
//! ```
//!
//! ## Module Organization
//!
//! - [`bits`]: bit-range token parsing
//! - [`model`]: canonical register/field model with derived masks
//! - [`builder`]: raw-record to model construction and validation
//! - [`emit`]: SystemVerilog rendering
//! - [`util`]: identifier and literal formatting helpers
//!
//! Validation happens entirely in [`builder`] and [`model`]; once a
//! `Vec<Register>` exists, emission cannot fail, so a run either produces
//! the complete artifact or no text at all.

pub mod bits;
pub mod builder;
pub mod emit;
pub mod error;
pub mod model;
pub mod util;

pub use builder::{build_register, build_register_block};
pub use emit::{generate_sv, sections, EmitConfig, Section};
pub use error::ModelError;
pub use model::{AccessKind, BitRange, Field, Register};
