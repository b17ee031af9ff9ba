//! Core library for `autoimport`, the Ruby-to-Rust glue generator.
//!
//! The pipeline is linear: normalize the raw source list ([`sources`]),
//! enumerate the constants a Ruby package defines via an interpreter
//! subprocess ([`scanner`]), and render the collected data into a generated
//! Rust module ([`glue`]). The [`implementors`] table carries the static
//! documentation index of known implementations per package and is handed to
//! consumers through a single-assignment publish [`slot`].

pub mod errors;
pub mod glue;
pub mod implementors;
pub mod scanner;
pub mod slot;
pub mod sources;
pub mod templates;

pub use errors::{ScanError, SlotError};
pub use glue::GlueFile;
pub use implementors::{Implementor, ImplementorIndex};
pub use scanner::{Constant, ConstantScanner};
pub use slot::Slot;
