//! This crate contains all configuration-relevant code, including
//! the full configuration structure as well as methods needed to load
//! and validate it.
//!
//! Your starting point should probably be [`Configuration::load_from_default_path`].
//!
//! # Internals
//! The configuration file is first deserialized into unvalidated ("unresolved")
//! structures, which are then turned into their validated ("resolved") versions
//! through the [`TryResolve`][traits::TryResolve] trait.
//! Any validation (e.g. checking that a log filter actually parses) happens
//! during that step, so a loaded [`Configuration`] is always valid.

#![allow(rustdoc::private_intra_doc_links)]

mod error;
mod structure;
mod traits;
mod utilities;

pub use error::*;
pub use structure::*;
