//! Structure-file parsing for the sociogen code generator.
//!
//! A structure file is a JSON document describing one social network
//! object: its name, whether it is independently addressable, its
//! properties and its invokable methods. This crate deserializes the
//! document and normalizes it into the typed model the emitters
//! consume.

mod error;
mod raw;
mod structure;

pub use error::{Error, Result};
pub use structure::{ExtraFragments, Loaded, Method, Parameter, Property, Structure};
