//! Binding-layer class and ontology emitters for the sociogen code
//! generator.
//!
//! Everything here is a pure function of the parsed [`Structure`] and
//! the marker regions extracted from whatever output files already
//! exist on disk; regeneration never destroys hand-written code held
//! between marker pairs.
//!
//! [`Structure`]: sociogen_schema::Structure

pub mod files;
mod generator;
mod merge;
pub mod naming;
mod network;
pub mod type_mapper;

pub use generator::{GenerateResult, Generator, PreviewFile, WriteFailure};
pub use merge::{MergeDiagnostic, MergeRegions};
pub use network::Network;

/// Marker prefix opening a preserved region in generated output.
pub const START_MARKER: &str = "// <<<";
/// Marker prefix closing a preserved region in generated output.
pub const END_MARKER: &str = "// >>>";
