//! gctk-colourgen - build-time generator for the GCTk named colour tables.
//!
//! Iterates the compiled-in known colour enumeration and emits the two C++
//! source fragments consumed by the engine build: a declarations header and
//! an implementation fragment with the colour definitions and lookups.

pub mod colours;
pub mod emit;
pub mod errors;
