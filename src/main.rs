//! gctk-colourgen - build-time generator for the GCTk named colour tables.
//!
//! One-shot batch tool: takes no arguments, reads the compiled-in colour
//! table and writes the generated fragments into `include/generated`,
//! relative to the working directory.

use std::path::Path;

use gctk_colourgen::emit;
use gctk_colourgen::errors::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Destination directory of the generated fragments. Must exist; the
/// generator does not create it.
const OUTPUT_DIR: &str = "include/generated";

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    emit::write_fragments(Path::new(OUTPUT_DIR))?;

    Ok(())
}
