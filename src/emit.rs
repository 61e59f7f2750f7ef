//! Emission of the generated C++ colour table fragments.
//!
//! Builds the declarations fragment (static members, the `KnownColor` enum
//! and the lookup method declarations) and the definitions fragment (member
//! definitions plus the lookup function bodies), then writes both files.
//! The fragment text is part of the consuming build's contract; identical
//! input always produces byte-identical output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::colours::{Colour, KnownColour};
use crate::errors::Result;

/// File name of the declarations fragment.
pub const DECLARATIONS_FILE: &str = "gctk_colours.hpp";

/// File name of the definitions fragment.
pub const DEFINITIONS_FILE: &str = "gctk_colours_impl.hpp";

/// The two generated source fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragments {
    /// Contents of the declarations fragment.
    pub declarations: String,
    /// Contents of the definitions fragment.
    pub definitions: String,
}

/// Builds both fragments from the known colour table.
///
/// Five buffers accumulate per-colour lines in table order; the terminal
/// default branches and the `KnownColour` spelling aliases are appended
/// after the loop, and the buffers are concatenated into the two outputs.
pub fn generate() -> Fragments {
    let mut declarations = String::new();
    let mut definitions = String::new();
    let mut known_colours = String::from("enum class KnownColor {\n");
    let mut by_name = String::from("Color Color::FromName(const std::string& name) {\n");
    let mut by_enum =
        String::from("Color Color::FromKnownColor(const KnownColor color) {\n\tswitch (color) {\n");

    for &colour in KnownColour::ALL {
        let name = colour.name();
        let Colour { r, g, b, a } = colour.colour();

        declarations.push_str(&format!("static const Color {name};\n"));
        definitions.push_str(&format!(
            "const Color Color::{name} = {{ {r}, {g}, {b}, {a} }};\n"
        ));
        by_name.push_str(&format!("\tif (name == \"{name}\") return Color::{name};\n"));
        by_enum.push_str(&format!(
            "\t\tcase KnownColor::{name}: return Color::{name};\n"
        ));
        known_colours.push_str(&format!("\t{name},\n"));
    }

    by_name.push_str("\treturn { 0, 0, 0, 1 };\n}\n");
    by_enum.push_str("\t\tdefault: return { 0, 0, 0, 1 };\n\t}\n}\n");
    by_enum
        .push_str("Color Color::FromKnownColour(const KnownColor name) { return FromKnownColor(name); }\n");
    known_colours.push_str("};\nusing KnownColour = KnownColor;\n");

    declarations.push('\n');
    declarations.push_str(&known_colours);
    declarations.push('\n');
    declarations.push_str("static Color FromName(const std::string& name);\n");
    declarations.push_str("static Color FromKnownColor(const KnownColor color);\n");
    declarations.push_str("static Color FromKnownColour(const KnownColor name);\n");

    definitions.push('\n');
    definitions.push_str(&by_name);
    definitions.push('\n');
    definitions.push_str(&by_enum);
    definitions.push('\n');

    Fragments {
        declarations,
        definitions,
    }
}

/// Generates both fragments and writes them into `dir`.
///
/// Existing files are truncated and replaced. The directory itself must
/// already exist; a missing or unwritable destination surfaces as an I/O
/// error. There is no temp-file-then-rename step, so an interrupted run can
/// leave a truncated file behind.
pub fn write_fragments(dir: &Path) -> Result<()> {
    let fragments = generate();

    write_file(&dir.join(DECLARATIONS_FILE), &fragments.declarations)?;
    write_file(&dir.join(DEFINITIONS_FILE), &fragments.definitions)?;

    tracing::info!(
        "Successfully generated {} and {} in {}.",
        DECLARATIONS_FILE,
        DEFINITIONS_FILE,
        dir.display()
    );

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;

    tracing::debug!(
        path = %path.display(),
        bytes = contents.len(),
        "Wrote generated fragment"
    );

    Ok(())
}
