use gctk_colourgen::colours::KnownColour;
use gctk_colourgen::emit::generate;

#[test]
fn test_declaration_line_per_colour() {
    let fragments = generate();
    let decl_lines: Vec<&str> = fragments
        .declarations
        .lines()
        .filter(|line| line.starts_with("static const Color "))
        .collect();

    assert_eq!(decl_lines.len(), KnownColour::ALL.len());
    for (line, colour) in decl_lines.iter().zip(KnownColour::ALL) {
        assert_eq!(*line, format!("static const Color {};", colour.name()));
    }
}

#[test]
fn test_enum_block_cases_in_order() {
    let fragments = generate();
    let decl = &fragments.declarations;

    let start = decl
        .find("enum class KnownColor {\n")
        .expect("enum block present");
    let end = start + decl[start..].find("\n};").expect("enum block terminated");

    let cases: Vec<&str> = decl[start..end]
        .lines()
        .skip(1)
        .map(|line| line.trim().trim_end_matches(','))
        .collect();
    let names: Vec<&str> = KnownColour::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(cases, names);
}

#[test]
fn test_declarations_layout() {
    let fragments = generate();
    let decl = &fragments.declarations;

    assert!(decl.starts_with("static const Color ActiveBorder;\n"));
    assert!(decl.contains("\n\nenum class KnownColor {\n"));
    assert!(decl.contains("};\nusing KnownColour = KnownColor;\n"));
    assert!(decl.ends_with(
        "static Color FromName(const std::string& name);\n\
         static Color FromKnownColor(const KnownColor color);\n\
         static Color FromKnownColour(const KnownColor name);\n"
    ));

    // The enum block follows the last member declaration.
    let enum_pos = decl.find("enum class KnownColor").unwrap();
    let last_member = decl.rfind("static const Color ").unwrap();
    assert!(last_member < enum_pos);
}

#[test]
fn test_definition_lines_normalized_channels() {
    let fragments = generate();
    let lines: Vec<&str> = fragments
        .definitions
        .lines()
        .take_while(|line| !line.is_empty())
        .collect();

    assert_eq!(lines.len(), KnownColour::ALL.len());
    for (line, colour) in lines.iter().zip(KnownColour::ALL) {
        let [r, g, b, a] = colour.rgba8();
        let expected = format!(
            "const Color Color::{} = {{ {}, {}, {}, {} }};",
            colour.name(),
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0
        );
        assert_eq!(*line, expected);
    }
}

#[test]
fn test_whole_channels_print_as_integers() {
    let fragments = generate();
    assert!(fragments
        .definitions
        .contains("const Color Color::Red = { 1, 0, 0, 1 };\n"));
    assert!(fragments
        .definitions
        .contains("const Color Color::Black = { 0, 0, 0, 1 };\n"));
}

#[test]
fn test_by_name_function_body() {
    let fragments = generate();
    let defs = &fragments.definitions;

    assert!(defs.contains("Color Color::FromName(const std::string& name) {\n"));
    assert!(defs.contains("\tif (name == \"Crimson\") return Color::Crimson;\n"));
    assert_eq!(
        defs.matches("\tif (name == \"").count(),
        KnownColour::ALL.len()
    );
    assert!(defs.contains("\treturn { 0, 0, 0, 1 };\n}\n"));
}

#[test]
fn test_by_enum_function_body() {
    let fragments = generate();
    let defs = &fragments.definitions;

    assert!(defs
        .contains("Color Color::FromKnownColor(const KnownColor color) {\n\tswitch (color) {\n"));
    assert!(defs.contains("\t\tcase KnownColor::Crimson: return Color::Crimson;\n"));
    assert_eq!(
        defs.matches("\t\tcase KnownColor::").count(),
        KnownColour::ALL.len()
    );
    assert!(defs.contains("\t\tdefault: return { 0, 0, 0, 1 };\n\t}\n}\n"));
    assert!(defs.contains(
        "Color Color::FromKnownColour(const KnownColor name) { return FromKnownColor(name); }\n"
    ));
}

#[test]
fn test_generate_is_deterministic() {
    assert_eq!(generate(), generate());
}
