//! The compiled-in known colour table.
//!
//! This is the enumeration the generator iterates: 175 named colours in a
//! fixed order (system colours, `Transparent`, the web colours, then the
//! trailing system entries ending with `RebeccaPurple`). The order is part
//! of the output contract since it defines the generated enum member order.
//!
//! System colour channels are the default-theme constants; web colours
//! carry their standard sRGB values, including the table's historical
//! `DarkSeaGreen` #8FBC8B.

/// A colour with unit-interval RGBA channels, as emitted into the
/// generated definitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Colour {
    /// Opaque black, the miss default of both lookup functions.
    pub const BLACK: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Normalizes 8-bit channel values to unit floats.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Looks up a colour by its identifier, case-sensitively.
    ///
    /// Unknown names (including the empty string and case mismatches)
    /// yield [`Colour::BLACK`], matching the generated `FromName`.
    pub fn from_name(name: &str) -> Colour {
        match KnownColour::from_name(name) {
            Some(colour) => colour.colour(),
            None => Colour::BLACK,
        }
    }

    /// Resolves a known colour identifier to its record, matching the
    /// generated `FromKnownColor`. Total over the closed enum.
    pub const fn from_known(colour: KnownColour) -> Colour {
        colour.colour()
    }
}

macro_rules! known_colours {
    ($(($variant:ident, $name:literal, $r:literal, $g:literal, $b:literal, $a:literal),)+) => {
        /// Closed enumeration of the predefined colour identifiers, in
        /// table order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum KnownColour {
            $($variant,)+
        }

        impl KnownColour {
            /// Every known colour, in declaration order.
            pub const ALL: &'static [KnownColour] = &[$(KnownColour::$variant,)+];

            /// The identifier used for this colour in generated code.
            pub const fn name(self) -> &'static str {
                match self {
                    $(KnownColour::$variant => $name,)+
                }
            }

            /// The 8-bit channel values of this colour.
            pub const fn rgba8(self) -> [u8; 4] {
                match self {
                    $(KnownColour::$variant => [$r, $g, $b, $a],)+
                }
            }

            /// The normalized colour record.
            pub const fn colour(self) -> Colour {
                let [r, g, b, a] = self.rgba8();
                Colour::from_rgba8(r, g, b, a)
            }

            /// Case-sensitive lookup of an identifier.
            pub fn from_name(name: &str) -> Option<KnownColour> {
                BY_NAME.get(name).copied()
            }
        }

        static BY_NAME: phf::Map<&'static str, KnownColour> = phf::phf_map! {
            $($name => KnownColour::$variant,)+
        };
    };
}

/// Alternate spelling, mirroring the alias emitted into the generated
/// header.
pub type KnownColor = KnownColour;

known_colours! {
    (ActiveBorder, "ActiveBorder", 0xB4, 0xB4, 0xB4, 0xFF),
    (ActiveCaption, "ActiveCaption", 0x99, 0xB4, 0xD1, 0xFF),
    (ActiveCaptionText, "ActiveCaptionText", 0x00, 0x00, 0x00, 0xFF),
    (AppWorkspace, "AppWorkspace", 0xAB, 0xAB, 0xAB, 0xFF),
    (Control, "Control", 0xF0, 0xF0, 0xF0, 0xFF),
    (ControlDark, "ControlDark", 0xA0, 0xA0, 0xA0, 0xFF),
    (ControlDarkDark, "ControlDarkDark", 0x69, 0x69, 0x69, 0xFF),
    (ControlLight, "ControlLight", 0xE3, 0xE3, 0xE3, 0xFF),
    (ControlLightLight, "ControlLightLight", 0xFF, 0xFF, 0xFF, 0xFF),
    (ControlText, "ControlText", 0x00, 0x00, 0x00, 0xFF),
    (Desktop, "Desktop", 0x00, 0x00, 0x00, 0xFF),
    (GrayText, "GrayText", 0x6D, 0x6D, 0x6D, 0xFF),
    (Highlight, "Highlight", 0x00, 0x78, 0xD7, 0xFF),
    (HighlightText, "HighlightText", 0xFF, 0xFF, 0xFF, 0xFF),
    (HotTrack, "HotTrack", 0x00, 0x66, 0xCC, 0xFF),
    (InactiveBorder, "InactiveBorder", 0xF4, 0xF7, 0xFC, 0xFF),
    (InactiveCaption, "InactiveCaption", 0xBF, 0xCD, 0xDB, 0xFF),
    (InactiveCaptionText, "InactiveCaptionText", 0x00, 0x00, 0x00, 0xFF),
    (Info, "Info", 0xFF, 0xFF, 0xE1, 0xFF),
    (InfoText, "InfoText", 0x00, 0x00, 0x00, 0xFF),
    (Menu, "Menu", 0xF0, 0xF0, 0xF0, 0xFF),
    (MenuText, "MenuText", 0x00, 0x00, 0x00, 0xFF),
    (ScrollBar, "ScrollBar", 0xC8, 0xC8, 0xC8, 0xFF),
    (Window, "Window", 0xFF, 0xFF, 0xFF, 0xFF),
    (WindowFrame, "WindowFrame", 0x64, 0x64, 0x64, 0xFF),
    (WindowText, "WindowText", 0x00, 0x00, 0x00, 0xFF),
    (Transparent, "Transparent", 0xFF, 0xFF, 0xFF, 0x00),
    (AliceBlue, "AliceBlue", 0xF0, 0xF8, 0xFF, 0xFF),
    (AntiqueWhite, "AntiqueWhite", 0xFA, 0xEB, 0xD7, 0xFF),
    (Aqua, "Aqua", 0x00, 0xFF, 0xFF, 0xFF),
    (Aquamarine, "Aquamarine", 0x7F, 0xFF, 0xD4, 0xFF),
    (Azure, "Azure", 0xF0, 0xFF, 0xFF, 0xFF),
    (Beige, "Beige", 0xF5, 0xF5, 0xDC, 0xFF),
    (Bisque, "Bisque", 0xFF, 0xE4, 0xC4, 0xFF),
    (Black, "Black", 0x00, 0x00, 0x00, 0xFF),
    (BlanchedAlmond, "BlanchedAlmond", 0xFF, 0xEB, 0xCD, 0xFF),
    (Blue, "Blue", 0x00, 0x00, 0xFF, 0xFF),
    (BlueViolet, "BlueViolet", 0x8A, 0x2B, 0xE2, 0xFF),
    (Brown, "Brown", 0xA5, 0x2A, 0x2A, 0xFF),
    (BurlyWood, "BurlyWood", 0xDE, 0xB8, 0x87, 0xFF),
    (CadetBlue, "CadetBlue", 0x5F, 0x9E, 0xA0, 0xFF),
    (Chartreuse, "Chartreuse", 0x7F, 0xFF, 0x00, 0xFF),
    (Chocolate, "Chocolate", 0xD2, 0x69, 0x1E, 0xFF),
    (Coral, "Coral", 0xFF, 0x7F, 0x50, 0xFF),
    (CornflowerBlue, "CornflowerBlue", 0x64, 0x95, 0xED, 0xFF),
    (Cornsilk, "Cornsilk", 0xFF, 0xF8, 0xDC, 0xFF),
    (Crimson, "Crimson", 0xDC, 0x14, 0x3C, 0xFF),
    (Cyan, "Cyan", 0x00, 0xFF, 0xFF, 0xFF),
    (DarkBlue, "DarkBlue", 0x00, 0x00, 0x8B, 0xFF),
    (DarkCyan, "DarkCyan", 0x00, 0x8B, 0x8B, 0xFF),
    (DarkGoldenrod, "DarkGoldenrod", 0xB8, 0x86, 0x0B, 0xFF),
    (DarkGray, "DarkGray", 0xA9, 0xA9, 0xA9, 0xFF),
    (DarkGreen, "DarkGreen", 0x00, 0x64, 0x00, 0xFF),
    (DarkKhaki, "DarkKhaki", 0xBD, 0xB7, 0x6B, 0xFF),
    (DarkMagenta, "DarkMagenta", 0x8B, 0x00, 0x8B, 0xFF),
    (DarkOliveGreen, "DarkOliveGreen", 0x55, 0x6B, 0x2F, 0xFF),
    (DarkOrange, "DarkOrange", 0xFF, 0x8C, 0x00, 0xFF),
    (DarkOrchid, "DarkOrchid", 0x99, 0x32, 0xCC, 0xFF),
    (DarkRed, "DarkRed", 0x8B, 0x00, 0x00, 0xFF),
    (DarkSalmon, "DarkSalmon", 0xE9, 0x96, 0x7A, 0xFF),
    (DarkSeaGreen, "DarkSeaGreen", 0x8F, 0xBC, 0x8B, 0xFF),
    (DarkSlateBlue, "DarkSlateBlue", 0x48, 0x3D, 0x8B, 0xFF),
    (DarkSlateGray, "DarkSlateGray", 0x2F, 0x4F, 0x4F, 0xFF),
    (DarkTurquoise, "DarkTurquoise", 0x00, 0xCE, 0xD1, 0xFF),
    (DarkViolet, "DarkViolet", 0x94, 0x00, 0xD3, 0xFF),
    (DeepPink, "DeepPink", 0xFF, 0x14, 0x93, 0xFF),
    (DeepSkyBlue, "DeepSkyBlue", 0x00, 0xBF, 0xFF, 0xFF),
    (DimGray, "DimGray", 0x69, 0x69, 0x69, 0xFF),
    (DodgerBlue, "DodgerBlue", 0x1E, 0x90, 0xFF, 0xFF),
    (Firebrick, "Firebrick", 0xB2, 0x22, 0x22, 0xFF),
    (FloralWhite, "FloralWhite", 0xFF, 0xFA, 0xF0, 0xFF),
    (ForestGreen, "ForestGreen", 0x22, 0x8B, 0x22, 0xFF),
    (Fuchsia, "Fuchsia", 0xFF, 0x00, 0xFF, 0xFF),
    (Gainsboro, "Gainsboro", 0xDC, 0xDC, 0xDC, 0xFF),
    (GhostWhite, "GhostWhite", 0xF8, 0xF8, 0xFF, 0xFF),
    (Gold, "Gold", 0xFF, 0xD7, 0x00, 0xFF),
    (Goldenrod, "Goldenrod", 0xDA, 0xA5, 0x20, 0xFF),
    (Gray, "Gray", 0x80, 0x80, 0x80, 0xFF),
    (Green, "Green", 0x00, 0x80, 0x00, 0xFF),
    (GreenYellow, "GreenYellow", 0xAD, 0xFF, 0x2F, 0xFF),
    (Honeydew, "Honeydew", 0xF0, 0xFF, 0xF0, 0xFF),
    (HotPink, "HotPink", 0xFF, 0x69, 0xB4, 0xFF),
    (IndianRed, "IndianRed", 0xCD, 0x5C, 0x5C, 0xFF),
    (Indigo, "Indigo", 0x4B, 0x00, 0x82, 0xFF),
    (Ivory, "Ivory", 0xFF, 0xFF, 0xF0, 0xFF),
    (Khaki, "Khaki", 0xF0, 0xE6, 0x8C, 0xFF),
    (Lavender, "Lavender", 0xE6, 0xE6, 0xFA, 0xFF),
    (LavenderBlush, "LavenderBlush", 0xFF, 0xF0, 0xF5, 0xFF),
    (LawnGreen, "LawnGreen", 0x7C, 0xFC, 0x00, 0xFF),
    (LemonChiffon, "LemonChiffon", 0xFF, 0xFA, 0xCD, 0xFF),
    (LightBlue, "LightBlue", 0xAD, 0xD8, 0xE6, 0xFF),
    (LightCoral, "LightCoral", 0xF0, 0x80, 0x80, 0xFF),
    (LightCyan, "LightCyan", 0xE0, 0xFF, 0xFF, 0xFF),
    (LightGoldenrodYellow, "LightGoldenrodYellow", 0xFA, 0xFA, 0xD2, 0xFF),
    (LightGray, "LightGray", 0xD3, 0xD3, 0xD3, 0xFF),
    (LightGreen, "LightGreen", 0x90, 0xEE, 0x90, 0xFF),
    (LightPink, "LightPink", 0xFF, 0xB6, 0xC1, 0xFF),
    (LightSalmon, "LightSalmon", 0xFF, 0xA0, 0x7A, 0xFF),
    (LightSeaGreen, "LightSeaGreen", 0x20, 0xB2, 0xAA, 0xFF),
    (LightSkyBlue, "LightSkyBlue", 0x87, 0xCE, 0xFA, 0xFF),
    (LightSlateGray, "LightSlateGray", 0x77, 0x88, 0x99, 0xFF),
    (LightSteelBlue, "LightSteelBlue", 0xB0, 0xC4, 0xDE, 0xFF),
    (LightYellow, "LightYellow", 0xFF, 0xFF, 0xE0, 0xFF),
    (Lime, "Lime", 0x00, 0xFF, 0x00, 0xFF),
    (LimeGreen, "LimeGreen", 0x32, 0xCD, 0x32, 0xFF),
    (Linen, "Linen", 0xFA, 0xF0, 0xE6, 0xFF),
    (Magenta, "Magenta", 0xFF, 0x00, 0xFF, 0xFF),
    (Maroon, "Maroon", 0x80, 0x00, 0x00, 0xFF),
    (MediumAquamarine, "MediumAquamarine", 0x66, 0xCD, 0xAA, 0xFF),
    (MediumBlue, "MediumBlue", 0x00, 0x00, 0xCD, 0xFF),
    (MediumOrchid, "MediumOrchid", 0xBA, 0x55, 0xD3, 0xFF),
    (MediumPurple, "MediumPurple", 0x93, 0x70, 0xDB, 0xFF),
    (MediumSeaGreen, "MediumSeaGreen", 0x3C, 0xB3, 0x71, 0xFF),
    (MediumSlateBlue, "MediumSlateBlue", 0x7B, 0x68, 0xEE, 0xFF),
    (MediumSpringGreen, "MediumSpringGreen", 0x00, 0xFA, 0x9A, 0xFF),
    (MediumTurquoise, "MediumTurquoise", 0x48, 0xD1, 0xCC, 0xFF),
    (MediumVioletRed, "MediumVioletRed", 0xC7, 0x15, 0x85, 0xFF),
    (MidnightBlue, "MidnightBlue", 0x19, 0x19, 0x70, 0xFF),
    (MintCream, "MintCream", 0xF5, 0xFF, 0xFA, 0xFF),
    (MistyRose, "MistyRose", 0xFF, 0xE4, 0xE1, 0xFF),
    (Moccasin, "Moccasin", 0xFF, 0xE4, 0xB5, 0xFF),
    (NavajoWhite, "NavajoWhite", 0xFF, 0xDE, 0xAD, 0xFF),
    (Navy, "Navy", 0x00, 0x00, 0x80, 0xFF),
    (OldLace, "OldLace", 0xFD, 0xF5, 0xE6, 0xFF),
    (Olive, "Olive", 0x80, 0x80, 0x00, 0xFF),
    (OliveDrab, "OliveDrab", 0x6B, 0x8E, 0x23, 0xFF),
    (Orange, "Orange", 0xFF, 0xA5, 0x00, 0xFF),
    (OrangeRed, "OrangeRed", 0xFF, 0x45, 0x00, 0xFF),
    (Orchid, "Orchid", 0xDA, 0x70, 0xD6, 0xFF),
    (PaleGoldenrod, "PaleGoldenrod", 0xEE, 0xE8, 0xAA, 0xFF),
    (PaleGreen, "PaleGreen", 0x98, 0xFB, 0x98, 0xFF),
    (PaleTurquoise, "PaleTurquoise", 0xAF, 0xEE, 0xEE, 0xFF),
    (PaleVioletRed, "PaleVioletRed", 0xDB, 0x70, 0x93, 0xFF),
    (PapayaWhip, "PapayaWhip", 0xFF, 0xEF, 0xD5, 0xFF),
    (PeachPuff, "PeachPuff", 0xFF, 0xDA, 0xB9, 0xFF),
    (Peru, "Peru", 0xCD, 0x85, 0x3F, 0xFF),
    (Pink, "Pink", 0xFF, 0xC0, 0xCB, 0xFF),
    (Plum, "Plum", 0xDD, 0xA0, 0xDD, 0xFF),
    (PowderBlue, "PowderBlue", 0xB0, 0xE0, 0xE6, 0xFF),
    (Purple, "Purple", 0x80, 0x00, 0x80, 0xFF),
    (Red, "Red", 0xFF, 0x00, 0x00, 0xFF),
    (RosyBrown, "RosyBrown", 0xBC, 0x8F, 0x8F, 0xFF),
    (RoyalBlue, "RoyalBlue", 0x41, 0x69, 0xE1, 0xFF),
    (SaddleBrown, "SaddleBrown", 0x8B, 0x45, 0x13, 0xFF),
    (Salmon, "Salmon", 0xFA, 0x80, 0x72, 0xFF),
    (SandyBrown, "SandyBrown", 0xF4, 0xA4, 0x60, 0xFF),
    (SeaGreen, "SeaGreen", 0x2E, 0x8B, 0x57, 0xFF),
    (SeaShell, "SeaShell", 0xFF, 0xF5, 0xEE, 0xFF),
    (Sienna, "Sienna", 0xA0, 0x52, 0x2D, 0xFF),
    (Silver, "Silver", 0xC0, 0xC0, 0xC0, 0xFF),
    (SkyBlue, "SkyBlue", 0x87, 0xCE, 0xEB, 0xFF),
    (SlateBlue, "SlateBlue", 0x6A, 0x5A, 0xCD, 0xFF),
    (SlateGray, "SlateGray", 0x70, 0x80, 0x90, 0xFF),
    (Snow, "Snow", 0xFF, 0xFA, 0xFA, 0xFF),
    (SpringGreen, "SpringGreen", 0x00, 0xFF, 0x7F, 0xFF),
    (SteelBlue, "SteelBlue", 0x46, 0x82, 0xB4, 0xFF),
    (Tan, "Tan", 0xD2, 0xB4, 0x8C, 0xFF),
    (Teal, "Teal", 0x00, 0x80, 0x80, 0xFF),
    (Thistle, "Thistle", 0xD8, 0xBF, 0xD8, 0xFF),
    (Tomato, "Tomato", 0xFF, 0x63, 0x47, 0xFF),
    (Turquoise, "Turquoise", 0x40, 0xE0, 0xD0, 0xFF),
    (Violet, "Violet", 0xEE, 0x82, 0xEE, 0xFF),
    (Wheat, "Wheat", 0xF5, 0xDE, 0xB3, 0xFF),
    (White, "White", 0xFF, 0xFF, 0xFF, 0xFF),
    (WhiteSmoke, "WhiteSmoke", 0xF5, 0xF5, 0xF5, 0xFF),
    (Yellow, "Yellow", 0xFF, 0xFF, 0x00, 0xFF),
    (YellowGreen, "YellowGreen", 0x9A, 0xCD, 0x32, 0xFF),
    (ButtonFace, "ButtonFace", 0xF0, 0xF0, 0xF0, 0xFF),
    (ButtonHighlight, "ButtonHighlight", 0xFF, 0xFF, 0xFF, 0xFF),
    (ButtonShadow, "ButtonShadow", 0xA0, 0xA0, 0xA0, 0xFF),
    (GradientActiveCaption, "GradientActiveCaption", 0xB9, 0xD1, 0xEA, 0xFF),
    (GradientInactiveCaption, "GradientInactiveCaption", 0xD7, 0xE4, 0xF2, 0xFF),
    (MenuBar, "MenuBar", 0xF0, 0xF0, 0xF0, 0xFF),
    (MenuHighlight, "MenuHighlight", 0x33, 0x99, 0xFF, 0xFF),
    (RebeccaPurple, "RebeccaPurple", 0x66, 0x33, 0x99, 0xFF),
}
