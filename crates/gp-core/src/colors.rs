//! Named X11 / web colors.

use crate::color::Color;

macro_rules! named_colors {
    ($($konst:ident = $name:literal ($r:literal, $g:literal, $b:literal);)*) => {
        impl Color {
            $(pub const $konst: Color = Color::rgb($r, $g, $b);)*
        }

        /// Every named color, in table order, keyed by its CamelCase name.
        pub const NAMED_COLORS: &[(&str, Color)] = &[$(($name, Color::$konst)),*];
    };
}

named_colors! {
    // Pink colors
    MEDIUM_VIOLET_RED = "MediumVioletRed" (199, 21, 133);
    DEEP_PINK = "DeepPink" (255, 20, 147);
    PALE_VIOLET_RED = "PaleVioletRed" (219, 112, 147);
    HOT_PINK = "HotPink" (255, 105, 180);
    LIGHT_PINK = "LightPink" (255, 182, 193);
    PINK = "Pink" (255, 192, 203);

    // Red colors
    DARK_RED = "DarkRed" (139, 0, 0);
    RED = "Red" (255, 0, 0);
    FIREBRICK = "Firebrick" (178, 34, 34);
    CRIMSON = "Crimson" (220, 20, 60);
    INDIAN_RED = "IndianRed" (205, 92, 92);
    LIGHT_CORAL = "LightCoral" (240, 128, 128);
    SALMON = "Salmon" (250, 128, 114);
    DARK_SALMON = "DarkSalmon" (233, 150, 122);
    LIGHT_SALMON = "LightSalmon" (255, 160, 122);

    // Orange colors
    ORANGE_RED = "OrangeRed" (255, 69, 0);
    TOMATO = "Tomato" (255, 99, 71);
    DARK_ORANGE = "DarkOrange" (255, 140, 0);
    CORAL = "Coral" (255, 127, 80);
    ORANGE = "Orange" (255, 165, 0);

    // Yellow colors
    DARK_KHAKI = "DarkKhaki" (189, 183, 107);
    GOLD = "Gold" (255, 215, 0);
    KHAKI = "Khaki" (240, 230, 140);
    PEACH_PUFF = "PeachPuff" (255, 218, 185);
    YELLOW = "Yellow" (255, 255, 0);
    PALE_GOLDENROD = "PaleGoldenrod" (238, 232, 170);
    MOCCASIN = "Moccasin" (255, 228, 181);
    PAPAYA_WHIP = "PapayaWhip" (255, 239, 213);
    LIGHT_GOLDENROD_YELLOW = "LightGoldenrodYellow" (250, 250, 210);
    LEMON_CHIFFON = "LemonChiffon" (255, 250, 205);
    LIGHT_YELLOW = "LightYellow" (255, 255, 224);

    // Brown colors
    MAROON = "Maroon" (128, 0, 0);
    BROWN = "Brown" (165, 42, 42);
    SADDLE_BROWN = "SaddleBrown" (139, 69, 19);
    SIENNA = "Sienna" (160, 82, 45);
    CHOCOLATE = "Chocolate" (210, 105, 30);
    DARK_GOLDENROD = "DarkGoldenrod" (184, 134, 11);
    PERU = "Peru" (205, 133, 63);
    ROSY_BROWN = "RosyBrown" (188, 143, 143);
    GOLDENROD = "Goldenrod" (218, 165, 32);
    SANDY_BROWN = "SandyBrown" (244, 164, 96);
    TAN = "Tan" (210, 180, 140);
    BURLYWOOD = "Burlywood" (222, 184, 135);
    WHEAT = "Wheat" (245, 222, 179);
    NAVAJO_WHITE = "NavajoWhite" (255, 222, 173);
    BISQUE = "Bisque" (255, 228, 196);
    BLANCHED_ALMOND = "BlanchedAlmond" (255, 235, 205);
    CORNSILK = "Cornsilk" (255, 248, 220);

    // Green colors
    DARK_GREEN = "DarkGreen" (0, 100, 0);
    GREEN = "Green" (0, 128, 0);
    DARK_OLIVE_GREEN = "DarkOliveGreen" (85, 107, 47);
    FOREST_GREEN = "ForestGreen" (34, 139, 34);
    SEA_GREEN = "SeaGreen" (46, 139, 87);
    OLIVE = "Olive" (128, 128, 0);
    OLIVE_DRAB = "OliveDrab" (107, 142, 35);
    MEDIUM_SEA_GREEN = "MediumSeaGreen" (60, 179, 113);
    LIME_GREEN = "LimeGreen" (50, 205, 50);
    LIME = "Lime" (0, 255, 0);
    SPRING_GREEN = "SpringGreen" (0, 255, 127);
    MEDIUM_SPRING_GREEN = "MediumSpringGreen" (0, 250, 154);
    DARK_SEA_GREEN = "DarkSeaGreen" (143, 188, 143);
    MEDIUM_AQUAMARINE = "MediumAquamarine" (102, 205, 170);
    YELLOW_GREEN = "YellowGreen" (154, 205, 50);
    LAWN_GREEN = "LawnGreen" (124, 252, 0);
    CHARTREUSE = "Chartreuse" (127, 255, 0);
    LIGHT_GREEN = "LightGreen" (144, 238, 144);
    GREEN_YELLOW = "GreenYellow" (173, 255, 47);
    PALE_GREEN = "PaleGreen" (152, 251, 152);

    // Cyan colors
    TEAL = "Teal" (0, 128, 128);
    DARK_CYAN = "DarkCyan" (0, 139, 139);
    LIGHT_SEA_GREEN = "LightSeaGreen" (32, 178, 170);
    CADET_BLUE = "CadetBlue" (95, 158, 160);
    DARK_TURQUOISE = "DarkTurquoise" (0, 206, 209);
    MEDIUM_TURQUOISE = "MediumTurquoise" (72, 209, 204);
    TURQUOISE = "Turquoise" (64, 224, 208);
    AQUA = "Aqua" (0, 255, 255);
    CYAN = "Cyan" (0, 255, 255);
    AQUAMARINE = "Aquamarine" (127, 255, 212);
    PALE_TURQUOISE = "PaleTurquoise" (175, 238, 238);
    LIGHT_CYAN = "LightCyan" (224, 255, 255);

    // Blue colors
    NAVY = "Navy" (0, 0, 128);
    DARK_BLUE = "DarkBlue" (0, 0, 139);
    MEDIUM_BLUE = "MediumBlue" (0, 0, 205);
    BLUE = "Blue" (0, 0, 255);
    MIDNIGHT_BLUE = "MidnightBlue" (25, 25, 112);
    ROYAL_BLUE = "RoyalBlue" (65, 105, 225);
    STEEL_BLUE = "SteelBlue" (70, 130, 180);
    DODGER_BLUE = "DodgerBlue" (30, 144, 255);
    DEEP_SKY_BLUE = "DeepSkyBlue" (0, 191, 255);
    CORNFLOWER_BLUE = "CornflowerBlue" (100, 149, 237);
    SKY_BLUE = "SkyBlue" (135, 206, 235);
    LIGHT_SKY_BLUE = "LightSkyBlue" (135, 206, 250);
    LIGHT_STEEL_BLUE = "LightSteelBlue" (176, 196, 222);
    LIGHT_BLUE = "LightBlue" (173, 216, 230);
    POWDER_BLUE = "PowderBlue" (176, 224, 230);

    // Purple, violet, and magenta colors
    INDIGO = "Indigo" (75, 0, 130);
    PURPLE = "Purple" (128, 0, 128);
    DARK_MAGENTA = "DarkMagenta" (139, 0, 139);
    DARK_VIOLET = "DarkViolet" (148, 0, 211);
    DARK_SLATE_BLUE = "DarkSlateBlue" (72, 61, 139);
    BLUE_VIOLET = "BlueViolet" (138, 43, 226);
    DARK_ORCHID = "DarkOrchid" (153, 50, 204);
    FUCHSIA = "Fuchsia" (255, 0, 255);
    MAGENTA = "Magenta" (255, 0, 255);
    SLATE_BLUE = "SlateBlue" (106, 90, 205);
    MEDIUM_SLATE_BLUE = "MediumSlateBlue" (123, 104, 238);
    MEDIUM_ORCHID = "MediumOrchid" (186, 85, 211);
    MEDIUM_PURPLE = "MediumPurple" (147, 112, 219);
    ORCHID = "Orchid" (218, 112, 214);
    VIOLET = "Violet" (238, 130, 238);
    PLUM = "Plum" (221, 160, 221);
    THISTLE = "Thistle" (216, 191, 216);
    LAVENDER = "Lavender" (230, 230, 250);

    // White colors
    MISTY_ROSE = "MistyRose" (255, 228, 225);
    ANTIQUE_WHITE = "AntiqueWhite" (250, 235, 215);
    LINEN = "Linen" (250, 240, 230);
    BEIGE = "Beige" (245, 245, 220);
    WHITE_SMOKE = "WhiteSmoke" (245, 245, 245);
    LAVENDER_BLUSH = "LavenderBlush" (255, 240, 245);
    OLD_LACE = "OldLace" (253, 245, 230);
    ALICE_BLUE = "AliceBlue" (240, 248, 255);
    SEASHELL = "Seashell" (255, 245, 238);
    GHOST_WHITE = "GhostWhite" (248, 248, 255);
    HONEYDEW = "Honeydew" (240, 255, 240);
    FLORAL_WHITE = "FloralWhite" (255, 250, 240);
    AZURE = "Azure" (240, 255, 255);
    MINT_CREAM = "MintCream" (245, 255, 250);
    SNOW = "Snow" (255, 250, 250);
    IVORY = "Ivory" (255, 255, 240);
    WHITE = "White" (255, 255, 255);

    // Gray and black colors
    BLACK = "Black" (0, 0, 0);
    DARK_SLATE_GRAY = "DarkSlateGray" (47, 79, 79);
    DIM_GRAY = "DimGray" (105, 105, 105);
    SLATE_GRAY = "SlateGray" (112, 128, 144);
    GRAY = "Gray" (128, 128, 128);
    LIGHT_SLATE_GRAY = "LightSlateGray" (119, 136, 153);
    DARK_GRAY = "DarkGray" (169, 169, 169);
    SILVER = "Silver" (192, 192, 192);
    LIGHT_GRAY = "LightGray" (211, 211, 211);
    GAINSBORO = "Gainsboro" (220, 220, 220);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_constants() {
        assert_eq!(Color::from_name("Crimson"), Some(Color::CRIMSON));
        assert_eq!(Color::from_name("lightgoldenrodyellow"), Some(Color::LIGHT_GOLDENROD_YELLOW));
        assert_eq!(Color::from_name("nope"), None);
    }

    #[test]
    fn names_are_unique() {
        for (i, (a, _)) in NAMED_COLORS.iter().enumerate() {
            for (b, _) in &NAMED_COLORS[i + 1..] {
                assert!(!a.eq_ignore_ascii_case(b), "duplicate color name {a}");
            }
        }
    }
}
