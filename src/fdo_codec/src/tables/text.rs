//! Font identifiers and text style flags for `mat_font_sis`.

use phf::phf_map;

static FONTS: phf::Map<&'static str, u8> = phf_map! {
    "arial" => 0,
    "courier" => 1,
    "times" => 2,
    "system" => 3,
    "helvetica" => 4,
    "ms_sans_serif" => 5,
    "ms_serif" => 6,
    "small_fonts" => 7,
    "symbol" => 8,
    "script" => 9,
};

/// A misspelled font has no default; the caller fails the compile.
pub fn font_code(name: &str) -> Option<u8> {
    FONTS.get(name).copied()
}

pub fn font_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "arial",
        1 => "courier",
        2 => "times",
        3 => "system",
        4 => "helvetica",
        5 => "ms_sans_serif",
        6 => "ms_serif",
        7 => "small_fonts",
        8 => "symbol",
        9 => "script",
        _ => return None,
    })
}

static STYLES: phf::Map<&'static str, u8> = phf_map! {
    "bold" => 1,
    "italic" => 2,
    "underline" => 4,
    "strikeout" => 8,
};

pub fn style_flag(name: &str) -> Option<u8> {
    STYLES.get(name).copied()
}

/// Flag byte → the set names, lowest bit first. Unknown bits yield `None`
/// so the decoder falls back to a number.
pub fn style_names(code: u8) -> Option<Vec<&'static str>> {
    if code & !0x0F != 0 {
        return None;
    }
    let mut names = Vec::new();
    for (flag, name) in [(1, "bold"), (2, "italic"), (4, "underline"), (8, "strikeout")] {
        if code & flag != 0 {
            names.push(name);
        }
    }
    Some(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fonts_round_trip() {
        for c in 0..=9u8 {
            assert_eq!(font_code(font_name(c).unwrap()), Some(c));
        }
        assert_eq!(font_code("ariel"), None);
    }

    #[test]
    fn style_combinations() {
        assert_eq!(style_names(0x05).unwrap(), ["bold", "underline"]);
        assert_eq!(style_names(0x00).unwrap(), Vec::<&str>::new());
        assert_eq!(style_names(0x10), None);
    }
}
