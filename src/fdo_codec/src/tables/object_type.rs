//! OBJSTART object-type codes. 0–14 are the basic display classes, 15–28
//! the extended set; several extended codes have a second, newer spelling.

use phf::phf_map;

static CODES: phf::Map<&'static str, u8> = phf_map! {
    "org_group" => 0,
    "ind_group" => 1,
    "dms_list" => 2,
    "sms_list" => 3,
    "dss_list" => 4,
    "sss_list" => 5,
    "trigger" => 6,
    "ornament" => 7,
    "view" => 8,
    "edit_view" => 9,
    "boolean" => 10,
    "select_boolean" => 11,
    "range" => 12,
    "select_range" => 13,
    "variable" => 14,
    "ruler" => 15,
    "bad_object" => 15,
    "root" => 16,
    "popup_menu" => 16,
    "rich_text" => 17,
    "tool_group" => 17,
    "multimedia" => 18,
    "tab_group" => 18,
    "chart" => 19,
    "tab_page" => 19,
    "pictalk" => 20,
    "www" => 21,
    "split" => 22,
    "organizer" => 23,
    "tree" => 24,
    "tab" => 25,
    "progress" => 26,
    "toolbar" => 27,
    "slider" => 28,
};

pub fn code(name: &str) -> Option<u8> {
    CODES.get(name).copied()
}

/// Lenient lookup for the encoder: `unknown_N` carries its own code, and
/// anything else falls back to `ind_group`.
pub fn code_or_default(name: &str) -> u8 {
    if let Some(c) = code(name) {
        return c;
    }
    if let Some(n) = name.strip_prefix("unknown_") {
        if let Ok(c) = n.parse::<u8>() {
            return c;
        }
    }
    1
}

pub fn name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "org_group",
        1 => "ind_group",
        2 => "dms_list",
        3 => "sms_list",
        4 => "dss_list",
        5 => "sss_list",
        6 => "trigger",
        7 => "ornament",
        8 => "view",
        9 => "edit_view",
        10 => "boolean",
        11 => "select_boolean",
        12 => "range",
        13 => "select_range",
        14 => "variable",
        15 => "ruler",
        16 => "root",
        17 => "rich_text",
        18 => "multimedia",
        19 => "chart",
        20 => "pictalk",
        21 => "www",
        22 => "split",
        23 => "organizer",
        24 => "tree",
        25 => "tab",
        26 => "progress",
        27 => "toolbar",
        28 => "slider",
        _ => return None,
    })
}

/// Canonical decode spelling: known codes by name, others as `unknown_N`.
pub fn name_or_unknown(code: u8) -> String {
    match name(code) {
        Some(n) => n.to_string(),
        None => format!("unknown_{code}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_share_codes() {
        assert_eq!(code("ruler"), code("bad_object"));
        assert_eq!(code("root"), code("popup_menu"));
        assert_eq!(code("chart"), Some(19));
    }

    #[test]
    fn every_canonical_name_round_trips() {
        for c in 0..=28u8 {
            let n = name(c).unwrap();
            assert_eq!(code(n), Some(c));
        }
    }

    #[test]
    fn unknown_names_and_codes() {
        assert_eq!(code_or_default("unknown_77"), 77);
        assert_eq!(code_or_default("not_a_thing"), 1);
        assert_eq!(name_or_unknown(77), "unknown_77");
    }
}
