//! Small enum and flag tables for the MAT attribute family.

use phf::phf_map;

// --- mat_frame_style (two-byte enum on the wire) ---

static FRAME_STYLES: phf::Map<&'static str, u16> = phf_map! {
    "none" => 0,
    "single" => 1,
    "double" => 2,
    "shadow" => 3,
    "raised" => 4,
    "sunken" => 5,
    "etched" => 6,
    "highlight" => 7,
};

pub fn frame_style_code(name: &str) -> Option<u16> {
    FRAME_STYLES.get(name).copied()
}

pub fn frame_style_name(code: u16) -> Option<&'static str> {
    Some(match code {
        0 => "none",
        1 => "single",
        2 => "double",
        3 => "shadow",
        4 => "raised",
        5 => "sunken",
        6 => "etched",
        7 => "highlight",
        _ => return None,
    })
}

// --- mat_trigger_style (two-byte enum on the wire) ---

static TRIGGER_STYLES: phf::Map<&'static str, u16> = phf_map! {
    "default" => 0,
    "rectangle" => 1,
    "rounded" => 2,
    "check_box" => 3,
    "radio_button" => 4,
    "graphic" => 5,
    "state" => 6,
    "group_state" => 7,
};

pub fn trigger_style_code(name: &str) -> Option<u16> {
    TRIGGER_STYLES.get(name).copied()
}

pub fn trigger_style_name(code: u16) -> Option<&'static str> {
    Some(match code {
        0 => "default",
        1 => "rectangle",
        2 => "rounded",
        3 => "check_box",
        4 => "radio_button",
        5 => "graphic",
        6 => "state",
        7 => "group_state",
        _ => return None,
    })
}

// --- mat_position ---

static POSITIONS: phf::Map<&'static str, u8> = phf_map! {
    "cascade" => 0,
    "center" => 1,
    "top_left" => 2,
    "top_center" => 3,
    "top_right" => 4,
    "middle_left" => 5,
    "middle_right" => 6,
    "bottom_left" => 7,
    "bottom_center" => 8,
    "bottom_right" => 9,
};

pub fn position_code(name: &str) -> Option<u8> {
    POSITIONS.get(name).copied()
}

pub fn position_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "cascade",
        1 => "center",
        2 => "top_left",
        3 => "top_center",
        4 => "top_right",
        5 => "middle_left",
        6 => "middle_right",
        7 => "bottom_left",
        8 => "bottom_center",
        9 => "bottom_right",
        _ => return None,
    })
}

// --- mat_title_pos ---
//
// Base placement in the low bits (legacy names), side selection in bits 6
// and 7: bit 7 alone means right, bits 7+6 below, bit 6 alone above.

static TITLE_POS: phf::Map<&'static str, u8> = phf_map! {
    "top_or_left" => 0x01,
    "bottom_or_right" => 0x02,
    "above" => 0x40,
    "right" => 0x80,
    "below" => 0xC0,
};

pub fn title_pos_flag(name: &str) -> Option<u8> {
    TITLE_POS.get(name).copied()
}

/// Byte → names, base placement first. A nonzero residue outside the known
/// bits decodes numerically.
pub fn title_pos_names(code: u8) -> Option<Vec<&'static str>> {
    let mut names = Vec::new();
    match code & 0x3F {
        0 => {}
        1 => names.push("top_or_left"),
        2 => names.push("bottom_or_right"),
        _ => return None,
    }
    match code & 0xC0 {
        0x00 => {}
        0x40 => names.push("above"),
        0x80 => names.push("right"),
        0xC0 => names.push("below"),
        _ => unreachable!(),
    }
    Some(names)
}

// --- mat_text_on_picture_pos ---
//
// Art placement in the high nibble, title placement in the low nibble; each
// is a 1-based slot on the eight-position ring (no middle_center).

static TEXT_ON_PICTURE: phf::Map<&'static str, u8> = phf_map! {
    "art_top_left" => 0x10,
    "art_top_center" => 0x20,
    "art_top_right" => 0x30,
    "art_middle_left" => 0x40,
    "art_middle_right" => 0x50,
    "art_bottom_left" => 0x60,
    "art_bottom_center" => 0x70,
    "art_bottom_right" => 0x80,
    "title_top_left" => 0x01,
    "title_top_center" => 0x02,
    "title_top_right" => 0x03,
    "title_middle_left" => 0x04,
    "title_middle_right" => 0x05,
    "title_bottom_left" => 0x06,
    "title_bottom_center" => 0x07,
    "title_bottom_right" => 0x08,
};

pub fn text_on_picture_flag(name: &str) -> Option<u8> {
    TEXT_ON_PICTURE.get(name).copied()
}

fn ring_slot(slot: u8) -> Option<&'static str> {
    Some(match slot {
        1 => "top_left",
        2 => "top_center",
        3 => "top_right",
        4 => "middle_left",
        5 => "middle_right",
        6 => "bottom_left",
        7 => "bottom_center",
        8 => "bottom_right",
        _ => return None,
    })
}

pub fn text_on_picture_names(code: u8) -> Option<Vec<String>> {
    let mut names = Vec::new();
    let art = code >> 4;
    let title = code & 0x0F;
    if art != 0 {
        names.push(format!("art_{}", ring_slot(art)?));
    }
    if title != 0 {
        names.push(format!("title_{}", ring_slot(title)?));
    }
    Some(names)
}

// --- mat_auto_complete ---

static AUTO_COMPLETE: phf::Map<&'static str, u8> = phf_map! {
    "web_list" => 0,
    "address_list" => 1,
    "other_list" => 2,
    "std_sort_search" => 1,
};

pub fn auto_complete_code(name: &str) -> Option<u8> {
    AUTO_COMPLETE.get(name).copied()
}

pub fn auto_complete_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "web_list",
        1 => "address_list",
        2 => "other_list",
        _ => return None,
    })
}

// --- one-byte MAT switches ---

static LOG_OBJECT: phf::Map<&'static str, u8> = phf_map! {
    "off" => 0,
    "on" => 1,
    "append" => 2,
};

pub fn log_object_code(name: &str) -> Option<u8> {
    LOG_OBJECT.get(name).copied()
}

pub fn log_object_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "off",
        1 => "on",
        2 => "append",
        _ => return None,
    })
}

static SORT_ORDER: phf::Map<&'static str, u8> = phf_map! {
    "none" => 0,
    "ascending" => 1,
    "descending" => 2,
};

pub fn sort_order_code(name: &str) -> Option<u8> {
    SORT_ORDER.get(name).copied()
}

pub fn sort_order_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "none",
        1 => "ascending",
        2 => "descending",
        _ => return None,
    })
}

static FIELD_SCRIPT: phf::Map<&'static str, u8> = phf_map! {
    "none" => 0,
    "on_change" => 1,
    "on_exit" => 2,
};

pub fn field_script_code(name: &str) -> Option<u8> {
    FIELD_SCRIPT.get(name).copied()
}

pub fn field_script_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "none",
        1 => "on_change",
        2 => "on_exit",
        _ => return None,
    })
}

static TITLE_APPEND: phf::Map<&'static str, u8> = phf_map! {
    "no" => 0,
    "yes" => 1,
};

pub fn title_append_code(name: &str) -> Option<u8> {
    TITLE_APPEND.get(name).copied()
}

pub fn title_append_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "no",
        1 => "yes",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_text_on_picture_values() {
        assert_eq!(text_on_picture_flag("art_middle_right"), Some(0x50));
        assert_eq!(text_on_picture_flag("title_middle_left"), Some(0x04));
        let names = text_on_picture_names(0x54).unwrap();
        assert_eq!(names, ["art_middle_right", "title_middle_left"]);
    }

    #[test]
    fn title_pos_composition() {
        assert_eq!(title_pos_flag("top_or_left"), Some(1));
        assert_eq!(
            title_pos_names(0x81).unwrap(),
            ["top_or_left", "right"]
        );
        assert_eq!(title_pos_names(0xC0).unwrap(), ["below"]);
        assert_eq!(title_pos_names(0x3F), None);
    }

    #[test]
    fn enum_round_trips() {
        for c in 0..=7u16 {
            assert_eq!(frame_style_code(frame_style_name(c).unwrap()), Some(c));
            assert_eq!(trigger_style_code(trigger_style_name(c).unwrap()), Some(c));
        }
        for c in 0..=9u8 {
            assert_eq!(position_code(position_name(c).unwrap()), Some(c));
        }
    }

    #[test]
    fn auto_complete_alias() {
        assert_eq!(auto_complete_code("std_sort_search"), Some(1));
        assert_eq!(auto_complete_name(1), Some("address_list"));
    }
}
