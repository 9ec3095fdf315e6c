//! Data-extraction enum and flag tables.

use phf::phf_map;

static DATA_TYPES: phf::Map<&'static str, u8> = phf_map! {
    "none" => 0,
    "text" => 1,
    "number" => 2,
    "gid" => 3,
    "date" => 4,
    "boolean" => 5,
};

pub fn data_type_code(name: &str) -> Option<u8> {
    DATA_TYPES.get(name).copied()
}

pub fn data_type_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "none",
        1 => "text",
        2 => "number",
        3 => "gid",
        4 => "date",
        5 => "boolean",
        _ => return None,
    })
}

static EXTRACTION_TYPES: phf::Map<&'static str, u8> = phf_map! {
    "none" => 0,
    "all" => 1,
    "first" => 2,
    "selected" => 3,
    "update" => 4,
};

pub fn extraction_type_code(name: &str) -> Option<u8> {
    EXTRACTION_TYPES.get(name).copied()
}

pub fn extraction_type_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "none",
        1 => "all",
        2 => "first",
        3 => "selected",
        4 => "update",
        _ => return None,
    })
}

// de_validate: one flag byte, possibly piped.

static VALIDATE_FLAGS: phf::Map<&'static str, u8> = phf_map! {
    "display_msg" => 1,
    "terminate" => 2,
};

pub fn validate_flag(name: &str) -> Option<u8> {
    VALIDATE_FLAGS.get(name).copied()
}

pub fn validate_names(code: u8) -> Option<Vec<&'static str>> {
    if code & !0x03 != 0 {
        return None;
    }
    let mut names = Vec::new();
    if code & 1 != 0 {
        names.push("display_msg");
    }
    if code & 2 != 0 {
        names.push("terminate");
    }
    Some(names)
}

// de_start_extraction: a 32-bit flag word when piped identifiers are given.

static EXTRACTION_FLAGS: phf::Map<&'static str, u32> = phf_map! {
    "append" => 1,
    "overwrite" => 2,
    "validate" => 4,
    "notify" => 8,
};

pub fn extraction_flag(name: &str) -> Option<u32> {
    EXTRACTION_FLAGS.get(name).copied()
}

pub fn extraction_flag_names(word: u32) -> Option<Vec<&'static str>> {
    if word & !0x0F != 0 {
        return None;
    }
    let mut names = Vec::new();
    for (flag, name) in [(1, "append"), (2, "overwrite"), (4, "validate"), (8, "notify")] {
        if word & flag != 0 {
            names.push(name);
        }
    }
    Some(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        for c in 0..=5u8 {
            assert_eq!(data_type_code(data_type_name(c).unwrap()), Some(c));
        }
        for c in 0..=4u8 {
            assert_eq!(
                extraction_type_code(extraction_type_name(c).unwrap()),
                Some(c)
            );
        }
        assert_eq!(validate_names(3).unwrap(), ["display_msg", "terminate"]);
        assert_eq!(extraction_flag_names(5).unwrap(), ["append", "validate"]);
        assert_eq!(extraction_flag_names(0x100), None);
    }
}
