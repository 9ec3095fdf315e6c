//! File-manager item fields and error-handling flags.

use phf::phf_map;

static ITEM_FIELDS: phf::Map<&'static str, u8> = phf_map! {
    "name" => 0,
    "path" => 1,
    "size" => 2,
    "date_created" => 3,
    "date_modified" => 4,
    "date_accessed" => 5,
    "attributes" => 6,
    "owner" => 7,
    "group" => 8,
    "drive" => 9,
    "directory" => 10,
    "extension" => 11,
    "short_name" => 12,
    "long_name" => 13,
    "version" => 14,
    "file_type" => 15,
    "creator" => 16,
    "icon" => 17,
    "label" => 18,
    "serial_number" => 19,
    "free_space" => 20,
    "total_space" => 21,
    "used_space" => 22,
    "file_count" => 23,
    "dir_count" => 24,
    "read_only" => 25,
    "hidden" => 26,
    "system" => 27,
    "archive" => 28,
    "compressed" => 29,
    "encrypted" => 30,
    "temporary" => 31,
    "offline" => 32,
    "sparse" => 33,
    "link_target" => 34,
    "checksum" => 35,
    "description" => 36,
    "comment" => 37,
    "mime_type" => 38,
    "encoding" => 39,
};

pub fn item_field_code(name: &str) -> Option<u8> {
    ITEM_FIELDS.get(name).copied()
}

pub fn item_field_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "name",
        1 => "path",
        2 => "size",
        3 => "date_created",
        4 => "date_modified",
        5 => "date_accessed",
        6 => "attributes",
        7 => "owner",
        8 => "group",
        9 => "drive",
        10 => "directory",
        11 => "extension",
        12 => "short_name",
        13 => "long_name",
        14 => "version",
        15 => "file_type",
        16 => "creator",
        17 => "icon",
        18 => "label",
        19 => "serial_number",
        20 => "free_space",
        21 => "total_space",
        22 => "used_space",
        23 => "file_count",
        24 => "dir_count",
        25 => "read_only",
        26 => "hidden",
        27 => "system",
        28 => "archive",
        29 => "compressed",
        30 => "encrypted",
        31 => "temporary",
        32 => "offline",
        33 => "sparse",
        34 => "link_target",
        35 => "checksum",
        36 => "description",
        37 => "comment",
        38 => "mime_type",
        39 => "encoding",
        _ => return None,
    })
}

static ERROR_FLAGS: phf::Map<&'static str, u8> = phf_map! {
    "display_msg" => 1,
    "terminate" => 2,
    "broadcast" => 4,
};

pub fn error_flag(name: &str) -> Option<u8> {
    ERROR_FLAGS.get(name).copied()
}

pub fn error_flag_names(code: u8) -> Option<Vec<&'static str>> {
    if code & !0x07 != 0 {
        return None;
    }
    let mut names = Vec::new();
    for (bit, name) in [(1, "display_msg"), (2, "terminate"), (4, "broadcast")] {
        if code & bit != 0 {
            names.push(name);
        }
    }
    Some(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forty_fields_round_trip() {
        for c in 0..40u8 {
            assert_eq!(item_field_code(item_field_name(c).unwrap()), Some(c));
        }
        assert_eq!(item_field_name(40), None);
    }

    #[test]
    fn error_flags() {
        assert_eq!(
            error_flag_names(7).unwrap(),
            ["display_msg", "terminate", "broadcast"]
        );
        assert_eq!(error_flag_names(8), None);
    }
}
