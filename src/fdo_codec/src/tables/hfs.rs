//! Host-forms attribute tables (32-bit words on the wire).

use phf::phf_map;

static ATTR_FLAGS: phf::Map<&'static str, u32> = phf_map! {
    "required" => 0x01,
    "read_only" => 0x02,
    "hidden" => 0x04,
    "indexed" => 0x08,
    "multi_line" => 0x10,
    "no_save" => 0x20,
};

pub fn attr_flag(name: &str) -> Option<u32> {
    ATTR_FLAGS.get(name).copied()
}

pub fn attr_flag_names(word: u32) -> Option<Vec<&'static str>> {
    if word & !0x3F != 0 {
        return None;
    }
    let ordered = [
        (0x01, "required"),
        (0x02, "read_only"),
        (0x04, "hidden"),
        (0x08, "indexed"),
        (0x10, "multi_line"),
        (0x20, "no_save"),
    ];
    let mut names = Vec::new();
    for (bit, name) in ordered {
        if word & bit != 0 {
            names.push(name);
        }
    }
    Some(names)
}

static DATABASE_TYPES: phf::Map<&'static str, u32> = phf_map! {
    "none" => 0,
    "flat" => 1,
    "indexed" => 2,
    "relational" => 3,
};

pub fn database_type_code(name: &str) -> Option<u32> {
    DATABASE_TYPES.get(name).copied()
}

pub fn database_type_name(code: u32) -> Option<&'static str> {
    Some(match code {
        0 => "none",
        1 => "flat",
        2 => "indexed",
        3 => "relational",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let names = attr_flag_names(0x0B).unwrap();
        assert_eq!(names, ["required", "read_only", "indexed"]);
        for c in 0..=3u32 {
            assert_eq!(database_type_code(database_type_name(c).unwrap()), Some(c));
        }
    }
}
