//! Alert-type codes (first payload byte of ALERT atoms).

use phf::phf_map;

static CODES: phf::Map<&'static str, u8> = phf_map! {
    "info" => 1,
    "error" => 2,
    "pop_info" => 3,
    "pop_error" => 4,
    "warning" => 5,
    "pop_warning" => 6,
    "yes_no" => 7,
    "yes_no_cancel" => 8,
};

pub fn code(name: &str) -> Option<u8> {
    CODES.get(name).copied()
}

pub fn name(code: u8) -> Option<&'static str> {
    Some(match code {
        1 => "info",
        2 => "error",
        3 => "pop_info",
        4 => "pop_error",
        5 => "warning",
        6 => "pop_warning",
        7 => "yes_no",
        8 => "yes_no_cancel",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        for c in 1..=8u8 {
            assert_eq!(code(name(c).unwrap()), Some(c));
        }
        assert_eq!(name(0), None);
        assert_eq!(code("nope"), None);
    }
}
