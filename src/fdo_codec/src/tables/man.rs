//! Display characteristic selectors for `man_get_display_characteristics`.

use phf::phf_map;

static CHARACTERISTICS: phf::Map<&'static str, u8> = phf_map! {
    "width" => 0,
    "height" => 1,
    "horzres" => 2,
    "vertres" => 3,
};

pub fn characteristic_code(name: &str) -> Option<u8> {
    CHARACTERISTICS.get(name).copied()
}

pub fn characteristic_name(code: u8) -> Option<&'static str> {
    Some(match code {
        0 => "width",
        1 => "height",
        2 => "horzres",
        3 => "vertres",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        for c in 0..=3u8 {
            assert_eq!(
                characteristic_code(characteristic_name(c).unwrap()),
                Some(c)
            );
        }
    }
}
