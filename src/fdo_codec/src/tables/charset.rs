//! Charset identifiers for `uni_start_typed_data` / `uni_next_atom_typed`.
//! Two bytes big-endian on the wire; anything unrecognized encodes as the
//! default (ascii).

pub const DEFAULT: u16 = 0x0000;

pub fn code(name: &str) -> Option<u16> {
    Some(match name {
        "ascii" => 0x0000,
        "latin1" => 0x0104,
        _ => return None,
    })
}

pub fn name(code: u16) -> Option<&'static str> {
    Some(match code {
        0x0000 => "ascii",
        0x0104 => "latin1",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        assert_eq!(code(name(0x0104).unwrap()), Some(0x0104));
        assert_eq!(code("utf16"), None);
    }
}
