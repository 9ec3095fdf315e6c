//! Orientation codes: `[direction][h_justify][v_justify]` identifiers such
//! as `hlt` or `vff`.
//!
//! The byte is `direction_bit_6 | h_justify << 3 | v_justify` with justify
//! codes c=0, l/t=1, r/b=2, f=3, e=4. The canonical-combination table is
//! consulted before the pattern, and is the source of the decode spellings
//! (`l`/`r` horizontally, `t`/`b` vertically).

use phf::phf_map;

static COMBOS: phf::Map<&'static str, u8> = phf_map! {
    "hcc" => 0x00, "hct" => 0x01, "hcb" => 0x02, "hcf" => 0x03, "hce" => 0x04,
    "hlc" => 0x08, "hlt" => 0x09, "hlb" => 0x0A, "hlf" => 0x0B, "hle" => 0x0C,
    "hrc" => 0x10, "hrt" => 0x11, "hrb" => 0x12, "hrf" => 0x13, "hre" => 0x14,
    "hfc" => 0x18, "hft" => 0x19, "hfb" => 0x1A, "hff" => 0x1B, "hfe" => 0x1C,
    "hec" => 0x20, "het" => 0x21, "heb" => 0x22, "hef" => 0x23, "hee" => 0x24,
    "vcc" => 0x40, "vct" => 0x41, "vcb" => 0x42, "vcf" => 0x43, "vce" => 0x44,
    "vlc" => 0x48, "vlt" => 0x49, "vlb" => 0x4A, "vlf" => 0x4B, "vle" => 0x4C,
    "vrc" => 0x50, "vrt" => 0x51, "vrb" => 0x52, "vrf" => 0x53, "vre" => 0x54,
    "vfc" => 0x58, "vft" => 0x59, "vfb" => 0x5A, "vff" => 0x5B, "vfe" => 0x5C,
    "vec" => 0x60, "vet" => 0x61, "veb" => 0x62, "vef" => 0x63, "vee" => 0x64,
};

fn justify_code(c: char) -> Option<u8> {
    Some(match c {
        'c' => 0,
        'l' | 't' => 1,
        'r' | 'b' => 2,
        'f' => 3,
        'e' => 4,
        _ => return None,
    })
}

/// Name → byte. The combination table wins; other spellings (for instance
/// `vtb`, mixing the vertical letters into the horizontal slot) go through
/// the pattern.
pub fn code(name: &str) -> Option<u8> {
    if let Some(&c) = COMBOS.get(name) {
        return Some(c);
    }
    let mut chars = name.chars();
    let (dir, hj, vj) = (chars.next()?, chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }
    let dir_bit = match dir {
        'h' => 0x00,
        'v' => 0x40,
        _ => return None,
    };
    Some(dir_bit | justify_code(hj)? << 3 | justify_code(vj)?)
}

/// Byte → canonical three-letter name. Bytes outside the pattern (stray
/// high bit, justify code above 4) have no name and decode numerically.
pub fn name(code: u8) -> Option<String> {
    if code & 0x80 != 0 {
        return None;
    }
    let dir = if code & 0x40 != 0 { 'v' } else { 'h' };
    let hj = match (code >> 3) & 0x07 {
        0 => 'c',
        1 => 'l',
        2 => 'r',
        3 => 'f',
        4 => 'e',
        _ => return None,
    };
    let vj = match code & 0x07 {
        0 => 'c',
        1 => 't',
        2 => 'b',
        3 => 'f',
        4 => 'e',
        _ => return None,
    };
    Some([dir, hj, vj].iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values() {
        assert_eq!(code("vff"), Some(0x5B));
        assert_eq!(code("hef"), Some(0x23));
        assert_eq!(code("hcc"), Some(0x00));
    }

    #[test]
    fn table_and_pattern_agree() {
        for (name_str, &byte) in COMBOS.entries() {
            let mut chars = name_str.chars();
            let dir = if chars.next() == Some('v') { 0x40 } else { 0 };
            let hj = justify_code(chars.next().unwrap()).unwrap();
            let vj = justify_code(chars.next().unwrap()).unwrap();
            assert_eq!(byte, dir | hj << 3 | vj, "{name_str}");
        }
    }

    #[test]
    fn every_combo_round_trips() {
        for (name_str, &byte) in COMBOS.entries() {
            assert_eq!(name(byte).as_deref(), Some(*name_str));
        }
    }

    #[test]
    fn out_of_pattern_bytes_have_no_name() {
        assert_eq!(name(0x80), None);
        assert_eq!(name(0x07), None); // v_justify 7
        assert_eq!(name(0x38), None); // h_justify 7
    }
}
