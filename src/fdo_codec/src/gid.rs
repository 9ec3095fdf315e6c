//! Variable-length Global ID codec.
//!
//! Four wire shapes, selected by the value's fields:
//!
//! | value | bytes |
//! |-------|-------|
//! | two-part `(T, I)` | `[T, I>>8, I&0xFF]` |
//! | three-part `(0, 0, I<=255)` | `[I]` |
//! | three-part `(0, 0, I)` | `[I>>8, I&0xFF]` |
//! | three-part `(0, S>0, I)` | `[S, I>>8, I&0xFF]` |
//! | three-part `(T>0, S, I)` | `[T, S, I>>8, I&0xFF]` |
//!
//! Decoding a three-byte blob is context-dependent: most atoms treat it as
//! `(T, I)`, a few (`dod_gid`, `idb_set_context`, …) as `(0, S, I)`. The
//! per-atom rules pass the right [`GidForm`].

use fdo_syntax::Gid;

use crate::errors::{CodecError, Result};

/// How a three-byte blob splits. Immaterial for the other lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GidForm {
    /// `[T, I>>8, I&0xFF]`: two-part result.
    #[default]
    TypeId,
    /// `[S, I>>8, I&0xFF]`: three-part result with type 0.
    SubtypeId,
}

pub fn encode_gid(gid: &Gid) -> Vec<u8> {
    match *gid {
        Gid::TwoPart { gid_type, id } => vec![gid_type, (id >> 8) as u8, id as u8],
        Gid::ThreePart { gid_type: 0, subtype: 0, id } => {
            if id <= 0xFF {
                vec![id as u8]
            } else {
                vec![(id >> 8) as u8, id as u8]
            }
        }
        Gid::ThreePart { gid_type: 0, subtype, id } => {
            vec![subtype, (id >> 8) as u8, id as u8]
        }
        Gid::ThreePart { gid_type, subtype, id } => {
            vec![gid_type, subtype, (id >> 8) as u8, id as u8]
        }
    }
}

/// Decodes a whole payload slice as one GID. The caller picks `form` from
/// the atom's rule; lengths other than 1..=4 are malformed.
pub fn decode_gid(bytes: &[u8], form: GidForm) -> Result<Gid> {
    match *bytes {
        [id] => Ok(Gid::three_part(0, 0, u16::from(id))),
        [hi, lo] => Ok(Gid::three_part(0, 0, u16::from_be_bytes([hi, lo]))),
        [first, hi, lo] => {
            let id = u16::from_be_bytes([hi, lo]);
            Ok(match form {
                GidForm::TypeId => Gid::two_part(first, id),
                GidForm::SubtypeId => Gid::three_part(0, first, id),
            })
        }
        [t, s, hi, lo] => Ok(Gid::three_part(t, s, u16::from_be_bytes([hi, lo]))),
        _ => Err(CodecError::invalid(
            0,
            format!("global id blob of {} bytes", bytes.len()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_encode_per_reference() {
        assert_eq!(encode_gid(&Gid::two_part(32, 105)), [0x20, 0x00, 0x69]);
        assert_eq!(encode_gid(&Gid::three_part(0, 0, 7)), [0x07]);
        assert_eq!(encode_gid(&Gid::three_part(0, 0, 300)), [0x01, 0x2C]);
        assert_eq!(encode_gid(&Gid::three_part(0, 3, 300)), [0x03, 0x01, 0x2C]);
        assert_eq!(
            encode_gid(&Gid::three_part(1, 0, 1329)),
            [0x01, 0x00, 0x05, 0x31]
        );
    }

    #[test]
    fn three_byte_decode_depends_on_form() {
        let blob = [0x20, 0x00, 0x69];
        assert_eq!(
            decode_gid(&blob, GidForm::TypeId).unwrap(),
            Gid::two_part(32, 105)
        );
        assert_eq!(
            decode_gid(&blob, GidForm::SubtypeId).unwrap(),
            Gid::three_part(0, 32, 105)
        );
    }

    #[test]
    fn each_shape_class_round_trips() {
        let cases = [
            (Gid::three_part(0, 0, 9), GidForm::TypeId),
            (Gid::three_part(0, 0, 4000), GidForm::TypeId),
            (Gid::two_part(5, 1234), GidForm::TypeId),
            (Gid::three_part(0, 9, 77), GidForm::SubtypeId),
            (Gid::three_part(7, 2, 65535), GidForm::TypeId),
        ];
        for (gid, form) in cases {
            assert_eq!(decode_gid(&encode_gid(&gid), form).unwrap(), gid);
        }
    }

    #[test]
    fn oversized_blob_is_rejected() {
        assert!(decode_gid(&[1, 2, 3, 4, 5], GidForm::TypeId).is_err());
        assert!(decode_gid(&[], GidForm::TypeId).is_err());
    }
}
