//! Bit-packed atom frame codec.
//!
//! A frame's first byte holds a 3-bit style code in its top bits and a
//! 5-bit protocol or atom number in its low bits:
//!
//! | style | code | layout |
//! |-------|------|--------|
//! | FULL | 0 | `[proto] [atom] [length] [payload…]` |
//! | LENGTH | 1 | `[1<<5 \| proto] [len<<5 \| atom] [payload…]` (len 0..=7) |
//! | DATA | 2 | `[2<<5 \| proto] [value<<5 \| atom]` (value 0..=7) |
//! | ATOM | 3 | `[3<<5 \| atom]`: protocol 0, empty payload |
//! | ZERO | 5 | `[5<<5 \| atom]`: protocol 0, payload `[0]` |
//! | ONE | 6 | `[6<<5 \| atom]`: protocol 0, payload `[1]` |
//!
//! The FULL length field is one byte for lengths up to 127, otherwise two
//! bytes big-endian with the high bit set on the first. Styles 4 and 7 are
//! unassigned.
//!
//! `encode_frame` always writes FULL: the canonical stream, byte-stable
//! under decode/re-encode. `encode_frame_compact` picks the shortest legal
//! style; the decoder accepts anything either may produce.

use fdo_syntax::SourcePos;

use crate::errors::{CodecError, Result};

pub const PROTOCOL_UNI: u8 = 0;
pub const UNI_START_LARGE_ATOM: u8 = 4;
pub const UNI_LARGE_ATOM_SEGMENT: u8 = 5;
pub const UNI_END_LARGE_ATOM: u8 = 6;

/// Highest protocol the five protocol bits can carry. Protocols above this
/// are client-local and never appear on the wire.
pub const MAX_WIRE_PROTOCOL: u8 = 31;

const MAX_PAYLOAD: usize = 0x7FFF;

const STYLE_FULL: u8 = 0;
const STYLE_LENGTH: u8 = 1;
const STYLE_DATA: u8 = 2;
const STYLE_ATOM: u8 = 3;
const STYLE_ZERO: u8 = 5;
const STYLE_ONE: u8 = 6;

/// One atom as it sits on the wire, minus the style header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtomFrame {
    pub protocol: u8,
    pub atom_number: u8,
    pub payload: Vec<u8>,
}

impl AtomFrame {
    pub fn new(protocol: u8, atom_number: u8, payload: Vec<u8>) -> Self {
        Self {
            protocol,
            atom_number,
            payload,
        }
    }
}

fn check_frame(frame: &AtomFrame) -> Result<()> {
    let at = || format!("{}:{}", frame.protocol, frame.atom_number);
    if frame.protocol > MAX_WIRE_PROTOCOL {
        return Err(CodecError::too_large(
            &at(),
            SourcePos::default(),
            format!("protocol {} is not wire-visible (max 31)", frame.protocol),
        ));
    }
    if frame.payload.len() > MAX_PAYLOAD {
        return Err(CodecError::too_large(
            &at(),
            SourcePos::default(),
            format!("payload of {} bytes exceeds 32767", frame.payload.len()),
        ));
    }
    Ok(())
}

/// Canonical FULL-style encoding.
pub fn encode_frame(frame: &AtomFrame) -> Result<Vec<u8>> {
    check_frame(frame)?;
    let len = frame.payload.len();
    let mut out = Vec::with_capacity(4 + len);
    out.push(frame.protocol);
    out.push(frame.atom_number);
    if len <= 0x7F {
        out.push(len as u8);
    } else {
        out.push(0x80 | (len >> 8) as u8);
        out.push(len as u8);
    }
    out.extend_from_slice(&frame.payload);
    Ok(out)
}

/// Shortest legal encoding. Ties go to the simpler style: the single-byte
/// styles beat DATA, DATA beats LENGTH, LENGTH beats FULL.
pub fn encode_frame_compact(frame: &AtomFrame) -> Result<Vec<u8>> {
    check_frame(frame)?;
    let small_atom = frame.atom_number <= 0x1F;
    if frame.protocol == 0 && small_atom {
        match frame.payload.as_slice() {
            [] => return Ok(vec![STYLE_ATOM << 5 | frame.atom_number]),
            [0x00] => return Ok(vec![STYLE_ZERO << 5 | frame.atom_number]),
            [0x01] => return Ok(vec![STYLE_ONE << 5 | frame.atom_number]),
            _ => {}
        }
    }
    if small_atom {
        if frame.payload.len() == 1 && frame.payload[0] <= 7 {
            return Ok(vec![
                STYLE_DATA << 5 | frame.protocol,
                frame.payload[0] << 5 | frame.atom_number,
            ]);
        }
        if frame.payload.len() <= 7 {
            let mut out = Vec::with_capacity(2 + frame.payload.len());
            out.push(STYLE_LENGTH << 5 | frame.protocol);
            out.push((frame.payload.len() as u8) << 5 | frame.atom_number);
            out.extend_from_slice(&frame.payload);
            return Ok(out);
        }
    }
    encode_frame(frame)
}

/// Decodes one frame starting at `offset`, returning it with the number of
/// bytes consumed.
pub fn decode_frame(bytes: &[u8], offset: usize) -> Result<(AtomFrame, usize)> {
    let eof = |at: usize| CodecError::UnexpectedEof { offset: at };
    let first = *bytes.get(offset).ok_or_else(|| eof(offset))?;
    let style = first >> 5;
    let low = first & 0x1F;
    match style {
        STYLE_FULL => {
            let atom_number = *bytes.get(offset + 1).ok_or_else(|| eof(offset + 1))?;
            let len_byte = *bytes.get(offset + 2).ok_or_else(|| eof(offset + 2))?;
            let (len, header) = if len_byte & 0x80 == 0 {
                (usize::from(len_byte), 3)
            } else {
                let lo = *bytes.get(offset + 3).ok_or_else(|| eof(offset + 3))?;
                (usize::from(len_byte & 0x7F) << 8 | usize::from(lo), 4)
            };
            let start = offset + header;
            let end = start + len;
            let payload = bytes.get(start..end).ok_or_else(|| eof(bytes.len()))?;
            Ok((AtomFrame::new(low, atom_number, payload.to_vec()), header + len))
        }
        STYLE_LENGTH => {
            let second = *bytes.get(offset + 1).ok_or_else(|| eof(offset + 1))?;
            let len = usize::from(second >> 5);
            let start = offset + 2;
            let end = start + len;
            let payload = bytes.get(start..end).ok_or_else(|| eof(bytes.len()))?;
            Ok((AtomFrame::new(low, second & 0x1F, payload.to_vec()), 2 + len))
        }
        STYLE_DATA => {
            let second = *bytes.get(offset + 1).ok_or_else(|| eof(offset + 1))?;
            Ok((AtomFrame::new(low, second & 0x1F, vec![second >> 5]), 2))
        }
        STYLE_ATOM => Ok((AtomFrame::new(0, low, Vec::new()), 1)),
        STYLE_ZERO => Ok((AtomFrame::new(0, low, vec![0x00]), 1)),
        STYLE_ONE => Ok((AtomFrame::new(0, low, vec![0x01]), 1)),
        _ => Err(CodecError::invalid(
            offset,
            format!("unassigned frame style {style}"),
        )),
    }
}

/// Splits a whole byte stream into frames.
pub fn decode_stream_frames(bytes: &[u8]) -> Result<Vec<AtomFrame>> {
    let mut frames = Vec::new();
    let mut offset = 0;
    while offset < bytes.len() {
        let (frame, consumed) = decode_frame(bytes, offset)?;
        frames.push(frame);
        offset += consumed;
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rt(frame: AtomFrame) {
        for encoded in [
            encode_frame(&frame).unwrap(),
            encode_frame_compact(&frame).unwrap(),
        ] {
            let (decoded, consumed) = decode_frame(&encoded, 0).unwrap();
            assert_eq!(consumed, encoded.len());
            assert_eq!(decoded, frame);
        }
    }

    #[test]
    fn full_style_layout() {
        let frame = AtomFrame::new(2, 4, vec![0xAA; 6]);
        let bytes = encode_frame(&frame).unwrap();
        assert_eq!(&bytes[..3], &[0x02, 0x04, 0x06]);
        rt(frame);
    }

    #[test]
    fn full_style_long_length() {
        let frame = AtomFrame::new(27, 5, vec![0x55; 300]);
        let bytes = encode_frame(&frame).unwrap();
        assert_eq!(&bytes[..4], &[27, 5, 0x81, 0x2C]);
        assert_eq!(bytes.len(), 304);
        rt(frame);
    }

    #[test]
    fn compact_picks_single_byte_styles() {
        assert_eq!(
            encode_frame_compact(&AtomFrame::new(0, 1, vec![])).unwrap(),
            [0x61]
        );
        assert_eq!(
            encode_frame_compact(&AtomFrame::new(0, 2, vec![0x00])).unwrap(),
            [0xA2]
        );
        assert_eq!(
            encode_frame_compact(&AtomFrame::new(0, 2, vec![0x01])).unwrap(),
            [0xC2]
        );
    }

    #[test]
    fn compact_data_and_length_styles() {
        // Single byte 0..=7 with a nonzero protocol: DATA.
        assert_eq!(
            encode_frame_compact(&AtomFrame::new(16, 4, vec![0x05])).unwrap(),
            [0x50, 0xA4]
        );
        // Short payload: LENGTH with the count in the top bits.
        assert_eq!(
            encode_frame_compact(&AtomFrame::new(16, 5, vec![0x10, 0x20])).unwrap(),
            [0x30, 0x45, 0x10, 0x20]
        );
        // Eight bytes no longer fits LENGTH.
        let long = AtomFrame::new(16, 5, vec![0x10; 8]);
        assert_eq!(encode_frame_compact(&long).unwrap()[0], 0x10);
        rt(long);
    }

    #[test]
    fn compact_never_longer_than_any_style() {
        // Every legal alternative for these frames is at least as long.
        let frames = [
            AtomFrame::new(0, 0, vec![]),
            AtomFrame::new(0, 31, vec![0x01]),
            AtomFrame::new(1, 0, vec![0x07]),
            AtomFrame::new(31, 31, vec![1, 2, 3, 4, 5, 6, 7]),
            AtomFrame::new(0, 32, vec![]),
            AtomFrame::new(3, 200, vec![0xFF; 40]),
        ];
        for frame in frames {
            let compact = encode_frame_compact(&frame).unwrap().len();
            let full = encode_frame(&frame).unwrap().len();
            assert!(compact <= full, "{frame:?}");
            rt(frame);
        }
    }

    #[test]
    fn decoder_rejects_unassigned_styles() {
        for first in [0x80u8, 0xE0] {
            assert!(matches!(
                decode_frame(&[first, 0, 0], 0),
                Err(CodecError::InvalidBinaryFormat { .. })
            ));
        }
    }

    #[test]
    fn truncation_is_eof() {
        // FULL header promising more payload than present.
        assert!(matches!(
            decode_frame(&[0x00, 0x01, 0x05, 0xAA], 0),
            Err(CodecError::UnexpectedEof { .. })
        ));
        assert!(matches!(
            decode_frame(&[0x00], 0),
            Err(CodecError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn wire_protocol_limit() {
        let frame = AtomFrame::new(51, 0, vec![]);
        assert!(matches!(
            encode_frame(&frame),
            Err(CodecError::ValueTooLarge { .. })
        ));
    }

    #[test]
    fn stream_splitting_consumes_everything() {
        let frames = decode_stream_frames(&[
            0x00, 0x01, 0x00, // FULL uni_start_stream
            0x61, // ATOM style
            0x02, 0x04, 0x02, 0xAB, 0xCD, // FULL with payload
        ])
        .unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2].payload, [0xAB, 0xCD]);
    }
}
