//! Primitive value encodings shared by the per-atom rules.

use fdo_syntax::{escape, ArgumentNode, SourcePos};

use crate::errors::{CodecError, Result};
use crate::gid::encode_gid;

/// Minimum big-endian bytes for the magnitude; zero is one zero byte.
pub fn trimmed_be(value: u32) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let skip = bytes.iter().take(3).take_while(|&&b| b == 0).count();
    bytes[skip..].to_vec()
}

/// Little-endian variant, used by BUF numeric arguments.
pub fn trimmed_le(value: u32) -> Vec<u8> {
    let mut out = trimmed_be(value);
    out.reverse();
    out
}

/// Clamped unsigned 16-bit big-endian.
pub fn word_be(value: i64) -> [u8; 2] {
    let clamped = value.clamp(0, 0xFFFF) as u16;
    clamped.to_be_bytes()
}

/// Numeric argument as an unsigned 32-bit value; negatives pass through as
/// their two's complement.
pub fn to_u32(atom: &str, pos: SourcePos, value: i64) -> Result<u32> {
    if (0..=i64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else if (i64::from(i32::MIN)..0).contains(&value) {
        Ok(value as i32 as u32)
    } else {
        Err(CodecError::too_large(
            atom,
            pos,
            format!("{value} does not fit 32 bits"),
        ))
    }
}

/// The catch-all value encoding used by RAW payloads, `the_unknown` data
/// arguments and nested-stream trailing data: hex bytes pass through,
/// numbers are a single byte, strings are their byte form.
pub fn raw_value_bytes(atom: &str, pos: SourcePos, arg: &ArgumentNode) -> Result<Vec<u8>> {
    match arg {
        ArgumentNode::Hex(bytes) => Ok(bytes.clone()),
        ArgumentNode::Number(n) => Ok(vec![*n as u8]),
        ArgumentNode::Str(text) => Ok(escape::string_to_bytes(text)),
        ArgumentNode::Gid(gid) => Ok(encode_gid(gid)),
        ArgumentNode::List(items) | ArgumentNode::Piped(items) => {
            let mut out = Vec::new();
            for item in items {
                out.extend(raw_value_bytes(atom, pos, item)?);
            }
            Ok(out)
        }
        other => Err(CodecError::bad_argument(
            atom,
            pos,
            format!("cannot encode {} as raw data", describe(other)),
        )),
    }
}

/// Short human name of an argument shape for error messages.
pub fn describe(arg: &ArgumentNode) -> &'static str {
    match arg {
        ArgumentNode::Number(_) => "a number",
        ArgumentNode::Hex(_) => "hex data",
        ArgumentNode::Str(_) => "a string",
        ArgumentNode::Ident(_) => "an identifier",
        ArgumentNode::Gid(_) => "a global id",
        ArgumentNode::ObjectType { .. } => "an object type",
        ArgumentNode::Piped(_) => "piped flags",
        ArgumentNode::List(_) => "a list",
        ArgumentNode::NestedStream { .. } => "a nested stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimming() {
        assert_eq!(trimmed_be(0), [0x00]);
        assert_eq!(trimmed_be(0x2C), [0x2C]);
        assert_eq!(trimmed_be(0x012C), [0x01, 0x2C]);
        assert_eq!(trimmed_be(0x01_0000), [0x01, 0x00, 0x00]);
        assert_eq!(trimmed_be(0xDEAD_BEEF), [0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(trimmed_le(0x012C), [0x2C, 0x01]);
        assert_eq!(trimmed_le(0), [0x00]);
    }

    #[test]
    fn words_clamp() {
        assert_eq!(word_be(0x1234), [0x12, 0x34]);
        assert_eq!(word_be(70000), [0xFF, 0xFF]);
        assert_eq!(word_be(-5), [0x00, 0x00]);
    }

    #[test]
    fn u32_conversion() {
        let pos = SourcePos::default();
        assert_eq!(to_u32("t", pos, -1).unwrap(), 0xFFFF_FFFF);
        assert_eq!(to_u32("t", pos, 0xFFFF_FFFF).unwrap(), u32::MAX);
        assert!(to_u32("t", pos, 0x1_0000_0000).is_err());
    }
}
