//! TOKEN/TOKENARG payloads: each element encodes by its own shape. The one
//! wrinkle is the two-part GID with type 0, which drops its type byte and
//! keeps only the two id bytes.

use fdo_syntax::{escape, ArgumentNode, Gid, SourcePos};

use crate::encode::primitives;
use crate::errors::{CodecError, Result};
use crate::gid::encode_gid;

pub(super) fn encode(atom: &str, pos: SourcePos, args: &[ArgumentNode]) -> Result<Vec<u8>> {
    let elements = match args {
        [ArgumentNode::List(items)] => items.as_slice(),
        other => other,
    };
    let mut out = Vec::new();
    for element in elements {
        match element {
            ArgumentNode::Str(text) | ArgumentNode::Ident(text) => {
                out.extend(escape::string_to_bytes(text));
            }
            ArgumentNode::Number(n) if (0..=255).contains(n) => out.push(*n as u8),
            ArgumentNode::Number(n) => {
                let value = primitives::to_u32(atom, pos, *n)?;
                out.extend(primitives::trimmed_be(value));
            }
            ArgumentNode::Gid(Gid::TwoPart { gid_type: 0, id }) => {
                out.extend_from_slice(&id.to_be_bytes());
            }
            ArgumentNode::Gid(gid) => out.extend(encode_gid(gid)),
            ArgumentNode::Hex(bytes) => out.extend_from_slice(bytes),
            other => {
                return Err(CodecError::bad_argument(
                    atom,
                    pos,
                    format!("token data cannot hold {}", primitives::describe(other)),
                ))
            }
        }
    }
    Ok(out)
}
