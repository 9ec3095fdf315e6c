//! Buffer-management protocol overrides. Flag words are 32-bit big-endian;
//! numeric arguments in this protocol are trimmed little-endian.

use fdo_catalog::AtomDefinition;
use fdo_syntax::{ArgumentNode, AtomNode};

use crate::encode::{primitives, EncodeCx};
use crate::errors::{CodecError, Result};
use crate::tables::buf;

pub(super) fn encode(
    _cx: &EncodeCx<'_>,
    def: &AtomDefinition,
    atom: &AtomNode,
) -> Option<Result<Vec<u8>>> {
    match def.name.as_str() {
        "buf_start_buffer" | "buf_use_buffer" | "buf_set_flags" | "buf_get_flags" => {
            Some(flag_word(atom))
        }
        _ => None,
    }
}

fn flag_word(atom: &AtomNode) -> Result<Vec<u8>> {
    match atom.arguments.as_slice() {
        [] => Ok(Vec::new()),
        [ArgumentNode::Number(n)] => {
            let value = primitives::to_u32(&atom.name, atom.pos, *n)?;
            Ok(primitives::trimmed_le(value))
        }
        [ArgumentNode::Hex(bytes)] => Ok(bytes.clone()),
        args => {
            let items = match args {
                [ArgumentNode::Piped(items)] | [ArgumentNode::List(items)] => items.as_slice(),
                other => other,
            };
            let mut word = 0u32;
            for arg in items {
                match arg {
                    ArgumentNode::Ident(name) => match buf::flag(name) {
                        Some(flag) => word |= flag,
                        None => {
                            return Err(CodecError::unknown_enum(
                                &atom.name,
                                atom.pos,
                                "buffer flag",
                                name,
                            ))
                        }
                    },
                    ArgumentNode::Number(n) => {
                        word |= primitives::to_u32(&atom.name, atom.pos, *n)?;
                    }
                    other => {
                        return Err(CodecError::bad_argument(
                            &atom.name,
                            atom.pos,
                            format!("expected buffer flags, found {}", primitives::describe(other)),
                        ))
                    }
                }
            }
            Ok(word.to_be_bytes().to_vec())
        }
    }
}
