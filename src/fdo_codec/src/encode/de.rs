//! Data-extraction protocol overrides.

use fdo_catalog::AtomDefinition;
use fdo_syntax::{ArgumentNode, AtomNode};

use crate::encode::{primitives, typed, EncodeCx};
use crate::errors::{CodecError, Result};
use crate::tables::de;

pub(super) fn encode(
    _cx: &EncodeCx<'_>,
    def: &AtomDefinition,
    atom: &AtomNode,
) -> Option<Result<Vec<u8>>> {
    match def.name.as_str() {
        "de_set_data_type" | "de_get_data" | "de_get_data_pointer" | "de_get_data_value" => {
            Some(small_enum(atom, de::data_type_code, "data type"))
        }
        "de_set_extraction_type" => Some(small_enum(atom, de::extraction_type_code, "extraction type")),
        "de_validate" => Some(validate_byte(atom)),
        "de_start_extraction" => Some(start_extraction(atom)),
        _ => None,
    }
}

fn small_enum(
    atom: &AtomNode,
    lookup: fn(&str) -> Option<u8>,
    what: &'static str,
) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for arg in typed::flatten(&atom.arguments) {
        match arg {
            ArgumentNode::Ident(name) => match lookup(name) {
                Some(code) => out.push(code),
                None => return Err(CodecError::unknown_enum(&atom.name, atom.pos, what, name)),
            },
            ArgumentNode::Number(n) => out.push(*n as u8),
            other => {
                return Err(CodecError::bad_argument(
                    &atom.name,
                    atom.pos,
                    format!("expected {what}, found {}", primitives::describe(other)),
                ))
            }
        }
    }
    Ok(out)
}

fn validate_byte(atom: &AtomNode) -> Result<Vec<u8>> {
    let mut byte = 0u8;
    for arg in flags_of(&atom.arguments) {
        match arg {
            ArgumentNode::Ident(name) => match de::validate_flag(name) {
                Some(flag) => byte |= flag,
                None => {
                    return Err(CodecError::unknown_enum(
                        &atom.name,
                        atom.pos,
                        "validation flag",
                        name,
                    ))
                }
            },
            ArgumentNode::Number(n) => byte |= *n as u8,
            other => {
                return Err(CodecError::bad_argument(
                    &atom.name,
                    atom.pos,
                    format!("expected validation flags, found {}", primitives::describe(other)),
                ))
            }
        }
    }
    Ok(vec![byte])
}

/// Piped flag identifiers become a 32-bit big-endian word; a bare number
/// keeps the trimmed form (so `<0>` is the single zero byte).
fn start_extraction(atom: &AtomNode) -> Result<Vec<u8>> {
    match atom.arguments.as_slice() {
        [] => Ok(Vec::new()),
        [ArgumentNode::Number(n)] => {
            let value = primitives::to_u32(&atom.name, atom.pos, *n)?;
            Ok(primitives::trimmed_be(value))
        }
        [ArgumentNode::Hex(bytes)] => Ok(bytes.clone()),
        args => {
            let mut word = 0u32;
            for arg in flags_of(args) {
                match arg {
                    ArgumentNode::Ident(name) => match de::extraction_flag(name) {
                        Some(flag) => word |= flag,
                        None => {
                            return Err(CodecError::unknown_enum(
                                &atom.name,
                                atom.pos,
                                "extraction flag",
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
                            format!(
                                "expected extraction flags, found {}",
                                primitives::describe(other)
                            ),
                        ))
                    }
                }
            }
            Ok(word.to_be_bytes().to_vec())
        }
    }
}

/// Flag arguments arrive as one piped node or as loose arguments.
fn flags_of(args: &[ArgumentNode]) -> &[ArgumentNode] {
    match args {
        [ArgumentNode::Piped(items)] | [ArgumentNode::List(items)] => items,
        other => other,
    }
}
