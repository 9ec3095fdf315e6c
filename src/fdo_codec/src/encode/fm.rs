//! File-manager protocol overrides.

use fdo_catalog::AtomDefinition;
use fdo_syntax::{ArgumentNode, AtomNode};

use crate::encode::{primitives, typed, EncodeCx};
use crate::errors::{CodecError, Result};
use crate::tables::fm;

pub(super) fn encode(
    _cx: &EncodeCx<'_>,
    def: &AtomDefinition,
    atom: &AtomNode,
) -> Option<Result<Vec<u8>>> {
    match def.name.as_str() {
        "fm_item_type" | "fm_item_get" | "fm_item_set" => Some(item_fields(atom)),
        "fm_handle_error" => Some(error_byte(atom)),
        _ => None,
    }
}

fn item_fields(atom: &AtomNode) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for arg in typed::flatten(&atom.arguments) {
        match arg {
            ArgumentNode::Ident(name) => match fm::item_field_code(name) {
                Some(code) => out.push(code),
                None => {
                    return Err(CodecError::unknown_enum(&atom.name, atom.pos, "item field", name))
                }
            },
            ArgumentNode::Number(n) => out.push(*n as u8),
            other => {
                return Err(CodecError::bad_argument(
                    &atom.name,
                    atom.pos,
                    format!("expected an item field, found {}", primitives::describe(other)),
                ))
            }
        }
    }
    Ok(out)
}

fn error_byte(atom: &AtomNode) -> Result<Vec<u8>> {
    let items = match atom.arguments.as_slice() {
        [ArgumentNode::Piped(items)] | [ArgumentNode::List(items)] => items.as_slice(),
        other => other,
    };
    let mut byte = 0u8;
    for arg in items {
        match arg {
            ArgumentNode::Ident(name) => match fm::error_flag(name) {
                Some(flag) => byte |= flag,
                None => {
                    return Err(CodecError::unknown_enum(
                        &atom.name,
                        atom.pos,
                        "error-handling flag",
                        name,
                    ))
                }
            },
            ArgumentNode::Number(n) => byte |= *n as u8,
            other => {
                return Err(CodecError::bad_argument(
                    &atom.name,
                    atom.pos,
                    format!("expected error flags, found {}", primitives::describe(other)),
                ))
            }
        }
    }
    Ok(vec![byte])
}
