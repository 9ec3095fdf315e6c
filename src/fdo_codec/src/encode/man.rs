//! MAN protocol overrides.

use fdo_catalog::AtomDefinition;
use fdo_syntax::{ArgumentNode, AtomNode};

use crate::encode::{primitives, typed, EncodeCx};
use crate::errors::{CodecError, Result};
use crate::tables::man;

pub(super) fn encode(
    _cx: &EncodeCx<'_>,
    def: &AtomDefinition,
    atom: &AtomNode,
) -> Option<Result<Vec<u8>>> {
    match def.name.as_str() {
        // Context selectors keep the fixed four-byte form the runtime
        // expects, never the trimmed one.
        "man_set_context_relative" | "man_set_context_index" => Some(fixed_dword(atom)),
        "man_get_display_characteristics" => Some(characteristics(atom)),
        _ => None,
    }
}

fn fixed_dword(atom: &AtomNode) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(4);
    for arg in &atom.arguments {
        match arg {
            ArgumentNode::Number(n) => {
                let value = primitives::to_u32(&atom.name, atom.pos, *n)?;
                out.extend_from_slice(&value.to_be_bytes());
            }
            ArgumentNode::Hex(bytes) => out.extend_from_slice(bytes),
            other => {
                return Err(CodecError::bad_number(
                    &atom.name,
                    atom.pos,
                    format!("expected a number, found {}", primitives::describe(other)),
                ))
            }
        }
    }
    Ok(out)
}

fn characteristics(atom: &AtomNode) -> Result<Vec<u8>> {
    let args = typed::flatten(&atom.arguments);
    let (id, extra) = match args {
        [id] => (id, None),
        [id, ArgumentNode::Number(n)] => (id, Some(*n as u8)),
        _ => {
            return Err(CodecError::bad_argument(
                &atom.name,
                atom.pos,
                "expected a characteristic id and optional value",
            ))
        }
    };
    let code = match id {
        ArgumentNode::Ident(name) => man::characteristic_code(name).ok_or_else(|| {
            CodecError::unknown_enum(&atom.name, atom.pos, "display characteristic", name)
        })?,
        ArgumentNode::Number(n) => *n as u8,
        other => {
            return Err(CodecError::bad_argument(
                &atom.name,
                atom.pos,
                format!("expected a characteristic id, found {}", primitives::describe(other)),
            ))
        }
    };
    let mut out = vec![code];
    out.extend(extra);
    Ok(out)
}
