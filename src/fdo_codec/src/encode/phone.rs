//! Connection-layer overrides: a handful of atoms carry clamped 16-bit
//! big-endian words.

use fdo_catalog::AtomDefinition;
use fdo_syntax::{ArgumentNode, AtomNode};

use crate::encode::{primitives, typed, EncodeCx};
use crate::errors::{CodecError, Result};

pub(super) fn encode(
    _cx: &EncodeCx<'_>,
    def: &AtomDefinition,
    atom: &AtomNode,
) -> Option<Result<Vec<u8>>> {
    match def.name.as_str() {
        "phone_port_list" | "phone_ready_to_connect" | "comit_reboot" | "comit_restart" => {
            Some(words(atom))
        }
        _ => None,
    }
}

fn words(atom: &AtomNode) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for arg in typed::flatten(&atom.arguments) {
        match arg {
            ArgumentNode::Number(n) => out.extend_from_slice(&primitives::word_be(*n)),
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
