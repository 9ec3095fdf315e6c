//! Modem-interface overrides: the flag atoms carry 32-bit big-endian
//! words.

use fdo_catalog::AtomDefinition;
use fdo_syntax::{ArgumentNode, AtomNode};

use crate::encode::{primitives, EncodeCx};
use crate::errors::{CodecError, Result};

pub(super) fn encode(
    _cx: &EncodeCx<'_>,
    def: &AtomDefinition,
    atom: &AtomNode,
) -> Option<Result<Vec<u8>>> {
    match def.name.as_str() {
        "mip_set_flags" | "mip_get_flags" => Some(flag_word(atom)),
        _ => None,
    }
}

fn flag_word(atom: &AtomNode) -> Result<Vec<u8>> {
    match atom.arguments.as_slice() {
        [] => Ok(Vec::new()),
        [ArgumentNode::Number(n)] => {
            let value = primitives::to_u32(&atom.name, atom.pos, *n)?;
            Ok(value.to_be_bytes().to_vec())
        }
        [ArgumentNode::Hex(bytes)] => Ok(bytes.clone()),
        [other] => Err(CodecError::bad_number(
            &atom.name,
            atom.pos,
            format!("expected a flag word, found {}", primitives::describe(other)),
        )),
        _ => Err(CodecError::bad_argument(
            &atom.name,
            atom.pos,
            "expected one flag word",
        )),
    }
}
