//! Criterion encoding, shared by the ACT atoms and the CRITERION types.

use fdo_syntax::{ArgumentNode, AtomNode};

use crate::encode::primitives;
use crate::errors::{CodecError, Result};
use crate::tables::criterion;

/// Names map through the criterion table; numeric and hex literals use the
/// trimmed big-endian rule so unlisted codes stay expressible.
pub(super) fn criterion_bytes(atom: &AtomNode, arg: &ArgumentNode) -> Result<Vec<u8>> {
    match arg {
        ArgumentNode::Ident(name) => match criterion::code(name) {
            Some(code) => Ok(primitives::trimmed_be(u32::from(code))),
            None => Err(CodecError::unknown_enum(&atom.name, atom.pos, "criterion", name)),
        },
        ArgumentNode::Number(n) => {
            let value = primitives::to_u32(&atom.name, atom.pos, *n)?;
            Ok(primitives::trimmed_be(value))
        }
        ArgumentNode::Hex(bytes) => Ok(bytes.clone()),
        other => Err(CodecError::bad_argument(
            &atom.name,
            atom.pos,
            format!("expected a criterion, found {}", primitives::describe(other)),
        )),
    }
}
