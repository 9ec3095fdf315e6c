//! `the_unknown <protocol, atom_number, data…>`, the escape hatch that
//! keeps frames without a catalog entry round-trippable.

use fdo_syntax::{ArgumentNode, AtomNode};

use crate::encode::primitives;
use crate::errors::{CodecError, Result};
use crate::frame::AtomFrame;

pub(super) fn encode(atom: &AtomNode) -> Result<AtomFrame> {
    let (protocol, atom_number, data) = match atom.arguments.as_slice() {
        [ArgumentNode::Number(p), ArgumentNode::Number(a), data @ ..] => (*p, *a, data),
        _ => {
            return Err(CodecError::bad_argument(
                &atom.name,
                atom.pos,
                "expected <protocol, atom_number, data…>",
            ))
        }
    };
    if !(0..=127).contains(&protocol) {
        return Err(CodecError::too_large(
            &atom.name,
            atom.pos,
            format!("protocol {protocol} out of range 0..=127"),
        ));
    }
    if !(0..=255).contains(&atom_number) {
        return Err(CodecError::too_large(
            &atom.name,
            atom.pos,
            format!("atom number {atom_number} out of range 0..=255"),
        ));
    }
    let mut payload = Vec::new();
    for arg in data {
        payload.extend(primitives::raw_value_bytes(&atom.name, atom.pos, arg)?);
    }
    Ok(AtomFrame::new(protocol as u8, atom_number as u8, payload))
}
