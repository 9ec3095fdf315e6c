//! UNI named decoders.

use fdo_catalog::AtomDefinition;
use fdo_syntax::ArgumentNode;

use crate::decode::{util, DecodeCx};
use crate::errors::Result;
use crate::tables::charset;

pub(super) fn decode(
    _cx: &DecodeCx<'_>,
    def: &AtomDefinition,
    payload: &[u8],
) -> Option<Result<Vec<ArgumentNode>>> {
    match def.name.as_str() {
        "uni_start_typed_data" | "uni_next_atom_typed" => Some(Ok(charset_args(payload))),
        _ => None,
    }
}

fn charset_args(payload: &[u8]) -> Vec<ArgumentNode> {
    if let [hi, lo] = payload {
        let code = u16::from_be_bytes([*hi, *lo]);
        return match charset::name(code) {
            Some(name) => vec![ArgumentNode::Ident(name.into())],
            None => vec![ArgumentNode::Number(i64::from(code))],
        };
    }
    match util::trimmed_be(payload) {
        Some(value) => vec![ArgumentNode::Number(value)],
        None if payload.is_empty() => Vec::new(),
        None => vec![ArgumentNode::Hex(payload.to_vec())],
    }
}
