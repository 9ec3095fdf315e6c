//! MAN named decoders.

use fdo_catalog::AtomDefinition;
use fdo_syntax::ArgumentNode;

use crate::decode::DecodeCx;
use crate::errors::Result;
use crate::tables::man;

pub(super) fn decode(
    _cx: &DecodeCx<'_>,
    def: &AtomDefinition,
    payload: &[u8],
) -> Option<Result<Vec<ArgumentNode>>> {
    match def.name.as_str() {
        "man_set_context_relative" | "man_set_context_index" => Some(Ok(fixed_dword(payload))),
        "man_get_display_characteristics" => Some(Ok(characteristics(payload))),
        _ => None,
    }
}

fn fixed_dword(payload: &[u8]) -> Vec<ArgumentNode> {
    match payload {
        [] => Vec::new(),
        [a, b, c, d] => vec![ArgumentNode::Number(i64::from(u32::from_be_bytes([
            *a, *b, *c, *d,
        ])))],
        other => vec![ArgumentNode::Hex(other.to_vec())],
    }
}

fn characteristics(payload: &[u8]) -> Vec<ArgumentNode> {
    let id = |code: u8| match man::characteristic_name(code) {
        Some(name) => ArgumentNode::Ident(name.into()),
        None => ArgumentNode::Number(i64::from(code)),
    };
    match payload {
        [] => Vec::new(),
        [code] => vec![id(*code)],
        [code, value] => vec![id(*code), ArgumentNode::Number(i64::from(*value))],
        other => vec![ArgumentNode::Hex(other.to_vec())],
    }
}
