//! Modem-interface named decoders.

use fdo_catalog::AtomDefinition;
use fdo_syntax::ArgumentNode;

use crate::decode::DecodeCx;
use crate::errors::Result;

pub(super) fn decode(
    _cx: &DecodeCx<'_>,
    def: &AtomDefinition,
    payload: &[u8],
) -> Option<Result<Vec<ArgumentNode>>> {
    match def.name.as_str() {
        "mip_set_flags" | "mip_get_flags" => Some(Ok(flag_word(payload))),
        _ => None,
    }
}

fn flag_word(payload: &[u8]) -> Vec<ArgumentNode> {
    match payload {
        [] => Vec::new(),
        [a, b, c, d] => vec![ArgumentNode::Number(i64::from(u32::from_be_bytes([
            *a, *b, *c, *d,
        ])))],
        other => vec![ArgumentNode::Hex(other.to_vec())],
    }
}
