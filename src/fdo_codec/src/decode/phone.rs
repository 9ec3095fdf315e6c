//! Connection-layer named decoders: sequences of 16-bit big-endian words.

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
        "phone_port_list" | "phone_ready_to_connect" | "comit_reboot" | "comit_restart" => {
            Some(Ok(words(payload)))
        }
        _ => None,
    }
}

fn words(payload: &[u8]) -> Vec<ArgumentNode> {
    if payload.is_empty() {
        return Vec::new();
    }
    if payload.len() % 2 != 0 {
        return vec![ArgumentNode::Hex(payload.to_vec())];
    }
    payload
        .chunks_exact(2)
        .map(|pair| ArgumentNode::Number(i64::from(u16::from_be_bytes([pair[0], pair[1]]))))
        .collect()
}
