//! Buffer-management named decoders. Numbers in this protocol read back
//! little-endian.

use fdo_catalog::AtomDefinition;
use fdo_syntax::ArgumentNode;

use crate::decode::{util, DecodeCx};
use crate::errors::Result;
use crate::tables::buf;

pub(super) fn decode(
    _cx: &DecodeCx<'_>,
    def: &AtomDefinition,
    payload: &[u8],
) -> Option<Result<Vec<ArgumentNode>>> {
    match def.name.as_str() {
        "buf_start_buffer" | "buf_use_buffer" | "buf_set_flags" | "buf_get_flags" => {
            Some(Ok(flag_word(payload)))
        }
        "buf_set_buffer_limit" | "buf_save_buffer" => Some(Ok(le_number(payload))),
        _ => None,
    }
}

fn flag_word(payload: &[u8]) -> Vec<ArgumentNode> {
    if let [a, b, c, d] = payload {
        let word = u32::from_be_bytes([*a, *b, *c, *d]);
        if word != 0 {
            if let Some(names) = buf::flag_names(word) {
                return vec![if names.len() == 1 {
                    ArgumentNode::Ident(names[0].into())
                } else {
                    ArgumentNode::Piped(
                        names.into_iter().map(|n| ArgumentNode::Ident(n.into())).collect(),
                    )
                }];
            }
        }
    }
    le_number(payload)
}

fn le_number(payload: &[u8]) -> Vec<ArgumentNode> {
    match payload {
        [] => Vec::new(),
        other => match util::trimmed_le(other) {
            Some(value) => vec![ArgumentNode::Number(value)],
            None => vec![ArgumentNode::Hex(other.to_vec())],
        },
    }
}
