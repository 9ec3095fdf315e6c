//! File-manager named decoders.

use fdo_catalog::AtomDefinition;
use fdo_syntax::ArgumentNode;

use crate::decode::DecodeCx;
use crate::errors::Result;
use crate::tables::fm;

pub(super) fn decode(
    _cx: &DecodeCx<'_>,
    def: &AtomDefinition,
    payload: &[u8],
) -> Option<Result<Vec<ArgumentNode>>> {
    match def.name.as_str() {
        "fm_item_type" | "fm_item_get" | "fm_item_set" => Some(Ok(items(payload))),
        "fm_handle_error" => Some(Ok(error_flags(payload))),
        _ => None,
    }
}

fn items(payload: &[u8]) -> Vec<ArgumentNode> {
    payload
        .iter()
        .map(|&b| match fm::item_field_name(b) {
            Some(name) => ArgumentNode::Ident(name.into()),
            None => ArgumentNode::Number(i64::from(b)),
        })
        .collect()
}

fn error_flags(payload: &[u8]) -> Vec<ArgumentNode> {
    if let [byte] = payload {
        if let Some(names) = fm::error_flag_names(*byte) {
            if !names.is_empty() {
                return vec![if names.len() == 1 {
                    ArgumentNode::Ident(names[0].into())
                } else {
                    ArgumentNode::Piped(
                        names.into_iter().map(|n| ArgumentNode::Ident(n.into())).collect(),
                    )
                }];
            }
        }
        return vec![ArgumentNode::Number(i64::from(*byte))];
    }
    match payload {
        [] => Vec::new(),
        other => vec![ArgumentNode::Hex(other.to_vec())],
    }
}
