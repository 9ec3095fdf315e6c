//! Data-extraction named decoders.

use fdo_catalog::AtomDefinition;
use fdo_syntax::ArgumentNode;

use crate::decode::{util, DecodeCx};
use crate::errors::Result;
use crate::tables::de;

pub(super) fn decode(
    _cx: &DecodeCx<'_>,
    def: &AtomDefinition,
    payload: &[u8],
) -> Option<Result<Vec<ArgumentNode>>> {
    match def.name.as_str() {
        "de_set_data_type" | "de_get_data" | "de_get_data_pointer" | "de_get_data_value" => {
            Some(Ok(small_enum(payload, de::data_type_name)))
        }
        "de_set_extraction_type" => Some(Ok(small_enum(payload, de::extraction_type_name))),
        "de_validate" => Some(Ok(validate(payload))),
        "de_start_extraction" => Some(Ok(start_extraction(payload))),
        _ => None,
    }
}

fn small_enum(payload: &[u8], lookup: fn(u8) -> Option<&'static str>) -> Vec<ArgumentNode> {
    payload
        .iter()
        .map(|&b| match lookup(b) {
            Some(name) => ArgumentNode::Ident(name.into()),
            None => ArgumentNode::Number(i64::from(b)),
        })
        .collect()
}

fn validate(payload: &[u8]) -> Vec<ArgumentNode> {
    if let [byte] = payload {
        if let Some(names) = de::validate_names(*byte) {
            if !names.is_empty() {
                return vec![piped(names)];
            }
        }
        return vec![ArgumentNode::Number(i64::from(*byte))];
    }
    match payload {
        [] => Vec::new(),
        other => vec![ArgumentNode::Hex(other.to_vec())],
    }
}

fn start_extraction(payload: &[u8]) -> Vec<ArgumentNode> {
    if let [a, b, c, d] = payload {
        let word = u32::from_be_bytes([*a, *b, *c, *d]);
        if word != 0 {
            if let Some(names) = de::extraction_flag_names(word) {
                return vec![piped(names)];
            }
        }
    }
    match payload {
        [] => Vec::new(),
        other => match util::trimmed_be(other) {
            Some(value) => vec![ArgumentNode::Number(value)],
            None => vec![ArgumentNode::Hex(other.to_vec())],
        },
    }
}

fn piped(names: Vec<&'static str>) -> ArgumentNode {
    if names.len() == 1 {
        ArgumentNode::Ident(names[0].into())
    } else {
        ArgumentNode::Piped(names.into_iter().map(|n| ArgumentNode::Ident(n.into())).collect())
    }
}
