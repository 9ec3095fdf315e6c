//! Host-forms named decoders.

use fdo_catalog::AtomDefinition;
use fdo_syntax::{escape, ArgumentNode};

use crate::decode::DecodeCx;
use crate::errors::Result;
use crate::tables::hfs;

pub(super) fn decode(
    _cx: &DecodeCx<'_>,
    def: &AtomDefinition,
    payload: &[u8],
) -> Option<Result<Vec<ArgumentNode>>> {
    match def.name.as_str() {
        "hfs_attr_flags" => Some(Ok(flag_word(payload))),
        "hfs_attr_database_type" => Some(Ok(database_type(payload))),
        "hfs_attr_checkbox_mapping" => Some(Ok(checkbox(payload))),
        "hfs_attr_field_mapping" | "hfs_attr_variable_mapping" => Some(Ok(word_pair(payload))),
        _ => None,
    }
}

fn word_of(payload: &[u8]) -> Option<u32> {
    match payload {
        [a, b, c, d] => Some(u32::from_be_bytes([*a, *b, *c, *d])),
        _ => None,
    }
}

fn flag_word(payload: &[u8]) -> Vec<ArgumentNode> {
    if let Some(word) = word_of(payload) {
        if word != 0 {
            if let Some(names) = hfs::attr_flag_names(word) {
                return vec![if names.len() == 1 {
                    ArgumentNode::Ident(names[0].into())
                } else {
                    ArgumentNode::Piped(
                        names.into_iter().map(|n| ArgumentNode::Ident(n.into())).collect(),
                    )
                }];
            }
        }
        return vec![ArgumentNode::Number(i64::from(word))];
    }
    fallback(payload)
}

fn database_type(payload: &[u8]) -> Vec<ArgumentNode> {
    if let Some(word) = word_of(payload) {
        return match hfs::database_type_name(word) {
            Some(name) => vec![ArgumentNode::Ident(name.into())],
            None => vec![ArgumentNode::Number(i64::from(word))],
        };
    }
    fallback(payload)
}

fn checkbox(payload: &[u8]) -> Vec<ArgumentNode> {
    if payload.len() >= 4 {
        let (word, text) = payload.split_at(4);
        let Some(number) = word_of(word) else {
            return fallback(payload);
        };
        return vec![
            ArgumentNode::Number(i64::from(number)),
            ArgumentNode::Str(escape::bytes_to_string(text)),
        ];
    }
    fallback(payload)
}

fn word_pair(payload: &[u8]) -> Vec<ArgumentNode> {
    if payload.len() == 8 {
        let (a, b) = payload.split_at(4);
        if let (Some(first), Some(second)) = (word_of(a), word_of(b)) {
            return vec![
                ArgumentNode::Number(i64::from(first)),
                ArgumentNode::Number(i64::from(second)),
            ];
        }
    }
    fallback(payload)
}

fn fallback(payload: &[u8]) -> Vec<ArgumentNode> {
    match payload {
        [] => Vec::new(),
        other => vec![ArgumentNode::Hex(other.to_vec())],
    }
}
