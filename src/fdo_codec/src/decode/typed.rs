//! Per-type fallback decoders. Payloads that do not fit the type's shape
//! degrade to hex arguments (re-encoding hex reproduces the bytes), never
//! to a structural error.

use fdo_catalog::{AtomDefinition, AtomType};
use fdo_syntax::{escape, ArgumentNode};

use crate::decode::{nested, util, DecodeCx};
use crate::errors::Result;
use crate::gid::{decode_gid, GidForm};
use crate::tables::{alert, criterion, object_type, orient};

/// Atoms whose three-byte GID blobs carry `(0, subtype, id)` rather than
/// `(type, id)`.
fn gid_form(name: &str) -> GidForm {
    match name {
        "dod_gid" | "idb_set_context" => GidForm::SubtypeId,
        _ => GidForm::TypeId,
    }
}

pub(super) fn decode(
    cx: &DecodeCx<'_>,
    def: &AtomDefinition,
    payload: &[u8],
) -> Result<Vec<ArgumentNode>> {
    if payload.is_empty() {
        return Ok(Vec::new());
    }
    Ok(match def.atom_type {
        AtomType::Raw | AtomType::Ignore => vec![ArgumentNode::Hex(payload.to_vec())],
        AtomType::Dword => match util::trimmed_be(payload) {
            Some(value) => vec![ArgumentNode::Number(value)],
            None => vec![ArgumentNode::Hex(payload.to_vec())],
        },
        AtomType::String => vec![ArgumentNode::Str(escape::bytes_to_string(payload))],
        AtomType::Bool | AtomType::BoolLegacy => payload.iter().map(|&b| bool_arg(b)).collect(),
        AtomType::Gid => match decode_gid(payload, gid_form(&def.name)) {
            Ok(gid) => vec![ArgumentNode::Gid(gid)],
            Err(_) => vec![ArgumentNode::Hex(payload.to_vec())],
        },
        AtomType::Stream | AtomType::StreamLegacy => nested::decode(cx, payload)?,
        AtomType::ObjStart => objstart_args(payload),
        AtomType::Orient => payload
            .iter()
            .map(|&b| match orient::name(b) {
                Some(name) => ArgumentNode::Ident(name),
                None => ArgumentNode::Number(i64::from(b)),
            })
            .collect(),
        AtomType::Token | AtomType::TokenArg => token_args(def.atom_type, payload),
        AtomType::Alert | AtomType::AlertLegacy => alert_args(payload),
        AtomType::Atom => atom_reference_args(cx, payload),
        AtomType::ColorData => payload
            .iter()
            .map(|&b| ArgumentNode::Number(i64::from(b)))
            .collect(),
        AtomType::Criterion | AtomType::CriterionLegacy => criterion_args(payload),
        AtomType::Var | AtomType::VarLookup => var_free_args(payload),
        AtomType::VarDword => var_number_args(payload),
        AtomType::VarString => var_string_args(payload),
        AtomType::ByteList => payload
            .iter()
            .map(|&b| ArgumentNode::Number(i64::from(b)))
            .collect(),
    })
}

fn bool_arg(byte: u8) -> ArgumentNode {
    match byte {
        0 => ArgumentNode::Ident("no".into()),
        1 => ArgumentNode::Ident("yes".into()),
        other => ArgumentNode::Number(i64::from(other)),
    }
}

/// Shared by ACT and every other criterion-typed atom.
pub(super) fn criterion_args(payload: &[u8]) -> Vec<ArgumentNode> {
    if let [code] = payload {
        if let Some(name) = criterion::name(*code) {
            return vec![ArgumentNode::Ident(name.into())];
        }
    }
    match util::trimmed_be(payload) {
        Some(value) => vec![ArgumentNode::Number(value)],
        None => vec![ArgumentNode::Hex(payload.to_vec())],
    }
}

fn objstart_args(payload: &[u8]) -> Vec<ArgumentNode> {
    match payload {
        [] => Vec::new(),
        [code] => vec![ArgumentNode::Ident(object_type::name_or_unknown(*code))],
        [code, title @ ..] => vec![ArgumentNode::ObjectType {
            type_name: object_type::name_or_unknown(*code),
            title: escape::bytes_to_string(title),
        }],
    }
}

fn alert_args(payload: &[u8]) -> Vec<ArgumentNode> {
    match payload {
        [] => Vec::new(),
        [code, message @ ..] => {
            let head = match alert::name(*code) {
                Some(name) => ArgumentNode::Ident(name.into()),
                None => ArgumentNode::Number(i64::from(*code)),
            };
            if message.is_empty() {
                vec![head]
            } else {
                vec![head, ArgumentNode::Str(escape::bytes_to_string(message))]
            }
        }
    }
}

fn atom_reference_args(cx: &DecodeCx<'_>, payload: &[u8]) -> Vec<ArgumentNode> {
    if let [protocol, number] = payload {
        if let Some(referenced) = cx.catalog.find_by_key(*protocol, *number) {
            return vec![ArgumentNode::Ident(referenced.name.clone())];
        }
    }
    vec![ArgumentNode::Hex(payload.to_vec())]
}

/// Tokens are two printable bytes; TOKENARG carries a value after them.
fn token_args(atom_type: AtomType, payload: &[u8]) -> Vec<ArgumentNode> {
    if atom_type == AtomType::TokenArg && payload.len() > 2 {
        let (token, rest) = payload.split_at(2);
        if util::printable(token) {
            let mut args = vec![ArgumentNode::Str(escape::bytes_to_string(token))];
            args.push(match util::trimmed_be(rest) {
                Some(value) if !util::printable(rest) => ArgumentNode::Number(value),
                _ if util::printable(rest) => ArgumentNode::Str(escape::bytes_to_string(rest)),
                _ => ArgumentNode::Hex(rest.to_vec()),
            });
            return args;
        }
    }
    if util::printable(payload) {
        vec![ArgumentNode::Str(escape::bytes_to_string(payload))]
    } else {
        vec![ArgumentNode::Hex(payload.to_vec())]
    }
}

fn var_letter(byte: u8) -> Option<ArgumentNode> {
    (byte < 26).then(|| ArgumentNode::Ident(char::from(b'A' + byte).to_string()))
}

fn var_free_args(payload: &[u8]) -> Vec<ArgumentNode> {
    let Some((first, rest)) = payload.split_first() else {
        return Vec::new();
    };
    let Some(letter) = var_letter(*first) else {
        return vec![ArgumentNode::Hex(payload.to_vec())];
    };
    if rest.is_empty() {
        return vec![letter];
    }
    let value = if util::printable(rest) {
        ArgumentNode::Str(escape::bytes_to_string(rest))
    } else {
        match util::trimmed_be(rest) {
            Some(n) => ArgumentNode::Number(n),
            None => ArgumentNode::Hex(rest.to_vec()),
        }
    };
    vec![letter, value]
}

fn var_number_args(payload: &[u8]) -> Vec<ArgumentNode> {
    let Some((first, rest)) = payload.split_first() else {
        return Vec::new();
    };
    let Some(letter) = var_letter(*first) else {
        return vec![ArgumentNode::Hex(payload.to_vec())];
    };
    if rest.is_empty() {
        return vec![letter];
    }
    match util::trimmed_be(rest) {
        Some(n) => vec![letter, ArgumentNode::Number(n)],
        None => vec![letter, ArgumentNode::Hex(rest.to_vec())],
    }
}

fn var_string_args(payload: &[u8]) -> Vec<ArgumentNode> {
    let Some((first, rest)) = payload.split_first() else {
        return Vec::new();
    };
    let Some(letter) = var_letter(*first) else {
        return vec![ArgumentNode::Hex(payload.to_vec())];
    };
    if rest.is_empty() {
        return vec![letter];
    }
    vec![letter, ArgumentNode::Str(escape::bytes_to_string(rest))]
}
