//! Host-forms attribute overrides. Everything here is 32-bit big-endian
//! words, per the host database layout.

use fdo_catalog::AtomDefinition;
use fdo_syntax::{escape, ArgumentNode, AtomNode};

use crate::encode::{primitives, typed, EncodeCx};
use crate::errors::{CodecError, Result};
use crate::tables::hfs;

pub(super) fn encode(
    _cx: &EncodeCx<'_>,
    def: &AtomDefinition,
    atom: &AtomNode,
) -> Option<Result<Vec<u8>>> {
    match def.name.as_str() {
        "hfs_attr_flags" => Some(flag_word(atom)),
        "hfs_attr_database_type" => Some(database_type(atom)),
        "hfs_attr_checkbox_mapping" => Some(checkbox_mapping(atom)),
        "hfs_attr_field_mapping" | "hfs_attr_variable_mapping" => Some(word_pair(atom)),
        _ => None,
    }
}

fn word_of(atom: &AtomNode, arg: &ArgumentNode) -> Result<u32> {
    match arg {
        ArgumentNode::Number(n) => primitives::to_u32(&atom.name, atom.pos, *n),
        other => Err(CodecError::bad_number(
            &atom.name,
            atom.pos,
            format!("expected a number, found {}", primitives::describe(other)),
        )),
    }
}

fn flag_word(atom: &AtomNode) -> Result<Vec<u8>> {
    let items = match atom.arguments.as_slice() {
        [ArgumentNode::Piped(items)] | [ArgumentNode::List(items)] => items.as_slice(),
        other => other,
    };
    let mut word = 0u32;
    for arg in items {
        match arg {
            ArgumentNode::Ident(name) => match hfs::attr_flag(name) {
                Some(flag) => word |= flag,
                None => {
                    return Err(CodecError::unknown_enum(
                        &atom.name,
                        atom.pos,
                        "attribute flag",
                        name,
                    ))
                }
            },
            other => word |= word_of(atom, other)?,
        }
    }
    Ok(word.to_be_bytes().to_vec())
}

fn database_type(atom: &AtomNode) -> Result<Vec<u8>> {
    let word = match typed::flatten(&atom.arguments) {
        [ArgumentNode::Ident(name)] => hfs::database_type_code(name).ok_or_else(|| {
            CodecError::unknown_enum(&atom.name, atom.pos, "database type", name)
        })?,
        [arg] => word_of(atom, arg)?,
        _ => {
            return Err(CodecError::bad_argument(
                &atom.name,
                atom.pos,
                "expected one database type",
            ))
        }
    };
    Ok(word.to_be_bytes().to_vec())
}

fn checkbox_mapping(atom: &AtomNode) -> Result<Vec<u8>> {
    match typed::flatten(&atom.arguments) {
        [number, ArgumentNode::Str(text)] => {
            let mut out = word_of(atom, number)?.to_be_bytes().to_vec();
            out.extend(escape::string_to_bytes(text));
            Ok(out)
        }
        _ => Err(CodecError::bad_argument(
            &atom.name,
            atom.pos,
            "expected a number and a string",
        )),
    }
}

fn word_pair(atom: &AtomNode) -> Result<Vec<u8>> {
    match typed::flatten(&atom.arguments) {
        [a, b] => {
            let mut out = word_of(atom, a)?.to_be_bytes().to_vec();
            out.extend_from_slice(&word_of(atom, b)?.to_be_bytes());
            Ok(out)
        }
        _ => Err(CodecError::bad_argument(
            &atom.name,
            atom.pos,
            "expected two numbers",
        )),
    }
}
