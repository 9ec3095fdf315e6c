//! Type-driven default encodings, used when no name or protocol rule
//! claimed the atom.

use fdo_catalog::{AtomDefinition, AtomType};
use fdo_syntax::{escape, ArgumentNode, AtomNode};

use crate::encode::{nested, primitives, token, var, EncodeCx};
use crate::errors::{CodecError, Result};
use crate::gid::encode_gid;
use crate::tables::{alert, object_type, orient};

pub(super) fn encode(cx: &EncodeCx<'_>, def: &AtomDefinition, atom: &AtomNode) -> Result<Vec<u8>> {
    match def.atom_type {
        AtomType::Raw | AtomType::Ignore => {
            let mut out = Vec::new();
            for arg in &atom.arguments {
                // Object-data atoms carry atom references and sub-streams
                // inside otherwise raw payloads.
                if let ArgumentNode::NestedStream { stream, trailing } = arg {
                    out.extend(nested::encode(cx, atom, stream, trailing)?);
                } else {
                    out.extend(primitives::raw_value_bytes(&atom.name, atom.pos, arg)?);
                }
            }
            Ok(out)
        }
        AtomType::Dword => {
            let mut out = Vec::new();
            for arg in &atom.arguments {
                out.extend(dword_bytes(def, atom, arg)?);
            }
            Ok(out)
        }
        AtomType::String => {
            let mut out = Vec::new();
            for arg in &atom.arguments {
                out.extend(string_bytes(atom, arg)?);
            }
            Ok(out)
        }
        AtomType::Bool | AtomType::BoolLegacy => {
            let mut out = Vec::new();
            for arg in &atom.arguments {
                out.push(bool_byte(atom, arg)?);
            }
            Ok(out)
        }
        AtomType::Gid => {
            let mut out = Vec::new();
            for arg in &atom.arguments {
                out.extend(gid_bytes(atom, arg)?);
            }
            Ok(out)
        }
        AtomType::Stream | AtomType::StreamLegacy => stream_payload(cx, atom),
        AtomType::ObjStart => objstart_payload(atom),
        AtomType::Orient => {
            let mut out = Vec::new();
            for arg in &atom.arguments {
                out.push(orient_byte(atom, arg));
            }
            Ok(out)
        }
        AtomType::Token | AtomType::TokenArg => token::encode(&atom.name, atom.pos, &atom.arguments),
        AtomType::Alert | AtomType::AlertLegacy => alert_payload(atom),
        AtomType::Atom => {
            let mut out = Vec::new();
            for arg in &atom.arguments {
                out.extend(atom_reference(cx, atom, arg)?);
            }
            Ok(out)
        }
        AtomType::ColorData => colordata_payload(atom),
        AtomType::Criterion | AtomType::CriterionLegacy => {
            let mut out = Vec::new();
            for arg in &atom.arguments {
                out.extend(super::act::criterion_bytes(atom, arg)?);
            }
            Ok(out)
        }
        AtomType::Var | AtomType::VarLookup => var::free_form(atom),
        AtomType::VarDword => var::letter_number(atom),
        AtomType::VarString => var::letter_string(atom),
        AtomType::ByteList => {
            let mut out = Vec::new();
            for arg in flatten(&atom.arguments) {
                match arg {
                    ArgumentNode::Number(n) => out.push(*n as u8),
                    ArgumentNode::Hex(bytes) => out.extend_from_slice(bytes),
                    other => {
                        return Err(CodecError::bad_argument(
                            &atom.name,
                            atom.pos,
                            format!("byte list cannot hold {}", primitives::describe(other)),
                        ))
                    }
                }
            }
            Ok(out)
        }
    }
}

/// A single `List` argument flattens so `<a, b>` and `<<a, b>>` encode the
/// same way.
pub(super) fn flatten(args: &[ArgumentNode]) -> &[ArgumentNode] {
    match args {
        [ArgumentNode::List(items)] => items,
        other => other,
    }
}

pub(super) fn dword_bytes(
    def: &AtomDefinition,
    atom: &AtomNode,
    arg: &ArgumentNode,
) -> Result<Vec<u8>> {
    match arg {
        ArgumentNode::Number(n) => {
            let value = primitives::to_u32(&atom.name, atom.pos, *n)?;
            // BUF numerics are the one little-endian spot in the protocol.
            if def.protocol == 4 {
                Ok(primitives::trimmed_le(value))
            } else {
                Ok(primitives::trimmed_be(value))
            }
        }
        ArgumentNode::Hex(bytes) => Ok(bytes.clone()),
        other => Err(CodecError::bad_number(
            &atom.name,
            atom.pos,
            format!("expected a number, found {}", primitives::describe(other)),
        )),
    }
}

fn string_bytes(atom: &AtomNode, arg: &ArgumentNode) -> Result<Vec<u8>> {
    match arg {
        ArgumentNode::Str(text) | ArgumentNode::Ident(text) => Ok(escape::string_to_bytes(text)),
        ArgumentNode::Hex(bytes) => Ok(bytes.clone()),
        ArgumentNode::Number(n) => Ok(n.to_string().into_bytes()),
        other => Err(CodecError::bad_string(
            &atom.name,
            atom.pos,
            format!("expected a string, found {}", primitives::describe(other)),
        )),
    }
}

pub(super) fn bool_byte(atom: &AtomNode, arg: &ArgumentNode) -> Result<u8> {
    match arg {
        ArgumentNode::Ident(word) => match word.as_str() {
            "yes" | "true" => Ok(1),
            "no" | "false" => Ok(0),
            other => Err(CodecError::unknown_enum(&atom.name, atom.pos, "boolean", other)),
        },
        ArgumentNode::Number(n) => Ok(*n as u8),
        other => Err(CodecError::bad_argument(
            &atom.name,
            atom.pos,
            format!("expected yes/no, found {}", primitives::describe(other)),
        )),
    }
}

fn gid_bytes(atom: &AtomNode, arg: &ArgumentNode) -> Result<Vec<u8>> {
    match arg {
        ArgumentNode::Gid(gid) => Ok(encode_gid(gid)),
        // A bare number is the id of the short zero-type shape.
        ArgumentNode::Number(n) if (0..=0xFFFF).contains(n) => Ok(encode_gid(
            &fdo_syntax::Gid::three_part(0, 0, *n as u16),
        )),
        ArgumentNode::Hex(bytes) => Ok(bytes.clone()),
        other => Err(CodecError::bad_gid(
            &atom.name,
            atom.pos,
            format!("expected a global id, found {}", primitives::describe(other)),
        )),
    }
}

fn stream_payload(cx: &EncodeCx<'_>, atom: &AtomNode) -> Result<Vec<u8>> {
    match atom.arguments.as_slice() {
        [] => Ok(Vec::new()),
        [ArgumentNode::NestedStream { stream, trailing }] => {
            nested::encode(cx, atom, stream, trailing)
        }
        // `<atom_name>` parses as a bare identifier; it is the one-atom
        // reference shape.
        [ArgumentNode::Ident(name)] => match cx.catalog.find_by_name(name) {
            Some(referenced) => Ok(vec![referenced.protocol, referenced.atom_number]),
            None => Err(CodecError::UnrecognizedAtom {
                name: name.clone(),
                pos: atom.pos,
            }),
        },
        // Pre-encoded payloads pass straight through.
        [ArgumentNode::Hex(bytes)] => Ok(bytes.clone()),
        _ => Err(CodecError::bad_argument(
            &atom.name,
            atom.pos,
            "expected a nested stream argument",
        )),
    }
}

fn objstart_payload(atom: &AtomNode) -> Result<Vec<u8>> {
    let (code, title) = match code_and_text(&atom.arguments) {
        Some((head, title)) => (
            match head {
                Head::Name(name) => object_type::code_or_default(name),
                Head::Code(code) => code,
            },
            title,
        ),
        None => {
            return Err(CodecError::bad_argument(
                &atom.name,
                atom.pos,
                "expected an object type and optional title",
            ))
        }
    };
    let mut out = vec![code];
    if let Some(text) = title {
        out.extend(escape::string_to_bytes(text));
    }
    Ok(out)
}

fn alert_payload(atom: &AtomNode) -> Result<Vec<u8>> {
    let (code, message) = match code_and_text(&atom.arguments) {
        Some((head, message)) => (
            match head {
                // Unknown alert types fall back to zero rather than
                // failing.
                Head::Name(name) => alert::code(name).unwrap_or_else(|| {
                    log::warn!("unknown alert type `{name}`, encoding as 0");
                    0
                }),
                Head::Code(code) => code,
            },
            message,
        ),
        None => {
            return Err(CodecError::bad_argument(
                &atom.name,
                atom.pos,
                "expected an alert type and message",
            ))
        }
    };
    let mut out = vec![code];
    if let Some(text) = message {
        out.extend(escape::string_to_bytes(text));
    }
    Ok(out)
}

enum Head<'a> {
    Name(&'a str),
    Code(u8),
}

/// The `(type, optional string)` shape arrives as an `ObjectType` node, as
/// two separate arguments, or as a two-element list; the type may be a
/// symbolic name or a raw code.
fn code_and_text(args: &[ArgumentNode]) -> Option<(Head<'_>, Option<&str>)> {
    match flatten(args) {
        [ArgumentNode::ObjectType { type_name, title }] => {
            Some((Head::Name(type_name), Some(title)))
        }
        [ArgumentNode::Ident(name)] => Some((Head::Name(name), None)),
        [ArgumentNode::Ident(name), ArgumentNode::Str(text)] => {
            Some((Head::Name(name), Some(text)))
        }
        [ArgumentNode::Number(code)] => Some((Head::Code(*code as u8), None)),
        [ArgumentNode::Number(code), ArgumentNode::Str(text)] => {
            Some((Head::Code(*code as u8), Some(text)))
        }
        _ => None,
    }
}

fn atom_reference(cx: &EncodeCx<'_>, atom: &AtomNode, arg: &ArgumentNode) -> Result<Vec<u8>> {
    match arg {
        ArgumentNode::Ident(name) => match cx.catalog.find_by_name(name) {
            Some(def) => Ok(vec![def.protocol, def.atom_number]),
            None => Err(CodecError::UnrecognizedAtom {
                name: name.clone(),
                pos: atom.pos,
            }),
        },
        // References the catalog cannot name decode as raw bytes.
        ArgumentNode::Hex(bytes) => Ok(bytes.clone()),
        other => Err(CodecError::bad_argument(
            &atom.name,
            atom.pos,
            format!("expected an atom name, found {}", primitives::describe(other)),
        )),
    }
}

fn colordata_payload(atom: &AtomNode) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for arg in flatten(&atom.arguments) {
        match arg {
            ArgumentNode::Number(n) => out.push(*n as u8),
            ArgumentNode::Hex(bytes) => out.extend_from_slice(bytes),
            other => {
                return Err(CodecError::bad_argument(
                    &atom.name,
                    atom.pos,
                    format!("color data cannot hold {}", primitives::describe(other)),
                ))
            }
        }
    }
    Ok(out)
}

fn orient_byte(atom: &AtomNode, arg: &ArgumentNode) -> u8 {
    match arg {
        ArgumentNode::Ident(name) => orient::code(name).unwrap_or_else(|| {
            log::warn!("unknown orientation `{name}` in `{}`, encoding as 0", atom.name);
            0
        }),
        ArgumentNode::Number(n) => *n as u8,
        _ => 0,
    }
}
