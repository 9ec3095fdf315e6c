//! Register-variable argument shapes. A variable is one uppercase letter;
//! its byte is the distance from `A`.

use fdo_syntax::{escape, ArgumentNode, AtomNode};

use crate::encode::{primitives, typed};
use crate::errors::{CodecError, Result};

fn letter_byte(atom: &AtomNode, arg: &ArgumentNode) -> Result<u8> {
    if let ArgumentNode::Ident(name) = arg {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_uppercase() {
                return Ok(c as u8 - b'A');
            }
        }
    }
    Err(CodecError::bad_argument(
        &atom.name,
        atom.pos,
        format!(
            "expected a variable letter A..Z, found {}",
            primitives::describe(arg)
        ),
    ))
}

/// `<X>`: just the letter. Extra values encode by their own shape, so the
/// free-form VAR atoms accept `<X, 3>` and `<X, "text">` alike.
pub(super) fn free_form(atom: &AtomNode) -> Result<Vec<u8>> {
    let args = typed::flatten(&atom.arguments);
    if let [ArgumentNode::Hex(bytes)] = args {
        return Ok(bytes.clone());
    }
    let (letter, rest) = match args {
        [letter, rest @ ..] => (letter, rest),
        [] => {
            return Err(CodecError::bad_argument(
                &atom.name,
                atom.pos,
                "expected a variable letter",
            ))
        }
    };
    let mut out = vec![letter_byte(atom, letter)?];
    for arg in rest {
        match arg {
            ArgumentNode::Number(n) => {
                let value = primitives::to_u32(&atom.name, atom.pos, *n)?;
                out.extend(primitives::trimmed_be(value));
            }
            ArgumentNode::Str(text) => out.extend(escape::string_to_bytes(text)),
            ArgumentNode::Hex(bytes) => out.extend_from_slice(bytes),
            other => {
                return Err(CodecError::bad_argument(
                    &atom.name,
                    atom.pos,
                    format!("cannot follow a variable with {}", primitives::describe(other)),
                ))
            }
        }
    }
    Ok(out)
}

/// `<X, n>`: letter byte then the trimmed big-endian number.
pub(super) fn letter_number(atom: &AtomNode) -> Result<Vec<u8>> {
    let args = typed::flatten(&atom.arguments);
    match args {
        [ArgumentNode::Hex(bytes)] => Ok(bytes.clone()),
        [letter] => Ok(vec![letter_byte(atom, letter)?]),
        [letter, ArgumentNode::Hex(bytes)] => {
            let mut out = vec![letter_byte(atom, letter)?];
            out.extend_from_slice(bytes);
            Ok(out)
        }
        [letter, ArgumentNode::Number(n)] => {
            let mut out = vec![letter_byte(atom, letter)?];
            let value = primitives::to_u32(&atom.name, atom.pos, *n)?;
            out.extend(primitives::trimmed_be(value));
            Ok(out)
        }
        _ => Err(CodecError::bad_argument(
            &atom.name,
            atom.pos,
            "expected a variable letter and a number",
        )),
    }
}

/// `<X, "text">`: letter byte then the unterminated string bytes.
pub(super) fn letter_string(atom: &AtomNode) -> Result<Vec<u8>> {
    let args = typed::flatten(&atom.arguments);
    match args {
        [ArgumentNode::Hex(bytes)] => Ok(bytes.clone()),
        [letter] => Ok(vec![letter_byte(atom, letter)?]),
        [letter, ArgumentNode::Str(text)] => {
            let mut out = vec![letter_byte(atom, letter)?];
            out.extend(escape::string_to_bytes(text));
            Ok(out)
        }
        _ => Err(CodecError::bad_string(
            &atom.name,
            atom.pos,
            "expected a variable letter and a string",
        )),
    }
}
