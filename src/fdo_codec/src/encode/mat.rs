//! MAT attribute overrides. Name-specific rules dominate the type defaults
//! for this family.

use fdo_catalog::AtomDefinition;
use fdo_syntax::{ArgumentNode, AtomNode};

use crate::encode::{primitives, typed, EncodeCx};
use crate::errors::{CodecError, Result};
use crate::tables::{mat, text};

pub(super) fn encode(
    _cx: &EncodeCx<'_>,
    def: &AtomDefinition,
    atom: &AtomNode,
) -> Option<Result<Vec<u8>>> {
    match def.name.as_str() {
        "mat_font_sis" => Some(font_sis(atom)),
        "mat_size" => Some(size(atom)),
        "mat_title_pos" => Some(title_pos(atom)),
        "mat_text_on_picture_pos" => Some(text_on_picture(atom)),
        "mat_frame_style" => Some(wide_enum(atom, mat::frame_style_code, "frame style")),
        "mat_trigger_style" => Some(wide_enum(atom, mat::trigger_style_code, "trigger style")),
        "mat_auto_complete" => Some(auto_complete(atom)),
        "mat_position" => Some(narrow_enum(atom, mat::position_code, "position")),
        "mat_log_object" => Some(narrow_enum(atom, mat::log_object_code, "log mode")),
        "mat_sort_order" => Some(narrow_enum(atom, mat::sort_order_code, "sort order")),
        "mat_field_script" => Some(narrow_enum(atom, mat::field_script_code, "field script")),
        "mat_title_append_screen_name" => {
            Some(narrow_enum(atom, mat::title_append_code, "switch"))
        }
        _ => None,
    }
}

/// `<font_id, size, style>` → `[font_code, size_byte, style_code]`. A
/// misspelled font has no default and fails the compile; the style part is
/// optional and may be piped.
fn font_sis(atom: &AtomNode) -> Result<Vec<u8>> {
    let args = typed::flatten(&atom.arguments);
    let (font, size, style) = match args {
        [f, s] => (f, s, None),
        [f, s, st] => (f, s, Some(st)),
        _ => {
            return Err(CodecError::bad_argument(
                &atom.name,
                atom.pos,
                "expected font, size and optional style",
            ))
        }
    };
    let font_code = match font {
        ArgumentNode::Ident(name) => text::font_code(name)
            .ok_or_else(|| CodecError::unknown_enum(&atom.name, atom.pos, "font", name))?,
        ArgumentNode::Number(n) => *n as u8,
        other => {
            return Err(CodecError::bad_argument(
                &atom.name,
                atom.pos,
                format!("expected a font id, found {}", primitives::describe(other)),
            ))
        }
    };
    let size_byte = match size {
        ArgumentNode::Number(n) => *n as u8,
        other => {
            return Err(CodecError::bad_number(
                &atom.name,
                atom.pos,
                format!("expected a point size, found {}", primitives::describe(other)),
            ))
        }
    };
    let mut out = vec![font_code, size_byte];
    if let Some(style) = style {
        out.push(style_byte(atom, style)?);
    }
    Ok(out)
}

fn style_byte(atom: &AtomNode, arg: &ArgumentNode) -> Result<u8> {
    let mut byte = 0u8;
    for item in arg.elements() {
        match item {
            ArgumentNode::Ident(name) => match text::style_flag(name) {
                Some(flag) => byte |= flag,
                None => {
                    return Err(CodecError::unknown_enum(&atom.name, atom.pos, "text style", name))
                }
            },
            ArgumentNode::Number(n) => byte |= *n as u8,
            other => {
                return Err(CodecError::bad_argument(
                    &atom.name,
                    atom.pos,
                    format!("expected text styles, found {}", primitives::describe(other)),
                ))
            }
        }
    }
    Ok(byte)
}

/// Two values give two bytes; a third value widens to a 16-bit tail.
fn size(atom: &AtomNode) -> Result<Vec<u8>> {
    let args = typed::flatten(&atom.arguments);
    let byte = |arg: &ArgumentNode| -> Result<u8> {
        match arg {
            ArgumentNode::Number(n) => Ok(*n as u8),
            other => Err(CodecError::bad_number(
                &atom.name,
                atom.pos,
                format!("expected a number, found {}", primitives::describe(other)),
            )),
        }
    };
    match args {
        [a, b] => Ok(vec![byte(a)?, byte(b)?]),
        [a, b, ArgumentNode::Number(c)] => {
            let mut out = vec![byte(a)?, byte(b)?];
            out.extend_from_slice(&primitives::word_be(*c));
            Ok(out)
        }
        _ => Err(CodecError::bad_argument(
            &atom.name,
            atom.pos,
            "expected two or three numbers",
        )),
    }
}

fn title_pos(atom: &AtomNode) -> Result<Vec<u8>> {
    let mut byte = 0u8;
    for item in flag_items(&atom.arguments) {
        match item {
            ArgumentNode::Ident(name) => match mat::title_pos_flag(name) {
                Some(flag) => byte |= flag,
                None => {
                    return Err(CodecError::unknown_enum(
                        &atom.name,
                        atom.pos,
                        "title position",
                        name,
                    ))
                }
            },
            ArgumentNode::Number(n) => byte |= *n as u8,
            other => {
                return Err(CodecError::bad_argument(
                    &atom.name,
                    atom.pos,
                    format!("expected title positions, found {}", primitives::describe(other)),
                ))
            }
        }
    }
    Ok(vec![byte])
}

fn text_on_picture(atom: &AtomNode) -> Result<Vec<u8>> {
    let mut byte = 0u8;
    for item in flag_items(&atom.arguments) {
        match item {
            ArgumentNode::Ident(name) => match mat::text_on_picture_flag(name) {
                Some(flag) => byte |= flag,
                None => {
                    return Err(CodecError::unknown_enum(
                        &atom.name,
                        atom.pos,
                        "picture text position",
                        name,
                    ))
                }
            },
            ArgumentNode::Number(n) => byte |= *n as u8,
            other => {
                return Err(CodecError::bad_argument(
                    &atom.name,
                    atom.pos,
                    format!("expected picture positions, found {}", primitives::describe(other)),
                ))
            }
        }
    }
    Ok(vec![byte])
}

/// Named styles widen to two bytes; a raw number stays a single byte.
/// Unknown style names fall back to 0.
fn wide_enum(
    atom: &AtomNode,
    lookup: fn(&str) -> Option<u16>,
    what: &'static str,
) -> Result<Vec<u8>> {
    match typed::flatten(&atom.arguments) {
        [ArgumentNode::Ident(name)] => {
            let code = lookup(name).unwrap_or_else(|| {
                log::warn!("unknown {what} `{name}` in `{}`, encoding as 0", atom.name);
                0
            });
            Ok(code.to_be_bytes().to_vec())
        }
        [ArgumentNode::Number(n)] => Ok(vec![*n as u8]),
        [ArgumentNode::Hex(bytes)] => Ok(bytes.clone()),
        _ => Err(CodecError::bad_argument(
            &atom.name,
            atom.pos,
            format!("expected one {what}"),
        )),
    }
}

fn narrow_enum(
    atom: &AtomNode,
    lookup: fn(&str) -> Option<u8>,
    what: &'static str,
) -> Result<Vec<u8>> {
    match typed::flatten(&atom.arguments) {
        [ArgumentNode::Ident(name)] => match lookup(name) {
            Some(code) => Ok(vec![code]),
            None => Err(CodecError::unknown_enum(&atom.name, atom.pos, what, name)),
        },
        [ArgumentNode::Number(n)] => Ok(vec![*n as u8]),
        _ => Err(CodecError::bad_argument(
            &atom.name,
            atom.pos,
            format!("expected one {what}"),
        )),
    }
}

/// The identifier list carries its own count through the frame length.
fn auto_complete(atom: &AtomNode) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for item in flag_items(&atom.arguments) {
        match item {
            ArgumentNode::Ident(name) => match mat::auto_complete_code(name) {
                Some(code) => out.push(code),
                None => {
                    return Err(CodecError::unknown_enum(
                        &atom.name,
                        atom.pos,
                        "completion list",
                        name,
                    ))
                }
            },
            ArgumentNode::Number(n) => out.push(*n as u8),
            other => {
                return Err(CodecError::bad_argument(
                    &atom.name,
                    atom.pos,
                    format!("expected completion lists, found {}", primitives::describe(other)),
                ))
            }
        }
    }
    Ok(out)
}

fn flag_items(args: &[ArgumentNode]) -> &[ArgumentNode] {
    match args {
        [ArgumentNode::Piped(items)] | [ArgumentNode::List(items)] => items,
        other => other,
    }
}
