//! MAT named decoders, mirroring the encode overrides.

use fdo_catalog::AtomDefinition;
use fdo_syntax::ArgumentNode;

use crate::decode::DecodeCx;
use crate::errors::Result;
use crate::tables::{mat, text};

pub(super) fn decode(
    _cx: &DecodeCx<'_>,
    def: &AtomDefinition,
    payload: &[u8],
) -> Option<Result<Vec<ArgumentNode>>> {
    match def.name.as_str() {
        "mat_font_sis" => Some(Ok(font_sis(payload))),
        "mat_size" => Some(Ok(size(payload))),
        "mat_title_pos" => Some(Ok(title_pos(payload))),
        "mat_text_on_picture_pos" => Some(Ok(text_on_picture(payload))),
        "mat_frame_style" => Some(Ok(wide_enum(payload, mat::frame_style_name))),
        "mat_trigger_style" => Some(Ok(wide_enum(payload, mat::trigger_style_name))),
        "mat_auto_complete" => Some(Ok(auto_complete(payload))),
        "mat_position" => Some(Ok(narrow_enum(payload, mat::position_name))),
        "mat_log_object" => Some(Ok(narrow_enum(payload, mat::log_object_name))),
        "mat_sort_order" => Some(Ok(narrow_enum(payload, mat::sort_order_name))),
        "mat_field_script" => Some(Ok(narrow_enum(payload, mat::field_script_name))),
        "mat_title_append_screen_name" => Some(Ok(narrow_enum(payload, mat::title_append_name))),
        _ => None,
    }
}

fn hex(payload: &[u8]) -> Vec<ArgumentNode> {
    match payload {
        [] => Vec::new(),
        other => vec![ArgumentNode::Hex(other.to_vec())],
    }
}

fn font_sis(payload: &[u8]) -> Vec<ArgumentNode> {
    let (font, size, style) = match payload {
        [f, s] => (*f, *s, None),
        [f, s, st] => (*f, *s, Some(*st)),
        other => return hex(other),
    };
    let mut args = vec![
        match text::font_name(font) {
            Some(name) => ArgumentNode::Ident(name.into()),
            None => ArgumentNode::Number(i64::from(font)),
        },
        ArgumentNode::Number(i64::from(size)),
    ];
    if let Some(style) = style {
        args.push(match text::style_names(style) {
            Some(names) if !names.is_empty() => piped_idents(names),
            _ => ArgumentNode::Number(i64::from(style)),
        });
    }
    args
}

fn size(payload: &[u8]) -> Vec<ArgumentNode> {
    match payload {
        [a, b] => vec![
            ArgumentNode::Number(i64::from(*a)),
            ArgumentNode::Number(i64::from(*b)),
        ],
        [a, b, hi, lo] => vec![
            ArgumentNode::Number(i64::from(*a)),
            ArgumentNode::Number(i64::from(*b)),
            ArgumentNode::Number(i64::from(u16::from_be_bytes([*hi, *lo]))),
        ],
        other => hex(other),
    }
}

fn title_pos(payload: &[u8]) -> Vec<ArgumentNode> {
    if let [byte] = payload {
        if let Some(names) = mat::title_pos_names(*byte) {
            if !names.is_empty() {
                return vec![piped_idents(names)];
            }
        }
        return vec![ArgumentNode::Number(i64::from(*byte))];
    }
    hex(payload)
}

fn text_on_picture(payload: &[u8]) -> Vec<ArgumentNode> {
    if let [byte] = payload {
        if let Some(names) = mat::text_on_picture_names(*byte) {
            if !names.is_empty() {
                return vec![if names.len() == 1 {
                    ArgumentNode::Ident(names.into_iter().next().unwrap())
                } else {
                    ArgumentNode::Piped(names.into_iter().map(ArgumentNode::Ident).collect())
                }];
            }
        }
        return vec![ArgumentNode::Number(i64::from(*byte))];
    }
    hex(payload)
}

/// Two bytes name an enum entry; one byte is the raw numeric form.
fn wide_enum(payload: &[u8], lookup: fn(u16) -> Option<&'static str>) -> Vec<ArgumentNode> {
    match payload {
        [hi, lo] => {
            let code = u16::from_be_bytes([*hi, *lo]);
            match lookup(code) {
                Some(name) => vec![ArgumentNode::Ident(name.into())],
                None => vec![ArgumentNode::Hex(payload.to_vec())],
            }
        }
        [b] => vec![ArgumentNode::Number(i64::from(*b))],
        other => hex(other),
    }
}

fn narrow_enum(payload: &[u8], lookup: fn(u8) -> Option<&'static str>) -> Vec<ArgumentNode> {
    match payload {
        [b] => match lookup(*b) {
            Some(name) => vec![ArgumentNode::Ident(name.into())],
            None => vec![ArgumentNode::Number(i64::from(*b))],
        },
        other => hex(other),
    }
}

fn auto_complete(payload: &[u8]) -> Vec<ArgumentNode> {
    payload
        .iter()
        .map(|&b| match mat::auto_complete_name(b) {
            Some(name) => ArgumentNode::Ident(name.into()),
            None => ArgumentNode::Number(i64::from(b)),
        })
        .collect()
}

fn piped_idents(names: Vec<&'static str>) -> ArgumentNode {
    if names.len() == 1 {
        ArgumentNode::Ident(names[0].into())
    } else {
        ArgumentNode::Piped(names.into_iter().map(|n| ArgumentNode::Ident(n.into())).collect())
    }
}
