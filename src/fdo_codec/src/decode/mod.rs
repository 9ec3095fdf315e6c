//! Wire bytes → argument tree. Mirrors the encode dispatch: protocol
//! modules handle the named special cases, [`typed`] the per-type
//! fallbacks, and frames without a catalog entry become `the_unknown`.

mod buf;
mod de;
mod fm;
mod hfs;
mod ifp;
mod man;
mod mat;
mod mip;
mod nested;
mod phone;
mod typed;
mod uni;
pub(crate) mod util;

use fdo_catalog::{AtomDefinition, Catalog};
use fdo_syntax::{ArgumentNode, AtomNode, StreamNode};
use log::debug;

use crate::errors::Result;
use crate::frame::{decode_frame, AtomFrame};

pub(crate) struct DecodeCx<'a> {
    pub catalog: &'a Catalog,
    /// Decode every frame to `the_unknown`, not only the unresolvable ones.
    pub preserve_unknown: bool,
}

pub(crate) fn decode_stream(cx: &DecodeCx<'_>, bytes: &[u8]) -> Result<StreamNode> {
    let mut atoms = Vec::new();
    let mut offset = 0;
    while offset < bytes.len() {
        let (frame, consumed) = decode_frame(bytes, offset)?;
        atoms.push(decode_atom(cx, &frame)?);
        offset += consumed;
    }
    Ok(StreamNode::new(atoms))
}

pub(crate) fn decode_atom(cx: &DecodeCx<'_>, frame: &AtomFrame) -> Result<AtomNode> {
    let def = if cx.preserve_unknown {
        None
    } else {
        cx.catalog.find_by_key(frame.protocol, frame.atom_number)
    };
    let Some(def) = def else {
        if !cx.preserve_unknown {
            debug!(
                "no definition for {}:{}, decoding as the_unknown",
                frame.protocol, frame.atom_number
            );
        }
        return Ok(unknown_node(frame));
    };
    let arguments = decode_payload(cx, def, &frame.payload)?;
    let mut node = AtomNode::with_args(def.name.clone(), arguments);
    node.definition = Some(def.key());
    Ok(node)
}

pub(crate) fn decode_payload(
    cx: &DecodeCx<'_>,
    def: &AtomDefinition,
    payload: &[u8],
) -> Result<Vec<ArgumentNode>> {
    let overridden = match def.protocol {
        0 => uni::decode(cx, def, payload),
        1 => man::decode(cx, def, payload),
        3 => de::decode(cx, def, payload),
        4 => buf::decode(cx, def, payload),
        8 => fm::decode(cx, def, payload),
        14 => mip::decode(cx, def, payload),
        15 => ifp::decode(cx, def, payload),
        16 => mat::decode(cx, def, payload),
        30 | 31 => phone::decode(cx, def, payload),
        51 => hfs::decode(cx, def, payload),
        _ => None,
    };
    match overridden {
        Some(result) => result,
        None => typed::decode(cx, def, payload),
    }
}

fn unknown_node(frame: &AtomFrame) -> AtomNode {
    let mut arguments = vec![
        ArgumentNode::Number(i64::from(frame.protocol)),
        ArgumentNode::Number(i64::from(frame.atom_number)),
    ];
    if !frame.payload.is_empty() {
        arguments.push(ArgumentNode::Hex(frame.payload.clone()));
    }
    AtomNode::with_args("the_unknown", arguments)
}
