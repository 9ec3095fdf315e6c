//! Argument tree → wire bytes.
//!
//! Rule dispatch follows the override chain: an atom-name-specific rule in
//! the protocol's module wins, then the protocol-wide rules, then the
//! type-general defaults in [`typed`]. Decode mirrors the same layering so
//! the two directions cannot drift apart.

mod act;
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
pub(crate) mod primitives;
mod token;
mod typed;
mod uni;
mod unknown;
mod var;

use fdo_catalog::{AtomDefinition, Catalog};
use fdo_syntax::{AtomNode, StreamNode};
use log::debug;

use crate::errors::{CodecError, Result};
use crate::frame::{self, AtomFrame, MAX_WIRE_PROTOCOL};

pub(crate) struct EncodeCx<'a> {
    pub catalog: &'a Catalog,
    /// Minimal-style frame selection; off for the canonical FULL stream.
    pub compact: bool,
}

/// Encodes a whole stream to wire bytes, atom order preserved.
pub(crate) fn encode_stream_bytes(cx: &EncodeCx<'_>, stream: &StreamNode) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for atom in &stream.atoms {
        let encoded = encode_atom_bytes(cx, atom)?;
        out.extend(encoded);
    }
    Ok(out)
}

pub(crate) fn encode_atom_bytes(cx: &EncodeCx<'_>, atom: &AtomNode) -> Result<Vec<u8>> {
    let frame = encode_atom(cx, atom)?;
    if cx.compact {
        frame::encode_frame_compact(&frame)
    } else {
        frame::encode_frame(&frame)
    }
}

/// Resolves the atom and produces its frame. `the_unknown` bypasses the
/// catalog entirely.
pub(crate) fn encode_atom(cx: &EncodeCx<'_>, atom: &AtomNode) -> Result<AtomFrame> {
    if atom.name.eq_ignore_ascii_case("the_unknown") {
        return unknown::encode(atom);
    }
    let def = cx
        .catalog
        .find_by_name(&atom.name)
        .ok_or_else(|| CodecError::UnrecognizedAtom {
            name: atom.name.clone(),
            pos: atom.pos,
        })?;
    if def.protocol > MAX_WIRE_PROTOCOL {
        return Err(CodecError::too_large(
            &atom.name,
            atom.pos,
            format!("protocol {} is client-local and cannot be emitted", def.protocol),
        ));
    }
    let payload = encode_payload(cx, def, atom)?;
    debug!(
        "encode {} -> {}:{} ({} payload bytes)",
        atom.name,
        def.protocol,
        def.atom_number,
        payload.len()
    );
    Ok(AtomFrame::new(def.protocol, def.atom_number, payload))
}

/// Payload bytes for a resolved atom; also used for the inner atom of the
/// atom-reference nested shape (which is why client-local protocols are
/// still legal here).
pub(crate) fn encode_payload(
    cx: &EncodeCx<'_>,
    def: &AtomDefinition,
    atom: &AtomNode,
) -> Result<Vec<u8>> {
    let overridden = match def.protocol {
        0 => uni::encode(cx, def, atom),
        1 => man::encode(cx, def, atom),
        3 => de::encode(cx, def, atom),
        4 => buf::encode(cx, def, atom),
        8 => fm::encode(cx, def, atom),
        14 => mip::encode(cx, def, atom),
        15 => ifp::encode(cx, def, atom),
        16 => mat::encode(cx, def, atom),
        30 | 31 => phone::encode(cx, def, atom),
        51 => hfs::encode(cx, def, atom),
        _ => None,
    };
    match overridden {
        Some(result) => result,
        None => typed::encode(cx, def, atom),
    }
}
