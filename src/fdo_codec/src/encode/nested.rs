//! Nested-stream payloads.
//!
//! The general case recursively encodes the inner stream and splices the
//! bytes in. A single resolvable atom takes the shorter "atom reference
//! with data" shape `[protocol, atom_number, args…]`, the form the parser
//! produces when the bracket grammar is ambiguous.

use fdo_syntax::{ArgumentNode, AtomNode, StreamNode};

use crate::encode::{encode_payload, encode_stream_bytes, primitives, EncodeCx};
use crate::errors::Result;

pub(super) fn encode(
    cx: &EncodeCx<'_>,
    atom: &AtomNode,
    stream: &StreamNode,
    trailing: &[ArgumentNode],
) -> Result<Vec<u8>> {
    let mut out = match single_reference(cx, stream) {
        Some(inner) => {
            let (def, node) = inner;
            let mut bytes = vec![def.protocol, def.atom_number];
            bytes.extend(encode_payload(cx, def, node)?);
            bytes
        }
        None => {
            // Spliced sub-streams stay in the canonical FULL style even
            // when the outer frames are compact; the decoder relies on the
            // style-0 first byte to tell a splice from a reference.
            let canonical = EncodeCx {
                catalog: cx.catalog,
                compact: false,
            };
            encode_stream_bytes(&canonical, stream)?
        }
    };
    for arg in trailing {
        out.extend(primitives::raw_value_bytes(&atom.name, atom.pos, arg)?);
    }
    Ok(out)
}

fn single_reference<'a>(
    cx: &'a EncodeCx<'_>,
    stream: &'a StreamNode,
) -> Option<(&'a fdo_catalog::AtomDefinition, &'a AtomNode)> {
    match stream.atoms.as_slice() {
        [only] if !only.name.eq_ignore_ascii_case("the_unknown") => {
            cx.catalog.find_by_name(&only.name).map(|def| (def, only))
        }
        _ => None,
    }
}
