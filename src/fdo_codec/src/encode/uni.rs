//! UNI protocol overrides: the typed-data charset pair. The
//! `uni_use_last_atom_*` atom references go through the ATOM type default.

use fdo_catalog::AtomDefinition;
use fdo_syntax::{ArgumentNode, AtomNode};

use crate::encode::{primitives, EncodeCx};
use crate::errors::Result;
use crate::tables::charset;

pub(super) fn encode(
    _cx: &EncodeCx<'_>,
    def: &AtomDefinition,
    atom: &AtomNode,
) -> Option<Result<Vec<u8>>> {
    match def.name.as_str() {
        "uni_start_typed_data" | "uni_next_atom_typed" => Some(charset_pair(atom)),
        _ => None,
    }
}

fn charset_pair(atom: &AtomNode) -> Result<Vec<u8>> {
    let code = match atom.arguments.first() {
        Some(ArgumentNode::Ident(name)) => charset::code(name).unwrap_or_else(|| {
            log::warn!("unknown charset `{name}`, using default");
            charset::DEFAULT
        }),
        Some(ArgumentNode::Number(n)) => u16::from_be_bytes(primitives::word_be(*n)),
        _ => charset::DEFAULT,
    };
    Ok(code.to_be_bytes().to_vec())
}
