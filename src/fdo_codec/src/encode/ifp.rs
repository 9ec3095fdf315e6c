//! Conditional protocol (15): a two-element list collapses to two single
//! bytes. Other shapes fall through to the type defaults.

use fdo_catalog::AtomDefinition;
use fdo_syntax::{ArgumentNode, AtomNode};

use crate::encode::EncodeCx;
use crate::errors::Result;

pub(super) fn encode(
    _cx: &EncodeCx<'_>,
    _def: &AtomDefinition,
    atom: &AtomNode,
) -> Option<Result<Vec<u8>>> {
    let pair = match atom.arguments.as_slice() {
        [ArgumentNode::List(items)] => items.as_slice(),
        items @ [_, _] => items,
        _ => return None,
    };
    match pair {
        [ArgumentNode::Number(a), ArgumentNode::Number(b)] => {
            Some(Ok(vec![*a as u8, *b as u8]))
        }
        _ => None,
    }
}
