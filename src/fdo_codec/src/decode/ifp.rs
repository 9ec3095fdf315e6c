//! Conditional protocol (15): two payload bytes read back as the
//! two-element list the compiler accepts.

use fdo_catalog::AtomDefinition;
use fdo_syntax::ArgumentNode;

use crate::decode::DecodeCx;
use crate::errors::Result;

pub(super) fn decode(
    _cx: &DecodeCx<'_>,
    _def: &AtomDefinition,
    payload: &[u8],
) -> Option<Result<Vec<ArgumentNode>>> {
    match payload {
        [a, b] => Some(Ok(vec![
            ArgumentNode::Number(i64::from(*a)),
            ArgumentNode::Number(i64::from(*b)),
        ])),
        _ => None,
    }
}
