use serde::{Deserialize, Serialize};

use crate::gid::Gid;
use crate::stream::StreamNode;

/// One parsed atom argument. This is both what the parser produces and what
/// the decompiler hands back; the codec matches on it exhaustively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ArgumentNode {
    /// Decimal literal, e.g. `300` or `-1`.
    Number(i64),
    /// Hex literal, e.g. `0A1Fx`. Stored as the raw bytes.
    Hex(Vec<u8>),
    /// Quoted string, stored with escape sequences already applied.
    Str(String),
    /// Bare identifier: enum names, atom references, flag names.
    Ident(String),
    /// Global ID literal, `T-I` or `T-S-I`.
    Gid(Gid),
    /// Object start shorthand: `<type_name, "title">`.
    ObjectType { type_name: String, title: String },
    /// `a | b | c`: flag values OR'd together.
    Piped(Vec<ArgumentNode>),
    /// Ordered sub-argument list.
    List(Vec<ArgumentNode>),
    /// A whole sub-stream as an argument, plus raw bytes trailing it.
    NestedStream {
        stream: StreamNode,
        trailing: Vec<ArgumentNode>,
    },
}

impl ArgumentNode {
    /// Bare identifier text, if this argument is one.
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            ArgumentNode::Ident(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            ArgumentNode::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Flattens `Piped`/`List` one level for rules that accept either a
    /// single value or a list shape.
    pub fn elements(&self) -> &[ArgumentNode] {
        match self {
            ArgumentNode::Piped(items) | ArgumentNode::List(items) => items,
            _ => std::slice::from_ref(self),
        }
    }
}
