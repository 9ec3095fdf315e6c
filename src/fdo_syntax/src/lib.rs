//! fdo_syntax crate
//!
//! Shared data model for the FDO toolchain: the stream/atom/argument tree
//! produced by the parser and by the decompiler, the `Gid` value type, source
//! positions, and the text formatter that renders a tree back to FDO source.
//!
//! The tree is a closed sum; the codec pattern-matches it exhaustively.

pub mod argument;
pub mod escape;
pub mod formatter;
pub mod gid;
pub mod span;
pub mod stream;

pub use argument::ArgumentNode;
pub use formatter::{FormatOptions, Formatter, LayoutFlags, LayoutSource};
pub use gid::Gid;
pub use span::SourcePos;
pub use stream::{AtomKey, AtomNode, StreamNode};
