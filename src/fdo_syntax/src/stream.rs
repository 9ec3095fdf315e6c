use core::fmt;
use serde::{Deserialize, Serialize};

use crate::argument::ArgumentNode;
use crate::span::SourcePos;

/// Catalog key of an atom: its protocol namespace and number within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtomKey {
    pub protocol: u8,
    pub number: u8,
}

impl AtomKey {
    pub fn new(protocol: u8, number: u8) -> Self {
        Self { protocol, number }
    }
}

impl fmt::Display for AtomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.protocol, self.number)
    }
}

/// One atom invocation: `name <arg, arg, …>`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AtomNode {
    pub name: String,
    pub arguments: Vec<ArgumentNode>,
    /// Set when the name resolved against a catalog (decompiler output, or
    /// parser output checked against a catalog). Purely advisory.
    pub definition: Option<AtomKey>,
    pub pos: SourcePos,
}

impl AtomNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            definition: None,
            pos: SourcePos::default(),
        }
    }

    pub fn with_args(name: impl Into<String>, arguments: Vec<ArgumentNode>) -> Self {
        Self {
            name: name.into(),
            arguments,
            definition: None,
            pos: SourcePos::default(),
        }
    }

    pub fn at(mut self, pos: SourcePos) -> Self {
        self.pos = pos;
        self
    }
}

/// An ordered sequence of atoms: a whole source file, or a nested
/// sub-stream argument.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamNode {
    pub atoms: Vec<AtomNode>,
}

impl StreamNode {
    pub fn new(atoms: Vec<AtomNode>) -> Self {
        Self { atoms }
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }
}

impl From<Vec<AtomNode>> for StreamNode {
    fn from(atoms: Vec<AtomNode>) -> Self {
        Self { atoms }
    }
}
