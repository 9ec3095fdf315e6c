use bitflags::bitflags;
use core::fmt;

use fdo_syntax::AtomKey;

/// Argument type tag of an atom definition. The numeric codes are the ones
/// the external table source uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AtomType {
    Raw,
    Dword,
    String,
    Bool,
    Gid,
    Stream,
    ObjStart,
    Orient,
    Token,
    TokenArg,
    Alert,
    Atom,
    ColorData,
    Ignore,
    VarLookup,
    Criterion,
    BoolLegacy,
    CriterionLegacy,
    StreamLegacy,
    Var,
    VarDword,
    VarString,
    ByteList,
    AlertLegacy,
}

impl AtomType {
    pub fn code(self) -> u8 {
        match self {
            AtomType::Raw => 0x01,
            AtomType::Dword => 0x02,
            AtomType::String => 0x03,
            AtomType::Bool => 0x04,
            AtomType::Gid => 0x05,
            AtomType::Stream => 0x06,
            AtomType::ObjStart => 0x07,
            AtomType::Orient => 0x08,
            AtomType::Token => 0x09,
            AtomType::TokenArg => 0x0A,
            AtomType::Alert => 0x0B,
            AtomType::Atom => 0x0C,
            AtomType::ColorData => 0x0D,
            AtomType::Ignore => 0x0E,
            AtomType::VarLookup => 0x0F,
            AtomType::Criterion => 0x10,
            AtomType::BoolLegacy => 0x11,
            AtomType::CriterionLegacy => 0x12,
            AtomType::StreamLegacy => 0x13,
            AtomType::Var => 0x14,
            AtomType::VarDword => 0x15,
            AtomType::VarString => 0x16,
            AtomType::ByteList => 0x17,
            AtomType::AlertLegacy => 0x18,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0x01 => AtomType::Raw,
            0x02 => AtomType::Dword,
            0x03 => AtomType::String,
            0x04 => AtomType::Bool,
            0x05 => AtomType::Gid,
            0x06 => AtomType::Stream,
            0x07 => AtomType::ObjStart,
            0x08 => AtomType::Orient,
            0x09 => AtomType::Token,
            0x0A => AtomType::TokenArg,
            0x0B => AtomType::Alert,
            0x0C => AtomType::Atom,
            0x0D => AtomType::ColorData,
            0x0E => AtomType::Ignore,
            0x0F => AtomType::VarLookup,
            0x10 => AtomType::Criterion,
            0x11 => AtomType::BoolLegacy,
            0x12 => AtomType::CriterionLegacy,
            0x13 => AtomType::StreamLegacy,
            0x14 => AtomType::Var,
            0x15 => AtomType::VarDword,
            0x16 => AtomType::VarString,
            0x17 => AtomType::ByteList,
            0x18 => AtomType::AlertLegacy,
            _ => return None,
        })
    }

    /// Table-source spelling, e.g. `STREAM_LEGACY`.
    pub fn table_name(self) -> &'static str {
        match self {
            AtomType::Raw => "RAW",
            AtomType::Dword => "DWORD",
            AtomType::String => "STRING",
            AtomType::Bool => "BOOL",
            AtomType::Gid => "GID",
            AtomType::Stream => "STREAM",
            AtomType::ObjStart => "OBJSTART",
            AtomType::Orient => "ORIENT",
            AtomType::Token => "TOKEN",
            AtomType::TokenArg => "TOKENARG",
            AtomType::Alert => "ALERT",
            AtomType::Atom => "ATOM",
            AtomType::ColorData => "COLORDATA",
            AtomType::Ignore => "IGNORE",
            AtomType::VarLookup => "VARLOOKUP",
            AtomType::Criterion => "CRITERION",
            AtomType::BoolLegacy => "BOOL_LEGACY",
            AtomType::CriterionLegacy => "CRITERION_LEGACY",
            AtomType::StreamLegacy => "STREAM_LEGACY",
            AtomType::Var => "VAR",
            AtomType::VarDword => "VARDWORD",
            AtomType::VarString => "VARSTRING",
            AtomType::ByteList => "BYTELIST",
            AtomType::AlertLegacy => "ALERT_LEGACY",
        }
    }

    pub fn from_table_name(name: &str) -> Option<Self> {
        Some(match name {
            "RAW" => AtomType::Raw,
            "DWORD" => AtomType::Dword,
            "STRING" => AtomType::String,
            "BOOL" => AtomType::Bool,
            "GID" => AtomType::Gid,
            "STREAM" => AtomType::Stream,
            "OBJSTART" => AtomType::ObjStart,
            "ORIENT" => AtomType::Orient,
            "TOKEN" => AtomType::Token,
            "TOKENARG" => AtomType::TokenArg,
            "ALERT" => AtomType::Alert,
            "ATOM" => AtomType::Atom,
            "COLORDATA" => AtomType::ColorData,
            "IGNORE" => AtomType::Ignore,
            "VARLOOKUP" => AtomType::VarLookup,
            "CRITERION" => AtomType::Criterion,
            "BOOL_LEGACY" => AtomType::BoolLegacy,
            "CRITERION_LEGACY" => AtomType::CriterionLegacy,
            "STREAM_LEGACY" => AtomType::StreamLegacy,
            "VAR" => AtomType::Var,
            "VARDWORD" => AtomType::VarDword,
            "VARSTRING" => AtomType::VarString,
            "BYTELIST" => AtomType::ByteList,
            "ALERT_LEGACY" => AtomType::AlertLegacy,
            _ => return None,
        })
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

bitflags! {
    /// Pretty-print flags. They never affect the wire bytes.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct AtomFlags: u8 {
        const INDENT = 0x01;
        const OUTDENT = 0x02;
        const EOS = 0x04;
    }
}

/// One immutable catalog record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtomDefinition {
    pub protocol: u8,
    pub atom_number: u8,
    /// Canonical lowercase identifier, e.g. `uni_start_stream`.
    pub name: String,
    pub atom_type: AtomType,
    pub flags: AtomFlags,
}

impl AtomDefinition {
    pub fn key(&self) -> AtomKey {
        AtomKey::new(self.protocol, self.atom_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_round_trip() {
        for code in 0x01..=0x18 {
            let ty = AtomType::from_code(code).unwrap();
            assert_eq!(ty.code(), code);
            assert_eq!(AtomType::from_table_name(ty.table_name()), Some(ty));
        }
        assert_eq!(AtomType::from_code(0x00), None);
        assert_eq!(AtomType::from_code(0x19), None);
    }
}
