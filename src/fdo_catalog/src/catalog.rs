use std::collections::HashMap;

use fdo_syntax::formatter::{LayoutFlags, LayoutSource};
use fdo_syntax::AtomKey;

use crate::errors::{CatalogError, Result};
use crate::model::{AtomDefinition, AtomFlags, AtomType};

/// The built-in definition table, a line per atom:
/// `protocol atom_number name TYPE flag[,flag…]|-`.
const BUILTIN_TABLE: &str = include_str!("../data/atoms.fdo");

/// Read-only arena of atom definitions with dense lookup by key and by
/// canonical name. Build once, share by reference; lookups never lock.
#[derive(Debug, Default)]
pub struct Catalog {
    defs: Vec<AtomDefinition>,
    by_key: HashMap<AtomKey, usize>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Loads the embedded default table. The table is trusted input, so a
    /// defect in it is a programming error rather than a runtime condition.
    pub fn builtin() -> Self {
        match Self::parse(BUILTIN_TABLE) {
            Ok(catalog) => catalog,
            Err(e) => unreachable!("embedded atom table is malformed: {e}"),
        }
    }

    /// Parses the line-oriented table format. Blank lines and `#` comments
    /// are skipped; duplicate keys or names fail the whole load.
    pub fn parse(text: &str) -> Result<Self> {
        let mut catalog = Catalog::default();
        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let def = parse_line(line, line_no)?;
            catalog.insert(def, line_no)?;
        }
        Ok(catalog)
    }

    pub fn load_file(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    fn insert(&mut self, def: AtomDefinition, line: usize) -> Result<()> {
        let slot = self.defs.len();
        if self.by_key.contains_key(&def.key()) {
            return Err(CatalogError::DuplicateKey {
                line,
                protocol: def.protocol,
                number: def.atom_number,
                name: def.name.clone(),
            });
        }
        if self.by_name.contains_key(&def.name) {
            return Err(CatalogError::DuplicateName {
                line,
                name: def.name.clone(),
            });
        }
        self.by_key.insert(def.key(), slot);
        self.by_name.insert(def.name.clone(), slot);
        self.defs.push(def);
        Ok(())
    }

    /// Case-insensitive name lookup on the canonical lowercase key.
    pub fn find_by_name(&self, name: &str) -> Option<&AtomDefinition> {
        let slot = if name.chars().any(|c| c.is_ascii_uppercase()) {
            self.by_name.get(name.to_ascii_lowercase().as_str())
        } else {
            self.by_name.get(name)
        };
        slot.map(|&i| &self.defs[i])
    }

    pub fn find_by_key(&self, protocol: u8, atom_number: u8) -> Option<&AtomDefinition> {
        self.by_key
            .get(&AtomKey::new(protocol, atom_number))
            .map(|&i| &self.defs[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &AtomDefinition> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl LayoutSource for Catalog {
    fn layout(&self, name: &str) -> LayoutFlags {
        match self.find_by_name(name) {
            Some(def) => LayoutFlags {
                indent: def.flags.contains(AtomFlags::INDENT),
                outdent: def.flags.contains(AtomFlags::OUTDENT),
                eos: def.flags.contains(AtomFlags::EOS),
            },
            None => LayoutFlags::default(),
        }
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<AtomDefinition> {
    let malformed = |detail: &str| CatalogError::Malformed {
        line: line_no,
        detail: detail.to_string(),
    };

    let mut fields = line.split_whitespace();
    let protocol: u8 = fields
        .next()
        .ok_or_else(|| malformed("missing protocol"))?
        .parse()
        .map_err(|_| malformed("protocol is not a number in 0..=127"))?;
    if protocol > 127 {
        return Err(malformed("protocol out of range 0..=127"));
    }
    let atom_number: u8 = fields
        .next()
        .ok_or_else(|| malformed("missing atom number"))?
        .parse()
        .map_err(|_| malformed("atom number is not a number in 0..=255"))?;
    let name = fields
        .next()
        .ok_or_else(|| malformed("missing atom name"))?
        .to_ascii_lowercase();
    let type_name = fields.next().ok_or_else(|| malformed("missing type"))?;
    let atom_type = AtomType::from_table_name(type_name).ok_or_else(|| {
        CatalogError::UnknownType {
            line: line_no,
            name: type_name.to_string(),
        }
    })?;
    let flags_field = fields.next().unwrap_or("-");
    if fields.next().is_some() {
        return Err(malformed("trailing fields"));
    }

    let mut flags = AtomFlags::empty();
    if flags_field != "-" {
        for part in flags_field.split(',') {
            flags |= match part {
                "indent" => AtomFlags::INDENT,
                "outdent" => AtomFlags::OUTDENT,
                "eos" => AtomFlags::EOS,
                other => return Err(malformed(&format!("unknown flag `{other}`"))),
            };
        }
    }

    Ok(AtomDefinition {
        protocol,
        atom_number,
        name,
        atom_type,
        flags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_loads_and_indexes() {
        let catalog = Catalog::builtin();
        assert!(catalog.len() > 100);

        let start = catalog.find_by_name("uni_start_stream").unwrap();
        assert_eq!((start.protocol, start.atom_number), (0, 1));
        assert!(start.flags.contains(AtomFlags::INDENT));

        let replace = catalog.find_by_key(2, 4).unwrap();
        assert_eq!(replace.name, "act_replace_select_action");
        assert_eq!(replace.atom_type, AtomType::Stream);
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        let catalog = Catalog::builtin();
        assert!(catalog.find_by_name("UNI_START_STREAM").is_some());
        assert!(catalog.find_by_name("Mat_Object_Id").is_some());
        assert!(catalog.find_by_name("no_such_atom").is_none());
    }

    #[test]
    fn rejects_duplicates() {
        let err = Catalog::parse("0 1 a RAW -\n0 1 b RAW -").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateKey { .. }));

        let err = Catalog::parse("0 1 a RAW -\n0 2 a RAW -").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { .. }));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(Catalog::parse("300 1 a RAW -").is_err());
        assert!(Catalog::parse("0 1 a NOTATYPE -").is_err());
        assert!(Catalog::parse("0 1 a RAW indent,bogus").is_err());
    }
}
