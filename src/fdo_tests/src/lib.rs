//! Cross-crate integration tests: end-to-end compile/decompile scenarios,
//! round-trip properties over a source corpus, transport framing, and
//! formatter snapshots.

#[cfg(test)]
mod framing;
#[cfg(test)]
mod roundtrip;
#[cfg(test)]
mod scenarios;
#[cfg(test)]
mod snapshots;

#[cfg(test)]
pub(crate) mod support {
    use fdo_catalog::Catalog;
    use fdo_syntax::StreamNode;

    pub fn catalog() -> Catalog {
        Catalog::builtin()
    }

    pub fn parse(source: &str) -> StreamNode {
        fdo_parser::parse_source(source).expect("corpus source parses")
    }

    /// Source → canonical bytes, with the decode/re-encode byte identity
    /// checked on the way.
    pub fn compile_checked(catalog: &Catalog, source: &str) -> Vec<u8> {
        let tree = parse(source);
        let bytes = fdo_codec::compile(catalog, &tree).expect("compiles");
        let reparsed = fdo_codec::decompile(catalog, &bytes).expect("decompiles");
        let recompiled = fdo_codec::compile(catalog, &reparsed).expect("recompiles");
        assert_eq!(
            hex::encode(&recompiled),
            hex::encode(&bytes),
            "byte round-trip failed for:\n{source}"
        );
        bytes
    }
}
