//! fdo_codec crate
//!
//! The FDO binary codec: turns an argument tree into the bit-packed wire
//! stream the legacy runtime consumes, and back. The pieces line up with
//! the pipeline stages:
//!
//! - [`gid`]: the variable-length Global ID encoding.
//! - [`tables`]: symbolic name ⇄ code maps.
//! - `encode` / `decode`: per-atom argument rules, dispatched by name,
//!   then protocol, then definition type.
//! - [`frame`]: the six frame styles and their headers.
//! - `framer`: size-bounded emission with large-atom continuation.
//!
//! Everything is synchronous and stateless per call; the only shared input
//! is the read-only [`Catalog`].

pub mod errors;
pub mod frame;
pub mod gid;
pub mod tables;

mod decode;
mod encode;
mod framer;

use fdo_catalog::Catalog;
use fdo_syntax::StreamNode;

pub use errors::{CodecError, Result};
pub use frame::AtomFrame;
pub use gid::GidForm;

/// Compile-side knobs.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeOptions {
    /// Choose the shortest frame style per atom instead of the canonical
    /// FULL form.
    pub compact: bool,
}

/// Decompile-side knobs.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeOptions {
    /// Render every atom as `the_unknown`, keeping the stream byte-exact
    /// under any catalog.
    pub preserve_unknown: bool,
}

/// Compiles a stream to the canonical (FULL-style) wire bytes.
pub fn compile(catalog: &Catalog, stream: &StreamNode) -> Result<Vec<u8>> {
    compile_with(catalog, stream, &EncodeOptions::default())
}

pub fn compile_with(
    catalog: &Catalog,
    stream: &StreamNode,
    options: &EncodeOptions,
) -> Result<Vec<u8>> {
    let cx = encode::EncodeCx {
        catalog,
        compact: options.compact,
    };
    encode::encode_stream_bytes(&cx, stream)
}

/// Compiles into transport frames of at most `max_frame_size` bytes. The
/// sink sees every frame in production order with its index, and
/// `is_last = true` exactly once, on the final frame (an empty stream
/// yields a single empty final frame). Oversized atoms are carried by the
/// UNI 4/5/6 large-atom sequence; atoms are never split across frames.
pub fn compile_to_frames(
    catalog: &Catalog,
    stream: &StreamNode,
    max_frame_size: usize,
    mut sink: impl FnMut(&[u8], usize, bool),
) -> Result<()> {
    let cx = encode::EncodeCx {
        catalog,
        compact: true,
    };
    framer::write_frames(&cx, stream, max_frame_size, &mut sink)
}

/// Decompiles wire bytes back to an argument tree. Frames with no catalog
/// entry come back as `the_unknown`; truncated input is an error.
pub fn decompile(catalog: &Catalog, bytes: &[u8]) -> Result<StreamNode> {
    decompile_with(catalog, bytes, &DecodeOptions::default())
}

pub fn decompile_with(
    catalog: &Catalog,
    bytes: &[u8],
    options: &DecodeOptions,
) -> Result<StreamNode> {
    let cx = decode::DecodeCx {
        catalog,
        preserve_unknown: options.preserve_unknown,
    };
    decode::decode_stream(&cx, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdo_syntax::{ArgumentNode, AtomNode, Gid};

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn empty_stream_compiles_to_nothing() {
        let bytes = compile(&catalog(), &StreamNode::default()).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn start_stream_full_and_compact() {
        let catalog = catalog();
        let stream = StreamNode::new(vec![AtomNode::new("uni_start_stream")]);
        assert_eq!(compile(&catalog, &stream).unwrap(), [0x00, 0x01, 0x00]);
        let compact = compile_with(&catalog, &stream, &EncodeOptions { compact: true }).unwrap();
        assert_eq!(compact, [0x61]);
        for bytes in [[0x00, 0x01, 0x00].as_slice(), [0x61].as_slice()] {
            let tree = decompile(&catalog, bytes).unwrap();
            assert_eq!(tree.atoms[0].name, "uni_start_stream");
        }
    }

    #[test]
    fn unrecognized_atom_reports_position() {
        let catalog = catalog();
        let stream = StreamNode::new(vec![
            AtomNode::new("uni_no_such_thing").at(fdo_syntax::SourcePos::new(3, 7)),
        ]);
        let err = compile(&catalog, &stream).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("3:7"), "{message}");
        assert!(message.contains("uni_no_such_thing"), "{message}");
    }

    #[test]
    fn gid_payloads_match_reference_vectors() {
        let catalog = catalog();
        let stream = StreamNode::new(vec![
            AtomNode::with_args("mat_art_id", vec![ArgumentNode::Gid(Gid::three_part(1, 0, 1329))]),
            AtomNode::with_args("mat_object_id", vec![ArgumentNode::Gid(Gid::two_part(32, 105))]),
        ]);
        let bytes = compile(&catalog, &stream).unwrap();
        assert_eq!(
            bytes,
            [
                0x10, 0x01, 0x04, 0x01, 0x00, 0x05, 0x31, // mat_art_id
                0x10, 0x00, 0x03, 0x20, 0x00, 0x69, // mat_object_id
            ]
        );
    }

    #[test]
    fn alert_payload_matches_reference_vector() {
        let catalog = catalog();
        let stream = StreamNode::new(vec![AtomNode::with_args(
            "async_alert",
            vec![
                ArgumentNode::Ident("info".into()),
                ArgumentNode::Str("Hi".into()),
            ],
        )]);
        let bytes = compile(&catalog, &stream).unwrap();
        assert_eq!(bytes, [0x0A, 0x00, 0x03, 0x01, 0x48, 0x69]);
    }

    #[test]
    fn preserve_unknown_round_trips_known_frames() {
        let catalog = catalog();
        let original = compile(
            &catalog,
            &StreamNode::new(vec![AtomNode::with_args(
                "mat_title",
                vec![ArgumentNode::Str("Lobby".into())],
            )]),
        )
        .unwrap();
        let tree = decompile_with(
            &catalog,
            &original,
            &DecodeOptions { preserve_unknown: true },
        )
        .unwrap();
        assert_eq!(tree.atoms[0].name, "the_unknown");
        assert_eq!(compile(&catalog, &tree).unwrap(), original);
    }

    #[test]
    fn client_local_protocols_do_not_reach_the_wire() {
        let catalog = catalog();
        let stream = StreamNode::new(vec![AtomNode::with_args(
            "hfs_attr_flags",
            vec![ArgumentNode::Ident("required".into())],
        )]);
        assert!(matches!(
            compile(&catalog, &stream),
            Err(CodecError::ValueTooLarge { .. })
        ));
    }
}
