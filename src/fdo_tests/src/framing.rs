//! Transport-frame packing behavior beyond the fixed scenarios.

use fdo_syntax::{ArgumentNode, AtomNode, StreamNode};

use crate::support;

#[test]
fn packing_concatenates_to_the_compact_stream() {
    let catalog = support::catalog();
    let tree = support::parse(
        "uni_start_stream\nmat_title <\"A longer window title\">\nmat_capacity <500>\nuni_end_stream\n",
    );
    let compact = fdo_codec::compile_with(
        &catalog,
        &tree,
        &fdo_codec::EncodeOptions { compact: true },
    )
    .unwrap();

    // Budgets all large enough that no atom needs the continuation
    // sequence; the frame boundaries then never change the bytes.
    for max in [24usize, 32, 64, 4096] {
        let mut joined = Vec::new();
        let mut last_seen = false;
        fdo_codec::compile_to_frames(&catalog, &tree, max, |frame, _index, is_last| {
            assert!(frame.len() <= max);
            joined.extend_from_slice(frame);
            last_seen = is_last;
        })
        .unwrap();
        assert!(last_seen);
        assert_eq!(joined, compact, "max_frame_size {max}");
    }
}

#[test]
fn atoms_are_never_split_across_frames() {
    let catalog = support::catalog();
    let tree = support::parse(
        "mat_title <\"abcdefgh\">\nmat_title <\"ijklmnop\">\nmat_title <\"qrstuvwx\">\n",
    );
    // Each atom encodes to 11 bytes; a 16-byte budget fits exactly one per
    // frame.
    let mut frames = Vec::new();
    fdo_codec::compile_to_frames(&catalog, &tree, 16, |frame, _i, _l| {
        frames.push(frame.to_vec());
    })
    .unwrap();
    assert_eq!(frames.len(), 3);
    for frame in &frames {
        let atoms = fdo_codec::frame::decode_stream_frames(frame).unwrap();
        assert_eq!(atoms.len(), 1);
    }
}

#[test]
fn tiny_budget_is_rejected() {
    let catalog = support::catalog();
    let tree = StreamNode::default();
    let err = fdo_codec::compile_to_frames(&catalog, &tree, 3, |_f, _i, _l| {}).unwrap_err();
    assert!(matches!(err, fdo_codec::CodecError::BufferTooSmall { .. }));
}

#[test]
fn unsplittable_continuation_reports_buffer_too_small() {
    let catalog = support::catalog();
    // 200-byte payload cannot even fit the continuation frames at size 4.
    let tree = StreamNode::new(vec![AtomNode::with_args(
        "the_unknown",
        vec![
            ArgumentNode::Number(3),
            ArgumentNode::Number(7),
            ArgumentNode::Hex(vec![0xEE; 200]),
        ],
    )]);
    let err = fdo_codec::compile_to_frames(&catalog, &tree, 4, |_f, _i, _l| {}).unwrap_err();
    assert!(matches!(err, fdo_codec::CodecError::BufferTooSmall { .. }));
}
