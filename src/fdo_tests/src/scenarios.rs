//! The end-to-end scenarios with fixed byte vectors.

use fdo_syntax::{ArgumentNode, AtomNode, StreamNode};

use crate::support;

#[test]
fn empty_stream_is_empty_bytes_and_one_final_frame() {
    let catalog = support::catalog();
    let empty = StreamNode::default();
    assert!(fdo_codec::compile(&catalog, &empty).unwrap().is_empty());

    for max in [4usize, 7, 119, 1024] {
        let mut calls = Vec::new();
        fdo_codec::compile_to_frames(&catalog, &empty, max, |frame, index, is_last| {
            calls.push((frame.to_vec(), index, is_last));
        })
        .unwrap();
        assert_eq!(calls, vec![(Vec::new(), 0, true)], "max_frame_size {max}");
    }
}

#[test]
fn lone_start_stream_in_both_styles() {
    let catalog = support::catalog();
    let tree = support::parse("uni_start_stream\n");

    let full = fdo_codec::compile(&catalog, &tree).unwrap();
    assert_eq!(full, [0x00, 0x01, 0x00]);

    let compact = fdo_codec::compile_with(
        &catalog,
        &tree,
        &fdo_codec::EncodeOptions { compact: true },
    )
    .unwrap();
    assert_eq!(compact, [0x61]);

    for bytes in [full.as_slice(), compact.as_slice()] {
        let decoded = fdo_codec::decompile(&catalog, bytes).unwrap();
        assert_eq!(decoded.atoms.len(), 1);
        assert_eq!(decoded.atoms[0].name, "uni_start_stream");
    }
}

#[test]
fn nested_stream_has_the_reference_byte_layout() {
    let catalog = support::catalog();
    let source = "\
uni_start_stream
act_replace_select_action <
    uni_start_stream
    uni_end_stream
>
uni_end_stream
";
    let bytes = support::compile_checked(&catalog, source);
    // Outer FULL frames; the middle payload is itself an encoded sub-stream
    // of two empty frames.
    assert_eq!(
        hex::encode(&bytes),
        "000100020406000100000200000200",
    );
}

#[test]
fn large_atom_splits_into_the_uni_sequence() {
    let catalog = support::catalog();
    let payload: Vec<u8> = (0..300u32).map(|i| i as u8).collect();
    let tree = StreamNode::new(vec![AtomNode::with_args(
        "the_unknown",
        vec![
            ArgumentNode::Number(27),
            ArgumentNode::Number(5),
            ArgumentNode::Hex(payload.clone()),
        ],
    )]);

    let mut frames = Vec::new();
    let mut saw_last = false;
    fdo_codec::compile_to_frames(&catalog, &tree, 119, |frame, index, is_last| {
        assert_eq!(index, frames.len());
        assert!(frame.len() <= 119);
        assert!(!saw_last);
        saw_last = is_last;
        frames.push(frame.to_vec());
    })
    .unwrap();
    assert!(saw_last);

    // Each transport frame carries exactly one continuation atom here.
    let atoms: Vec<fdo_codec::AtomFrame> = frames
        .iter()
        .flat_map(|f| fdo_codec::frame::decode_stream_frames(f).unwrap())
        .collect();

    assert_eq!(
        (atoms[0].protocol, atoms[0].atom_number),
        (0, 4),
        "starts with uni_start_large_atom"
    );
    // 300 as a plain 16-bit big-endian length.
    assert_eq!(atoms[0].payload, [27, 5, 0x01, 0x2C]);

    let last = atoms.last().unwrap();
    assert_eq!((last.protocol, last.atom_number), (0, 6));
    let segments = &atoms[1..atoms.len() - 1];
    assert!(!segments.is_empty());
    for segment in segments {
        assert_eq!((segment.protocol, segment.atom_number), (0, 5));
    }

    let mut reassembled = Vec::new();
    for atom in &atoms[1..] {
        reassembled.extend_from_slice(&atom.payload);
    }
    assert_eq!(reassembled, payload);
}

#[test]
fn gid_payload_corner_cases() {
    let catalog = support::catalog();
    let bytes = support::compile_checked(&catalog, "mat_art_id <1-0-1329>\n");
    assert_eq!(bytes, [0x10, 0x01, 0x04, 0x01, 0x00, 0x05, 0x31]);

    let bytes = support::compile_checked(&catalog, "mat_object_id <32-105>\n");
    assert_eq!(bytes, [0x10, 0x00, 0x03, 0x20, 0x00, 0x69]);
}

#[test]
fn alert_payload() {
    let catalog = support::catalog();
    let bytes = support::compile_checked(&catalog, "async_alert <info, \"Hi\">\n");
    assert_eq!(&bytes[3..], [0x01, 0x48, 0x69]);
}
