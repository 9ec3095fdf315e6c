//! Nested-stream payload decoding.
//!
//! The payload of a STREAM-typed atom is either a spliced sub-stream or the
//! "atom reference with data" shape `[protocol, atom_number, args…]`, and
//! the two overlap byte-wise. Disambiguation follows what the encoder
//! emits:
//!
//! 1. a clean frame parse that opens with `uni_start_stream` is a spliced
//!    sub-stream (splices carry whole `uni_start_stream … uni_end_stream`
//!    blocks; reference payloads never start with the 0:1 frame),
//! 2. a resolvable `[protocol, atom_number]` prefix is the reference
//!    shape, with the rest decoded by the referenced atom's own rules,
//! 3. whatever still parses as frames is kept as a sub-stream, any
//!    unparseable tail as trailing data,
//! 4. the rest stays hex.
//!
//! Every branch re-encodes to the exact input bytes; the ranking only
//! decides which structural reading the decompiled source shows.

use fdo_syntax::{ArgumentNode, AtomNode, StreamNode};

use crate::decode::{decode_atom, decode_payload, DecodeCx};
use crate::errors::Result;
use crate::frame::{decode_frame, AtomFrame};

pub(super) fn decode(cx: &DecodeCx<'_>, payload: &[u8]) -> Result<Vec<ArgumentNode>> {
    if payload.is_empty() {
        return Ok(Vec::new());
    }

    // A spliced sub-stream always starts with a FULL-style byte (≤ 0x1F);
    // anything higher is a reference (client-local protocols included) or
    // raw data.
    if payload[0] > 0x1F {
        if let Some(args) = atom_reference(cx, payload)? {
            return Ok(args);
        }
        return Ok(vec![ArgumentNode::Hex(payload.to_vec())]);
    }

    // Greedy frame parse; `end` marks how far the payload reads as frames.
    let mut frames = Vec::new();
    let mut end = 0;
    while end < payload.len() {
        match decode_frame(payload, end) {
            Ok((frame, consumed)) => {
                frames.push(frame);
                end += consumed;
            }
            Err(_) => break,
        }
    }
    let clean = end == payload.len();

    if clean && frames.len() > 1 && opens_stream(&frames[0]) {
        return stream_args(cx, &frames, &[]);
    }

    if let Some(args) = atom_reference(cx, payload)? {
        return Ok(args);
    }

    if !frames.is_empty() {
        return stream_args(cx, &frames, &payload[end..]);
    }

    Ok(vec![ArgumentNode::Hex(payload.to_vec())])
}

fn opens_stream(frame: &AtomFrame) -> bool {
    frame.protocol == 0 && frame.atom_number == 1
}

fn stream_args(
    cx: &DecodeCx<'_>,
    frames: &[AtomFrame],
    remainder: &[u8],
) -> Result<Vec<ArgumentNode>> {
    let mut atoms = Vec::with_capacity(frames.len());
    for frame in frames {
        atoms.push(decode_atom(cx, frame)?);
    }
    let trailing = if remainder.is_empty() {
        Vec::new()
    } else {
        vec![ArgumentNode::Hex(remainder.to_vec())]
    };
    Ok(vec![ArgumentNode::NestedStream {
        stream: StreamNode::new(atoms),
        trailing,
    }])
}

fn atom_reference(cx: &DecodeCx<'_>, payload: &[u8]) -> Result<Option<Vec<ArgumentNode>>> {
    let [protocol, number, rest @ ..] = payload else {
        return Ok(None);
    };
    let Some(def) = cx.catalog.find_by_key(*protocol, *number) else {
        return Ok(None);
    };
    let arguments = decode_payload(cx, def, rest)?;
    let mut inner = AtomNode::with_args(def.name.clone(), arguments);
    inner.definition = Some(def.key());
    Ok(Some(vec![ArgumentNode::NestedStream {
        stream: StreamNode::new(vec![inner]),
        trailing: Vec::new(),
    }]))
}
