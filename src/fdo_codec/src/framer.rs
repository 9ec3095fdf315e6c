//! Size-bounded frame emission.
//!
//! Atoms pack greedily into transport frames of at most `max_frame_size`
//! bytes and are never split across frames. An atom too big for any frame
//! becomes a large-atom sequence: UNI_START_LARGE_ATOM carrying
//! `[protocol, atom_number, payload_length]`, payload chunks in
//! UNI_LARGE_ATOM_SEGMENT frames, and the remainder in UNI_END_LARGE_ATOM.
//! The length inside the start atom is a plain 16-bit big-endian value when
//! it exceeds 127, not the high-bit form the frame header uses.

use fdo_syntax::StreamNode;

use crate::encode::{encode_atom, EncodeCx};
use crate::errors::{CodecError, Result};
use crate::frame::{
    encode_frame_compact, AtomFrame, PROTOCOL_UNI, UNI_END_LARGE_ATOM, UNI_LARGE_ATOM_SEGMENT,
    UNI_START_LARGE_ATOM,
};

/// Per-frame header allowance when sizing large-atom chunks.
const SPLIT_OVERHEAD: usize = 4;

/// Delays each frame by one step so the final callback can carry
/// `is_last = true`; an empty input still produces one (empty) callback.
struct Emitter<'a> {
    sink: &'a mut dyn FnMut(&[u8], usize, bool),
    pending: Option<Vec<u8>>,
    index: usize,
}

impl<'a> Emitter<'a> {
    fn new(sink: &'a mut dyn FnMut(&[u8], usize, bool)) -> Self {
        Self {
            sink,
            pending: None,
            index: 0,
        }
    }

    fn push(&mut self, frame: Vec<u8>) {
        if let Some(previous) = self.pending.replace(frame) {
            (self.sink)(&previous, self.index, false);
            self.index += 1;
        }
    }

    fn finish(mut self) {
        let last = self.pending.take().unwrap_or_default();
        (self.sink)(&last, self.index, true);
    }
}

pub(crate) fn write_frames(
    cx: &EncodeCx<'_>,
    stream: &StreamNode,
    max_frame_size: usize,
    sink: &mut dyn FnMut(&[u8], usize, bool),
) -> Result<()> {
    if max_frame_size < 4 {
        return Err(CodecError::BufferTooSmall {
            detail: format!("max_frame_size {max_frame_size} is below the minimum of 4"),
        });
    }
    let mut emitter = Emitter::new(sink);
    let mut current: Vec<u8> = Vec::new();

    for atom in &stream.atoms {
        let frame = encode_atom(cx, atom)?;
        let encoded = encode_frame_compact(&frame)?;
        if encoded.len() > max_frame_size {
            if !current.is_empty() {
                emitter.push(std::mem::take(&mut current));
            }
            split_large(&frame, max_frame_size, &mut emitter)?;
            continue;
        }
        if current.len() + encoded.len() > max_frame_size {
            emitter.push(std::mem::take(&mut current));
        }
        current.extend(encoded);
    }
    if !current.is_empty() {
        emitter.push(current);
    }
    emitter.finish();
    Ok(())
}

fn split_large(frame: &AtomFrame, max_frame_size: usize, emitter: &mut Emitter<'_>) -> Result<()> {
    let length = frame.payload.len();
    let mut header = vec![frame.protocol, frame.atom_number];
    if length <= 0x7F {
        header.push(length as u8);
    } else {
        header.push((length >> 8) as u8);
        header.push(length as u8);
    }
    emit_alone(
        AtomFrame::new(PROTOCOL_UNI, UNI_START_LARGE_ATOM, header),
        max_frame_size,
        emitter,
    )?;

    let chunk_size = max_frame_size - SPLIT_OVERHEAD;
    let mut rest = frame.payload.as_slice();
    while rest.len() > chunk_size && chunk_size > 0 {
        let (segment, tail) = rest.split_at(chunk_size);
        emit_alone(
            AtomFrame::new(PROTOCOL_UNI, UNI_LARGE_ATOM_SEGMENT, segment.to_vec()),
            max_frame_size,
            emitter,
        )?;
        rest = tail;
    }
    emit_alone(
        AtomFrame::new(PROTOCOL_UNI, UNI_END_LARGE_ATOM, rest.to_vec()),
        max_frame_size,
        emitter,
    )
}

fn emit_alone(frame: AtomFrame, max_frame_size: usize, emitter: &mut Emitter<'_>) -> Result<()> {
    let encoded = encode_frame_compact(&frame)?;
    if encoded.len() > max_frame_size {
        return Err(CodecError::BufferTooSmall {
            detail: format!(
                "continuation frame of {} bytes cannot fit max_frame_size {}",
                encoded.len(),
                max_frame_size
            ),
        });
    }
    emitter.push(encoded);
    Ok(())
}
