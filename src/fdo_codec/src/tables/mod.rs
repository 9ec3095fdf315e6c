//! Symbolic name ⇄ code maps used by the argument codec.
//!
//! Forward lookups are `phf` maps keyed by the source spelling (aliases
//! included); every table also has a hand-written inverse that yields the
//! one canonical name per code, so decode output re-encodes to the same
//! bytes.

pub mod alert;
pub mod buf;
pub mod charset;
pub mod criterion;
pub mod de;
pub mod fm;
pub mod hfs;
pub mod man;
pub mod mat;
pub mod object_type;
pub mod orient;
pub mod text;
