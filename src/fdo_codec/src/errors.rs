use fdo_syntax::SourcePos;
use thiserror::Error;

/// Everything that can fail a compile or decompile. Encode-side variants
/// carry the source position of the offending atom (0:0 prints as "?" for
/// programmatically built trees); decode-side variants carry a byte offset.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("{pos}: unrecognized atom `{name}`")]
    UnrecognizedAtom { name: String, pos: SourcePos },

    #[error("{pos}: bad argument for `{atom}`: {detail}")]
    BadArgumentFormat {
        atom: String,
        detail: String,
        pos: SourcePos,
    },

    #[error("{pos}: bad number in `{atom}`: {detail}")]
    BadNumberFormat {
        atom: String,
        detail: String,
        pos: SourcePos,
    },

    #[error("{pos}: bad string in `{atom}`: {detail}")]
    BadStringFormat {
        atom: String,
        detail: String,
        pos: SourcePos,
    },

    #[error("{pos}: bad global id in `{atom}`: {detail}")]
    BadGidFormat {
        atom: String,
        detail: String,
        pos: SourcePos,
    },

    #[error("{pos}: `{value}` is not a known {what} (in `{atom}`)")]
    UnrecognizedEnum {
        atom: String,
        what: &'static str,
        value: String,
        pos: SourcePos,
    },

    #[error("{pos}: value out of range in `{atom}`: {detail}")]
    ValueTooLarge {
        atom: String,
        detail: String,
        pos: SourcePos,
    },

    #[error("byte {offset}: invalid binary format: {detail}")]
    InvalidBinaryFormat { offset: usize, detail: String },

    #[error("byte {offset}: unexpected end of stream")]
    UnexpectedEof { offset: usize },

    #[error("frame size limit unusable: {detail}")]
    BufferTooSmall { detail: String },
}

impl CodecError {
    pub(crate) fn bad_argument(atom: &str, pos: SourcePos, detail: impl Into<String>) -> Self {
        CodecError::BadArgumentFormat {
            atom: atom.to_string(),
            detail: detail.into(),
            pos,
        }
    }

    pub(crate) fn bad_number(atom: &str, pos: SourcePos, detail: impl Into<String>) -> Self {
        CodecError::BadNumberFormat {
            atom: atom.to_string(),
            detail: detail.into(),
            pos,
        }
    }

    pub(crate) fn bad_string(atom: &str, pos: SourcePos, detail: impl Into<String>) -> Self {
        CodecError::BadStringFormat {
            atom: atom.to_string(),
            detail: detail.into(),
            pos,
        }
    }

    pub(crate) fn bad_gid(atom: &str, pos: SourcePos, detail: impl Into<String>) -> Self {
        CodecError::BadGidFormat {
            atom: atom.to_string(),
            detail: detail.into(),
            pos,
        }
    }

    pub(crate) fn unknown_enum(
        atom: &str,
        pos: SourcePos,
        what: &'static str,
        value: impl Into<String>,
    ) -> Self {
        CodecError::UnrecognizedEnum {
            atom: atom.to_string(),
            what,
            value: value.into(),
            pos,
        }
    }

    pub(crate) fn too_large(atom: &str, pos: SourcePos, detail: impl Into<String>) -> Self {
        CodecError::ValueTooLarge {
            atom: atom.to_string(),
            detail: detail.into(),
            pos,
        }
    }

    pub(crate) fn invalid(offset: usize, detail: impl Into<String>) -> Self {
        CodecError::InvalidBinaryFormat {
            offset,
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
