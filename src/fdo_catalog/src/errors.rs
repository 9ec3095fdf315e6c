use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog line {line}: {detail}")]
    Malformed { line: usize, detail: String },
    #[error("catalog line {line}: unknown atom type `{name}`")]
    UnknownType { line: usize, name: String },
    #[error("catalog line {line}: duplicate key {protocol}:{number} ({name})")]
    DuplicateKey {
        line: usize,
        protocol: u8,
        number: u8,
        name: String,
    },
    #[error("catalog line {line}: duplicate name `{name}`")]
    DuplicateName { line: usize, name: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
