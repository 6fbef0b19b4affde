use furret_core::ChainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverageError {
    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error("Accession or structure code should consist only of letters and digits: '{0}'")]
    InvalidCode(String),

    #[error("Sequence should consist only of letters: '{0}'")]
    InvalidSequence(String),

    #[error("Can't compute coverage against an empty sequence")]
    EmptySequence,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type CoverageResult<T> = std::result::Result<T, CoverageError>;
