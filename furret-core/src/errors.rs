use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("Invalid residue range {begin}-{end}: expected 1 <= begin <= end")]
    InvalidRange { begin: u32, end: u32 },

    #[error("Invalid group notation '{notation}': {reason}")]
    InvalidGroupNotation { notation: String, reason: String },
}

impl ChainError {
    pub(crate) fn notation(notation: &str, reason: impl Into<String>) -> Self {
        ChainError::InvalidGroupNotation {
            notation: notation.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ChainResult<T> = std::result::Result<T, ChainError>;
