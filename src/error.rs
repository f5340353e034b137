use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("{source_name}:{line} column '{column}': cannot parse '{value}' ({reason})")]
    Parse {
        source_name: String,
        line: usize,
        column: String,
        value: String,
        reason: String,
    },

    #[error("{source_name}: missing column '{column}' in header")]
    MissingColumn { source_name: String, column: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no sample at minute {minute}")]
    NotFound { minute: i64 },

    #[error("percent change undefined: value at minute {minute} is zero")]
    ZeroBaseline { minute: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SeriesResult<T> = std::result::Result<T, SeriesError>;
