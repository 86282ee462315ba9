use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NfsError>;

/// Largest block index accepted on the command line.
pub const MAX_BLOCKS: i32 = 4096;

pub const USAGE: &str = "Command syntax - ictgen <numBlocksMin> <numBlocksMax> <filepath>";

#[derive(Debug, Error)]
pub enum NfsError {
    #[error("You need to provide three arguments! (got {0})")]
    ArgumentCount(usize),

    #[error("The arguments must be an integer. (`{value}`: {source})")]
    NumberFormat {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("There was an I/O exception! Check file path specified for the output. ({path:?}: {source})")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("There was an array size mismatch - check the property array sizes. ({0})")]
    ConfigMismatch(#[from] MismatchError),

    #[error("could not load block configuration from {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("Minimum number needs to be smaller than the maximum! ({min} > {max})")]
    MinAboveMax { min: i32, max: i32 },

    #[error("Arguments need to be greater than 0!")]
    Negative,

    #[error("Too many blocks - reduce to less than 4096!")]
    TooMany,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("You need to specify a path!")]
    Empty,

    #[error("You need to specify a filepath ending in .txt or .nfs! Current filepath ending: {ending}")]
    BadExtension { ending: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MismatchError {
    #[error("{props} header properties but {values} header values")]
    Header { props: usize, values: usize },

    #[error("{pins} netlist pins but {nets} netlist nets")]
    Netlist { pins: usize, nets: usize },
}

impl NfsError {
    /// Short category name shown in the failure report.
    pub fn category(&self) -> &'static str {
        match self {
            NfsError::ArgumentCount(_) => "argument count",
            NfsError::NumberFormat { .. } => "number format",
            NfsError::Range(_) => "range",
            NfsError::Path(_) => "path",
            NfsError::Io { .. } => "I/O",
            NfsError::ConfigMismatch(_) => "configuration array mismatch",
            NfsError::Config { .. } => "configuration",
        }
    }

    /// Whether the usage line should follow the message.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            NfsError::ArgumentCount(_)
                | NfsError::NumberFormat { .. }
                | NfsError::Range(_)
                | NfsError::Path(_)
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NfsError::Io {
            path: path.into(),
            source,
        }
    }
}
