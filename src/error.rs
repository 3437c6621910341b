//! Error and violation types shared by all checks.

use std::path::PathBuf;

use thiserror::Error;

/// The check that produced a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Identifier,
    LexFile,
    Membership,
    CrossCategory,
    Reference,
    Symmetry,
    Transitive,
    Cycle,
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Check::Identifier => write!(f, "Identifier"),
            Check::LexFile => write!(f, "Lex file"),
            Check::Membership => write!(f, "Membership"),
            Check::CrossCategory => write!(f, "Cross-category"),
            Check::Reference => write!(f, "Reference"),
            Check::Symmetry => write!(f, "Symmetry"),
            Check::Transitive => write!(f, "Transitive"),
            Check::Cycle => write!(f, "Cycle"),
        }
    }
}

/// One failed invariant for one element of the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub code: &'static str,
    pub check: Check,
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Violation {
    pub fn new(code: &'static str, check: Check, message: impl Into<String>) -> Self {
        Violation {
            code,
            check,
            message: message.into(),
        }
    }
}

/// Failures while loading or indexing a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {unit}: {source}")]
    Json {
        unit: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no category units (wn-*.json) found in {0}")]
    NoUnits(PathBuf),

    #[error("lex file '{0}' does not start with a known category code")]
    UnknownCategory(String),

    #[error("synset '{0}' is declared more than once")]
    DuplicateSynset(String),

    #[error("synset '{0}' not found")]
    NotFound(String),
}

/// Conditions that stop a validation run.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Cannot be fixed: invalid identifier {0}")]
    InvalidId(String),

    #[error("Cannot be fixed: hypernym loop in chain [{}] => {repeated}", .chain.join(", "))]
    Cycle { chain: Vec<String>, repeated: String },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// True for the conditions that fix mode cannot repair.
    pub fn is_unfixable(&self) -> bool {
        matches!(self, CheckError::InvalidId(_) | CheckError::Cycle { .. })
    }
}
