use thiserror::Error;

/// The kind of a cross-reference [`ValidationError`].
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ValidationErrorKind {
    /// A slot referenced a non-empty index but the referenced slot is itself empty.
    EmptyReference,
    /// A referenced index is out of range for the collection it indexes into.
    IndexOutOfRange,
    /// The file's version does not match what the caller expected.
    VersionMismatch,
}

/// A single cross-reference failure found while validating a [`crate::Project`].
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ValidationError {
    /// A human-readable path to the offending field, e.g. `"song[3][0] -> chain 12"`.
    pub path: String,
    pub kind: ValidationErrorKind,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} at {}", self.kind, self.path)
    }
}

/// The single error type returned by every fallible operation in this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("input is too short: need at least {needed} bytes, got {got}")]
    ShortInput { needed: usize, got: usize },

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("value {value} out of range {min}..={max} for field `{field}`")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("unknown enum name `{name}` for `{enum_name}`")]
    UnknownEnumName { enum_name: String, name: String },

    #[error("unknown enum value {value} for `{enum_name}`")]
    UnknownEnumValue { enum_name: String, value: u8 },

    #[error("no available slot found in `{collection}`")]
    NoSlotAvailable { collection: String },

    #[error("{0} validation error(s) found")]
    ValidationError(Vec<ValidationError>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
