/// Errors raised for inputs the library rejects.
///
/// Contract violations such as out-of-range vertices are panics, not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown graph name: {0}")]
    UnknownGraph(String),
    #[error("{n} vertices exceed the maximum of {max}")]
    TooManyVertices { n: usize, max: usize },
    #[error("malformed graph6 string {input:?}: {reason}")]
    MalformedGraph6 { input: String, reason: String },
    #[error("cannot choose {k} out of {n}")]
    InvalidChoice { n: u64, k: u64 },
    #[error("arithmetic overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, Error>;
