/// Form errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown field kind: {0}")]
    UnknownFieldKind(String),
}
