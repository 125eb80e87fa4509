use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Qualified name is empty")]
    EmptyName,

    #[error("Empty segment in qualified name: {name}")]
    EmptySegment { name: String },

    #[error("Invalid element index '{segment}' in qualified name: {name}")]
    InvalidElementIndex { name: String, segment: String },
}

pub type NameResult<T> = Result<T, NameError>;
