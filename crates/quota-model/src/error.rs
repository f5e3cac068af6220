use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("dictionary is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(
        "dictionary maps headers {first:?} and {second:?} to the same name {translated:?}; \
         translated display rows would lose a column"
    )]
    DuplicateHeaderTranslation {
        translated: String,
        first: String,
        second: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
