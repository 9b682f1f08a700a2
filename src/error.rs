use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocgenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing docs: {0}")]
    MissingDocs(String),

    #[error("Unsupported value at `{path}`: expected object, string, or list of strings, found {found}")]
    UnsupportedValue { path: String, found: &'static str },
}

pub type Result<T> = std::result::Result<T, DocgenError>;
