use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("xlsx write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("table exceeds worksheet bounds")]
    TableTooLarge,
}

pub type Result<T> = std::result::Result<T, ExportError>;
