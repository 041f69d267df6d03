//! Catalog Errors
//!
//! Every failure here degrades to a visible, recoverable UI state.

/// Rejected add-form input. The message is shown inline under the form.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Vui lòng điền đầy đủ các trường bắt buộc.")]
    MissingFields,

    #[error("Giá sản phẩm phải là một số lớn hơn 0.")]
    InvalidPrice,

    #[error("Danh mục đang tải, vui lòng thử lại sau.")]
    NotReady,

    #[error("Không thể thêm sản phẩm mới: đã hết mã sản phẩm.")]
    CatalogFull,
}

/// Failure to seed the catalog from its seed source
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Seed request failed with status {0}")]
    Status(u16),

    #[error("Invalid seed data: {0}")]
    Decode(String),
}

/// Failure of the durable key-value slot
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("Local storage is not available")]
    Unavailable,

    #[error("Failed to read '{key}': {message}")]
    Read { key: String, message: String },

    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },

    #[error("Failed to serialize catalog: {0}")]
    Serialize(String),
}

pub type StorageResult<T> = Result<T, StorageError>;
