use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Signature not found in module image: {0}")]
    SignatureNotFound(String),

    #[error("Failed to query host module: {0}")]
    ModuleQueryFailed(String),

    #[error("Failed to read memory at address {address:#x}: {message}")]
    MemoryReadFailed { address: u64, message: String },

    #[error("Failed to write memory at address {address:#x}: {message}")]
    MemoryWriteFailed { address: u64, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
