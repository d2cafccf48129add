// src/utils/error.rs
#![allow(dead_code)]
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 500 Internal Server Error

    #[error("Dataset server rate limit likely exceeded")]
    RateLimited,

    #[error("Could not find dataset split: {0}")]
    SplitNotFound(String),

    #[error("Failed to parse dataset server response: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output path exists but is not a directory: {0}")]
    NotADirectory(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Dataset fetch failed: {0}")]
    DataSource(#[from] DataSourceError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
