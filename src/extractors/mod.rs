// src/extractors/mod.rs
pub mod cleaning;
pub mod documents;

// Re-export key extraction entry points for convenience
pub use documents::extract_documents;
