// src/extractors/documents.rs
use crate::corpus::TextCollection;
use crate::storage::StorageManager;
use crate::utils::AppError;

/// Persists the leading records of a collection as individual text
/// files, one record per file, in index order.
///
/// Writes `min(count, collection.len())` files and returns that number.
/// A failed write aborts the run; files already written stay in place.
pub fn extract_documents(
    collection: &dyn TextCollection,
    count: usize,
    storage: &StorageManager,
) -> Result<usize, AppError> {
    let effective = count.min(collection.len());

    for i in 0..effective {
        // get() cannot miss below len(); a collection that breaks that
        // contract surfaces as an error rather than a panic.
        let text = collection
            .get(i)
            .ok_or_else(|| AppError::Processing(format!("Collection record {} missing", i)))?;

        let path = storage.save_document(i + 1, text)?;
        tracing::info!("Saved {}", path.display());
    }

    Ok(effective)
}
