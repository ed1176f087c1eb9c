//! Render error type.

use vertnav_store::StoreError;

/// Error produced while rendering navigation.
///
/// A missing or unresolvable root is not an error: it renders as empty
/// markup. Everything here indicates a collaborator failure and propagates
/// to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A children query returned a shape that is neither a list nor a
    /// category collection.
    #[error("Invalid argument type \"{type_name}\" passed as category children")]
    InvalidArgument {
        /// Name of the received type.
        type_name: String,
    },
    /// The category store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The navigation settings could not be serialized into a cache etag.
    #[error("Failed to fingerprint navigation settings: {0}")]
    Fingerprint(#[source] serde_json::Error),
}
