//! Normalization of child category payloads.

use vertnav_store::{CategoryList, CategoryNode};

use crate::error::RenderError;

/// Flatten a children payload into a positional list.
///
/// Sibling classification needs index access, so both accepted shapes end up
/// as a plain `Vec` in load order.
///
/// # Errors
///
/// Returns [`RenderError::InvalidArgument`] naming the received type for any
/// other payload.
pub fn to_linear(list: CategoryList) -> Result<Vec<CategoryNode>, RenderError> {
    match list {
        CategoryList::List(nodes) => Ok(nodes),
        CategoryList::Collection(collection) => Ok(collection.into_items()),
        CategoryList::Unsupported(type_name) => Err(RenderError::InvalidArgument { type_name }),
    }
}

/// Borrowing variant of [`to_linear`] for payloads kept for later lookups.
///
/// # Errors
///
/// Returns [`RenderError::InvalidArgument`] for an unsupported payload.
pub fn as_linear(list: &CategoryList) -> Result<&[CategoryNode], RenderError> {
    match list {
        CategoryList::List(nodes) => Ok(nodes),
        CategoryList::Collection(collection) => Ok(collection.items()),
        CategoryList::Unsupported(type_name) => Err(RenderError::InvalidArgument {
            type_name: type_name.clone(),
        }),
    }
}
