//! Error types for document construction.
//!
//! Every failure the object model can report is a programmer-error-class
//! condition: it is raised synchronously by the add call that caused it, and
//! the document tree is left exactly as it was before the call.
use crate::element::{ContainerKind, ElementKind};
use thiserror::Error;

/// Main error type for docweave operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The element kind may not be placed in this container kind
    #[error("{element} is not allowed in {container}")]
    UnsupportedElement {
        element: ElementKind,
        container: ContainerKind,
    },

    /// OLE object source does not have an embeddable extension
    #[error("Invalid object source: {0}")]
    InvalidObject(String),

    /// Image source whose format cannot be determined
    #[error("Invalid image source: {0}")]
    InvalidImage(String),

    /// Header/footer tag outside of `default`, `first`, `even`
    #[error("Invalid header/footer type.")]
    InvalidHeaderType(String),

    /// No element at the requested sequence position
    #[error("Index {index} is out of range for container with {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    /// Malformed settings or style document
    #[error("Settings error: {0}")]
    Settings(String),
}

/// Result type for docweave operations.
pub type Result<T> = std::result::Result<T, Error>;
