//! Error handling for ZoneKit
//!
//! Provides the error types shared by every layer of the editor:
//! - Editor errors (rejected input, stale handles, bad map metadata)
//! - Format errors (territory file parsing)
//!
//! All error types use `thiserror` for ergonomic error handling. None of
//! these are fatal: an operation that fails leaves the document and the
//! selection exactly as they were.

use thiserror::Error;

/// Editor error type
///
/// Raised by operations on the live document, the viewport, and the
/// batch editor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// A text field could not be parsed as a number
    #[error("Invalid numeric input: '{input}'")]
    InvalidNumber {
        /// The raw text that failed to parse.
        input: String,
    },

    /// A numeric value parsed but is NaN or infinite
    #[error("Value for {field} must be finite")]
    NonFiniteValue {
        /// The field the value was destined for.
        field: String,
    },

    /// A zone or territory handle outlived the document layout it was issued for
    #[error("Stale handle: the document changed since this handle was issued")]
    StaleHandle,

    /// No territory with the given name exists
    #[error("Unknown territory: {name}")]
    UnknownTerritory {
        /// The territory name that was looked up.
        name: String,
    },

    /// Map world extents must be positive and finite
    #[error("Invalid map extents {width} x {height}")]
    InvalidMapExtents {
        /// World size along X.
        width: f64,
        /// World size along Z.
        height: f64,
    },

    /// Map preset index is out of range
    #[error("Map index {index} out of range ({count} maps available)")]
    UnknownMap {
        /// The requested index.
        index: usize,
        /// How many presets exist.
        count: usize,
    },
}

/// Territory file format error type
///
/// Represents errors found while reading or writing territory XML.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The expected root element is missing
    #[error("Missing root element <{expected}>")]
    MissingRoot {
        /// The root element name that was expected.
        expected: String,
    },

    /// An attribute value could not be parsed
    #[error("Invalid value '{value}' for attribute '{attribute}' on <{element}>")]
    InvalidAttribute {
        /// The element carrying the attribute.
        element: String,
        /// The attribute name.
        attribute: String,
        /// The raw attribute value.
        value: String,
    },

    /// The underlying XML reader or writer failed
    #[error("XML error at byte {position}: {message}")]
    Xml {
        /// Byte offset where the failure was detected.
        position: u64,
        /// The reader's description of the problem.
        message: String,
    },
}

/// Result type for operations on the live document
pub type EditorResult<T> = std::result::Result<T, EditorError>;
