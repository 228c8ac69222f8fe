//! Error handling for PlanoKit.
//!
//! The engine's contract is containment: a fault in one view, piece cell or
//! cross-section must never abort the whole multi-sheet document. These types
//! exist for the few places where an operation can fail as a unit (file
//! output, explicit validation); everything else degrades in place.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Drawing engine error type.
#[derive(Error, Debug)]
pub enum DraftError {
    /// An expected section of the input model is absent.
    ///
    /// Renderers treat this as "draw nothing for that section"; the variant
    /// exists for callers that want to report the gap explicitly.
    #[error("missing data for {section}")]
    MissingData {
        /// The model section that was absent.
        section: String,
    },

    /// Zero, negative or non-finite extents where positive sizes are required.
    #[error("degenerate geometry in {context}: {width}x{height}")]
    DegenerateGeometry {
        /// Where the degenerate extents were encountered.
        context: String,
        /// The offending width.
        width: f64,
        /// The offending height.
        height: f64,
    },

    /// A serializer failed to produce output.
    ///
    /// The SVG and DXF back ends are independent code paths; a failure in one
    /// must not block the other.
    #[error("serialization failed: {reason}")]
    Serialization {
        /// What went wrong.
        reason: String,
    },

    /// Standard I/O error (file output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DraftError {
    /// Create a [`DraftError::MissingData`] for the named section.
    pub fn missing(section: impl Into<String>) -> Self {
        DraftError::MissingData {
            section: section.into(),
        }
    }
}

/// Result type using [`DraftError`].
pub type Result<T> = std::result::Result<T, DraftError>;
