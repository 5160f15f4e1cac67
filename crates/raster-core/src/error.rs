//! Error types for raster-core operations.
//!
//! Every fallible operation in this crate reports one of four conditions:
//!
//! - [`Error::OutOfRange`] - a coordinate or region lies outside a buffer
//! - [`Error::Mismatch`] - two buffers (or a buffer and a raw block) disagree
//!   on depth, layout, length or stride
//! - [`Error::Overflow`] - a numeric cast or addition left the target range
//! - [`Error::Unsupported`] - a layout tag could not be recognized
//!
//! Errors are raised at the point of violation and returned to the immediate
//! caller. Nothing is retried internally.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::{Error, Result};
//!
//! fn check_column(x: usize, width: usize) -> Result<()> {
//!     if x >= width {
//!         return Err(Error::out_of_range("x", format!("{x} >= width {width}")));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_column(3, 2).unwrap_err().is_out_of_range());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while addressing, sizing or copying raster data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A coordinate or region is outside the bounds of a buffer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::Error;
    ///
    /// let err = Error::out_of_range("(x, y)", "(4, 0) outside 4x3");
    /// assert!(err.to_string().contains("(4, 0)"));
    /// ```
    #[error("{what} out of range: {detail}")]
    OutOfRange {
        /// Which quantity was checked
        what: &'static str,
        /// Offending value and the bound it violated
        detail: String,
    },

    /// Two operands are incompatible.
    ///
    /// Returned when copying between buffers of different depth or layout,
    /// or when a raw block does not match its declared geometry.
    #[error("{what} mismatch: expected {expected}, got {got}")]
    Mismatch {
        /// Which property differs
        what: &'static str,
        /// Value required by the operation
        expected: String,
        /// Value actually supplied
        got: String,
    },

    /// A numeric value cannot be represented in the target type.
    #[error("overflow: {value} is not representable as {target}")]
    Overflow {
        /// Offending value
        value: String,
        /// Name of the target type
        target: &'static str,
    },

    /// A layout tag could not be recognized.
    #[error("unsupported layout: {tag}")]
    Unsupported {
        /// The tag as it was received
        tag: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfRange`] error.
    #[inline]
    pub fn out_of_range(what: &'static str, detail: impl Into<String>) -> Self {
        Self::OutOfRange {
            what,
            detail: detail.into(),
        }
    }

    /// Creates an [`Error::Mismatch`] error.
    #[inline]
    pub fn mismatch(what: &'static str, expected: impl ToString, got: impl ToString) -> Self {
        Self::Mismatch {
            what,
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }

    /// Creates an [`Error::Overflow`] error for `value` and target type `D`.
    #[inline]
    pub fn overflow<D>(value: impl std::fmt::Display) -> Self {
        Self::Overflow {
            value: value.to_string(),
            target: std::any::type_name::<D>(),
        }
    }

    /// Creates an [`Error::Unsupported`] error.
    #[inline]
    pub fn unsupported(tag: impl Into<String>) -> Self {
        Self::Unsupported { tag: tag.into() }
    }

    /// Returns `true` if this is a bounds error.
    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Returns `true` if this is a compatibility error.
    #[inline]
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }

    /// Returns `true` if this is a numeric overflow.
    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    /// Returns `true` if this is an unrecognized layout.
    #[inline]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}
