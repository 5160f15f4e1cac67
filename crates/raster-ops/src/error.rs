//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// A buffer-level failure from `raster-core`.
    #[error(transparent)]
    Core(#[from] raster_core::Error),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_converts() {
        fn fails() -> OpsResult<()> {
            Err(raster_core::Error::mismatch("depth", 3, 1))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert_eq!(err.to_string(), "depth mismatch: expected 3, got 1");
        assert!(matches!(err, OpsError::Core(_)));
    }
}
