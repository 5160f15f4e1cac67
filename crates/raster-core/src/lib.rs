//! # raster-core
//!
//! Layout-aware dense pixel buffers.
//!
//! Raster samples live in one contiguous store. Three physical layouts are
//! served by the same logical `(x, y, channel)` addressing:
//!
//! - [`Layout::Bip`] - pixel-interleaved
//! - [`Layout::Bsq`] - band-sequential
//! - [`Layout::Bil`] - band/line-interleaved
//!
//! This crate provides:
//!
//! - [`Point2`], [`Point3`], [`Size2`], [`Size3`] - small coordinate tuples
//! - [`numeric`] - overflow-checked casts, sums and rounding
//! - [`ImageSize`] - frame dimensions, range checks and offsets
//! - [`Region`] - origin + extent rectangles
//! - [`Image`] - the buffer itself
//! - [`copy`] - region and raw-block copies
//! - [`resample`] - the resizing capability consumed by `raster-ops`
//!
//! ## Numeric Safety
//!
//! Every conversion that can lose a value goes through [`numeric::safe_cast`]
//! or [`numeric::safe_add`], which return [`Error::Overflow`] instead of
//! wrapping:
//!
//! ```rust
//! use raster_core::{Image, ImageSize, Layout};
//!
//! let img = Image::<u8>::new(ImageSize::new(4, 3, 2), Layout::Bip).unwrap();
//! assert!(img.get(4, 0, 0).unwrap_err().is_out_of_range());
//! assert!(Image::<u8>::new(ImageSize::new(usize::MAX, 2, 1), Layout::Bip)
//!     .unwrap_err()
//!     .is_overflow());
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! raster-core (this crate)
//!    ^
//!    |
//!    +-- raster-ops (nearest / bilinear resamplers)
//!    +-- raster-bench (benchmarks)
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Copy lines on the rayon pool (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod copy;
pub mod error;
pub mod geometry;
pub mod image;
pub mod layout;
pub mod numeric;
pub mod region;
pub mod resample;
pub mod size;

// Re-exports for convenience
pub use error::*;
pub use geometry::*;
pub use image::*;
pub use layout::*;
pub use numeric::{safe_add, safe_cast, round_as, CastRisk, Scalar, ScalarKind};
pub use region::*;
pub use resample::{Interpolation, Resampler};
pub use size::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use raster_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::copy::{
        convert_layout, copy_from_padded, copy_from_slice, copy_roi, copy_roi_resized,
        copy_roi_to_slice, copy_to_slice,
    };
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Components, Point2, Point3, Size2, Size3};
    pub use crate::image::{Image, Sample};
    pub use crate::layout::Layout;
    pub use crate::region::{Region, Roi};
    pub use crate::resample::{Interpolation, Resampler};
    pub use crate::size::ImageSize;
}
