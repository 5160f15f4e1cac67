//! # raster-ops
//!
//! Operations on `raster-core` images.
//!
//! # Modules
//!
//! - [`resize`] - Nearest and bilinear resampling, region resize
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Image, ImageSize, Interpolation, Layout, Point2, Roi};
//! use raster_ops::resize_with;
//!
//! let src = Image::filled(ImageSize::new(16, 16, 4), Layout::Bip, 128u8).unwrap();
//! let mut dst = Image::default();
//!
//! // Upscale the central 8x8 block to 24x24.
//! resize_with(&src, &Roi::from_xywh(4, 4, 8, 8), Point2::new(3.0, 3.0), &mut dst, Interpolation::Linear)
//!     .unwrap();
//! assert_eq!((dst.width(), dst.height()), (24, 24));
//! assert!(dst.data().iter().all(|&v| v == 128));
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Resample destination lines on the rayon pool (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod resize;

pub use error::{OpsError, OpsResult};
pub use resize::{resampler, resize_with, BilinearResampler, NearestResampler};
