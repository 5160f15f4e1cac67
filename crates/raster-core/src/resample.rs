//! Resampling capability.
//!
//! The core does not interpolate. It sizes the destination and hands both
//! buffers to a [`Resampler`], which fills every destination sample.
//! Concrete resamplers live in `raster-ops`.
//!
//! ```rust
//! use raster_core::resample::{resize, Resampler};
//! use raster_core::{Image, Point2, Result, Sample};
//!
//! /// Fills the destination with the top-left source sample.
//! struct Flat;
//!
//! impl<T: Sample> Resampler<T> for Flat {
//!     fn resample(&self, src: &Image<T>, dst: &mut Image<T>) -> Result<()> {
//!         dst.fill(*src.get(0, 0, 0)?);
//!         Ok(())
//!     }
//! }
//!
//! let src = Image::<u8>::with_size(4, 4, 1).unwrap();
//! let mut dst = Image::default();
//! resize(&src, Point2::new(2.0, 0.5), &mut dst, &Flat).unwrap();
//! assert_eq!((dst.width(), dst.height()), (8, 2));
//! ```

use crate::copy::copy_roi_resized;
use crate::geometry::Point2;
use crate::image::{Image, Sample};
use crate::region::Roi;
use crate::size::ImageSize;
use crate::Result;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Interpolation kernel requested from a resampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    /// Nearest neighbour.
    #[default]
    Nearest,
    /// Bilinear.
    Linear,
}

impl FromStr for Interpolation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" | "nn" => Ok(Self::Nearest),
            "linear" | "bilinear" => Ok(Self::Linear),
            _ => Err(format!("unknown interpolation: {s}")),
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => f.write_str("nearest"),
            Self::Linear => f.write_str("linear"),
        }
    }
}

/// Fills a pre-sized destination from a source of the same depth and layout.
pub trait Resampler<T: Sample> {
    /// Populates every sample of `dst` from `src`.
    ///
    /// `dst` already has its final size, the depth of `src` and the layout
    /// of `src`.
    fn resample(&self, src: &Image<T>, dst: &mut Image<T>) -> Result<()>;
}

impl<T: Sample, R: Resampler<T> + ?Sized> Resampler<T> for &R {
    fn resample(&self, src: &Image<T>, dst: &mut Image<T>) -> Result<()> {
        (**self).resample(src, dst)
    }
}

/// Resizes `roi` of `src` by `zoom` into `dst`.
///
/// `dst` becomes `roi.zoomed_xy(zoom)` in size with the depth and layout of
/// `src`. A region smaller than the frame is first copied into a temporary
/// buffer.
///
/// The resampler writes into a fresh image that replaces `dst` only on
/// success; on any error `dst` keeps its size, layout and samples.
///
/// # Errors
///
/// - [`Error::OutOfRange`](crate::Error::OutOfRange) if `roi` is not inside
///   `src`.
/// - [`Error::Overflow`](crate::Error::Overflow) if the zoomed extent is
///   negative or too large.
/// - Anything returned by the resampler.
pub fn resize_roi<T: Sample, R: Resampler<T> + ?Sized>(
    src: &Image<T>,
    roi: &Roi,
    zoom: Point2<f64>,
    dst: &mut Image<T>,
    resampler: &R,
) -> Result<()> {
    src.check_roi(roi)?;
    let target = roi.zoomed_xy(zoom)?;
    let size = ImageSize::new(target.extent.width, target.extent.height, src.depth());

    debug!(roi = %roi, zoom_x = zoom.x, zoom_y = zoom.y, to = %size, "resize_roi");

    let mut out = Image::new(size, src.layout())?;
    if *roi == src.roi() {
        resampler.resample(src, &mut out)?;
    } else {
        let mut part = Image::default();
        copy_roi_resized(src, roi, &mut part)?;
        resampler.resample(&part, &mut out)?;
    }
    *dst = out;
    Ok(())
}

/// Resizes the whole of `src` by `zoom` into `dst`.
pub fn resize<T: Sample, R: Resampler<T> + ?Sized>(
    src: &Image<T>,
    zoom: Point2<f64>,
    dst: &mut Image<T>,
    resampler: &R,
) -> Result<()> {
    resize_roi(src, &src.roi(), zoom, dst, resampler)
}
