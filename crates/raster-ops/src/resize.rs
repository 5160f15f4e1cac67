//! Image resize and resampling operations.
//!
//! Concrete [`Resampler`]s for `raster-core` images of any sample type and
//! layout.
//!
//! # Resamplers
//!
//! - [`NearestResampler`] - copies the source sample under each destination center
//! - [`BilinearResampler`] - blends the four source samples around each center
//!
//! Both map destination pixel centers onto the source grid:
//! `src = (dst + 0.5) * src_len / dst_len - 0.5`.
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Image, ImageSize, Interpolation, Layout, Point2};
//! use raster_ops::resize::resize_with;
//!
//! let src = Image::filled(ImageSize::new(64, 64, 3), Layout::Bsq, 0.25f32).unwrap();
//! let mut dst = Image::default();
//! resize_with(&src, &src.roi(), Point2::new(0.5, 0.5), &mut dst, Interpolation::Linear).unwrap();
//! assert_eq!((dst.width(), dst.height(), dst.depth()), (32, 32, 3));
//! ```

use crate::{OpsError, OpsResult};
use num_traits::AsPrimitive;
use raster_core::numeric::{round_as, safe_cast};
use raster_core::resample::{resize_roi, Resampler};
use raster_core::{Error, Image, Interpolation, Point2, Result, Roi, Sample};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Nearest-neighbour resampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestResampler;

/// Bilinear resampler.
///
/// Interpolates in `f64`. Integer samples are rounded half away from zero on
/// the way back; float samples are stored unrounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct BilinearResampler;

impl<T: Sample> Resampler<T> for NearestResampler {
    fn resample(&self, src: &Image<T>, dst: &mut Image<T>) -> Result<()> {
        if !prepare(src, dst)? {
            return Ok(());
        }
        trace!(from = %src.size(), to = %dst.size(), "resample::nearest");

        let xs = nearest_taps(src.width(), dst.width());
        let ys = nearest_taps(src.height(), dst.height());
        let (size, layout, data) = (src.size(), src.layout(), src.data());
        let depth = src.depth();

        for_each_line(dst, |y, c, line| {
            let sy = ys[y];
            for (j, v) in line.iter_mut().enumerate() {
                let (x, ch) = split(c, j, depth);
                *v = data[size.offset(xs[x], sy, ch, layout)];
            }
            Ok(())
        })
    }
}

impl<T> Resampler<T> for BilinearResampler
where
    T: Sample,
    f64: AsPrimitive<T>,
{
    fn resample(&self, src: &Image<T>, dst: &mut Image<T>) -> Result<()> {
        if !prepare(src, dst)? {
            return Ok(());
        }
        trace!(from = %src.size(), to = %dst.size(), "resample::bilinear");

        let xs = linear_taps(src.width(), dst.width());
        let ys = linear_taps(src.height(), dst.height());
        let (size, layout, data) = (src.size(), src.layout(), src.data());
        let depth = src.depth();
        let at = |x: usize, y: usize, c: usize| -> f64 {
            AsPrimitive::<f64>::as_(data[size.offset(x, y, c, layout)])
        };

        for_each_line(dst, |y, c, line| {
            let ty = ys[y];
            for (j, v) in line.iter_mut().enumerate() {
                let (x, ch) = split(c, j, depth);
                let tx = xs[x];
                let top = lerp(at(tx.i0, ty.i0, ch), at(tx.i1, ty.i0, ch), tx.t);
                let bot = lerp(at(tx.i0, ty.i1, ch), at(tx.i1, ty.i1, ch), tx.t);
                *v = store(lerp(top, bot, ty.t))?;
            }
            Ok(())
        })
    }
}

/// Returns the resampler for `interpolation`.
pub fn resampler<T>(interpolation: Interpolation) -> Box<dyn Resampler<T> + Send + Sync>
where
    T: Sample,
    f64: AsPrimitive<T>,
{
    match interpolation {
        Interpolation::Nearest => Box::new(NearestResampler),
        Interpolation::Linear => Box::new(BilinearResampler),
    }
}

/// Resizes `roi` of `src` by `zoom` into `dst` with the given interpolation.
///
/// `dst` is resized to `roi.zoomed_xy(zoom)` and takes the depth and layout
/// of `src`.
///
/// # Errors
///
/// - [`OpsError::InvalidParameter`] if a zoom factor is not finite and
///   positive.
/// - [`OpsError::Core`] for region, size or sample conversion failures.
pub fn resize_with<T>(
    src: &Image<T>,
    roi: &Roi,
    zoom: Point2<f64>,
    dst: &mut Image<T>,
    interpolation: Interpolation,
) -> OpsResult<()>
where
    T: Sample,
    f64: AsPrimitive<T>,
{
    if !(zoom.x.is_finite() && zoom.y.is_finite() && zoom.x > 0.0 && zoom.y > 0.0) {
        return Err(OpsError::InvalidParameter(format!(
            "zoom must be finite and > 0, got {zoom}"
        )));
    }
    debug!(roi = %roi, %interpolation, zoom_x = zoom.x, zoom_y = zoom.y, "Resizing region");

    let r = resampler::<T>(interpolation);
    resize_roi(src, roi, zoom, dst, r.as_ref())?;
    Ok(())
}

/// Validates a source/destination pair. Returns `false` when there is
/// nothing to write.
fn prepare<T: Sample>(src: &Image<T>, dst: &Image<T>) -> Result<bool> {
    if src.layout() != dst.layout() {
        return Err(Error::mismatch("layout", dst.layout(), src.layout()));
    }
    dst.check_depth(src.depth())?;
    if dst.is_empty() {
        return Ok(false);
    }
    if src.is_empty() {
        return Err(Error::out_of_range(
            "source",
            format!("empty {} source for {} destination", src.size(), dst.size()),
        ));
    }
    Ok(true)
}

/// Runs `f(row, channel, line)` over every physical line of `dst`.
fn for_each_line<T, F>(dst: &mut Image<T>, f: F) -> Result<()>
where
    T: Sample,
    F: Fn(usize, Option<usize>, &mut [T]) -> Result<()> + Send + Sync,
{
    let layout = dst.layout();
    let (height, depth) = (dst.height(), dst.depth());
    let line_len = layout.line_len(dst.width(), depth)?;
    let work = |(i, line): (usize, &mut [T])| {
        let (y, c) = layout.line_coord(i, height, depth);
        f(y, c, line)
    };

    #[cfg(feature = "parallel")]
    let result = dst.data_mut().par_chunks_mut(line_len).enumerate().try_for_each(work);
    #[cfg(not(feature = "parallel"))]
    let result = dst.data_mut().chunks_mut(line_len).enumerate().try_for_each(work);
    result
}

/// Column and channel of sample `j` within a line. Lines without a channel
/// interleave all `depth` channels.
#[inline]
fn split(c: Option<usize>, j: usize, depth: usize) -> (usize, usize) {
    match c {
        Some(c) => (j, c),
        None => (j / depth, j % depth),
    }
}

/// Source index for each destination index along one axis.
fn nearest_taps(src_len: usize, dst_len: usize) -> Vec<usize> {
    let scale = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|i| (((i as f64 + 0.5) * scale) as usize).min(src_len - 1))
        .collect()
}

/// Two neighbours along one axis and the weight of the second.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tap {
    i0: usize,
    i1: usize,
    t: f64,
}

fn linear_taps(src_len: usize, dst_len: usize) -> Vec<Tap> {
    let scale = src_len as f64 / dst_len as f64;
    let last = src_len - 1;
    (0..dst_len)
        .map(|i| {
            let center = ((i as f64 + 0.5) * scale - 0.5).clamp(0.0, last as f64);
            let i0 = center.floor() as usize;
            Tap {
                i0,
                i1: (i0 + 1).min(last),
                t: center - i0 as f64,
            }
        })
        .collect()
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Converts an interpolated value back to the sample type.
#[inline]
fn store<T>(v: f64) -> Result<T>
where
    T: Sample,
    f64: AsPrimitive<T>,
{
    if T::KIND.is_float() {
        safe_cast(v)
    } else {
        round_as(v)
    }
}
