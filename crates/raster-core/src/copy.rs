//! Bulk copies between images and raw blocks.
//!
//! All functions validate fully before the first sample moves, so a failed
//! call leaves the destination as it was.
//!
//! Data moves one physical line at a time (see [`crate::layout`]): a
//! destination line that intersects the target rectangle receives one
//! contiguous segment from the matching source line.
//!
//! | layout | segment per line                  | lines touched                  |
//! |--------|-----------------------------------|--------------------------------|
//! | `Bip`  | `extent.width * depth` samples    | one per row                    |
//! | `Bil`  | `extent.width` samples            | one per (row, channel)         |
//! | `Bsq`  | `extent.width` samples            | `extent.height` per channel plane |
//!
//! With the `parallel` feature, destination lines are distributed over the
//! rayon pool. Each worker owns a disjoint `&mut` line.
//!
//! No function here converts between sample types.

use crate::geometry::{Point2, Size2};
use crate::image::{Image, Sample};
use crate::layout::Layout;
use crate::region::Roi;
use crate::size::ImageSize;
use crate::{Error, Result};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Copies `roi` of `src` into `dst` with its top-left corner at `dst_origin`.
///
/// # Errors
///
/// Checked in this order:
///
/// 1. [`Error::Mismatch`] if the layouts differ.
/// 2. [`Error::Mismatch`] if the depths differ.
/// 3. [`Error::OutOfRange`] if `roi` is not inside `src`, or the target
///    rectangle `(dst_origin, roi.extent)` is not inside `dst`.
///
/// # Example
///
/// ```rust
/// use raster_core::{copy::copy_roi, Image, ImageSize, Layout, Point2, Roi};
///
/// let src = Image::filled(ImageSize::new(4, 4, 3), Layout::Bil, 9u8).unwrap();
/// let mut dst = Image::new(ImageSize::new(8, 8, 3), Layout::Bil).unwrap();
///
/// copy_roi(&src, &Roi::from_xywh(1, 1, 2, 2), &mut dst, Point2::new(5, 6)).unwrap();
/// assert_eq!(*dst.get(6, 7, 2).unwrap(), 9);
/// assert_eq!(*dst.get(4, 7, 2).unwrap(), 0);
/// ```
pub fn copy_roi<T: Sample>(
    src: &Image<T>,
    roi: &Roi,
    dst: &mut Image<T>,
    dst_origin: Point2<usize>,
) -> Result<()> {
    if src.layout() != dst.layout() {
        return Err(Error::mismatch("layout", dst.layout(), src.layout()));
    }
    dst.check_depth(src.depth())?;
    src.check_roi(roi)?;
    dst.size().check_roi(dst_origin, roi.extent)?;

    trace!(
        roi = %roi,
        dst_x = dst_origin.x,
        dst_y = dst_origin.y,
        layout = %src.layout(),
        "copy_roi"
    );

    let dst_size = dst.size();
    copy_lines(
        src.data(),
        src.size(),
        roi.origin,
        dst.data_mut(),
        dst_size,
        dst_origin,
        roi.extent,
        src.layout(),
    )
}

/// Resizes `dst` to the extent of `roi` (with the depth and layout of `src`)
/// and copies the region into it.
///
/// `dst` keeps its store when the element count already matches.
pub fn copy_roi_resized<T: Sample>(src: &Image<T>, roi: &Roi, dst: &mut Image<T>) -> Result<()> {
    src.check_roi(roi)?;
    let size = ImageSize::new(roi.extent.width, roi.extent.height, src.depth());
    dst.resize(size)?;
    dst.set_layout(src.layout());
    copy_roi(src, roi, dst, Point2::new(0, 0))
}

/// Fills `dst` from a tightly packed raw block of `size` in `layout`.
///
/// `dst` takes the size and layout of the block. Samples past the frame are
/// ignored.
///
/// # Errors
///
/// [`Error::OutOfRange`] if `src` is shorter than one frame.
pub fn copy_from_slice<T: Sample>(
    src: &[T],
    size: ImageSize,
    layout: Layout,
    dst: &mut Image<T>,
) -> Result<()> {
    let count = size.elems_per_frame()?;
    if src.len() < count {
        return Err(Error::out_of_range(
            "source block",
            format!("{} samples, frame {size} needs {count}", src.len()),
        ));
    }
    trace!(size = %size, layout = %layout, "copy_from_slice");

    dst.resize(size)?;
    dst.set_layout(layout);
    dst.data_mut().copy_from_slice(&src[..count]);
    Ok(())
}

/// Fills `dst` from a raw block whose physical lines are `bytes_per_line`
/// apart.
///
/// A "line" is a physical line of `layout`: one row for [`Layout::Bip`], one
/// row of one channel for the others. Bytes between the end of a line and the
/// next stride are skipped. The last line needs no trailing padding.
///
/// The new store is built on the side and only swapped into `dst` once
/// complete, so `dst` is untouched on any error.
///
/// # Errors
///
/// - [`Error::Mismatch`] if `bytes_per_line` is not a multiple of the sample
///   size, or is shorter than one line.
/// - [`Error::OutOfRange`] if `src` ends before the last line.
/// - [`Error::Overflow`] if the frame or line sizes do not fit `usize`.
///
/// A frame with no samples succeeds without reading `src`.
///
/// # Example
///
/// ```rust
/// use raster_core::{copy::copy_from_padded, Image, ImageSize, Layout};
///
/// // 3x2 single channel u16, rows padded to 8 bytes.
/// let raw: Vec<u16> = vec![1, 2, 3, 0, 4, 5, 6];
/// let mut img = Image::default();
/// copy_from_padded(&raw, ImageSize::new(3, 2, 1), 8, Layout::Bip, &mut img).unwrap();
/// assert_eq!(img.data(), &[1, 2, 3, 4, 5, 6]);
/// ```
pub fn copy_from_padded<T: Sample>(
    src: &[T],
    size: ImageSize,
    bytes_per_line: usize,
    layout: Layout,
    dst: &mut Image<T>,
) -> Result<()> {
    let count = size.elems_per_frame()?;
    if count == 0 {
        trace!(size = %size, layout = %layout, "copy_from_padded: empty frame");
        *dst = Image::from_parts(size, layout, Vec::new());
        return Ok(());
    }

    let elem = std::mem::size_of::<T>();
    let line_len = layout.line_len(size.width(), size.depth())?;
    let line_bytes = line_len
        .checked_mul(elem)
        .ok_or_else(|| Error::overflow::<usize>(format_args!("{line_len} * {elem}")))?;
    if bytes_per_line % elem != 0 {
        return Err(Error::mismatch(
            "line stride",
            format!("a multiple of {elem} bytes"),
            bytes_per_line,
        ));
    }
    if bytes_per_line < line_bytes {
        return Err(Error::mismatch(
            "line stride",
            format!("at least {line_bytes} bytes"),
            bytes_per_line,
        ));
    }

    let stride = bytes_per_line / elem;
    let lines = layout.line_count(size.height(), size.depth())?;
    let needed = (lines - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(line_len))
        .ok_or_else(|| Error::overflow::<usize>(format_args!("{lines} lines of {stride}")))?;
    if src.len() < needed {
        return Err(Error::out_of_range(
            "source block",
            format!("{} samples, {lines} lines of stride {stride} need {needed}", src.len()),
        ));
    }

    debug!(size = %size, layout = %layout, bytes_per_line, "copy_from_padded");

    let mut data = vec![T::default(); count];
    let fill = |(i, line): (usize, &mut [T])| {
        let start = i * stride;
        line.copy_from_slice(&src[start..start + line_len]);
    };
    #[cfg(feature = "parallel")]
    data.par_chunks_mut(line_len).enumerate().for_each(fill);
    #[cfg(not(feature = "parallel"))]
    data.chunks_mut(line_len).enumerate().for_each(fill);

    *dst = Image::from_parts(size, layout, data);
    Ok(())
}

/// Writes `roi` of `src` into `dst` as a tightly packed block of
/// `roi.extent.width x roi.extent.height x depth` in the layout of `src`.
///
/// Samples of `dst` past the block are left alone.
///
/// # Errors
///
/// - [`Error::OutOfRange`] if `roi` is not inside `src`.
/// - [`Error::OutOfRange`] if `dst` is shorter than the block.
pub fn copy_roi_to_slice<T: Sample>(src: &Image<T>, roi: &Roi, dst: &mut [T]) -> Result<()> {
    src.check_roi(roi)?;
    let packed = ImageSize::new(roi.extent.width, roi.extent.height, src.depth());
    let count = packed.elems_per_frame()?;
    if dst.len() < count {
        return Err(Error::out_of_range(
            "destination block",
            format!("{} samples, region {packed} needs {count}", dst.len()),
        ));
    }
    trace!(roi = %roi, layout = %src.layout(), "copy_roi_to_slice");

    copy_lines(
        src.data(),
        src.size(),
        roi.origin,
        &mut dst[..count],
        packed,
        Point2::new(0, 0),
        roi.extent,
        src.layout(),
    )
}

/// Copies the whole store of `src` to the front of `dst`.
///
/// # Errors
///
/// [`Error::OutOfRange`] if `dst` is shorter than the store.
pub fn copy_to_slice<T: Sample>(src: &Image<T>, dst: &mut [T]) -> Result<()> {
    let n = src.len();
    if dst.len() < n {
        return Err(Error::out_of_range(
            "destination block",
            format!("{} samples, image {} needs {n}", dst.len(), src.size()),
        ));
    }
    dst[..n].copy_from_slice(src.data());
    Ok(())
}

/// Returns a copy of `src` stored in `layout`.
///
/// Every sample keeps its logical `(x, y, c)` coordinate; only the physical
/// order changes.
///
/// ```rust
/// use raster_core::{copy::convert_layout, Image, ImageSize, Layout};
///
/// let bip = Image::from_vec(ImageSize::new(2, 1, 3), Layout::Bip, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// let bsq = convert_layout(&bip, Layout::Bsq).unwrap();
/// assert_eq!(bsq.data(), &[1, 4, 2, 5, 3, 6]);
/// ```
///
/// # Errors
///
/// [`Error::Overflow`] if a line of the target layout does not fit `usize`.
/// An empty frame always converts.
pub fn convert_layout<T: Sample>(src: &Image<T>, layout: Layout) -> Result<Image<T>> {
    if src.layout() == layout {
        return Ok(src.clone());
    }
    let size = src.size();
    debug!(size = %size, from = %src.layout(), to = %layout, "convert_layout");

    let (w, h, d) = (size.width(), size.height(), size.depth());
    let from = src.layout();
    let samples = src.data();
    let mut data = vec![T::default(); src.len()];
    if !data.is_empty() {
        let fill = |(i, line): (usize, &mut [T])| {
            let (y, c) = layout.line_coord(i, h, d);
            match c {
                Some(c) => {
                    for (x, v) in line.iter_mut().enumerate() {
                        *v = samples[from.offset(x, y, c, w, h, d)];
                    }
                }
                None => {
                    for (j, v) in line.iter_mut().enumerate() {
                        *v = samples[from.offset(j / d, y, j % d, w, h, d)];
                    }
                }
            }
        };
        let line_len = layout.line_len(w, d)?;
        #[cfg(feature = "parallel")]
        data.par_chunks_mut(line_len).enumerate().for_each(fill);
        #[cfg(not(feature = "parallel"))]
        data.chunks_mut(line_len).enumerate().for_each(fill);
    }
    Ok(Image::from_parts(size, layout, data))
}

/// Moves the `extent` rectangle at `src_origin` of `src` to `dst_origin` of
/// `dst`, one segment per intersecting destination line.
///
/// Both rectangles must already be range checked and both stores must share
/// `layout` and depth.
#[allow(clippy::too_many_arguments)]
fn copy_lines<T: Sample>(
    src: &[T],
    src_size: ImageSize,
    src_origin: Point2<usize>,
    dst: &mut [T],
    dst_size: ImageSize,
    dst_origin: Point2<usize>,
    extent: Size2<usize>,
    layout: Layout,
) -> Result<()> {
    if extent.width == 0 || extent.height == 0 || dst.is_empty() {
        return Ok(());
    }
    let depth = dst_size.depth();
    let height = dst_size.height();
    let line_len = layout.line_len(dst_size.width(), depth)?;
    let (seg_start, seg_len) = match layout {
        Layout::Bip => (dst_origin.x * depth, extent.width * depth),
        Layout::Bsq | Layout::Bil => (dst_origin.x, extent.width),
    };
    let rows = dst_origin.y..dst_origin.y + extent.height;

    let copy_line = |(i, line): (usize, &mut [T])| {
        let (y, c) = layout.line_coord(i, height, depth);
        if !rows.contains(&y) {
            return;
        }
        let sy = src_origin.y + (y - dst_origin.y);
        let from = src_size.offset(src_origin.x, sy, c.unwrap_or(0), layout);
        line[seg_start..seg_start + seg_len].copy_from_slice(&src[from..from + seg_len]);
    };

    #[cfg(feature = "parallel")]
    dst.par_chunks_mut(line_len).enumerate().for_each(copy_line);
    #[cfg(not(feature = "parallel"))]
    dst.chunks_mut(line_len).enumerate().for_each(copy_line);
    Ok(())
}
