//! Frame size descriptor.
//!
//! [`ImageSize`] is the `width x height x depth` triple of a buffer. It owns
//! the range checks every addressing operation runs before it touches the
//! store, and the layout-parameterized offset they resolve to.
//!
//! Range checks accept coordinates of any primitive integer type. Negative
//! values of signed types fail the same way as values past the upper bound.
//! Regions are half-open: `[origin, origin + extent)`.
//!
//! ```rust
//! use raster_core::{ImageSize, Layout, Point2, Size2};
//!
//! let size = ImageSize::new(4usize, 3, 2);
//! assert!(size.check_range_c(3, 2, 1).is_ok());
//! assert!(size.check_range(-1i32, 0).is_err());
//! assert!(size.check_roi(Point2::new(2, 1), Size2::new(2u32, 2)).is_ok());
//! assert!(size.check_roi(Point2::new(3, 1), Size2::new(2u32, 2)).is_err());
//! assert_eq!(size.offset(1, 1, 0, Layout::Bsq), 5);
//! ```

use crate::geometry::{Point2, Size2, Size3};
use crate::layout::Layout;
use crate::numeric::{safe_add, safe_cast, Scalar};
use crate::region::Region;
use crate::{Error, Result};
use num_traits::{AsPrimitive, PrimInt, Unsigned};
use std::fmt;

/// Integer types usable as buffer dimensions.
pub trait Dim: Scalar + PrimInt + Unsigned + std::hash::Hash {}

impl<T: Scalar + PrimInt + Unsigned + std::hash::Hash> Dim for T {}

/// Width, height and depth (channel count) of a frame.
///
/// The triple is replaced as a whole; there are no per-field setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageSize<T: Dim = usize> {
    width: T,
    height: T,
    depth: T,
}

impl<T: Dim> ImageSize<T> {
    /// Creates a size descriptor.
    #[inline]
    pub fn new(width: T, height: T, depth: T) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Columns per frame.
    #[inline]
    pub fn width(&self) -> T {
        self.width
    }

    /// Rows per frame.
    #[inline]
    pub fn height(&self) -> T {
        self.height
    }

    /// Channels per pixel.
    #[inline]
    pub fn depth(&self) -> T {
        self.depth
    }

    /// Width and height.
    #[inline]
    pub fn plane(&self) -> Size2<T> {
        Size2::new(self.width, self.height)
    }

    /// True if any dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width.is_zero() || self.height.is_zero() || self.depth.is_zero()
    }

    /// Elements in one row across all channels (`width * depth`).
    pub fn elems_per_line(&self) -> Result<T> {
        checked_mul(self.width, self.depth)
    }

    /// Elements in one channel plane (`width * height`).
    pub fn elems_per_plane(&self) -> Result<T> {
        checked_mul(self.width, self.height)
    }

    /// Elements in the whole frame (`width * height * depth`).
    pub fn elems_per_frame(&self) -> Result<T> {
        checked_mul(self.elems_per_plane()?, self.depth)
    }

    /// Linear index of `(x, y, c)` under `layout`. Not range checked.
    #[inline]
    pub fn offset(&self, x: T, y: T, c: T, layout: Layout) -> T {
        layout.offset(x, y, c, self.width, self.height, self.depth)
    }

    /// Fails with [`Error::OutOfRange`] unless `0 <= x < width` and
    /// `0 <= y < height`.
    pub fn check_range<C>(&self, x: C, y: C) -> Result<()>
    where
        C: Scalar + PrimInt + AsPrimitive<T>,
        T: AsPrimitive<C>,
    {
        if below(x, self.width) && below(y, self.height) {
            Ok(())
        } else {
            Err(Error::out_of_range(
                "(x, y)",
                format!("({x}, {y}) outside {}x{}", self.width, self.height),
            ))
        }
    }

    /// Like [`check_range`](Self::check_range), additionally requiring
    /// `0 <= c < depth`. The channel is checked first.
    pub fn check_range_c<C>(&self, x: C, y: C, c: C) -> Result<()>
    where
        C: Scalar + PrimInt + AsPrimitive<T>,
        T: AsPrimitive<C>,
    {
        if !below(c, self.depth) {
            return Err(Error::out_of_range(
                "channel",
                format!("{c} outside depth {}", self.depth),
            ));
        }
        self.check_range(x, y)
    }

    /// Fails with [`Error::OutOfRange`] unless `[origin, origin + extent)`
    /// lies within `[0, width) x [0, height)`.
    ///
    /// An end point that overflows is reported as out of range.
    pub fn check_roi<C, U>(&self, origin: Point2<C>, extent: Size2<U>) -> Result<()>
    where
        C: Scalar + PrimInt + AsPrimitive<T>,
        U: Scalar + PrimInt + Unsigned + AsPrimitive<T>,
        T: AsPrimitive<C> + AsPrimitive<U>,
    {
        let fits = |o: C, e: U, bound: T| -> bool {
            let (Ok(o), Ok(e)) = (safe_cast::<C, T>(o), safe_cast::<U, T>(e)) else {
                return false;
            };
            matches!(safe_add(o, e), Ok(end) if end <= bound)
        };
        if fits(origin.x, extent.width, self.width) && fits(origin.y, extent.height, self.height) {
            Ok(())
        } else {
            Err(Error::out_of_range(
                "region",
                format!("{origin}+{extent} outside {}x{}", self.width, self.height),
            ))
        }
    }

    /// Fails with [`Error::Mismatch`] if `depth != n`.
    pub fn check_depth(&self, n: T) -> Result<()> {
        if self.depth == n {
            Ok(())
        } else {
            Err(Error::mismatch("depth", n, self.depth))
        }
    }

    /// Region covering the whole frame.
    #[inline]
    pub fn roi(&self) -> Region<T, T> {
        Region::from_size(self.plane())
    }
}

impl<T: Dim> From<Size3<T>> for ImageSize<T> {
    fn from(s: Size3<T>) -> Self {
        Self::new(s.width, s.height, s.depth)
    }
}

impl<T: Dim> From<ImageSize<T>> for Size3<T> {
    fn from(s: ImageSize<T>) -> Self {
        Size3::new(s.width, s.height, s.depth)
    }
}

impl<T: Dim> fmt::Display for ImageSize<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}

/// `0 <= v < bound`, with `v` of any integer type.
#[inline]
fn below<C, T>(v: C, bound: T) -> bool
where
    C: Scalar + AsPrimitive<T>,
    T: Scalar + AsPrimitive<C>,
{
    matches!(safe_cast::<C, T>(v), Ok(v) if v < bound)
}

#[inline]
fn checked_mul<T: Dim>(a: T, b: T) -> Result<T> {
    a.checked_mul(&b)
        .ok_or_else(|| Error::overflow::<T>(format_args!("{a} * {b}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let s = ImageSize::new(4u32, 3, 2);
        assert_eq!(s.elems_per_line().unwrap(), 8);
        assert_eq!(s.elems_per_plane().unwrap(), 12);
        assert_eq!(s.elems_per_frame().unwrap(), 24);
        assert!(!s.is_empty());
        assert!(ImageSize::<u8>::default().is_empty());
    }

    #[test]
    fn test_frame_count_overflow() {
        let s = ImageSize::new(256u16, 256, 1);
        assert!(s.elems_per_plane().unwrap_err().is_overflow());
        let s = ImageSize::new(usize::MAX, 2, 1);
        assert!(s.elems_per_frame().unwrap_err().is_overflow());
    }

    #[test]
    fn test_check_range_bounds() {
        let s = ImageSize::new(4usize, 3, 2);
        assert!(s.check_range(0, 0).is_ok());
        assert!(s.check_range(3, 2).is_ok());
        assert!(s.check_range(4, 2).unwrap_err().is_out_of_range());
        assert!(s.check_range(3, 3).unwrap_err().is_out_of_range());
        assert!(s.check_range(-1i64, 0).unwrap_err().is_out_of_range());
        assert!(s.check_range(0i8, -1).unwrap_err().is_out_of_range());
        assert!(s.check_range(u64::MAX, 0).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_check_range_channel_first() {
        let s = ImageSize::new(4usize, 3, 2);
        assert!(s.check_range_c(3, 2, 1).is_ok());
        match s.check_range_c(9, 9, 2).unwrap_err() {
            Error::OutOfRange { what, .. } => assert_eq!(what, "channel"),
            other => panic!("unexpected {other:?}"),
        }
        match s.check_range_c(9, 0, 0).unwrap_err() {
            Error::OutOfRange { what, .. } => assert_eq!(what, "(x, y)"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_check_roi_half_open() {
        let s = ImageSize::new(10usize, 8, 1);
        let e = Size2::new(3u32, 2);
        assert!(s.check_roi(Point2::new(7, 6), e).is_ok());
        assert!(s.check_roi(Point2::new(8, 6), e).is_err());
        assert!(s.check_roi(Point2::new(7, 7), e).is_err());
        assert!(s.check_roi(Point2::new(-1, 0), e).is_err());
        assert!(s.check_roi(Point2::new(0, 0), Size2::new(10u8, 8)).is_ok());
        assert!(s.check_roi(Point2::new(10, 8), Size2::new(0u8, 0)).is_ok());
    }

    #[test]
    fn test_check_roi_overflow_is_out_of_range() {
        let s = ImageSize::new(usize::MAX, 1, 1);
        let err = s
            .check_roi(Point2::new(usize::MAX, 0), Size2::new(1usize, 1))
            .unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_check_depth() {
        let s = ImageSize::new(4usize, 3, 2);
        assert!(s.check_depth(2).is_ok());
        assert_eq!(s.check_depth(3).unwrap_err(), Error::mismatch("depth", 3, 2));
    }

    #[test]
    fn test_offset_scenario() {
        let s = ImageSize::new(4usize, 3, 2);
        assert_eq!(s.offset(1, 1, 0, Layout::Bip), 10);
        assert_eq!(s.offset(1, 1, 0, Layout::Bsq), 5);
        assert_eq!(s.offset(1, 1, 0, Layout::Bil), 9);
    }

    #[test]
    fn test_roi_and_conversions() {
        let s = ImageSize::new(4u16, 3, 2);
        let roi = s.roi();
        assert_eq!(roi.origin, Point2::new(0, 0));
        assert_eq!(roi.extent, Size2::new(4, 3));
        let s3: Size3<u16> = s.into();
        assert_eq!(ImageSize::from(s3), s);
        assert_eq!(s.to_string(), "4x3x2");
    }
}
