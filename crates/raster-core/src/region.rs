//! Rectangular regions of interest.
//!
//! A [`Region`] is an origin plus a non-negative extent. The origin type `T`
//! may be signed (a region can be placed partly off-frame before it is
//! range-checked); the extent type `U` is an unsigned integer.
//!
//! Pure operations return a new region, the `*_by` variants update in place:
//!
//! ```rust
//! use raster_core::{Point2, Region};
//!
//! let roi = Region::<i32, u32>::from_xywh(10, 10, 40, 20);
//!
//! let zoomed = roi.zoomed(2.0).unwrap();
//! assert_eq!((zoomed.extent.width, zoomed.extent.height), (80, 40));
//! assert_eq!(zoomed.origin, roi.origin);
//!
//! let moved = roi.moved(Point2::new(1, 1)).unwrap();
//! assert_eq!(moved.origin, Point2::new(11, 11));
//! ```
//!
//! Bounds are half-open: a region covers `[origin, origin + extent)`.

use crate::geometry::{Components, Point2, Size2};
use crate::numeric::{self, safe_add, safe_cast, Scalar};
use crate::{Error, Result};
use num_traits::{AsPrimitive, PrimInt, Unsigned};
use std::fmt;

/// Origin + extent rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region<T, U: Unsigned> {
    /// Top-left corner.
    pub origin: Point2<T>,
    /// Width and height.
    pub extent: Size2<U>,
}

/// Region in buffer coordinates, as taken by the copy engine.
pub type Roi = Region<usize, usize>;

impl<T, U: Unsigned> Region<T, U> {
    /// Creates a region from its corner and extent.
    #[inline]
    pub const fn new(origin: Point2<T>, extent: Size2<U>) -> Self {
        Self { origin, extent }
    }

    /// Creates a region from `x, y, width, height`.
    #[inline]
    pub const fn from_xywh(x: T, y: T, width: U, height: U) -> Self {
        Self::new(Point2::new(x, y), Size2::new(width, height))
    }
}

impl<T: Scalar, U: Scalar + PrimInt + Unsigned> Region<T, U> {
    /// Region at the origin covering `extent`.
    #[inline]
    pub fn from_size(extent: Size2<U>) -> Self {
        Self::new(Point2::new(T::zero(), T::zero()), extent)
    }

    /// True if either side is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.extent.width.is_zero() || self.extent.height.is_zero()
    }

    /// Number of pixels covered.
    pub fn area(&self) -> Result<U> {
        let Size2 { width, height } = self.extent;
        width
            .checked_mul(&height)
            .ok_or_else(|| Error::overflow::<U>(format_args!("{width} * {height}")))
    }

    /// Exclusive end point `origin + extent`.
    pub fn end(&self) -> Result<Point2<T>>
    where
        U: AsPrimitive<T>,
        T: AsPrimitive<U>,
    {
        let extent: Point2<T> = Point2::from_array(numeric::cast_array(&self.extent.to_array())?);
        self.origin.checked_add(extent)
    }

    /// Region translated by `delta`.
    pub fn moved(&self, delta: Point2<T>) -> Result<Self> {
        Ok(Self::new(
            Point2::new(safe_add(self.origin.x, delta.x)?, safe_add(self.origin.y, delta.y)?),
            self.extent,
        ))
    }

    /// Translates in place. Left unchanged on error.
    pub fn move_by(&mut self, delta: Point2<T>) -> Result<()> {
        *self = self.moved(delta)?;
        Ok(())
    }

    /// Region with the extent scaled by `factor` on both axes.
    pub fn zoomed(&self, factor: f64) -> Result<Self>
    where
        f64: AsPrimitive<U>,
    {
        self.zoomed_xy(Point2::new(factor, factor))
    }

    /// Region with the extent scaled by `factor.x` horizontally and
    /// `factor.y` vertically, rounded half away from zero.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`](crate::Error::Overflow) if a scaled side is
    /// negative or does not fit `U`.
    pub fn zoomed_xy(&self, factor: Point2<f64>) -> Result<Self>
    where
        f64: AsPrimitive<U>,
    {
        let scaled = numeric::multiply_each(&self.extent.to_array(), &factor.to_array());
        let extent = numeric::round_array_as::<U, 2>(&scaled)?;
        Ok(Self::new(self.origin, Size2::from_array(extent)))
    }

    /// Scales in place. Left unchanged on error.
    pub fn zoom_by(&mut self, factor: f64) -> Result<()>
    where
        f64: AsPrimitive<U>,
    {
        *self = self.zoomed(factor)?;
        Ok(())
    }

    /// Scales each axis in place. Left unchanged on error.
    pub fn zoom_by_xy(&mut self, factor: Point2<f64>) -> Result<()>
    where
        f64: AsPrimitive<U>,
    {
        *self = self.zoomed_xy(factor)?;
        Ok(())
    }

    /// Converts both origin and extent to other integer types.
    pub fn cast<T2, U2>(&self) -> Result<Region<T2, U2>>
    where
        T: AsPrimitive<T2>,
        U: AsPrimitive<U2>,
        T2: Scalar + AsPrimitive<T>,
        U2: Scalar + Unsigned + AsPrimitive<U>,
    {
        Ok(Region::new(
            Point2::new(safe_cast(self.origin.x)?, safe_cast(self.origin.y)?),
            Size2::new(safe_cast(self.extent.width)?, safe_cast(self.extent.height)?),
        ))
    }
}

impl<T: fmt::Display, U: Unsigned + fmt::Display> fmt::Display for Region<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.origin, self.extent)
    }
}
