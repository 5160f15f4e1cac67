//! Layout-aware sample buffer.
//!
//! [`Image`] owns one contiguous `Vec<T>` plus the [`ImageSize`] and
//! [`Layout`] that give it meaning. The same logical `(x, y, c)` coordinate
//! resolves to a different store index in each layout:
//!
//! ```text
//! 2x1 image, 3 channels (R G B):
//!
//! Bip: [R0 G0 B0 R1 G1 B1]
//! Bsq: [R0 R1 G0 G1 B0 B1]
//! Bil: [R0 R1 G0 G1 B0 B1]   (one row, so same as Bsq)
//! ```
//!
//! # Invariants
//!
//! - `data.len() == width * height * depth` after every operation.
//! - Every coordinate is range checked before the store is indexed.
//!
//! References and slices handed out by [`get`](Image::get) or
//! [`slice_from`](Image::slice_from) borrow the image, so they cannot outlive
//! a later [`resize`](Image::resize) or [`clear`](Image::clear).
//!
//! # Usage
//!
//! ```rust
//! use raster_core::{Image, ImageSize, Layout};
//!
//! let mut img: Image<u16> = Image::new(ImageSize::new(4, 3, 2), Layout::Bsq).unwrap();
//! *img.get_mut(1, 1, 0).unwrap() = 7;
//! assert_eq!(img.data()[5], 7);
//!
//! // Same element count: the store is kept as is.
//! img.resize(ImageSize::new(2, 6, 2)).unwrap();
//! assert_eq!(img.data()[5], 7);
//! ```
//!
//! # Used By
//!
//! - [`crate::copy`] - region copies and raw-block ingestion
//! - [`crate::resample`] - destination sizing for resamplers

use crate::layout::Layout;
use crate::numeric::Scalar;
use crate::region::{Region, Roi};
use crate::size::ImageSize;
use crate::{Error, Result};
use num_traits::{AsPrimitive, PrimInt, Unsigned};

/// Element types an [`Image`] can hold.
///
/// Blanket-implemented for every primitive integer and float.
pub trait Sample: Scalar + Default {}

impl<T: Scalar + Default> Sample for T {}

/// Contiguous raster buffer with an explicit sample layout.
///
/// `Clone` deep-copies the store; equality compares size, layout and every
/// sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image<T: Sample> {
    data: Vec<T>,
    size: ImageSize,
    layout: Layout,
}

impl<T: Sample> Image<T> {
    /// Creates a buffer of `size` filled with `T::default()`.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if the element count does not fit `usize`.
    pub fn new(size: ImageSize, layout: Layout) -> Result<Self> {
        Self::filled(size, layout, T::default())
    }

    /// Creates a pixel-interleaved buffer of `width x height x depth`.
    pub fn with_size(width: usize, height: usize, depth: usize) -> Result<Self> {
        Self::new(ImageSize::new(width, height, depth), Layout::Bip)
    }

    /// Creates a buffer with every sample set to `value`.
    pub fn filled(size: ImageSize, layout: Layout, value: T) -> Result<Self> {
        let count = size.elems_per_frame()?;
        Ok(Self {
            data: vec![value; count],
            size,
            layout,
        })
    }

    /// Wraps an existing store.
    ///
    /// # Errors
    ///
    /// [`Error::Mismatch`] if `data.len()` differs from the element count of
    /// `size`.
    pub fn from_vec(size: ImageSize, layout: Layout, data: Vec<T>) -> Result<Self> {
        let count = size.elems_per_frame()?;
        if data.len() != count {
            return Err(Error::mismatch("store length", count, data.len()));
        }
        Ok(Self { data, size, layout })
    }

    /// Wraps a store whose length is already known to match `size`.
    pub(crate) fn from_parts(size: ImageSize, layout: Layout, data: Vec<T>) -> Self {
        debug_assert_eq!(size.elems_per_frame().ok(), Some(data.len()));
        Self { data, size, layout }
    }

    /// Size descriptor.
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Sample layout.
    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.size.width()
    }

    /// Rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.size.height()
    }

    /// Channels per pixel.
    #[inline]
    pub fn depth(&self) -> usize {
        self.size.depth()
    }

    /// Number of samples in the store.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the store holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The whole store.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The whole store, mutable.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the image and returns its store.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Region covering the whole frame.
    #[inline]
    pub fn roi(&self) -> Roi {
        self.size.roi()
    }

    /// Reinterprets the store under another layout without moving samples.
    ///
    /// Use [`convert_layout`](crate::copy::convert_layout) to keep each
    /// sample at its logical coordinate instead.
    #[inline]
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Sets every sample to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Store index of `(x, y, c)` after range checking.
    pub fn offset(&self, x: usize, y: usize, c: usize) -> Result<usize> {
        self.size.check_range_c(x, y, c)?;
        Ok(self.size.offset(x, y, c, self.layout))
    }

    /// Sample at `(x, y, c)`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if the channel, then the column or row, is
    /// outside the frame.
    pub fn get(&self, x: usize, y: usize, c: usize) -> Result<&T> {
        let i = self.offset(x, y, c)?;
        Ok(&self.data[i])
    }

    /// Mutable sample at `(x, y, c)`.
    pub fn get_mut(&mut self, x: usize, y: usize, c: usize) -> Result<&mut T> {
        let i = self.offset(x, y, c)?;
        Ok(&mut self.data[i])
    }

    /// Tail of the store starting at `(x, y, c)`.
    pub fn slice_from(&self, x: usize, y: usize, c: usize) -> Result<&[T]> {
        let i = self.offset(x, y, c)?;
        Ok(&self.data[i..])
    }

    /// Mutable tail of the store starting at `(x, y, c)`.
    pub fn slice_from_mut(&mut self, x: usize, y: usize, c: usize) -> Result<&mut [T]> {
        let i = self.offset(x, y, c)?;
        Ok(&mut self.data[i..])
    }

    /// Changes the frame size.
    ///
    /// When the element count is unchanged the store is reused as is and
    /// only the descriptor is replaced. Otherwise a new store of
    /// `T::default()` is allocated.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if the new element count does not fit `usize`;
    /// the image is left untouched.
    pub fn resize(&mut self, size: ImageSize) -> Result<()> {
        let count = size.elems_per_frame()?;
        if count != self.data.len() {
            self.data = vec![T::default(); count];
        }
        self.size = size;
        Ok(())
    }

    /// Empties the store and resets all three dimensions to zero.
    pub fn clear(&mut self) {
        self.data = Vec::new();
        self.size = ImageSize::default();
    }

    /// See [`ImageSize::check_depth`].
    #[inline]
    pub fn check_depth(&self, n: usize) -> Result<()> {
        self.size.check_depth(n)
    }

    /// See [`ImageSize::check_range`].
    #[inline]
    pub fn check_range<C>(&self, x: C, y: C) -> Result<()>
    where
        C: Scalar + PrimInt + AsPrimitive<usize>,
        usize: AsPrimitive<C>,
    {
        self.size.check_range(x, y)
    }

    /// See [`ImageSize::check_range_c`].
    #[inline]
    pub fn check_range_c<C>(&self, x: C, y: C, c: C) -> Result<()>
    where
        C: Scalar + PrimInt + AsPrimitive<usize>,
        usize: AsPrimitive<C>,
    {
        self.size.check_range_c(x, y, c)
    }

    /// See [`ImageSize::check_roi`].
    #[inline]
    pub fn check_roi<C, U>(&self, roi: &Region<C, U>) -> Result<()>
    where
        C: Scalar + PrimInt + AsPrimitive<usize>,
        U: Scalar + PrimInt + Unsigned + AsPrimitive<usize>,
        usize: AsPrimitive<C> + AsPrimitive<U>,
    {
        self.size.check_roi(roi.origin, roi.extent)
    }
}
