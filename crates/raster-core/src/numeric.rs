//! Value-safe numeric conversions and arithmetic.
//!
//! Every width conversion, rounding and offset sum in this crate goes through
//! the functions here, so that an out-of-range value surfaces as
//! [`Error::Overflow`] instead of a silently wrapped index.
//!
//! # Cast strategy
//!
//! [`safe_cast`] classifies each `(source, destination)` type pair into one of
//! four [`CastRisk`] cases from the kind (unsigned, signed, float) and width of
//! both types. The classification is a `const fn` over associated constants,
//! so after monomorphization only the checks for that case remain.
//!
//! | source -> destination            | risk       |
//! |----------------------------------|------------|
//! | unsigned -> wider/equal unsigned | `None`     |
//! | unsigned -> narrower unsigned    | `Positive` |
//! | unsigned -> wider signed         | `None`     |
//! | unsigned -> equal/narrower signed| `Positive` |
//! | signed -> wider/equal signed     | `None`     |
//! | signed -> narrower signed        | `Both`     |
//! | signed -> wider/equal unsigned   | `Negative` |
//! | signed -> narrower unsigned      | `Both`     |
//! | integer -> float                 | `None`     |
//! | float -> integer                 | `Both`     |
//! | float -> wider/equal float       | `None`     |
//! | float -> narrower float          | `Both`     |
//!
//! # Usage
//!
//! ```rust
//! use raster_core::numeric::{round_as, safe_add, safe_cast};
//!
//! assert_eq!(safe_cast::<i32, u8>(200).unwrap(), 200u8);
//! assert!(safe_cast::<i32, u8>(-1).is_err());
//! assert!(safe_add(i32::MAX, 1).is_err());
//! assert_eq!(round_as::<i16>(-2.5).unwrap(), -3);
//! ```

use crate::{Error, Result};
use num_traits::{AsPrimitive, Bounded, Num};
use std::fmt;

/// Broad numeric category of a [`Scalar`] type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Unsigned integer.
    Unsigned,
    /// Two's complement signed integer.
    Signed,
    /// IEEE 754 floating point.
    Float,
}

impl ScalarKind {
    /// Whether this is a floating-point kind.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float)
    }
}

/// Primitive numeric types handled by the safe numeric core.
///
/// Implemented for all fixed-width integers up to 64 bits, `usize`, `isize`,
/// `f32` and `f64`.
pub trait Scalar:
    Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Bounded
    + Num
    + AsPrimitive<f64>
    + Send
    + Sync
    + 'static
{
    /// Category of the type.
    const KIND: ScalarKind;
    /// Width of the type in bits.
    const BITS: u32;
}

macro_rules! impl_scalar {
    ($kind:ident: $($t:ty),*) => {
        $(
            impl Scalar for $t {
                const KIND: ScalarKind = ScalarKind::$kind;
                const BITS: u32 = (std::mem::size_of::<$t>() * 8) as u32;
            }
        )*
    };
}

impl_scalar!(Unsigned: u8, u16, u32, u64, usize);
impl_scalar!(Signed: i8, i16, i32, i64, isize);
impl_scalar!(Float: f32, f64);

/// Which destination bounds a conversion can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastRisk {
    /// Every source value is representable.
    None,
    /// Only values below the destination minimum can fail.
    Negative,
    /// Only values above the destination maximum can fail.
    Positive,
    /// Both bounds must be checked.
    Both,
}

impl CastRisk {
    /// Classifies the conversion from `S` to `D`.
    ///
    /// ```rust
    /// use raster_core::numeric::CastRisk;
    ///
    /// assert_eq!(CastRisk::of::<i32, u32>(), CastRisk::Negative);
    /// assert_eq!(CastRisk::of::<u32, i32>(), CastRisk::Positive);
    /// assert_eq!(CastRisk::of::<i64, u8>(), CastRisk::Both);
    /// assert_eq!(CastRisk::of::<u16, i32>(), CastRisk::None);
    /// ```
    pub const fn of<S: Scalar, D: Scalar>() -> Self {
        use ScalarKind::*;
        match (S::KIND, D::KIND) {
            (Unsigned, Unsigned) | (Float, Float) if D::BITS >= S::BITS => Self::None,
            (Unsigned, Unsigned) => Self::Positive,
            (Float, Float) => Self::Both,
            (Unsigned, Signed) if D::BITS > S::BITS => Self::None,
            (Unsigned, Signed) => Self::Positive,
            (Signed, Signed) if D::BITS >= S::BITS => Self::None,
            (Signed, Signed) => Self::Both,
            (Signed, Unsigned) if D::BITS >= S::BITS => Self::Negative,
            (Signed, Unsigned) => Self::Both,
            (Unsigned | Signed, Float) => Self::None,
            (Float, Unsigned | Signed) => Self::Both,
        }
    }
}

/// Converts `src` to `D`, failing instead of wrapping or saturating.
///
/// Float to integer conversions truncate toward zero and only fail when the
/// truncated value is outside `D` (or `src` is NaN). Narrowing float
/// conversions fail when a finite value exceeds the finite range of `D`;
/// infinities and NaN pass through.
///
/// # Errors
///
/// [`Error::Overflow`] carrying `src` and the name of `D`.
///
/// # Example
///
/// ```rust
/// use raster_core::numeric::safe_cast;
///
/// assert_eq!(safe_cast::<f64, u8>(255.9).unwrap(), 255);
/// assert!(safe_cast::<f64, u8>(256.0).is_err());
/// assert!(safe_cast::<u32, i32>(u32::MAX).is_err());
/// ```
pub fn safe_cast<S, D>(src: S) -> Result<D>
where
    S: Scalar + AsPrimitive<D>,
    D: Scalar + AsPrimitive<S>,
{
    let in_range = if S::KIND.is_float() {
        let v = AsPrimitive::<f64>::as_(src);
        if D::KIND.is_float() {
            !v.is_finite() || v.abs() <= AsPrimitive::<f64>::as_(D::max_value())
        } else {
            // Integer bounds are exact in f64 once one is added to the maximum.
            let t = v.trunc();
            let lo = AsPrimitive::<f64>::as_(D::min_value());
            let hi = AsPrimitive::<f64>::as_(D::max_value()) + 1.0;
            t >= lo && t < hi
        }
    } else {
        let lo = || AsPrimitive::<S>::as_(D::min_value());
        let hi = || AsPrimitive::<S>::as_(D::max_value());
        match CastRisk::of::<S, D>() {
            CastRisk::None => true,
            CastRisk::Negative => src >= lo(),
            CastRisk::Positive => src <= hi(),
            CastRisk::Both => src >= lo() && src <= hi(),
        }
    };

    if in_range {
        Ok(AsPrimitive::<D>::as_(src))
    } else {
        Err(Error::overflow::<D>(src))
    }
}

/// Adds two values of the same type, failing on overflow.
///
/// The range check happens before the addition and never needs a wider
/// intermediate type.
///
/// # Example
///
/// ```rust
/// use raster_core::numeric::safe_add;
///
/// assert_eq!(safe_add(i32::MAX, -1).unwrap(), i32::MAX - 1);
/// assert!(safe_add(u32::MAX, 1).is_err());
/// assert!(safe_add(i64::MIN, -1).is_err());
/// ```
pub fn safe_add<T: Scalar>(a: T, b: T) -> Result<T> {
    let zero = T::zero();
    if b > zero && a > T::max_value() - b {
        return Err(Error::overflow::<T>(format_args!("{a} + {b}")));
    }
    if b < zero && a < T::min_value() - b {
        return Err(Error::overflow::<T>(format_args!("{a} + {b}")));
    }
    Ok(a + b)
}

/// Rounds half away from zero, then casts with [`safe_cast`].
///
/// ```rust
/// use raster_core::numeric::round_as;
///
/// assert_eq!(round_as::<u32>(2.5).unwrap(), 3);
/// assert_eq!(round_as::<i32>(-2.5).unwrap(), -3);
/// assert!(round_as::<u8>(255.5).is_err());
/// ```
#[inline]
pub fn round_as<D>(src: f64) -> Result<D>
where
    f64: AsPrimitive<D>,
    D: Scalar + AsPrimitive<f64>,
{
    safe_cast(src.round())
}

// =============================================================================
// Element-wise operations on fixed arrays
// =============================================================================

/// Element-wise checked sum of two arrays of the same type.
pub fn add<T: Scalar, const N: usize>(a: &[T; N], b: &[T; N]) -> Result<[T; N]> {
    let mut out = [T::zero(); N];
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = safe_add(x, y)?;
    }
    Ok(out)
}

/// Element-wise sum computed in a (usually wider) result type `U`.
///
/// Both operands are converted with [`safe_cast`] before adding, so
/// `add_as::<u8, u16, 2>(&[255, 255], &[1, 1])` succeeds where [`add`] fails.
pub fn add_as<T, U, const N: usize>(a: &[T; N], b: &[T; N]) -> Result<[U; N]>
where
    T: Scalar + AsPrimitive<U>,
    U: Scalar + AsPrimitive<T>,
{
    let mut out = [U::zero(); N];
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = safe_add(safe_cast::<T, U>(x)?, safe_cast::<T, U>(y)?)?;
    }
    Ok(out)
}

/// Multiplies each element by a scalar factor.
pub fn multiply<T: Scalar, const N: usize>(a: &[T; N], k: f64) -> [f64; N] {
    let mut out = [0.0; N];
    for (o, &x) in out.iter_mut().zip(a) {
        *o = AsPrimitive::<f64>::as_(x) * k;
    }
    out
}

/// Multiplies two arrays element by element.
pub fn multiply_each<T: Scalar, const N: usize>(a: &[T; N], b: &[f64; N]) -> [f64; N] {
    let mut out = [0.0; N];
    for ((o, &x), &k) in out.iter_mut().zip(a).zip(b) {
        *o = AsPrimitive::<f64>::as_(x) * k;
    }
    out
}

/// The p-norm `(sum |x|^p)^(1/p)`.
pub fn norm<T: Scalar, const N: usize>(a: &[T; N], p: f64) -> f64 {
    let sum: f64 = a.iter().map(|&x| AsPrimitive::<f64>::as_(x).abs().powf(p)).sum();
    sum.powf(1.0 / p)
}

/// Scales `a` to unit p-norm.
///
/// # Errors
///
/// [`Error::Overflow`] if the norm is zero or not finite.
pub fn normalize<T: Scalar, const N: usize>(a: &[T; N], p: f64) -> Result<[f64; N]> {
    let n = norm(a, p);
    if n == 0.0 || !n.is_finite() {
        return Err(Error::overflow::<f64>(format_args!("1/{n}")));
    }
    Ok(multiply(a, 1.0 / n))
}

/// Rounds every element with [`round_as`].
pub fn round_array_as<D, const N: usize>(a: &[f64; N]) -> Result<[D; N]>
where
    f64: AsPrimitive<D>,
    D: Scalar + AsPrimitive<f64>,
{
    let mut out = [D::zero(); N];
    for (o, &x) in out.iter_mut().zip(a) {
        *o = round_as(x)?;
    }
    Ok(out)
}

/// Converts every element with [`safe_cast`].
pub fn cast_array<S, D, const N: usize>(a: &[S; N]) -> Result<[D; N]>
where
    S: Scalar + AsPrimitive<D>,
    D: Scalar + AsPrimitive<S>,
{
    let mut out = [D::zero(); N];
    for (o, &x) in out.iter_mut().zip(a) {
        *o = safe_cast(x)?;
    }
    Ok(out)
}
