//! Fixed-length coordinate and extent tuples.
//!
//! - [`Point2`], [`Point3`] - positions `(x, y[, z])`
//! - [`Size2`], [`Size3`] - extents `(width, height[, depth])`
//!
//! Each type is a plain struct with named fields. The array view needed by the
//! element-wise helpers in [`crate::numeric`] is a conversion through
//! [`Components`] (plus `Index` for `p[0]`-style access), so a copied value can
//! never end up with names pointing at another value's storage.
//!
//! ```rust
//! use raster_core::{Components, Point2};
//!
//! let p = Point2::new(1, 2);
//! assert_eq!(p[0], p.x);
//! assert_eq!(p.to_array(), [1, 2]);
//! assert_eq!(Point2::from_array([1, 2]), p);
//! ```

use crate::numeric::{self, Scalar};
use crate::Result;
use num_traits::AsPrimitive;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Conversion between a named-field tuple and a fixed-size array.
pub trait Components<T, const N: usize>: Copy {
    /// Returns the components in declaration order.
    fn to_array(self) -> [T; N];

    /// Builds the tuple from components in declaration order.
    fn from_array(a: [T; N]) -> Self;
}

macro_rules! tuple_type {
    (
        $(#[$doc:meta])*
        $name:ident, $n:literal, $fmt:literal, [$($field:ident = $idx:literal),+]
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(C)]
        pub struct $name<T> {
            $(
                #[allow(missing_docs)]
                pub $field: T,
            )+
        }

        impl<T> $name<T> {
            /// Creates a new value from its components.
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T: Copy> Components<T, $n> for $name<T> {
            #[inline]
            fn to_array(self) -> [T; $n] {
                [$(self.$field),+]
            }

            #[inline]
            fn from_array(a: [T; $n]) -> Self {
                Self { $($field: a[$idx]),+ }
            }
        }

        impl<T: Copy> From<[T; $n]> for $name<T> {
            fn from(a: [T; $n]) -> Self {
                Self::from_array(a)
            }
        }

        impl<T: Copy> From<$name<T>> for [T; $n] {
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, i: usize) -> &T {
                match i {
                    $($idx => &self.$field,)+
                    _ => panic!("index {i} out of range for {}", stringify!($name)),
                }
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, i: usize) -> &mut T {
                match i {
                    $($idx => &mut self.$field,)+
                    _ => panic!("index {i} out of range for {}", stringify!($name)),
                }
            }
        }

        impl<T: Scalar> $name<T> {
            /// Component-wise checked sum.
            pub fn checked_add(self, other: Self) -> Result<Self> {
                numeric::add(&self.to_array(), &other.to_array()).map(Self::from_array)
            }

            /// Converts every component with [`numeric::safe_cast`].
            pub fn cast<U>(self) -> Result<$name<U>>
            where
                T: AsPrimitive<U>,
                U: Scalar + AsPrimitive<T>,
            {
                numeric::cast_array(&self.to_array()).map($name::<U>::from_array)
            }
        }

        impl<T: fmt::Display> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let parts = [$(self.$field.to_string()),+];
                write!(f, $fmt, parts.join(", "))
            }
        }
    };
}

tuple_type!(
    /// A 2-D Cartesian coordinate `(x, y)`.
    Point2, 2, "({})", [x = 0, y = 1]
);

tuple_type!(
    /// A 3-D Cartesian coordinate `(x, y, z)`.
    Point3, 3, "({})", [x = 0, y = 1, z = 2]
);

tuple_type!(
    /// Extent of a 2-D space `(width, height)`.
    Size2, 2, "[{}]", [width = 0, height = 1]
);

tuple_type!(
    /// Extent of a 3-D space `(width, height, depth)`.
    Size3, 3, "[{}]", [width = 0, height = 1, depth = 2]
);

impl<T: Copy> Size3<T> {
    /// Drops the depth component.
    #[inline]
    pub fn plane(self) -> Size2<T> {
        Size2::new(self.width, self.height)
    }
}
