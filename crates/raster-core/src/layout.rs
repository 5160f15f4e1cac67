//! Physical sample layouts.
//!
//! A [`Layout`] fixes the order in which channel, column and row vary in the
//! backing store of an [`Image`](crate::Image):
//!
//! ```text
//! Bip (pixel-interleaved):   c + depth*x + depth*width*y
//!     [R G B R G B ...]            <- row 0
//!
//! Bsq (band-sequential):     x + width*y + width*height*c
//!     [R R R ... R R R ...]        <- whole channel planes
//!
//! Bil (band/line-interleaved): x + width*c + width*depth*y
//!     [R R R ... G G G ... B B B]  <- row 0, one run per channel
//! ```
//!
//! # Lines
//!
//! Every layout partitions the store into equal contiguous *lines*, the unit
//! moved by one `copy_from_slice` in the copy engine:
//!
//! | layout | line                  | length        | count          |
//! |--------|-----------------------|---------------|----------------|
//! | `Bip`  | one row, all channels | `width*depth` | `height`       |
//! | `Bsq`  | one row of one plane  | `width`       | `height*depth` |
//! | `Bil`  | one row of one channel| `width`       | `height*depth` |

use crate::{Error, Result};
use num_traits::PrimInt;
use std::fmt;
use std::str::FromStr;

/// Physical interleaving order of channel, column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// Pixel-interleaved: channel fastest, then column, then row.
    #[default]
    Bip,
    /// Band-sequential: column fastest, then row, then channel.
    Bsq,
    /// Band/line-interleaved: column fastest, then channel, then row.
    Bil,
}

impl Layout {
    /// All layouts, in tag order.
    pub const ALL: [Layout; 3] = [Layout::Bip, Layout::Bsq, Layout::Bil];

    /// Linear index of `(x, y, c)` in a `width x height x depth` store.
    ///
    /// Pure arithmetic, no range checking; callers validate coordinates first.
    ///
    /// ```rust
    /// use raster_core::Layout;
    ///
    /// assert_eq!(Layout::Bip.offset(1usize, 1, 0, 4, 3, 2), 10);
    /// assert_eq!(Layout::Bsq.offset(1usize, 1, 0, 4, 3, 2), 5);
    /// assert_eq!(Layout::Bil.offset(1usize, 1, 1, 4, 3, 2), 13);
    /// ```
    #[inline]
    pub fn offset<T: PrimInt>(self, x: T, y: T, c: T, width: T, height: T, depth: T) -> T {
        match self {
            Layout::Bip => c + depth * x + depth * width * y,
            Layout::Bsq => x + width * y + width * height * c,
            Layout::Bil => x + width * c + width * depth * y,
        }
    }

    /// Number of elements in one physical line.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if `width * depth` does not fit `usize`.
    #[inline]
    pub fn line_len(self, width: usize, depth: usize) -> Result<usize> {
        match self {
            Layout::Bip => width
                .checked_mul(depth)
                .ok_or_else(|| Error::overflow::<usize>(format_args!("{width} * {depth}"))),
            Layout::Bsq | Layout::Bil => Ok(width),
        }
    }

    /// Number of physical lines in a frame.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if `height * depth` does not fit `usize`.
    #[inline]
    pub fn line_count(self, height: usize, depth: usize) -> Result<usize> {
        match self {
            Layout::Bip => Ok(height),
            Layout::Bsq | Layout::Bil => height
                .checked_mul(depth)
                .ok_or_else(|| Error::overflow::<usize>(format_args!("{height} * {depth}"))),
        }
    }

    /// Row and channel held by physical line `line`.
    ///
    /// The channel is `None` for [`Layout::Bip`], whose lines carry every
    /// channel of a row.
    #[inline]
    pub fn line_coord(self, line: usize, height: usize, depth: usize) -> (usize, Option<usize>) {
        match self {
            Layout::Bip => (line, None),
            Layout::Bsq => (line % height, Some(line / height)),
            Layout::Bil => (line / depth, Some(line % depth)),
        }
    }

    /// Numeric tag of the layout.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Layout::Bip => 0,
            Layout::Bsq => 1,
            Layout::Bil => 2,
        }
    }

    /// Short upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Layout::Bip => "BIP",
            Layout::Bsq => "BSQ",
            Layout::Bil => "BIL",
        }
    }
}

impl TryFrom<u8> for Layout {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Layout::Bip),
            1 => Ok(Layout::Bsq),
            2 => Ok(Layout::Bil),
            other => Err(Error::unsupported(other.to_string())),
        }
    }
}

impl FromStr for Layout {
    type Err = Error;

    /// Parses `bip`, `bsq` or `bil` in any case, plus the long names
    /// `interleaved`, `sequential` and `line-interleaved`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bip" | "interleaved" | "pixel-interleaved" => Ok(Layout::Bip),
            "bsq" | "sequential" | "band-sequential" => Ok(Layout::Bsq),
            "bil" | "line-interleaved" | "band-interleaved" => Ok(Layout::Bil),
            _ => Err(Error::unsupported(s)),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(layout: Layout, w: usize, h: usize, d: usize) -> Vec<usize> {
        let mut out = Vec::with_capacity(w * h * d);
        for y in 0..h {
            for x in 0..w {
                for c in 0..d {
                    out.push(layout.offset(x, y, c, w, h, d));
                }
            }
        }
        out
    }

    #[test]
    fn test_offset_is_bijective() {
        for layout in Layout::ALL {
            for (w, h, d) in [(4, 3, 2), (1, 1, 1), (5, 1, 3), (1, 7, 4), (6, 5, 1)] {
                let mut seen = offsets(layout, w, h, d);
                seen.sort_unstable();
                let expected: Vec<usize> = (0..w * h * d).collect();
                assert_eq!(seen, expected, "{layout} {w}x{h}x{d}");
            }
        }
    }

    #[test]
    fn test_offset_formulas() {
        assert_eq!(Layout::Bip.offset(1u32, 1, 0, 4, 3, 2), 10);
        assert_eq!(Layout::Bip.offset(3u32, 2, 1, 4, 3, 2), 23);
        assert_eq!(Layout::Bsq.offset(1u32, 1, 0, 4, 3, 2), 5);
        assert_eq!(Layout::Bsq.offset(0u32, 0, 1, 4, 3, 2), 12);
        assert_eq!(Layout::Bil.offset(0u32, 1, 0, 4, 3, 2), 8);
        assert_eq!(Layout::Bil.offset(0u32, 0, 1, 4, 3, 2), 4);
    }

    #[test]
    fn test_lines_cover_store() {
        let (w, h, d) = (4, 3, 2);
        for layout in Layout::ALL {
            let len = layout.line_len(w, d).unwrap();
            let count = layout.line_count(h, d).unwrap();
            assert_eq!(len * count, w * h * d);
            for line in 0..count {
                let (y, c) = layout.line_coord(line, h, d);
                let first = layout.offset(0, y, c.unwrap_or(0), w, h, d);
                assert_eq!(first, line * len, "{layout} line {line}");
            }
        }
    }

    #[test]
    fn test_line_overflow() {
        let big = usize::MAX / 2 + 1;
        assert!(Layout::Bip.line_len(big, 2).unwrap_err().is_overflow());
        assert_eq!(Layout::Bsq.line_len(big, 2).unwrap(), big);
        assert!(Layout::Bil.line_count(big, 2).unwrap_err().is_overflow());
        assert_eq!(Layout::Bip.line_count(big, 2).unwrap(), big);
    }

    #[test]
    fn test_tags() {
        for layout in Layout::ALL {
            assert_eq!(Layout::try_from(layout.code()).unwrap(), layout);
            assert_eq!(layout.to_string().parse::<Layout>().unwrap(), layout);
        }
        assert_eq!("line-interleaved".parse::<Layout>().unwrap(), Layout::Bil);
        assert!(Layout::try_from(3).unwrap_err().is_unsupported());
        assert!("bix".parse::<Layout>().unwrap_err().is_unsupported());
    }
}
