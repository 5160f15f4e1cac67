//! Fixtures shared by the raster-rs benchmarks.
//!
//! Run the benchmarks with: `cargo bench -p raster-bench`

use raster_core::{Image, ImageSize, Layout, Result};

/// Frame sizes exercised by every benchmark group, as `(width, height, depth)`.
pub const SIZES: [(usize, usize, usize); 3] = [(256, 256, 3), (1024, 1024, 3), (2048, 1024, 4)];

/// An image whose samples count up from zero, wrapping at `u16::MAX`.
pub fn ramp(size: ImageSize, layout: Layout) -> Result<Image<u16>> {
    let n = size.elems_per_frame()?;
    let data = (0..n).map(|i| (i % (u16::MAX as usize + 1)) as u16).collect();
    Image::from_vec(size, layout, data)
}

/// A raw block of `size` in `layout` with `pad` extra samples after each line.
///
/// Returns the block and its line stride in bytes.
pub fn padded_block(size: ImageSize, layout: Layout, pad: usize) -> Result<(Vec<u16>, usize)> {
    let line = layout.line_len(size.width(), size.depth())?;
    let lines = layout.line_count(size.height(), size.depth())?;
    let stride = line + pad;
    let block = (0..lines * stride).map(|i| (i % stride) as u16).collect();
    Ok((block, stride * std::mem::size_of::<u16>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures() {
        let size = ImageSize::new(4, 3, 2);
        let img = ramp(size, Layout::Bil).unwrap();
        assert_eq!(img.data()[23], 23);

        let (block, stride) = padded_block(size, Layout::Bsq, 2).unwrap();
        assert_eq!(stride, 12);
        assert_eq!(block.len(), 6 * 6);
    }
}
