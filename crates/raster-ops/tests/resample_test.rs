//! Resampling tests across layouts and sample types.

use approx::assert_relative_eq;
use raster_core::copy::convert_layout;
use raster_core::resample::{resize, Resampler};
use raster_core::{Image, ImageSize, Interpolation, Layout, Point2, Roi};
use raster_ops::{resampler, resize_with, BilinearResampler, NearestResampler, OpsError};

fn gradient(size: ImageSize, layout: Layout) -> Image<f64> {
    let bip = {
        let mut img: Image<f64> = Image::new(size, Layout::Bip).unwrap();
        for y in 0..size.height() {
            for x in 0..size.width() {
                for c in 0..size.depth() {
                    *img.get_mut(x, y, c).unwrap() = (x * 10 + y * 100 + c) as f64;
                }
            }
        }
        img
    };
    convert_layout(&bip, layout).unwrap()
}

#[test]
fn test_identity_zoom_reproduces_source() {
    for layout in Layout::ALL {
        let src = gradient(ImageSize::new(5, 4, 3), layout);
        for interp in [Interpolation::Nearest, Interpolation::Linear] {
            let mut dst = Image::default();
            resize_with(&src, &src.roi(), Point2::new(1.0, 1.0), &mut dst, interp).unwrap();
            assert_eq!(dst, src, "{layout} {interp}");
        }
    }
}

#[test]
fn test_results_agree_across_layouts() {
    let size = ImageSize::new(6, 5, 2);
    for interp in [Interpolation::Nearest, Interpolation::Linear] {
        let mut reference = Image::default();
        let bip = gradient(size, Layout::Bip);
        resize_with(&bip, &bip.roi(), Point2::new(1.5, 0.8), &mut reference, interp).unwrap();

        for layout in [Layout::Bsq, Layout::Bil] {
            let src = gradient(size, layout);
            let mut dst = Image::default();
            resize_with(&src, &src.roi(), Point2::new(1.5, 0.8), &mut dst, interp).unwrap();
            assert_eq!(dst.layout(), layout);
            assert_eq!(convert_layout(&dst, Layout::Bip).unwrap(), reference, "{layout} {interp}");
        }
    }
}

#[test]
fn test_bilinear_is_linear_inside() {
    // A plane sampled at pixel centers stays a plane under bilinear upscaling,
    // away from the clamped border.
    let src = gradient(ImageSize::new(8, 8, 1), Layout::Bsq);
    let mut dst = Image::default();
    resize(&src, Point2::new(2.0, 2.0), &mut dst, &BilinearResampler).unwrap();
    assert_eq!(dst.size(), ImageSize::new(16, 16, 1));
    for y in 1..15 {
        for x in 1..15 {
            let sx = (x as f64 + 0.5) / 2.0 - 0.5;
            let sy = (y as f64 + 0.5) / 2.0 - 0.5;
            assert_relative_eq!(*dst.get(x, y, 0).unwrap(), sx * 10.0 + sy * 100.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_roi_resize_reads_only_region() {
    let src = gradient(ImageSize::new(10, 10, 1), Layout::Bil);
    let roi = Roi::from_xywh(4, 6, 2, 2);
    let mut dst = Image::default();
    resize_with(&src, &roi, Point2::new(2.0, 2.0), &mut dst, Interpolation::Nearest).unwrap();
    assert_eq!(dst.size(), ImageSize::new(4, 4, 1));
    assert_eq!(*dst.get(0, 0, 0).unwrap(), 640.0);
    assert_eq!(*dst.get(3, 3, 0).unwrap(), 750.0);
}

#[test]
fn test_integer_downscale_rounds() {
    let src = Image::from_vec(ImageSize::new(4, 1, 1), Layout::Bip, vec![0u8, 1, 2, 4]).unwrap();
    let mut dst = Image::default();
    resize_with(&src, &src.roi(), Point2::new(0.5, 1.0), &mut dst, Interpolation::Linear).unwrap();
    // centers at 0.5 and 2.5
    assert_eq!(dst.data(), &[1, 3]);
}

#[test]
fn test_boxed_resampler_matches_direct() {
    let src = gradient(ImageSize::new(7, 3, 2), Layout::Bip);
    let mut a = Image::new(ImageSize::new(3, 5, 2), Layout::Bip).unwrap();
    let mut b = a.clone();
    resampler::<f64>(Interpolation::Nearest).resample(&src, &mut a).unwrap();
    NearestResampler.resample(&src, &mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_zero_zoom_is_invalid() {
    let src = gradient(ImageSize::new(2, 2, 1), Layout::Bip);
    let mut dst = Image::default();
    let err = resize_with(&src, &src.roi(), Point2::new(1.0, 0.0), &mut dst, Interpolation::Linear);
    assert!(matches!(err, Err(OpsError::InvalidParameter(_))));
}
