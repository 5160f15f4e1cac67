//! Integration tests for raster-core buffers and the copy engine.

use raster_core::prelude::*;

fn sequential(size: ImageSize, layout: Layout) -> Image<u32> {
    let n = size.elems_per_frame().unwrap();
    Image::from_vec(size, layout, (0..n as u32).collect()).unwrap()
}

#[test]
fn test_offset_scenario_4x3x2() {
    let size = ImageSize::new(4, 3, 2);

    let bip = sequential(size, Layout::Bip);
    assert_eq!(size.offset(1, 1, 0, Layout::Bip), 10);
    assert_eq!(*bip.get(1, 1, 0).unwrap(), 10);

    let bsq = sequential(size, Layout::Bsq);
    assert_eq!(size.offset(1, 1, 0, Layout::Bsq), 5);
    assert_eq!(*bsq.get(1, 1, 0).unwrap(), 5);
}

#[test]
fn test_offset_bijection_through_accessors() {
    for layout in Layout::ALL {
        let size = ImageSize::new(5, 4, 3);
        let img = sequential(size, layout);
        let mut seen = vec![false; img.len()];
        for y in 0..4 {
            for x in 0..5 {
                for c in 0..3 {
                    let v = *img.get(x, y, c).unwrap() as usize;
                    assert!(!seen[v], "{layout}: ({x}, {y}, {c}) hit {v} twice");
                    seen[v] = true;
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}

#[test]
fn test_reshape_keeps_store() {
    let mut img = sequential(ImageSize::new(4, 3, 2), Layout::Bip);
    *img.get_mut(3, 2, 1).unwrap() = 1000;
    let ptr = img.data().as_ptr();

    img.resize(ImageSize::new(6, 2, 2)).unwrap();
    assert_eq!(img.data().as_ptr(), ptr);
    assert_eq!(img.len(), 24);
    assert_eq!(img.data()[23], 1000);
    assert_eq!(*img.get(5, 1, 1).unwrap(), 1000);

    img.resize(ImageSize::new(24, 1, 1)).unwrap();
    assert_eq!(img.data().as_ptr(), ptr);
    assert_eq!(img.size(), ImageSize::new(24, 1, 1));
}

#[test]
fn test_half_open_range_law() {
    let size = ImageSize::new(10usize, 8, 1);
    for (w, h) in [(1u32, 1u32), (3, 2), (10, 8), (0, 0)] {
        let (fw, fh) = (10 - w as i64, 8 - h as i64);
        assert!(size.check_roi(Point2::new(fw, fh), Size2::new(w, h)).is_ok());
        assert!(size.check_roi(Point2::new(fw + 1, 0), Size2::new(w, h)).is_err());
        assert!(size.check_roi(Point2::new(0, fh + 1), Size2::new(w, h)).is_err());
        assert!(size.check_roi(Point2::new(-1, 0), Size2::new(w, h)).is_err());
    }
}

#[test]
fn test_copy_round_trip_all_layouts() {
    for layout in Layout::ALL {
        let a = sequential(ImageSize::new(9, 7, 3), layout);
        let roi = Roi::from_xywh(2, 3, 5, 4);

        let mut b = Image::new(ImageSize::new(5, 4, 3), layout).unwrap();
        copy_roi(&a, &roi, &mut b, Point2::new(0, 0)).unwrap();

        let mut a2 = a.clone();
        for v in a2.data_mut() {
            *v = 0;
        }
        copy_roi(&b, &b.roi(), &mut a2, roi.origin).unwrap();

        for y in 0..7 {
            for x in 0..9 {
                let inside = (2..7).contains(&x) && (3..7).contains(&y);
                for c in 0..3 {
                    let expected = if inside { *a.get(x, y, c).unwrap() } else { 0 };
                    assert_eq!(*a2.get(x, y, c).unwrap(), expected, "{layout} ({x}, {y}, {c})");
                }
            }
        }
    }
}

#[test]
fn test_slice_round_trip_all_layouts() {
    for layout in Layout::ALL {
        let a = sequential(ImageSize::new(6, 5, 2), layout);
        let roi = Roi::from_xywh(1, 1, 4, 3);
        let mut raw = vec![0u32; 4 * 3 * 2];
        copy_roi_to_slice(&a, &roi, &mut raw).unwrap();

        let mut b = Image::default();
        copy_from_slice(&raw, ImageSize::new(4, 3, 2), layout, &mut b).unwrap();

        let mut direct = Image::default();
        copy_roi_resized(&a, &roi, &mut direct).unwrap();
        assert_eq!(b, direct, "{layout}");
    }
}

#[test]
fn test_padded_ingest_matches_packed() {
    for layout in Layout::ALL {
        let size = ImageSize::new(3, 2, 2);
        let packed = sequential(size, layout);
        let line = layout.line_len(3, 2).unwrap();
        let lines = layout.line_count(2, 2).unwrap();

        // two padding samples after every line
        let mut raw = Vec::new();
        for chunk in packed.data().chunks(line) {
            raw.extend_from_slice(chunk);
            raw.extend_from_slice(&[u32::MAX, u32::MAX]);
        }
        assert_eq!(raw.len(), lines * (line + 2));

        let mut img = Image::default();
        let stride = (line + 2) * std::mem::size_of::<u32>();
        copy_from_padded(&raw, size, stride, layout, &mut img).unwrap();
        assert_eq!(img, packed, "{layout}");
    }
}

#[test]
fn test_convert_layout_round_trip() {
    let bip = sequential(ImageSize::new(4, 3, 2), Layout::Bip);
    let bil = convert_layout(&bip, Layout::Bil).unwrap();
    let bsq = convert_layout(&bil, Layout::Bsq).unwrap();
    assert_eq!(convert_layout(&bsq, Layout::Bip).unwrap(), bip);

    let mut raw = vec![0u32; bsq.len()];
    copy_to_slice(&bsq, &mut raw).unwrap();
    assert_eq!(&raw[..4], &[0, 2, 4, 6]);
}

#[test]
fn test_region_scenario() {
    let roi = Region::<i32, u32>::from_xywh(10, 10, 40, 20);
    let zoomed = roi.zoomed(2.0).unwrap();
    assert_eq!(zoomed.extent, Size2::new(80, 40));
    assert_eq!(zoomed.origin, Point2::new(10, 10));
    assert_eq!(roi.moved(Point2::new(1, 1)).unwrap().origin, Point2::new(11, 11));
}

#[test]
fn test_images_cross_threads() {
    let img = sequential(ImageSize::new(16, 16, 1), Layout::Bsq);
    let sum: u64 = std::thread::scope(|s| {
        let h = s.spawn(|| img.data().iter().map(|&v| v as u64).sum::<u64>());
        h.join().unwrap()
    });
    assert_eq!(sum, (0..256u64).sum());
}
