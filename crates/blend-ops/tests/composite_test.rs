//! Compositor tests against custom image sources.

use blend_core::{ColorModel, Image, ImageSink, ImageSource, Rect, Rgba16};
use blend_ops::channel::{Dst, Src};
use blend_ops::{
    composite, composite_in_place, composite_in_place_with, composite_with, Blend, BlendMode,
    CompositeOptions, OpsError, PerChannel,
};

/// Procedural checkerboard, never stored in memory.
struct Checker {
    bounds: Rect,
    a: Rgba16,
    b: Rgba16,
}

impl ImageSource for Checker {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn color_model(&self) -> ColorModel {
        ColorModel::Rgba16
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba16 {
        if (x + y).rem_euclid(2) == 0 { self.a } else { self.b }
    }
}

/// Sink that records every write.
struct Recorder {
    inner: Image,
    writes: Vec<(i32, i32)>,
}

impl ImageSource for Recorder {
    fn bounds(&self) -> Rect {
        self.inner.bounds()
    }

    fn color_model(&self) -> ColorModel {
        self.inner.color_model()
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba16 {
        self.inner.pixel(x, y)
    }
}

impl ImageSink for Recorder {
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba16) {
        self.writes.push((x, y));
        self.inner.set_pixel(x, y, color);
    }
}

#[test]
fn test_procedural_source() {
    let dst = Image::filled(Rect::new(-2, -2, 4, 4), ColorModel::Rgba16, Rgba16::WHITE);
    let src = Checker {
        bounds: Rect::new(-1, -1, 2, 2),
        a: Rgba16::BLACK,
        b: Rgba16::WHITE,
    };

    let out = composite(&dst, &src, &BlendMode::Multiply).unwrap();
    assert_eq!(out.pixel(-1, -1), Rgba16::BLACK);
    assert_eq!(out.pixel(0, -1), Rgba16::WHITE);
    assert_eq!(out.pixel(0, 0), Rgba16::BLACK);
    assert_eq!(out.pixel(-2, -2), Rgba16::WHITE);
    assert_eq!(out.pixel(1, 1), Rgba16::WHITE);
}

#[test]
fn test_in_place_writes_only_intersection() {
    let mut dst = Recorder {
        inner: Image::new(Rect::from_size(4, 4), ColorModel::Rgba16),
        writes: Vec::new(),
    };
    let src = Checker {
        bounds: Rect::new(2, 2, 4, 4),
        a: Rgba16::WHITE,
        b: Rgba16::WHITE,
    };

    composite_in_place(&mut dst, &src, &BlendMode::Lighten).unwrap();
    assert_eq!(dst.writes, vec![(2, 2), (3, 2), (2, 3), (3, 3)]);
}

#[test]
fn test_failed_precondition_writes_nothing() {
    let mut dst = Recorder {
        inner: Image::new(Rect::from_size(4, 4), ColorModel::Gray16),
        writes: Vec::new(),
    };
    let src = Checker {
        bounds: Rect::from_size(4, 4),
        a: Rgba16::WHITE,
        b: Rgba16::BLACK,
    };

    let err = composite_in_place(&mut dst, &src, &BlendMode::Screen).unwrap_err();
    assert_eq!(err.to_string(), "incompatible color models: dst is gray16, src is rgba16");
    assert!(dst.writes.is_empty());

    let opts = CompositeOptions::contained().with_require_overlap(true);
    let far = Checker {
        bounds: Rect::new(100, 100, 1, 1),
        a: Rgba16::WHITE,
        b: Rgba16::WHITE,
    };
    dst.inner = Image::new(Rect::from_size(4, 4), ColorModel::Rgba16);
    let err = composite_in_place_with(&mut dst, &far, &BlendMode::Screen, &opts).unwrap_err();
    assert!(matches!(err, OpsError::BoundsMismatch { .. }));
    assert!(dst.writes.is_empty());
}

#[test]
fn test_non_commutative_order() {
    let dst = Image::filled(Rect::from_size(1, 1), ColorModel::Rgba16, Rgba16::gray(50000));
    let src = Image::filled(Rect::from_size(1, 1), ColorModel::Rgba16, Rgba16::gray(20000));

    let out = composite(&dst, &src, &BlendMode::Subtract).unwrap();
    assert_eq!(out.pixel(0, 0), Rgba16::gray(30000));

    let swapped = composite(&src, &dst, &BlendMode::Subtract).unwrap();
    assert_eq!(swapped.pixel(0, 0), Rgba16::gray(0));
}

#[test]
fn test_alpha_comes_from_destination() {
    let dst = Image::filled(Rect::from_size(2, 2), ColorModel::Rgba16, Rgba16::new(100, 200, 300, 1234));
    let src = Image::filled(Rect::from_size(2, 2), ColorModel::Rgba16, Rgba16::new(9, 9, 9, 65535));

    for mode in BlendMode::ALL {
        let out = composite(&dst, &src, &mode).unwrap();
        assert!(out.data().iter().all(|c| c.a == 1234), "{mode}");
    }
}

#[test]
fn test_dynamic_modes() {
    fn halve(Dst(d): Dst, Src(_): Src) -> f64 {
        d / 2.0
    }
    let invert = |Dst(d): Dst<blend_core::RgbaF64>, Src(_): Src<blend_core::RgbaF64>| {
        blend_core::RgbaF64::new(65535.0 - d.r, 65535.0 - d.g, 65535.0 - d.b, d.a)
    };

    let modes: Vec<Box<dyn Blend>> = vec![
        Box::new(BlendMode::Darken),
        Box::new(PerChannel(halve)),
        Box::new(invert),
    ];

    let dst = Image::filled(Rect::from_size(2, 1), ColorModel::Rgba16, Rgba16::gray(40000));
    let src = Image::filled(Rect::from_size(2, 1), ColorModel::Rgba16, Rgba16::gray(10000));
    let expected = [Rgba16::gray(10000), Rgba16::gray(20000), Rgba16::gray(25535)];

    for (mode, want) in modes.iter().zip(expected) {
        let out = composite(&dst, &src, mode.as_ref()).unwrap();
        assert_eq!(out.pixel(1, 0), want);
    }
}

#[test]
fn test_require_overlap() {
    let dst = Image::new(Rect::from_size(2, 2), ColorModel::Rgba16);
    let src = Image::new(Rect::new(2, 0, 2, 2), ColorModel::Rgba16);
    let opts = CompositeOptions::default().with_require_overlap(true);

    let err = composite_with(&dst, &src, &BlendMode::Add, &opts).unwrap_err();
    assert_eq!(
        err,
        OpsError::NoOverlap {
            dst: Rect::from_size(2, 2),
            src: Rect::new(2, 0, 2, 2),
        }
    );
    assert!(composite(&dst, &src, &BlendMode::Add).is_ok());
}

#[test]
fn test_sources_at_coordinate_extremes() {
    let dst = Image::filled(Rect::from_size(4, 1), ColorModel::Rgba16, Rgba16::WHITE);
    let wide = Checker {
        bounds: Rect::new(0, 0, u32::MAX, 1),
        a: Rgba16::BLACK,
        b: Rgba16::BLACK,
    };
    let out = composite(&dst, &wide, &BlendMode::Multiply).unwrap();
    assert!(out.data().iter().all(|&c| c == Rgba16::BLACK));

    let far = Checker {
        bounds: Rect::new(i32::MAX - 1, 0, 4, 1),
        a: Rgba16::BLACK,
        b: Rgba16::BLACK,
    };
    assert_eq!(composite(&dst, &far, &BlendMode::Multiply).unwrap(), dst);
    let opts = CompositeOptions::contained();
    assert!(matches!(
        composite_with(&dst, &far, &BlendMode::Multiply, &opts),
        Err(OpsError::BoundsMismatch { .. })
    ));
}
