use super::*;

#[test]
fn canvas_swap_and_orientation() {
    let c = CanvasDimensions::new(1080, 1920);
    assert!(c.is_portrait());
    let s = c.swapped();
    assert_eq!((s.width(), s.height()), (1920, 1080));
    assert!(!s.is_portrait());
    assert!(!CanvasDimensions::new(1080, 1080).is_portrait());
}

#[test]
fn scale_factors_map_exact_ratios() {
    let f = ScaleFactors::between(1920.0, 1080.0, 1280.0, 720.0);
    assert_eq!(f.apply(Point::new(960.0, 540.0)), Point::new(640.0, 360.0));
    assert!(!f.is_identity());
}

#[test]
fn scale_factors_identity() {
    let c = CanvasDimensions::new(1920, 1080);
    let f = ScaleFactors::from_canvases(c, c);
    assert!(f.is_identity());
    assert_eq!(f.x(), 1.0);
    assert_eq!(f.y(), 1.0);
    let p = Point::new(123.456, 0.1);
    assert_eq!(f.apply(p), p);
}

#[test]
#[should_panic(expected = "old canvas dimensions must be positive")]
fn scale_factors_reject_zero_old_side() {
    let _ = ScaleFactors::between(0.0, 1080.0, 1280.0, 720.0);
}
