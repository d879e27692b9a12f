use approx::assert_relative_eq;

use roimark_core::geometry::{to_natural, DisplayPoint, DisplayRect, NativeSize, ViewBounds};
use roimark_core::roi::RoiRect;

fn pt(x: f32, y: f32) -> DisplayPoint {
    DisplayPoint::new(x, y)
}

#[test]
fn test_from_corners_normalizes_order() {
    let a = pt(200.0, 150.0);
    let b = pt(100.0, 50.0);

    let rect = DisplayRect::from_corners(a, b);
    assert_relative_eq!(rect.left, 100.0);
    assert_relative_eq!(rect.top, 50.0);
    assert_relative_eq!(rect.width, 100.0);
    assert_relative_eq!(rect.height, 100.0);

    // Same rectangle regardless of corner order
    assert_eq!(rect, DisplayRect::from_corners(b, a));
}

#[test]
fn test_clamp_keeps_out_of_view_points_in_bounds() {
    let bounds = ViewBounds::new(500.0, 250.0);

    let p = bounds.clamp(pt(-20.0, 1000.0));
    assert_relative_eq!(p.x, 0.0);
    assert_relative_eq!(p.y, 250.0);

    // In-bounds points pass through unchanged
    let q = bounds.clamp(pt(123.0, 45.0));
    assert_relative_eq!(q.x, 123.0);
    assert_relative_eq!(q.y, 45.0);
}

#[test]
fn test_round_trip_corners() {
    // Top-left and bottom-right of the view map to the image corners, for
    // arbitrary display bounds.
    let natural = NativeSize {
        width: 800,
        height: 600,
    };

    for (w, h) in [(800.0, 600.0), (400.0, 300.0), (333.0, 250.0), (1600.0, 1200.0)] {
        let bounds = ViewBounds::new(w, h);

        let origin = to_natural(pt(0.0, 0.0), bounds, natural);
        assert_eq!((origin.x, origin.y), (0, 0));

        let corner = to_natural(pt(w, h), bounds, natural);
        assert_eq!((corner.x, corner.y), (800, 600));
    }
}

#[test]
fn test_half_scale_point() {
    // 1000x500 image shown at 500x250
    let natural = NativeSize {
        width: 1000,
        height: 500,
    };
    let bounds = ViewBounds::new(500.0, 250.0);

    let p = to_natural(pt(100.0, 50.0), bounds, natural);
    assert_eq!((p.x, p.y), (200, 100));
}

#[test]
fn test_rounds_to_nearest_pixel() {
    // 100x100 image shown enlarged at 300x300: display scale 1/3
    let natural = NativeSize {
        width: 100,
        height: 100,
    };
    let bounds = ViewBounds::new(300.0, 300.0);

    assert_eq!(to_natural(pt(1.0, 1.0), bounds, natural).x, 0); // 0.33 -> 0
    assert_eq!(to_natural(pt(2.0, 2.0), bounds, natural).x, 1); // 0.67 -> 1
    assert_eq!(to_natural(pt(100.0, 100.0), bounds, natural).x, 33);
    assert_eq!(to_natural(pt(200.0, 200.0), bounds, natural).y, 67);
}

#[test]
fn test_zero_bounds_maps_to_origin() {
    let natural = NativeSize {
        width: 1000,
        height: 500,
    };
    let bounds = ViewBounds::new(0.0, 0.0);

    let p = to_natural(pt(100.0, 50.0), bounds, natural);
    assert_eq!((p.x, p.y), (0, 0));
}

#[test]
fn test_roi_from_display_half_scale() {
    let natural = NativeSize {
        width: 1000,
        height: 500,
    };
    let bounds = ViewBounds::new(500.0, 250.0);
    let rect = DisplayRect::from_corners(pt(100.0, 50.0), pt(200.0, 150.0));

    let roi = RoiRect::from_display(&rect, bounds, natural);
    assert_eq!(
        roi,
        RoiRect {
            x: 200,
            y: 100,
            width: 200,
            height: 200,
        }
    );
}

#[test]
fn test_roi_width_height_floor_at_one() {
    // 10x10 image blown up to 1000x1000: a 5px display drag covers well
    // under one native pixel, but the region never collapses to zero.
    let natural = NativeSize {
        width: 10,
        height: 10,
    };
    let bounds = ViewBounds::new(1000.0, 1000.0);
    let rect = DisplayRect::from_corners(pt(0.0, 0.0), pt(5.0, 5.0));

    let roi = RoiRect::from_display(&rect, bounds, natural);
    assert_eq!(roi.width, 1);
    assert_eq!(roi.height, 1);
}

#[test]
fn test_roi_corners_converted_independently() {
    // Non-integer scale: 640x480 shown at 250x250. Width must come from the
    // difference of the two rounded corners, not from rounding the width.
    let natural = NativeSize {
        width: 640,
        height: 480,
    };
    let bounds = ViewBounds::new(250.0, 250.0);
    let rect = DisplayRect::from_corners(pt(10.0, 10.0), pt(110.0, 110.0));

    let roi = RoiRect::from_display(&rect, bounds, natural);
    let p1 = to_natural(pt(10.0, 10.0), bounds, natural);
    let p2 = to_natural(pt(110.0, 110.0), bounds, natural);
    assert_eq!(roi.x, p1.x);
    assert_eq!(roi.y, p1.y);
    assert_eq!(roi.width, p2.x - p1.x);
    assert_eq!(roi.height, p2.y - p1.y);
}
