/// A point in display-local coordinates: pixels relative to the top-left of
/// the rendered view, which may be scaled relative to the image it shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayPoint {
    pub x: f32,
    pub y: f32,
}

impl DisplayPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in display-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl DisplayRect {
    /// Normalized rectangle spanning two corner points, in either order.
    pub fn from_corners(a: DisplayPoint, b: DisplayPoint) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }
}

/// On-screen size of the rendered view. Hosts sample this fresh on every
/// pointer event; the selector snapshots the gesture-start value for the
/// eventual native-pixel conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBounds {
    pub width: f32,
    pub height: f32,
}

impl ViewBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp a pointer position into the view, so a gesture that starts
    /// inside and continues past the edges still yields in-bounds points.
    pub fn clamp(&self, p: DisplayPoint) -> DisplayPoint {
        DisplayPoint {
            x: p.x.clamp(0.0, self.width.max(0.0)),
            y: p.y.clamp(0.0, self.height.max(0.0)),
        }
    }
}

/// Intrinsic pixel dimensions of the source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NativeSize {
    pub width: u32,
    pub height: u32,
}

/// A point on the image's native pixel grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NativePoint {
    pub x: u32,
    pub y: u32,
}

/// Convert a display-local point to native pixels, scaling each axis by
/// `natural / displayed` and rounding to the nearest integer.
///
/// A zero-size bounds (view not laid out yet) maps everything to 0 instead
/// of dividing by zero.
pub fn to_natural(p: DisplayPoint, bounds: ViewBounds, natural: NativeSize) -> NativePoint {
    let scale_x = if bounds.width > 0.0 {
        natural.width as f32 / bounds.width
    } else {
        0.0
    };
    let scale_y = if bounds.height > 0.0 {
        natural.height as f32 / bounds.height
    } else {
        0.0
    };
    NativePoint {
        x: (p.x * scale_x).round() as u32,
        y: (p.y * scale_y).round() as u32,
    }
}
