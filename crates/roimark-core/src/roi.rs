use serde::{Deserialize, Serialize};

use crate::error::{Result, RoimarkError};
use crate::geometry::{to_natural, DisplayPoint, DisplayRect, NativeSize, ViewBounds};

/// A region of interest in native pixel coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RoiRect {
    /// Convert a display-space rectangle to native pixels.
    ///
    /// Both corners are converted independently through the gesture-start
    /// bounds; width/height derive from the corner difference with a floor
    /// of 1, so rounding can never collapse the region to zero size.
    pub fn from_display(rect: &DisplayRect, bounds: ViewBounds, natural: NativeSize) -> Self {
        let p1 = to_natural(DisplayPoint::new(rect.left, rect.top), bounds, natural);
        let p2 = to_natural(
            DisplayPoint::new(rect.left + rect.width, rect.top + rect.height),
            bounds,
            natural,
        );
        Self {
            x: p1.x,
            y: p1.y,
            width: p2.x.saturating_sub(p1.x).max(1),
            height: p2.y.saturating_sub(p1.y).max(1),
        }
    }

    /// Validate the region against source dimensions.
    pub fn validated(&self, src_w: u32, src_h: u32) -> Result<RoiRect> {
        if self.width == 0 || self.height == 0 {
            return Err(RoimarkError::InvalidRoi(
                "width and height must be > 0".into(),
            ));
        }

        let right = self.x as u64 + self.width as u64;
        let bottom = self.y as u64 + self.height as u64;
        if right > src_w as u64 || bottom > src_h as u64 {
            return Err(RoimarkError::InvalidRoi(format!(
                "region ({},{} {}x{}) exceeds source dimensions ({src_w}x{src_h})",
                self.x, self.y, self.width, self.height
            )));
        }

        Ok(self.clone())
    }
}
