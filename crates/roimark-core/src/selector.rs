use serde::{Deserialize, Serialize};

use crate::geometry::{DisplayPoint, DisplayRect, NativeSize, ViewBounds};
use crate::roi::RoiRect;

/// Interaction thresholds, in display pixels.
///
/// The minimum-drag and overlay-visibility thresholds are distinct: a drag
/// between the two still previews while the pointer is down but is discarded
/// on release.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// A completed drag below this extent on either axis is discarded.
    pub min_drag_px: f32,
    /// The overlay rectangle is hidden unless both extents exceed this.
    pub overlay_min_px: f32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_drag_px: 3.0,
            overlay_min_px: 2.0,
        }
    }
}

/// In-flight drag gesture: the clamped start point, the bounds snapshot used
/// for the eventual native-pixel conversion, and the live rectangle.
#[derive(Clone, Debug)]
struct DragSession {
    start: DisplayPoint,
    bounds: ViewBounds,
    rect: DisplayRect,
}

/// A committed selection: the ROI in native pixels plus the display
/// rectangle it was committed from, which the overlay keeps showing.
#[derive(Clone, Debug)]
struct Committed {
    roi: RoiRect,
    display: DisplayRect,
}

/// Drag-to-select state machine for one image view.
///
/// Hosts feed pointer events in delivery order (`gesture_start` →
/// `gesture_update`* → `gesture_end`) and render from the accessors. One
/// instance per view; nothing here is global.
#[derive(Clone, Debug)]
pub struct RoiSelector {
    config: SelectorConfig,
    natural: NativeSize,
    drag: Option<DragSession>,
    committed: Option<Committed>,
}

impl RoiSelector {
    pub fn new(natural: NativeSize) -> Self {
        Self::with_config(natural, SelectorConfig::default())
    }

    pub fn with_config(natural: NativeSize, config: SelectorConfig) -> Self {
        Self {
            config,
            natural,
            drag: None,
            committed: None,
        }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Replace the thresholds. Takes effect on the next gesture.
    pub fn set_config(&mut self, config: SelectorConfig) {
        self.config = config;
    }

    pub fn natural(&self) -> NativeSize {
        self.natural
    }

    /// Begin a drag at `point` (display-local, clamped into `bounds`).
    ///
    /// Non-primary buttons are ignored entirely. A start while a previous
    /// drag never received its end event replaces the stale session.
    pub fn gesture_start(&mut self, point: DisplayPoint, bounds: ViewBounds, primary: bool) {
        if !primary {
            return;
        }
        let start = bounds.clamp(point);
        self.drag = Some(DragSession {
            start,
            bounds,
            rect: DisplayRect::from_corners(start, start),
        });
    }

    /// Track pointer movement. Updates the live rectangle only; the
    /// committed selection is untouched until the gesture ends.
    pub fn gesture_update(&mut self, point: DisplayPoint, bounds: ViewBounds) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let p = bounds.clamp(point);
        drag.rect = DisplayRect::from_corners(drag.start, p);
    }

    /// Finish the drag and return the committed ROI, if any.
    ///
    /// A final rectangle below `min_drag_px` on either axis discards the
    /// gesture: with no prior selection the state is explicitly cleared,
    /// with one the prior selection stays untouched.
    pub fn gesture_end(&mut self, point: DisplayPoint, bounds: ViewBounds) -> Option<RoiRect> {
        let drag = self.drag.take()?;
        let end = bounds.clamp(point);
        let rect = DisplayRect::from_corners(drag.start, end);

        if rect.width < self.config.min_drag_px || rect.height < self.config.min_drag_px {
            tracing::debug!(
                width = rect.width,
                height = rect.height,
                "drag below minimum size, discarded"
            );
            if self.committed.is_none() {
                self.clear();
            }
            return None;
        }

        let roi = RoiRect::from_display(&rect, drag.bounds, self.natural);
        tracing::debug!(?roi, "selection committed");
        self.committed = Some(Committed {
            roi: roi.clone(),
            display: rect,
        });
        Some(roi)
    }

    /// Drop the selection and any in-flight drag. Idempotent, valid in any
    /// state.
    pub fn clear(&mut self) {
        self.drag = None;
        self.committed = None;
    }

    /// The committed selection. `Some` iff the output fields are populated
    /// and the submit/clear controls should be enabled.
    pub fn selection(&self) -> Option<&RoiRect> {
        self.committed.as_ref().map(|c| &c.roi)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Submission guard: the ROI to submit, or `None` when the host must
    /// cancel the action.
    pub fn submit(&self) -> Option<RoiRect> {
        self.selection().cloned()
    }

    /// The rectangle to draw, or `None` while it is degenerate enough to
    /// suppress. During a drag this is the live rectangle, otherwise the
    /// committed selection's.
    pub fn overlay(&self) -> Option<DisplayRect> {
        let rect = match (&self.drag, &self.committed) {
            (Some(d), _) => d.rect,
            (None, Some(c)) => c.display,
            (None, None) => return None,
        };
        let min = self.config.overlay_min_px;
        (rect.width > min && rect.height > min).then_some(rect)
    }
}
