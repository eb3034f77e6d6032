//! Hover domain — chart-cursor geometry.
//!
//! Everything here is pure: the engine turns a pointer position into a
//! highlighted sample and a fully-on-canvas overlay position, returned as a
//! [`HoverFrame`] render-state value. A thin adapter in the UI layer applies
//! that value to whatever toolkit draws the chart; no toolkit types appear
//! in this module.

pub mod state;

pub use state::{HoverEngine, HoverState};

/// Offset between the hovered point and the overlay's default top-left.
pub const OVERLAY_OFFSET: f64 = 12.0;

/// A position in screen space (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the drawing canvas the chart and overlay live on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

/// Measured size of the overlay panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySize {
    pub width: f64,
    pub height: f64,
}

/// A rendered series sample in data space: time on x, value on y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotSample {
    pub x: f64,
    pub y: f64,
}

/// What an axis is bound to. The hover engine needs one of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisRole {
    /// Horizontal axis, bound to time.
    Time,
    /// Vertical axis, bound to value.
    Value,
}

/// Forward transform of one axis: data range → screen range.
///
/// The vertical axis of a chart typically has `screen_min > screen_max`
/// (data minimum at the bottom of the canvas); the transform handles either
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransform {
    pub data_min: f64,
    pub data_max: f64,
    pub screen_min: f64,
    pub screen_max: f64,
}

impl AxisTransform {
    pub fn new(data_min: f64, data_max: f64, screen_min: f64, screen_max: f64) -> Self {
        Self {
            data_min,
            data_max,
            screen_min,
            screen_max,
        }
    }

    /// Data coordinate → screen coordinate.
    pub fn forward(&self, v: f64) -> f64 {
        let span = self.data_max - self.data_min;
        self.screen_min + (v - self.data_min) / span * (self.screen_max - self.screen_min)
    }

    /// An axis with no data span (or a NaN range) cannot transform.
    fn is_resolvable(&self) -> bool {
        self.data_max > self.data_min
            && self.screen_min.is_finite()
            && self.screen_max.is_finite()
    }

    fn screen_contains(&self, s: f64) -> bool {
        let (lo, hi) = if self.screen_min <= self.screen_max {
            (self.screen_min, self.screen_max)
        } else {
            (self.screen_max, self.screen_min)
        };
        s >= lo && s <= hi
    }
}

/// The chart geometry a pointer event is evaluated against: canvas size plus
/// the active axes, tagged by role.
#[derive(Debug, Clone)]
pub struct PlotFrame {
    pub canvas: CanvasSize,
    pub axes: Vec<(AxisRole, AxisTransform)>,
}

impl PlotFrame {
    /// Locate the time and value axes by role. `None` when either is
    /// missing or unresolvable — hovering is impossible without both.
    pub(crate) fn resolve_axes(&self) -> Option<(AxisTransform, AxisTransform)> {
        let find = |role: AxisRole| {
            self.axes
                .iter()
                .find(|(r, ax)| *r == role && ax.is_resolvable())
                .map(|(_, ax)| *ax)
        };
        Some((find(AxisRole::Time)?, find(AxisRole::Value)?))
    }
}

/// Render state produced by the engine, to be applied by the UI adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverFrame {
    /// Hide the guide line, the point marker and the overlay.
    Hidden,
    /// Show all three for the sample at `index`.
    Shown {
        /// Index into the currently rendered series.
        index: usize,
        /// Horizontal position of the vertical guide marker.
        guide_x: f64,
        /// Exact screen position of the point marker.
        marker: ScreenPoint,
        /// Final top-left of the overlay panel, fully on-canvas.
        overlay_top_left: ScreenPoint,
    },
}

/// Place the overlay near `anchor` without ever leaving the canvas.
///
/// Default anchor is +12px right/down of the point; flips to the left when
/// the right edge would exceed the canvas width, flips upward when the
/// bottom edge would exceed the canvas height, and clamps the final
/// top-left at zero.
pub fn place_overlay(anchor: ScreenPoint, overlay: OverlaySize, canvas: CanvasSize) -> ScreenPoint {
    let mut left = anchor.x + OVERLAY_OFFSET;
    let mut top = anchor.y + OVERLAY_OFFSET;

    if left + overlay.width > canvas.width {
        left = anchor.x - overlay.width - OVERLAY_OFFSET;
    }
    if top + overlay.height > canvas.height {
        top = anchor.y - overlay.height - OVERLAY_OFFSET;
    }

    ScreenPoint::new(left.max(0.0), top.max(0.0))
}
