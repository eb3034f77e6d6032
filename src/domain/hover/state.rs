//! Hover state machine — app-owned, pure update logic.

use super::{
    place_overlay, HoverFrame, OverlaySize, PlotFrame, PlotSample, ScreenPoint,
};

/// Current hover state.
///
/// `Active.index` is a valid index into the series the engine was last fed;
/// it is only ever set from a nearest-sample search over that series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Active {
        index: usize,
        /// Screen position of the highlighted sample.
        x: f64,
        y: f64,
    },
}

/// Maps pointer movement to a concrete data sample and an overlay position.
///
/// The app owns an instance and feeds it pointer events; every call returns
/// the [`HoverFrame`] to apply to the display. Network code never touches
/// this state.
#[derive(Debug, Clone, Default)]
pub struct HoverEngine {
    state: HoverState,
}

impl HoverEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    /// Handle a pointer move over the chart.
    ///
    /// Goes (or stays) Idle when the series is empty, either axis fails to
    /// resolve, or the pointer is outside the plot area. Otherwise
    /// highlights the sample whose rendered position is nearest the pointer
    /// — always a concrete existing sample, never an interpolated one.
    pub fn pointer_moved(
        &mut self,
        frame: &PlotFrame,
        samples: &[PlotSample],
        pointer: ScreenPoint,
        overlay: OverlaySize,
    ) -> HoverFrame {
        let Some((x_axis, y_axis)) = frame.resolve_axes() else {
            return self.go_idle();
        };
        if samples.is_empty() {
            return self.go_idle();
        }
        if !x_axis.screen_contains(pointer.x) || !y_axis.screen_contains(pointer.y) {
            return self.go_idle();
        }

        let mut best: Option<(usize, f64, ScreenPoint)> = None;
        for (index, sample) in samples.iter().enumerate() {
            let on_screen =
                ScreenPoint::new(x_axis.forward(sample.x), y_axis.forward(sample.y));
            if !on_screen.x.is_finite() || !on_screen.y.is_finite() {
                continue;
            }
            let dist =
                (on_screen.x - pointer.x).powi(2) + (on_screen.y - pointer.y).powi(2);
            if best.map_or(true, |(_, d, _)| dist < d) {
                best = Some((index, dist, on_screen));
            }
        }
        let Some((index, _, marker)) = best else {
            // Every sample mapped off the number line (NaN data).
            return self.go_idle();
        };

        self.state = HoverState::Active {
            index,
            x: marker.x,
            y: marker.y,
        };
        HoverFrame::Shown {
            index,
            guide_x: marker.x,
            marker,
            overlay_top_left: place_overlay(marker, overlay, frame.canvas),
        }
    }

    /// Pointer left the plot area.
    pub fn pointer_left(&mut self) -> HoverFrame {
        self.go_idle()
    }

    /// The container was resized; previous screen positions are stale.
    pub fn canvas_resized(&mut self) -> HoverFrame {
        self.go_idle()
    }

    fn go_idle(&mut self) -> HoverFrame {
        self.state = HoverState::Idle;
        HoverFrame::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hover::{AxisRole, AxisTransform, CanvasSize};

    const OVERLAY: OverlaySize = OverlaySize {
        width: 100.0,
        height: 50.0,
    };

    /// 400×300 canvas; x: data 0..10 → screen 40..360, y: data 0..100 →
    /// screen 280..20 (inverted, data minimum at the bottom).
    fn frame() -> PlotFrame {
        PlotFrame {
            canvas: CanvasSize {
                width: 400.0,
                height: 300.0,
            },
            axes: vec![
                (AxisRole::Time, AxisTransform::new(0.0, 10.0, 40.0, 360.0)),
                (AxisRole::Value, AxisTransform::new(0.0, 100.0, 280.0, 20.0)),
            ],
        }
    }

    fn samples() -> Vec<PlotSample> {
        vec![
            PlotSample { x: 0.0, y: 0.0 },   // screen (40, 280)
            PlotSample { x: 5.0, y: 50.0 },  // screen (200, 150)
            PlotSample { x: 10.0, y: 100.0 }, // screen (360, 20)
        ]
    }

    #[test]
    fn test_empty_series_stays_idle() {
        let mut engine = HoverEngine::new();
        let out = engine.pointer_moved(&frame(), &[], ScreenPoint::new(200.0, 150.0), OVERLAY);
        assert_eq!(out, HoverFrame::Hidden);
        assert_eq!(engine.state(), HoverState::Idle);
    }

    #[test]
    fn test_missing_value_axis_stays_idle() {
        let mut f = frame();
        f.axes.retain(|(role, _)| *role == AxisRole::Time);
        let mut engine = HoverEngine::new();
        let out =
            engine.pointer_moved(&f, &samples(), ScreenPoint::new(200.0, 150.0), OVERLAY);
        assert_eq!(out, HoverFrame::Hidden);
    }

    #[test]
    fn test_pointer_outside_plot_area_stays_idle() {
        let mut engine = HoverEngine::new();
        let out = engine.pointer_moved(
            &frame(),
            &samples(),
            ScreenPoint::new(5.0, 150.0), // left of the plot area
            OVERLAY,
        );
        assert_eq!(out, HoverFrame::Hidden);
        assert_eq!(engine.state(), HoverState::Idle);
    }

    #[test]
    fn test_nearest_sample_wins() {
        let mut engine = HoverEngine::new();
        let out = engine.pointer_moved(
            &frame(),
            &samples(),
            ScreenPoint::new(210.0, 140.0), // closest to the middle sample
            OVERLAY,
        );
        match out {
            HoverFrame::Shown { index, marker, guide_x, .. } => {
                assert_eq!(index, 1);
                assert_eq!(marker, ScreenPoint::new(200.0, 150.0));
                assert_eq!(guide_x, 200.0);
            }
            HoverFrame::Hidden => panic!("expected a highlighted sample"),
        }
        assert!(matches!(engine.state(), HoverState::Active { index: 1, .. }));
    }

    #[test]
    fn test_subsequent_moves_retarget() {
        let mut engine = HoverEngine::new();
        engine.pointer_moved(&frame(), &samples(), ScreenPoint::new(210.0, 140.0), OVERLAY);
        let out = engine.pointer_moved(
            &frame(),
            &samples(),
            ScreenPoint::new(350.0, 30.0),
            OVERLAY,
        );
        assert!(matches!(out, HoverFrame::Shown { index: 2, .. }));
        assert!(matches!(engine.state(), HoverState::Active { index: 2, .. }));
    }

    #[test]
    fn test_leave_and_resize_reset_to_idle() {
        let mut engine = HoverEngine::new();
        engine.pointer_moved(&frame(), &samples(), ScreenPoint::new(210.0, 140.0), OVERLAY);

        assert_eq!(engine.pointer_left(), HoverFrame::Hidden);
        assert_eq!(engine.state(), HoverState::Idle);

        engine.pointer_moved(&frame(), &samples(), ScreenPoint::new(210.0, 140.0), OVERLAY);
        assert_eq!(engine.canvas_resized(), HoverFrame::Hidden);
        assert_eq!(engine.state(), HoverState::Idle);
    }

    #[test]
    fn test_overlay_position_is_on_canvas_near_the_edge() {
        let mut engine = HoverEngine::new();
        // Top-right sample: marker at (360, 20), overlay must flip left.
        let out = engine.pointer_moved(
            &frame(),
            &samples(),
            ScreenPoint::new(355.0, 25.0),
            OVERLAY,
        );
        match out {
            HoverFrame::Shown { overlay_top_left, .. } => {
                assert!(overlay_top_left.x + OVERLAY.width <= 400.0);
                assert!(overlay_top_left.x >= 0.0 && overlay_top_left.y >= 0.0);
            }
            HoverFrame::Hidden => panic!("expected a highlighted sample"),
        }
    }
}
