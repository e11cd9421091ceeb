use crate::core::simulator::Trajectory;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN_M: f64 = 1.0;

/// Visible world extent of a trajectory plot, anchored at the launch point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotWindow {
    pub max_x_m: f64,
    pub max_y_m: f64,
}

impl PlotWindow {
    /// Fits `[0, max x] x [0, max y]` of the trajectory plus a little headroom.
    ///
    /// Spans never drop below one metre so vertical or zero-speed shots still
    /// produce a drawable window.
    pub fn fit(trajectory: &Trajectory) -> Self {
        Self::from_extent(trajectory.max_range(), trajectory.max_height())
    }

    pub fn from_extent(raw_max_x: f64, raw_max_y: f64) -> Self {
        let raw_x_span = raw_max_x.max(MIN_SPAN_M);
        let raw_y_span = raw_max_y.max(MIN_SPAN_M);
        Self {
            max_x_m: raw_x_span * (1.0 + X_PADDING_RATIO),
            max_y_m: raw_y_span * (1.0 + Y_PADDING_RATIO),
        }
    }

    pub fn contains(&self, x_m: f64, y_m: f64) -> bool {
        (0.0..=self.max_x_m).contains(&x_m) && (0.0..=self.max_y_m).contains(&y_m)
    }

    /// Maps a world point into a screen rectangle whose y axis points down.
    pub fn world_to_screen(
        &self,
        x_m: f64,
        y_m: f64,
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
    ) -> (f32, f32) {
        let plot_w = (right - left).max(1.0);
        let plot_h = (bottom - top).max(1.0);
        let x = left + (x_m / self.max_x_m) as f32 * plot_w;
        let y = bottom - (y_m / self.max_y_m) as f32 * plot_h;
        (x, y)
    }
}
