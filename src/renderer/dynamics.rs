//! Mass-spring-damper scenes
//!
//! [`DynamicsScene`] is the main animation (spring, mass, ground, trace and
//! readouts). [`ForcePlot`] and [`ResponsePlot`] are the optional side plots.

use glam::Vec2;

use super::commands::{DrawList, Stroke};
use crate::sim::oscillator::{
    self, AnimationParameters, FRAME_TIME_STEP, Parameter, RESPONSE_SWEEP_MAX, RESPONSE_SWEEP_MIN,
};

const SPRING: Stroke = Stroke::new("#2563eb", 3.0);
const GROUND: Stroke = Stroke::new("#374151", 2.0);
const TRACE: Stroke = Stroke::new("#059669", 1.0);
const AXIS: Stroke = Stroke::new("#9ca3af", 1.0);
const CURVE: Stroke = Stroke::new("#2563eb", 2.0);
const MARKER: Stroke = Stroke::new("#dc2626", 1.0);
const MASS_COLOR: &str = "#dc2626";
const LABEL_COLOR: &str = "#374151";
const LABEL_FONT: &str = "14px Inter";
const SMALL_FONT: &str = "12px Inter";

/// Spring anchor x and ground mark extent
const ANCHOR_X: f32 = 100.0;
const GROUND_HALF_WIDTH: f32 = 20.0;
const MASS_SIZE: Vec2 = Vec2::new(60.0, 40.0);

/// Trace sample count and the margin kept clear above and below it
const TRACE_SAMPLES: u32 = 200;
const TRACE_BAND: f32 = 50.0;

/// Inner padding for the side plots
const PLOT_PADDING: f32 = 30.0;
/// Seconds of history shown in the force plot
const FORCE_WINDOW: f64 = 10.0;
const FORCE_SAMPLES: usize = 240;
const RESPONSE_SAMPLES: usize = 200;

/// Main spring-mass animation
#[derive(Debug, Clone, Copy)]
pub struct DynamicsScene {
    pub params: AnimationParameters,
    /// Local animation time, advanced by a fixed step per frame
    pub time: f64,
    pub size: Vec2,
}

impl DynamicsScene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            params: AnimationParameters::default(),
            time: 0.0,
            size: Vec2::new(width, height),
        }
    }

    /// Move local time forward one frame
    pub fn advance(&mut self) {
        self.time += FRAME_TIME_STEP;
    }

    /// Readout lines drawn in the corner
    pub fn readouts(&self) -> [String; 2] {
        [
            format!("Natural Freq: {:.2} rad/s", self.params.natural_frequency()),
            format!("Damping Ratio: {:.3}", self.params.damping_ratio()),
        ]
    }

    pub fn render(&self) -> DrawList {
        let center = self.size / 2.0;
        let x = self.params.display_position(self.time) as f32;
        let mass_left = center.x + x - MASS_SIZE.x / 2.0;

        let mut list = DrawList::with_capacity(8);
        list.clear(self.size);

        list.line(Vec2::new(ANCHOR_X, center.y), Vec2::new(mass_left, center.y), SPRING);
        list.fill_rect(
            Vec2::new(mass_left, center.y - MASS_SIZE.y / 2.0),
            MASS_SIZE,
            MASS_COLOR,
        );
        list.line(
            Vec2::new(ANCHOR_X - GROUND_HALF_WIDTH, center.y),
            Vec2::new(ANCHOR_X + GROUND_HALF_WIDTH, center.y),
            GROUND,
        );

        list.polyline(self.trace(), TRACE);

        let [natural, ratio] = self.readouts();
        list.text(Vec2::new(10.0, 30.0), natural, LABEL_FONT, LABEL_COLOR);
        list.text(Vec2::new(10.0, 50.0), ratio, LABEL_FONT, LABEL_COLOR);

        list
    }

    /// Recent positions, newest at the bottom, scrolling upward
    fn trace(&self) -> Vec<Vec2> {
        let center_x = self.size.x / 2.0;
        (0..TRACE_SAMPLES)
            .filter_map(|i| {
                let y = self.size.y - TRACE_BAND - i as f32;
                if y <= TRACE_BAND {
                    return None;
                }
                let t = self.time - i as f64 * FRAME_TIME_STEP;
                Some(Vec2::new(center_x + self.params.display_position(t) as f32, y))
            })
            .collect()
    }
}

/// Applied force F0·sin(ω·t) over a trailing time window
#[derive(Debug, Clone, Copy)]
pub struct ForcePlot {
    pub size: Vec2,
}

impl ForcePlot {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    pub fn render(&self, params: &AnimationParameters, time: f64) -> DrawList {
        let left = PLOT_PADDING;
        let right = self.size.x - PLOT_PADDING;
        let mid = self.size.y / 2.0;
        let half_height = (self.size.y / 2.0 - PLOT_PADDING).max(1.0);
        // Fixed scale so amplitude changes are visible
        let full_scale = Parameter::ForceAmplitude.range().max;

        let mut list = DrawList::with_capacity(6);
        list.clear(self.size);
        list.line(Vec2::new(left, mid), Vec2::new(right, mid), AXIS);

        let start = time - FORCE_WINDOW;
        let points = (0..FORCE_SAMPLES)
            .map(|i| {
                let frac = i as f64 / (FORCE_SAMPLES - 1) as f64;
                let t = start + frac * FORCE_WINDOW;
                let force = params.force_at(t) / full_scale;
                Vec2::new(
                    left + frac as f32 * (right - left),
                    mid - force as f32 * half_height,
                )
            })
            .collect::<Vec<_>>();
        let latest = points.last().copied();
        list.polyline(points, CURVE);
        if let Some(latest) = latest {
            list.fill_circle(latest, 3.0, MASS_COLOR);
        }

        list.text(
            Vec2::new(left, PLOT_PADDING - 10.0),
            format!(
                "F(t) = {} sin({}t) N",
                Parameter::ForceAmplitude.format(params.force_amplitude),
                Parameter::ForcingFrequency.format(params.forcing_frequency)
            ),
            SMALL_FONT,
            LABEL_COLOR,
        );
        list
    }
}

/// Frequency response magnitude in dB across the sweep range
#[derive(Debug, Clone, Copy)]
pub struct ResponsePlot {
    pub size: Vec2,
}

impl ResponsePlot {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    fn x_for(&self, omega: f64) -> f32 {
        let frac = (omega - RESPONSE_SWEEP_MIN) / (RESPONSE_SWEEP_MAX - RESPONSE_SWEEP_MIN);
        PLOT_PADDING + frac.clamp(0.0, 1.0) as f32 * (self.size.x - 2.0 * PLOT_PADDING)
    }

    fn y_for(&self, db: f64, lo: f64, hi: f64) -> f32 {
        let frac = ((db - lo) / (hi - lo)).clamp(0.0, 1.0);
        self.size.y - PLOT_PADDING - frac as f32 * (self.size.y - 2.0 * PLOT_PADDING)
    }

    pub fn render(&self, params: &AnimationParameters) -> DrawList {
        let sweep = oscillator::response_sweep(params, RESPONSE_SAMPLES);
        let (lo, hi) = db_bounds(&sweep);
        let bottom = self.size.y - PLOT_PADDING;

        let mut list = DrawList::with_capacity(8);
        list.clear(self.size);
        list.line(
            Vec2::new(PLOT_PADDING, bottom),
            Vec2::new(self.size.x - PLOT_PADDING, bottom),
            AXIS,
        );
        list.line(Vec2::new(PLOT_PADDING, PLOT_PADDING), Vec2::new(PLOT_PADDING, bottom), AXIS);

        let curve = sweep
            .iter()
            .map(|&(omega, db)| Vec2::new(self.x_for(omega), self.y_for(db, lo, hi)))
            .collect();
        list.polyline(curve, CURVE);

        let omega = params.forcing_frequency;
        let db = params.response_db(omega);
        let marker = Vec2::new(self.x_for(omega), self.y_for(db, lo, hi));
        list.line(Vec2::new(marker.x, PLOT_PADDING), Vec2::new(marker.x, bottom), MARKER);
        list.fill_circle(marker, 4.0, MASS_COLOR);

        list.text(
            Vec2::new(PLOT_PADDING, PLOT_PADDING - 10.0),
            format!("|H(ω)| = {db:.1} dB at ω = {omega:.2} rad/s"),
            SMALL_FONT,
            LABEL_COLOR,
        );
        list
    }
}

/// Vertical range for a dB curve, never narrower than 1 dB
fn db_bounds(sweep: &[(f64, f64)]) -> (f64, f64) {
    let (lo, hi) = sweep
        .iter()
        .map(|&(_, db)| db)
        .filter(|db| db.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), db| {
            (lo.min(db), hi.max(db))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 0.0);
    }
    if hi - lo < 1.0 {
        let mid = (hi + lo) / 2.0;
        return (mid - 0.5, mid + 0.5);
    }
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::commands::DrawCommand;

    #[test]
    fn test_readouts_default_scenario() {
        let scene = DynamicsScene::new(600.0, 300.0);
        let [natural, ratio] = scene.readouts();
        assert_eq!(natural, "Natural Freq: 3.16 rad/s");
        assert_eq!(ratio, "Damping Ratio: 0.158");
    }

    #[test]
    fn test_mass_position_at_rest_phase() {
        let scene = DynamicsScene::new(600.0, 300.0);
        let list = scene.render();
        // x(0) = 50, so the mass sits at 300 + 50 - 30
        let rect = list.commands().iter().find_map(|c| match c {
            DrawCommand::FillRect { min, size, .. } => Some((*min, *size)),
            _ => None,
        });
        assert_eq!(rect, Some((Vec2::new(320.0, 130.0), MASS_SIZE)));
    }

    #[test]
    fn test_trace_stays_in_band() {
        let mut scene = DynamicsScene::new(600.0, 300.0);
        for _ in 0..37 {
            scene.advance();
        }
        let trace = scene.trace();
        assert_eq!(trace.len(), TRACE_SAMPLES as usize);
        assert!(trace.iter().all(|p| p.y > TRACE_BAND && p.y <= 250.0));

        // Short canvas clips the trace
        let short = DynamicsScene::new(600.0, 200.0);
        assert_eq!(short.trace().len(), 100);
    }

    #[test]
    fn test_advance_fixed_step() {
        let mut scene = DynamicsScene::new(600.0, 300.0);
        scene.advance();
        scene.advance();
        assert!((scene.time - 2.0 * FRAME_TIME_STEP).abs() < 1e-12);
    }

    #[test]
    fn test_response_marker_tracks_forcing_frequency() {
        let plot = ResponsePlot::new(400.0, 200.0);
        let mut params = AnimationParameters::default();
        params.forcing_frequency = RESPONSE_SWEEP_MIN;
        let list = plot.render(&params);
        let (marker, _) = list.circles_of(MASS_COLOR).next().unwrap();
        assert_eq!(marker.x, PLOT_PADDING);

        params.forcing_frequency = RESPONSE_SWEEP_MAX;
        let list = plot.render(&params);
        let (marker, _) = list.circles_of(MASS_COLOR).next().unwrap();
        assert!((marker.x - (400.0 - PLOT_PADDING)).abs() < 1e-3);
    }

    #[test]
    fn test_force_plot_zero_amplitude_is_flat() {
        let plot = ForcePlot::new(400.0, 200.0);
        let params = AnimationParameters {
            force_amplitude: 0.0,
            ..Default::default()
        };
        let list = plot.render(&params, 12.0);
        let flat = list.commands().iter().any(|c| match c {
            DrawCommand::Polyline { points, .. } => points.iter().all(|p| p.y == 100.0),
            _ => false,
        });
        assert!(flat);
    }

    #[test]
    fn test_db_bounds_degenerate() {
        assert_eq!(db_bounds(&[]), (-1.0, 0.0));
        assert_eq!(db_bounds(&[(1.0, -20.0), (2.0, -20.0)]), (-20.5, -19.5));
    }
}
