//! Finite-element mesh demo geometry
//!
//! The "mesh" is a uniform grid laid inside an inset border. Its cell size
//! shrinks as the density slider goes up, and a synthetic stress field
//! travelling across the nodes picks which ones get highlighted.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Density slider bounds
pub const DENSITY_MIN: u32 = 1;
pub const DENSITY_MAX: u32 = 10;
pub const DENSITY_DEFAULT: u32 = 5;

/// Nodes whose stress exceeds this value are highlighted
pub const STRESS_THRESHOLD: f64 = 0.3;

/// Phase offset per grid index in the stress field
const STRESS_PHASE_STEP: f64 = 0.5;

/// Cell sizing rules for one mesh canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshGeometry {
    /// Cell size at density 0
    pub base_cell: f32,
    /// Lower bound on cell size
    pub min_cell: f32,
    /// Cell size lost per density step
    pub density_factor: f32,
    /// Border inset on every side
    pub margin: f32,
}

impl MeshGeometry {
    /// Landing page canvas (`#feaCanvas`)
    pub const HERO: Self = Self {
        base_cell: 50.0,
        min_cell: 20.0,
        density_factor: 3.0,
        margin: 10.0,
    };

    /// Canvas embedded in the FEA article (`#demoCanvas`)
    pub const DEMO: Self = Self {
        base_cell: 40.0,
        min_cell: 15.0,
        density_factor: 3.0,
        margin: 10.0,
    };

    /// Grid spacing for a density value
    #[inline]
    pub fn cell_size(&self, density: u32) -> f32 {
        (self.base_cell - density as f32 * self.density_factor).max(self.min_cell)
    }
}

/// Slider-bound mesh state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshParams {
    pub density: u32,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            density: DENSITY_DEFAULT,
        }
    }
}

impl MeshParams {
    pub fn new(density: u32) -> Self {
        let mut params = Self::default();
        params.set_density(density);
        params
    }

    /// Store a density, clamped to the slider range. Returns the stored value.
    pub fn set_density(&mut self, density: u32) -> u32 {
        self.density = density.clamp(DENSITY_MIN, DENSITY_MAX);
        self.density
    }

    /// Parse a raw slider value. Unparseable input leaves the state untouched.
    pub fn set_from_input(&mut self, raw: &str) -> Option<u32> {
        let value: f64 = raw.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(self.set_density(value.round().max(0.0) as u32))
    }
}

/// Grid dimensions for a canvas of a given size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshLayout {
    pub cell: f32,
    /// Number of cells horizontally (there are `cols + 1` node columns)
    pub cols: u32,
    /// Number of cells vertically
    pub rows: u32,
    pub margin: f32,
    pub width: f32,
    pub height: f32,
}

impl MeshLayout {
    pub fn new(geometry: &MeshGeometry, density: u32, width: f32, height: f32) -> Self {
        let cell = geometry.cell_size(density);
        let margin = geometry.margin;
        let inner_w = (width - 2.0 * margin).max(0.0);
        let inner_h = (height - 2.0 * margin).max(0.0);
        Self {
            cell,
            cols: (inner_w / cell).floor() as u32,
            rows: (inner_h / cell).floor() as u32,
            margin,
            width,
            height,
        }
    }

    /// Canvas position of node (i, j)
    #[inline]
    pub fn node(&self, i: u32, j: u32) -> Vec2 {
        Vec2::new(
            self.margin + i as f32 * self.cell,
            self.margin + j as f32 * self.cell,
        )
    }

    /// All nodes, column-major
    pub fn nodes(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..=self.cols).flat_map(move |i| (0..=self.rows).map(move |j| (i, j)))
    }

    pub fn node_count(&self) -> usize {
        (self.cols as usize + 1) * (self.rows as usize + 1)
    }

    /// Nodes above the stress threshold at `time` seconds
    pub fn highlighted_nodes(&self, time: f64) -> Vec<(u32, u32)> {
        self.nodes()
            .filter(|&(i, j)| is_highlighted(time, i, j))
            .collect()
    }
}

/// Synthetic stress at grid index (i, j)
#[inline]
pub fn stress(time: f64, i: u32, j: u32) -> f64 {
    (time + i as f64 * STRESS_PHASE_STEP).sin() * (time + j as f64 * STRESS_PHASE_STEP).cos()
}

#[inline]
pub fn is_highlighted(time: f64, i: u32, j: u32) -> bool {
    stress(time, i, j) > STRESS_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size_examples() {
        assert_eq!(MeshGeometry::HERO.cell_size(5), 35.0);
        assert_eq!(MeshGeometry::HERO.cell_size(10), 20.0);
        assert_eq!(MeshGeometry::DEMO.cell_size(1), 37.0);
        assert_eq!(MeshGeometry::DEMO.cell_size(9), 15.0);
    }

    #[test]
    fn test_layout_counts() {
        let layout = MeshLayout::new(&MeshGeometry::DEMO, 5, 400.0, 300.0);
        assert_eq!(layout.cell, 25.0);
        assert_eq!(layout.cols, 15);
        assert_eq!(layout.rows, 11);
        assert_eq!(layout.node_count(), 16 * 12);
        assert_eq!(layout.node(0, 0), Vec2::new(10.0, 10.0));
        assert_eq!(layout.node(2, 1), Vec2::new(60.0, 35.0));
    }

    #[test]
    fn test_layout_degenerate_canvas() {
        let layout = MeshLayout::new(&MeshGeometry::HERO, 5, 5.0, 5.0);
        assert_eq!(layout.cols, 0);
        assert_eq!(layout.rows, 0);
        assert_eq!(layout.node_count(), 1);
    }

    #[test]
    fn test_highlighted_nodes_frozen_time() {
        // 3x3 nodes: cell 20 (hero at max density), inner area 40x40
        let layout = MeshLayout::new(&MeshGeometry::HERO, 10, 60.0, 60.0);
        assert_eq!((layout.cols, layout.rows), (2, 2));

        let hot = layout.highlighted_nodes(0.0);
        assert_eq!(hot, vec![(1, 0), (1, 1), (2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_stress_is_deterministic() {
        let a = stress(12.75, 3, 7);
        let b = stress(12.75, 3, 7);
        assert_eq!(a.to_bits(), b.to_bits());
        assert!(!is_highlighted(0.0, 0, 4));
    }

    #[test]
    fn test_density_input_parsing() {
        let mut params = MeshParams::default();
        assert_eq!(params.set_from_input("7"), Some(7));
        assert_eq!(params.set_from_input(" 42 "), Some(DENSITY_MAX));
        assert_eq!(params.set_from_input("0"), Some(DENSITY_MIN));
        assert_eq!(params.set_from_input("abc"), None);
        assert_eq!(params.density, DENSITY_MIN);
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cell_size_non_increasing(d in DENSITY_MIN..DENSITY_MAX) {
            for geometry in [MeshGeometry::HERO, MeshGeometry::DEMO] {
                prop_assert!(geometry.cell_size(d + 1) <= geometry.cell_size(d));
            }
        }

        #[test]
        fn cell_size_bounded_below(d in 0u32..1000) {
            for geometry in [MeshGeometry::HERO, MeshGeometry::DEMO] {
                prop_assert!(geometry.cell_size(d) >= geometry.min_cell);
            }
        }

        #[test]
        fn nodes_stay_inside_border(
            d in DENSITY_MIN..=DENSITY_MAX,
            w in 40.0f32..1200.0,
            h in 40.0f32..900.0,
        ) {
            let layout = MeshLayout::new(&MeshGeometry::DEMO, d, w, h);
            let far = layout.node(layout.cols, layout.rows);
            prop_assert!(far.x <= w - layout.margin + 1e-3);
            prop_assert!(far.y <= h - layout.margin + 1e-3);
        }
    }
}
