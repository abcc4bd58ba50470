//! FEA mesh scene
//!
//! Draws the inset border, the grid, a marker on every node, and enlarged
//! markers where the travelling stress field is above threshold.

use glam::Vec2;

use super::commands::{DrawList, Stroke};
use crate::sim::mesh::{MeshGeometry, MeshLayout, MeshParams};

/// Colors and marker sizes for one mesh canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStyle {
    pub geometry: MeshGeometry,
    pub border: Stroke,
    pub grid: Stroke,
    pub node_color: &'static str,
    pub node_radius: f32,
    pub stress_color: &'static str,
    pub stress_radius: f32,
}

impl MeshStyle {
    /// Light-on-dark landing page canvas
    pub const HERO: Self = Self {
        geometry: MeshGeometry::HERO,
        border: Stroke::new("#ffffff", 2.0),
        grid: Stroke::new("rgba(255, 255, 255, 0.3)", 1.0),
        node_color: "#2563eb",
        node_radius: 2.0,
        stress_color: "rgba(255, 107, 107, 0.6)",
        stress_radius: 4.0,
    };

    /// Dark-on-light article canvas
    pub const DEMO: Self = Self {
        geometry: MeshGeometry::DEMO,
        border: Stroke::new("#2563eb", 2.0),
        grid: Stroke::new("#e5e7eb", 1.0),
        node_color: "#2563eb",
        node_radius: 2.0,
        stress_color: "rgba(239, 68, 68, 0.6)",
        stress_radius: 3.0,
    };
}

/// Everything needed to draw one mesh frame
#[derive(Debug, Clone, Copy)]
pub struct MeshScene {
    pub params: MeshParams,
    pub style: MeshStyle,
    pub size: Vec2,
}

impl MeshScene {
    pub fn new(style: MeshStyle, width: f32, height: f32) -> Self {
        Self {
            params: MeshParams::default(),
            style,
            size: Vec2::new(width, height),
        }
    }

    pub fn layout(&self) -> MeshLayout {
        MeshLayout::new(&self.style.geometry, self.params.density, self.size.x, self.size.y)
    }

    /// Build the frame at wall-clock `time` (seconds)
    pub fn render(&self, time: f64) -> DrawList {
        let layout = self.layout();
        let style = &self.style;
        let margin = layout.margin;
        let far = self.size - Vec2::splat(margin);

        let mut list = DrawList::with_capacity(4 + layout.node_count() * 2);
        list.clear(self.size);
        list.stroke_rect(Vec2::splat(margin), self.size - Vec2::splat(2.0 * margin), style.border);

        for i in 0..=layout.cols {
            let x = layout.node(i, 0).x;
            list.line(Vec2::new(x, margin), Vec2::new(x, far.y), style.grid);
        }
        for j in 0..=layout.rows {
            let y = layout.node(0, j).y;
            list.line(Vec2::new(margin, y), Vec2::new(far.x, y), style.grid);
        }

        for (i, j) in layout.nodes() {
            list.fill_circle(layout.node(i, j), style.node_radius, style.node_color);
        }

        for (i, j) in layout.highlighted_nodes(time) {
            list.fill_circle(layout.node(i, j), style.stress_radius, style.stress_color);
        }

        list
    }
}
