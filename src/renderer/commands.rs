//! Backend-independent 2D draw commands
//!
//! Scenes build a [`DrawList`]; the canvas backend replays it. Keeping the
//! list as plain data lets the geometry be asserted without a browser.

use glam::Vec2;

/// Stroke settings for lines and outlines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: &'static str, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the full surface
    Clear { size: Vec2 },
    StrokeRect { min: Vec2, size: Vec2, stroke: Stroke },
    FillRect { min: Vec2, size: Vec2, color: &'static str },
    Line { from: Vec2, to: Vec2, stroke: Stroke },
    /// Open polyline through `points` in order
    Polyline { points: Vec<Vec2>, stroke: Stroke },
    FillCircle { center: Vec2, radius: f32, color: &'static str },
    Text { pos: Vec2, text: String, font: &'static str, color: &'static str },
}

/// Ordered draw commands for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self, size: Vec2) {
        self.commands.push(DrawCommand::Clear { size });
    }

    pub fn stroke_rect(&mut self, min: Vec2, size: Vec2, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeRect { min, size, stroke });
    }

    pub fn fill_rect(&mut self, min: Vec2, size: Vec2, color: &'static str) {
        self.commands.push(DrawCommand::FillRect { min, size, color });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    /// Polylines with fewer than two points draw nothing and are dropped
    pub fn polyline(&mut self, points: Vec<Vec2>, stroke: Stroke) {
        if points.len() >= 2 {
            self.commands.push(DrawCommand::Polyline { points, stroke });
        }
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: &'static str) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    pub fn text(&mut self, pos: Vec2, text: impl Into<String>, font: &'static str, color: &'static str) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.into(),
            font,
            color,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Filled circles of a given color, in draw order
    pub fn circles_of(&self, color: &str) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        let color = color.to_owned();
        self.commands.iter().filter_map(move |cmd| match cmd {
            DrawCommand::FillCircle {
                center,
                radius,
                color: c,
            } if *c == color => Some((*center, *radius)),
            _ => None,
        })
    }

    /// Text strings, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl IntoIterator for DrawList {
    type Item = DrawCommand;
    type IntoIter = std::vec::IntoIter<DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_polyline_dropped() {
        let mut list = DrawList::new();
        list.polyline(vec![Vec2::ZERO], Stroke::new("#000", 1.0));
        assert!(list.is_empty());
        list.polyline(vec![Vec2::ZERO, Vec2::ONE], Stroke::new("#000", 1.0));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_circle_filter() {
        let mut list = DrawList::new();
        list.fill_circle(Vec2::new(1.0, 2.0), 2.0, "red");
        list.fill_circle(Vec2::new(3.0, 4.0), 4.0, "blue");
        list.fill_circle(Vec2::new(5.0, 6.0), 2.0, "red");
        let red: Vec<_> = list.circles_of("red").collect();
        assert_eq!(red, vec![(Vec2::new(1.0, 2.0), 2.0), (Vec2::new(5.0, 6.0), 2.0)]);
    }
}
