//! Rectangular body geometry
//!
//! Every moving entity (paddle or ball) is an axis-aligned rectangle with a
//! top-left position, a size, and a per-frame velocity, all in screen pixel
//! coordinates (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp_span;

/// A moving rectangular entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner (pixels)
    pub pos: Vec2,
    /// Width and height (pixels)
    pub size: Vec2,
    /// Velocity (pixels per frame)
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    /// Left edge x coordinate
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    /// Right edge x coordinate
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Top edge y coordinate
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    /// Bottom edge y coordinate
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point of the rectangle
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Axis-aligned intersection test (shared edges do not count)
    pub fn intersects(&self, other: &Body) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Rectangle shared with another body, if any: `(origin, size)`
    pub fn overlap_rect(&self, other: &Body) -> Option<(Vec2, Vec2)> {
        let x0 = self.left().max(other.left());
        let y0 = self.top().max(other.top());
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        if x0 < x1 && y0 < y1 {
            Some((Vec2::new(x0, y0), Vec2::new(x1 - x0, y1 - y0)))
        } else {
            None
        }
    }

    /// Clamp the rectangle so it lies fully within `[0, bounds]` on both axes
    pub fn clamp_to(&mut self, bounds: Vec2) {
        self.pos.x = clamp_span(self.pos.x, self.size.x, bounds.x);
        self.pos.y = clamp_span(self.pos.y, self.size.y, bounds.y);
    }
}
