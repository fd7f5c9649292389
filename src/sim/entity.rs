//! Shared entity geometry
//!
//! Every simulated object is an axis-aligned rectangle in game space. The
//! rectangle keeps its size fixed for its whole lifetime; all mutation goes
//! through methods that restore `x2 = x1 + width` and `y2 = y1 + height`.

use glam::DVec2;

use super::ball::Ball;
use super::paddle::Paddle;

/// Axis-aligned bounding box in game-space units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    width: f64,
    height: f64,
}

impl Bounds {
    pub fn new(x1: f64, y1: f64, width: f64, height: f64) -> Self {
        Self {
            x1,
            y1,
            x2: x1 + width,
            y2: y1 + height,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn centered(center: DVec2, width: f64, height: f64) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    #[inline]
    pub fn x1(&self) -> f64 {
        self.x1
    }

    #[inline]
    pub fn y1(&self) -> f64 {
        self.y1
    }

    #[inline]
    pub fn x2(&self) -> f64 {
        self.x2
    }

    #[inline]
    pub fn y2(&self) -> f64 {
        self.y2
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x1 + self.width / 2.0, self.y1 + self.height / 2.0)
    }

    /// Move the top-left corner, keeping the size
    pub fn set_pos(&mut self, x1: f64, y1: f64) {
        self.x1 = x1;
        self.y1 = y1;
        self.x2 = x1 + self.width;
        self.y2 = y1 + self.height;
    }

    pub fn set_x1(&mut self, x1: f64) {
        self.set_pos(x1, self.y1);
    }

    pub fn set_y1(&mut self, y1: f64) {
        self.set_pos(self.x1, y1);
    }

    pub fn translate(&mut self, delta: DVec2) {
        self.set_pos(self.x1 + delta.x, self.y1 + delta.y);
    }

    /// Strict overlap on the vertical axis (touching edges do not count)
    #[inline]
    pub fn overlaps_vertically(&self, other: &Bounds) -> bool {
        self.y1 < other.y2 && self.y2 > other.y1
    }

    /// Clamp vertically into `[0, limit]`.
    ///
    /// Returns `true` when the rectangle had crossed the top or bottom edge.
    pub fn clamp_vertical(&mut self, limit: f64) -> bool {
        if self.y1 < 0.0 {
            self.set_y1(0.0);
            true
        } else if self.y2 > limit {
            self.set_y1(limit - self.height);
            true
        } else {
            false
        }
    }
}

/// Which paddle, and therefore which end of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Paddle index: 0 for the left paddle, 1 for the right
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Side::Left),
            1 => Some(Side::Right),
            _ => None,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Stable slot of a ball in the simulation's ball arena.
///
/// A slot is never removed; scoring overwrites the ball in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BallHandle(pub usize);

impl BallHandle {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Common capability of everything on the court
pub trait Entity {
    fn bounds(&self) -> &Bounds;
}

/// Borrowed view of one entity, yielded in draw order
#[derive(Debug, Clone, Copy)]
pub enum EntityView<'a> {
    Paddle(&'a Paddle),
    Ball(&'a Ball),
}

impl Entity for EntityView<'_> {
    fn bounds(&self) -> &Bounds {
        match self {
            EntityView::Paddle(p) => p.bounds(),
            EntityView::Ball(b) => b.bounds(),
        }
    }
}
