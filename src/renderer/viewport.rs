//! Game-space to screen-space mapping
//!
//! The court is drawn inside a fixed pixel border; whatever is left of the
//! window is stretched to fit the logical court on each axis independently.

use super::canvas::PixelRect;
use crate::consts::*;
use crate::sim::Bounds;

/// Where the court sits on screen and how big a pixel is in game units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub screen_width: i32,
    pub screen_height: i32,
    pub draw_x: i32,
    pub draw_y: i32,
    pub draw_width: i32,
    pub draw_height: i32,
    pub units_per_pixel_x: f64,
    pub units_per_pixel_y: f64,
}

impl Viewport {
    /// Layout for a drawing surface of the given size.
    ///
    /// Surfaces smaller than the border still get a one-pixel court so the
    /// scale stays finite.
    pub fn fit(screen_width: u32, screen_height: u32) -> Self {
        let screen_width = screen_width.min(i32::MAX as u32) as i32;
        let screen_height = screen_height.min(i32::MAX as u32) as i32;
        let draw_width = (screen_width - (BORDER_LEFT + BORDER_RIGHT)).max(1);
        let draw_height = (screen_height - (BORDER_TOP + BORDER_BOTTOM)).max(1);

        Self {
            screen_width,
            screen_height,
            draw_x: BORDER_LEFT,
            draw_y: BORDER_TOP,
            draw_width,
            draw_height,
            units_per_pixel_x: GAME_WIDTH / draw_width as f64,
            units_per_pixel_y: GAME_HEIGHT / draw_height as f64,
        }
    }

    /// Pixel position of a game-space point
    pub fn point_to_screen(&self, x: f64, y: f64) -> (i32, i32) {
        (
            self.draw_x + (x / self.units_per_pixel_x).round() as i32,
            self.draw_y + (y / self.units_per_pixel_y).round() as i32,
        )
    }

    /// Pixel rectangle covering a game-space box (never thinner than a pixel)
    pub fn to_screen(&self, bounds: &Bounds) -> PixelRect {
        let (x, y) = self.point_to_screen(bounds.x1(), bounds.y1());
        PixelRect {
            x,
            y,
            w: ((bounds.width() / self.units_per_pixel_x).round() as i32).max(1),
            h: ((bounds.height() / self.units_per_pixel_y).round() as i32).max(1),
        }
    }

    /// Outline of the whole court
    pub fn court_rect(&self) -> PixelRect {
        PixelRect {
            x: self.draw_x,
            y: self.draw_y,
            w: self.draw_width,
            h: self.draw_height,
        }
    }
}
