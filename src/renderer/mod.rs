//! Presentation layer
//!
//! Maps the game-space court onto a pixel surface. Drawing goes through the
//! [`Canvas`] trait so the simulation never depends on a real window.

pub mod canvas;
pub mod text;
pub mod viewport;

pub use canvas::{AsciiCanvas, Canvas, PixelRect};
pub use text::{string_height, string_width};
pub use viewport::Viewport;

use crate::consts::*;
use crate::sim::{Entity, GameState};

/// Draw the score line, the court outline and every entity
pub fn draw_game<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    let vp = state.viewport();
    let (left, right) = state.scores();
    let left = left.to_string();
    let right = right.to_string();

    canvas.draw_text(&left, BORDER_LEFT, SCORE_Y, SCORE_SIZE);
    let right_x = vp.screen_width - BORDER_RIGHT - string_width(&right, SCORE_SIZE);
    canvas.draw_text(&right, right_x, SCORE_Y, SCORE_SIZE);

    canvas.stroke_rect(vp.court_rect());

    for entity in state.entities() {
        canvas.fill_rect(vp.to_screen(entity.bounds()));
    }
}

/// Draw a line of text centered horizontally with its top at `y`
pub fn draw_centered_text<C: Canvas + ?Sized>(
    canvas: &mut C,
    screen_width: i32,
    text: &str,
    y: i32,
    size: i32,
) {
    let x = screen_width / 2 - string_width(text, size) / 2;
    canvas.draw_text(text, x, y, size);
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::sim::{Controller, Side};

    /// Records every call for inspection
    #[derive(Default)]
    struct Recorder {
        fills: Vec<PixelRect>,
        strokes: Vec<PixelRect>,
        texts: Vec<(String, i32, i32, i32)>,
    }

    impl Canvas for Recorder {
        fn fill_rect(&mut self, rect: PixelRect) {
            self.fills.push(rect);
        }

        fn stroke_rect(&mut self, rect: PixelRect) {
            self.strokes.push(rect);
        }

        fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32) {
            self.texts.push((text.to_string(), x, y, size));
        }
    }

    #[test]
    fn test_draw_game() {
        let mut state = GameState::new(
            NonZeroUsize::new(2).unwrap(),
            Controller::Manual,
            Controller::Manual,
            1,
        );
        for _ in 0..12 {
            state.paddle_mut(Side::Right).add_point();
        }
        state.size_changed(1280, 720);

        let mut rec = Recorder::default();
        draw_game(&state, &mut rec);

        assert_eq!(rec.texts[0], ("0".to_string(), 100, 50, 12));
        // "12" is 120 px wide at size 12
        assert_eq!(rec.texts[1], ("12".to_string(), 1280 - 100 - 120, 50, 12));
        assert_eq!(rec.strokes, vec![PixelRect { x: 100, y: 150, w: 1080, h: 520 }]);
        assert_eq!(rec.fills.len(), 4);
        assert_eq!(rec.fills[0], PixelRect { x: 100, y: 346, w: 32, h: 128 });
        assert_eq!(rec.fills[1], PixelRect { x: 1148, y: 346, w: 32, h: 128 });
        assert_eq!(rec.fills[2], PixelRect { x: 624, y: 394, w: 32, h: 32 });
    }

    #[test]
    fn test_draw_centered_text() {
        let mut rec = Recorder::default();
        draw_centered_text(&mut rec, 1280, "loading", 300, 8);
        // 7 glyphs * 5 * 8 = 280 px
        assert_eq!(rec.texts[0], ("loading".to_string(), 640 - 140, 300, 8));
    }
}
