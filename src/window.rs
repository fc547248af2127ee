use raylib::prelude::*;

use crate::constants::*;
use crate::layout::{line_height, wrap_text, Layout};
use crate::render::{Frame, Renderer};
use crate::slide::Slide;

pub const BACKGROUND: Color = Color::new(18, 24, 38, 255);
const TITLE_COLOR: Color = Color::new(240, 244, 252, 255);
const BODY_COLOR: Color = Color::new(196, 204, 222, 255);
const ACCENT: Color = Color::new(88, 166, 255, 255);
const TRACK_COLOR: Color = Color::new(44, 54, 76, 255);
const BUTTON_COLOR: Color = Color::new(52, 84, 140, 255);
const BUTTON_DISABLED: Color = Color::new(36, 44, 62, 255);
const LABEL_DISABLED: Color = Color::new(96, 106, 128, 255);

/// Retained surface: `render` stores the frame, `draw` paints it every tick.
#[derive(Debug, Default)]
pub struct WindowSurface {
    frame: Option<Frame>,
}

impl Renderer for WindowSurface {
    fn render(&mut self, slide: &Slide, index: usize, total: usize) {
        self.frame = Some(Frame::project(slide, index, total));
    }
}

impl WindowSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, layout: &Layout) {
        let Some(frame) = &self.frame else {
            return;
        };

        let content = layout.content;
        let bottom = content.y + content.height;
        let x = content.x as i32;
        let mut y = content.y;

        for line in wrap_text(&frame.title, TITLE_FONT_SIZE, content.width, |s, size| measure(d, s, size)) {
            y = draw_line(d, &line, x, y, bottom, TITLE_FONT_SIZE, TITLE_COLOR);
        }
        y += SECTION_GAP;

        for line in wrap_text(&frame.description, BODY_FONT_SIZE, content.width, |s, size| measure(d, s, size)) {
            y = draw_line(d, &line, x, y, bottom, BODY_FONT_SIZE, BODY_COLOR);
        }
        y += SECTION_GAP;

        let bullet_width = (content.width - BULLET_INDENT).max(0.0);
        for bullet in &frame.bullets {
            if y + line_height(BULLET_FONT_SIZE) > bottom {
                break;
            }
            let dot_y = y + BULLET_FONT_SIZE as f32 * 0.5;
            d.draw_circle(x + (BULLET_RADIUS as i32), dot_y as i32, BULLET_RADIUS, ACCENT);
            for line in wrap_text(bullet, BULLET_FONT_SIZE, bullet_width, |s, size| measure(d, s, size)) {
                y = draw_line(d, &line, x + BULLET_INDENT as i32, y, bottom, BULLET_FONT_SIZE, BODY_COLOR);
            }
            y += BULLET_FONT_SIZE as f32 * 0.4;
        }

        draw_button(d, layout.previous_button, "< Prev", frame.previous_enabled);
        draw_button(d, layout.next_button, "Next >", frame.next_enabled);

        let counter_x = layout.counter_center.x - measure(d, &frame.counter, COUNTER_FONT_SIZE) * 0.5;
        let counter_y = layout.counter_center.y - COUNTER_FONT_SIZE as f32 * 0.5;
        d.draw_text(&frame.counter, counter_x as i32, counter_y as i32, COUNTER_FONT_SIZE, BODY_COLOR);

        d.draw_rectangle_rec(layout.progress_track, TRACK_COLOR);
        d.draw_rectangle_rec(layout.progress_fill(frame.progress), ACCENT);
    }
}

// Width of `text` in raylib's default font, as drawn by `draw_text`.
fn measure(d: &RaylibDrawHandle, text: &str, font_size: i32) -> f32 {
    d.measure_text(text, font_size) as f32
}

// Draws one line if it fits above `bottom` and returns the next baseline.
fn draw_line(d: &mut RaylibDrawHandle, text: &str, x: i32, y: f32, bottom: f32, font_size: i32, color: Color) -> f32 {
    let height = line_height(font_size);
    if y + font_size as f32 <= bottom {
        d.draw_text(text, x, y as i32, font_size, color);
    }
    y + height
}

fn draw_button(d: &mut RaylibDrawHandle, rec: Rectangle, label: &str, enabled: bool) {
    let (fill, text_color) = if enabled {
        (BUTTON_COLOR, TITLE_COLOR)
    } else {
        (BUTTON_DISABLED, LABEL_DISABLED)
    };
    d.draw_rectangle_rounded(rec, 0.3, 8, fill);

    let label_x = rec.x + (rec.width - measure(d, label, BUTTON_FONT_SIZE)) * 0.5;
    let label_y = rec.y + (rec.height - BUTTON_FONT_SIZE as f32) * 0.5;
    d.draw_text(label, label_x as i32, label_y as i32, BUTTON_FONT_SIZE, text_color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_keeps_latest_frame() {
        let mut surface = WindowSurface::new();
        assert!(surface.frame().is_none());

        surface.render(&Slide::new("One", "First", &[]), 0, 2);
        surface.render(&Slide::new("Two", "Second", &["x"]), 1, 2);

        let frame = surface.frame().unwrap();
        assert_eq!(frame.title, "Two");
        assert_eq!(frame.counter, "Slide 2 of 2");
        assert!(!frame.next_enabled);
    }
}
