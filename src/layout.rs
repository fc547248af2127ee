use raylib::prelude::*;
use crate::constants::*;

/// Screen regions for one window size.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub content: Rectangle,
    pub previous_button: Rectangle,
    pub next_button: Rectangle,
    pub counter_center: Vector2,
    pub progress_track: Rectangle,
}

impl Layout {
    pub fn for_screen(width: i32, height: i32) -> Layout {
        let width = width.max(0) as f32;
        let height = height.max(0) as f32;
        let inner_width = (width - 2.0 * MARGIN).max(0.0);

        // Bottom-up: progress track, then the button row, then whatever is left for content
        let progress_track = Rectangle::new(
            MARGIN,
            height - MARGIN * 0.5 - PROGRESS_HEIGHT,
            inner_width,
            PROGRESS_HEIGHT,
        );

        let button_y = progress_track.y - BUTTON_SPACING - BUTTON_HEIGHT;
        let previous_button = Rectangle::new(MARGIN, button_y, BUTTON_WIDTH, BUTTON_HEIGHT);
        let next_button = Rectangle::new(
            (width - MARGIN - BUTTON_WIDTH).max(MARGIN),
            button_y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );
        let counter_center = Vector2::new(width * 0.5, button_y + BUTTON_HEIGHT * 0.5);

        let content = Rectangle::new(
            MARGIN,
            MARGIN,
            inner_width,
            (button_y - BUTTON_SPACING - MARGIN).max(0.0),
        );

        Layout { content, previous_button, next_button, counter_center, progress_track }
    }

    /// Filled part of the progress track for a fraction in (0, 1].
    pub fn progress_fill(&self, progress: f32) -> Rectangle {
        let mut fill = self.progress_track;
        fill.width = self.progress_track.width * progress.clamp(0.0, 1.0);
        fill
    }
}

pub fn line_height(font_size: i32) -> f32 {
    font_size as f32 * LINE_SPACING
}

/// Greedy word wrap using `measure` for line widths. A single word wider than
/// `max_width` gets a line of its own.
pub fn wrap_text(text: &str, font_size: i32, max_width: f32, measure: impl Fn(&str, i32) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure(&candidate, font_size) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_do_not_overlap() {
        let layout = Layout::for_screen(DEFAULT_WIDTH, DEFAULT_HEIGHT);
        assert!(layout.content.y + layout.content.height <= layout.previous_button.y);
        assert!(layout.previous_button.y + layout.previous_button.height <= layout.progress_track.y);
        assert!(layout.previous_button.x + layout.previous_button.width < layout.next_button.x);
        assert!(layout.progress_track.y + layout.progress_track.height <= DEFAULT_HEIGHT as f32);
        assert_eq!(layout.counter_center.x, DEFAULT_WIDTH as f32 / 2.0);
    }

    #[test]
    fn test_tiny_window_has_no_negative_sizes() {
        let layout = Layout::for_screen(10, 10);
        assert!(layout.content.width >= 0.0);
        assert!(layout.content.height >= 0.0);
        assert!(layout.progress_track.width >= 0.0);
    }

    #[test]
    fn test_progress_fill() {
        let layout = Layout::for_screen(DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let full = layout.progress_fill(1.0);
        assert_eq!(full.width, layout.progress_track.width);
        let third = layout.progress_fill(1.0 / 3.0);
        assert!((third.width - layout.progress_track.width / 3.0).abs() < 1e-3);
        assert_eq!(third.x, layout.progress_track.x);
    }

    // Average advance of the default font, as a fraction of font size
    const GLYPH_WIDTH_RATIO: f32 = 0.6;

    fn estimate(text: &str, font_size: i32) -> f32 {
        text.chars().count() as f32 * font_size as f32 * GLYPH_WIDTH_RATIO
    }

    // Capitals, w and m are twice as wide as other glyphs.
    fn proportional(text: &str, font_size: i32) -> f32 {
        let units: f32 = text
            .chars()
            .map(|c| if c.is_ascii_uppercase() || c == 'w' || c == 'm' { 1.0 } else { 0.5 })
            .sum();
        units * font_size as f32
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "Switching refers to directing data from an input port to the correct output port across an interconnected network.";
        let max_width = 400.0;
        let lines = wrap_text(text, BODY_FONT_SIZE, max_width, estimate);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(estimate(line, BODY_FONT_SIZE) <= max_width, "{line:?} too wide");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_follows_measured_width() {
        let text = "WWW MMM www mmm iii lll WWW MMM";
        let max_width = 180.0;
        let lines = wrap_text(text, 20, max_width, proportional);
        for line in &lines {
            assert!(proportional(line, 20) <= max_width, "{line:?} too wide");
        }
        assert_eq!(lines.join(" "), text);
        // Narrow glyphs pack more words per line than wide ones.
        assert_eq!(lines[0], "WWW MMM");
        assert!(lines.iter().any(|l| l.split(' ').count() > 2));
    }

    #[test]
    fn test_wrap_long_word() {
        let lines = wrap_text("a supercalifragilistic b", 20, 60.0, estimate);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_text("   ", 20, 100.0, estimate).is_empty());
    }
}
