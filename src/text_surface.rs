//! Headless renderer that writes each frame as plain text.

use std::fmt::Write;

use crate::constants::OUTLINE_BAR_WIDTH;
use crate::deck::Deck;
use crate::errors::Result;
use crate::presentation::Presentation;
use crate::render::{Frame, Renderer};
use crate::slide::Slide;

#[derive(Debug, Default)]
pub struct TextSurface {
    out: String,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.out)
    }

    fn write_frame(&mut self, frame: &Frame) -> std::fmt::Result {
        if !self.out.is_empty() {
            writeln!(self.out)?;
        }
        writeln!(self.out, "# {}", frame.title)?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", frame.description)?;
        if !frame.bullets.is_empty() {
            writeln!(self.out)?;
            for bullet in &frame.bullets {
                writeln!(self.out, "- {bullet}")?;
            }
        }
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{} {} {:.0}%",
            frame.counter,
            progress_bar(frame.progress, OUTLINE_BAR_WIDTH),
            frame.progress_percent()
        )
    }
}

impl Renderer for TextSurface {
    fn render(&mut self, slide: &Slide, index: usize, total: usize) {
        let frame = Frame::project(slide, index, total);
        // Writing into a String cannot fail.
        let _ = self.write_frame(&frame);
    }
}

/// Text of every slide from the zero-based `start` to the end of the deck.
pub fn outline(deck: &Deck, start: usize) -> Result<String> {
    let mut presentation = Presentation::starting_at(deck, TextSurface::new(), start)?;
    while presentation.next() {}
    Ok(presentation.renderer_mut().take())
}

fn progress_bar(progress: f32, width: usize) -> String {
    let filled = ((progress * width as f32).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(1.0, 4), "[####]");
        assert_eq!(progress_bar(0.5, 4), "[##..]");
        assert_eq!(progress_bar(0.1, 4), "[....]");
    }

    #[test]
    fn test_renders_frame_text() {
        let mut surface = TextSurface::new();
        surface.render(&Slide::new("Intro", "Hello there", &["one", "two"]), 0, 2);
        let text = surface.take();
        assert!(text.starts_with("# Intro\n\nHello there\n\n- one\n- two\n"));
        assert!(text.contains("Slide 1 of 2"));
        assert!(text.trim_end().ends_with("50%"));
        assert!(surface.take().is_empty());
    }

    #[test]
    fn test_no_bullet_section_when_empty() {
        let mut surface = TextSurface::new();
        surface.render(&Slide::new("T", "D", &[]), 0, 1);
        let text = surface.take();
        assert!(!text.contains("- "));
        assert!(text.contains("100%"));
    }

    #[test]
    fn test_outline_walks_whole_deck() {
        let deck = Deck::builtin();
        let mut p = Presentation::new(&deck, TextSurface::new());
        while p.next() {}
        let outline = p.renderer_mut().take();
        assert_eq!(outline.matches("\n# ").count() + 1, deck.len());
        assert!(outline.contains("Slide 15 of 15"));
    }

    #[test]
    fn test_outline_from_later_start() {
        let deck = Deck::builtin();
        let text = outline(&deck, 2).unwrap();
        assert!(text.starts_with("# Circuit Switching Essentials\n"));
        assert!(!text.contains("Slide 1 of 15"));
        assert!(!text.contains("Slide 2 of 15"));
        assert_eq!(text.matches("Slide 3 of 15").count(), 1);
        assert!(text.contains("Slide 15 of 15"));
        assert_eq!(text.matches("\n# ").count() + 1, 13);

        assert!(outline(&deck, 15).is_err());
    }
}
