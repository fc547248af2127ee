use crate::slide::Slide;

/// Display surface the presentation draws onto.
pub trait Renderer {
    fn render(&mut self, slide: &Slide, index: usize, total: usize);
}

/// Everything a surface shows for one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub title: String,
    pub description: String,
    pub bullets: Vec<String>,
    pub counter: String,
    /// Fraction of the deck reached, in (0, 1].
    pub progress: f32,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl Frame {
    pub fn project(slide: &Slide, index: usize, total: usize) -> Self {
        Self {
            title: slide.title.clone(),
            description: slide.description.clone(),
            bullets: slide.bullets.clone(),
            counter: format!("Slide {} of {}", index + 1, total),
            progress: (index + 1) as f32 / total as f32,
            previous_enabled: index > 0,
            next_enabled: index + 1 < total,
        }
    }

    pub fn progress_percent(&self) -> f32 {
        self.progress * 100.0
    }
}
