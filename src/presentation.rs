use tracing::{debug, trace};

use crate::deck::Deck;
use crate::errors::{DeckError, Result};
use crate::render::Renderer;
use crate::state::{Command, PresentationState};

/// Owns the current slide position and pushes every change to its renderer.
pub struct Presentation<'d, R: Renderer> {
    deck: &'d Deck,
    state: PresentationState,
    renderer: R,
}

impl<'d, R: Renderer> Presentation<'d, R> {
    /// Opens the deck on its first slide and renders it.
    pub fn new(deck: &'d Deck, renderer: R) -> Self {
        Self::open(deck, renderer, PresentationState::new(deck.len()))
    }

    /// Opens the deck on the zero-based `index`, failing if no such slide exists.
    /// Only the start slide is rendered.
    pub fn starting_at(deck: &'d Deck, renderer: R, index: usize) -> Result<Self> {
        let mut state = PresentationState::new(deck.len());
        if !state.move_to(index as isize) {
            return Err(DeckError::StartOutOfRange {
                requested: index.saturating_add(1),
                total: deck.len(),
            });
        }
        Ok(Self::open(deck, renderer, state))
    }

    fn open(deck: &'d Deck, renderer: R, state: PresentationState) -> Self {
        let mut presentation = Self { deck, state, renderer };
        presentation.render();
        presentation
    }

    /// Jumps to `target`. Indices outside the deck are ignored and nothing is rendered.
    pub fn go_to(&mut self, target: isize) -> bool {
        if !self.state.move_to(target) {
            trace!(target, total = self.deck.len(), "Navigation ignored");
            return false;
        }
        debug!(index = self.state.current(), "Showing slide");
        self.render();
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.position() + 1)
    }

    pub fn previous(&mut self) -> bool {
        self.go_to(self.position() - 1)
    }

    pub fn go_to_first(&mut self) -> bool {
        self.go_to(0)
    }

    pub fn go_to_last(&mut self) -> bool {
        self.go_to(self.deck.len() as isize - 1)
    }

    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::First => self.go_to_first(),
            Command::Last => self.go_to_last(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.state.current()
    }

    pub fn deck(&self) -> &'d Deck {
        self.deck
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    // Signed so that stepping back from the first slide yields -1.
    fn position(&self) -> isize {
        self.state.current() as isize
    }

    fn render(&mut self) {
        let index = self.state.current();
        self.renderer.render(self.deck.get(index), index, self.deck.len());
    }
}
