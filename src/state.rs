/// Position within a deck of `total` slides. `current < total` always holds.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PresentationState {
    current: usize,
    total: usize,
}

/// Navigation requests produced by input handling.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
}

impl PresentationState {
    /// Starts on the first slide. `total` must be at least one.
    pub fn new(total: usize) -> Self {
        debug_assert!(total > 0);
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Moves to `target` if it names a slide; otherwise leaves the state alone.
    pub fn move_to(&mut self, target: isize) -> bool {
        match usize::try_from(target) {
            Ok(index) if index < self.total => {
                self.current = index;
                true
            }
            _ => false,
        }
    }
}
