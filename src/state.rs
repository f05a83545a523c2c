//! Selection state and its transition function.
//!
//! Pure layer: no I/O, no terminal. The controller feeds decoded keys
//! through `apply` and renders whatever comes back.

use crate::key::Key;

/// Selection state for one prompt invocation.
///
/// Invariant: `selected` stays within `0..len` for the choice count the
/// transitions were given. `done` is monotonic; once set, the state is
/// terminal and `selected` is the final answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptState {
    pub selected: usize,
    pub done: bool,
}

impl PromptState {
    pub fn new(default_index: usize) -> Self {
        Self {
            selected: default_index,
            done: false,
        }
    }

    /// Apply one key event for a list of `len` choices.
    ///
    /// Up/Down clamp at the ends (no wraparound); Enter completes;
    /// everything else is a no-op. A completed state ignores all keys.
    #[must_use]
    pub fn apply(self, key: Key, len: usize) -> Self {
        if self.done {
            return self;
        }
        match key {
            Key::Up => Self {
                selected: self.selected.saturating_sub(1),
                ..self
            },
            Key::Down => Self {
                selected: (self.selected + 1).min(len.saturating_sub(1)),
                ..self
            },
            Key::Enter => Self { done: true, ..self },
            Key::Interrupt | Key::Other => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_then_enter() {
        let state = PromptState::new(1).apply(Key::Down, 3);
        assert_eq!(state.selected, 2);
        assert!(!state.done);

        let state = state.apply(Key::Enter, 3);
        assert_eq!(state.selected, 2);
        assert!(state.done);
    }

    #[test]
    fn test_up_down_inverse_at_interior_index() {
        let start = PromptState::new(1);
        assert_eq!(start.apply(Key::Up, 3).apply(Key::Down, 3), start);
        assert_eq!(start.apply(Key::Down, 3).apply(Key::Up, 3), start);
    }

    #[test]
    fn test_clamps_at_boundaries() {
        let top = PromptState::new(0);
        assert_eq!(top.apply(Key::Up, 3).selected, 0);
        assert_eq!(top.apply(Key::Up, 3).apply(Key::Up, 3).selected, 0);

        let bottom = PromptState::new(2);
        assert_eq!(bottom.apply(Key::Down, 3).selected, 2);
    }

    #[test]
    fn test_single_choice_never_moves() {
        let state = PromptState::new(0);
        assert_eq!(state.apply(Key::Up, 1).selected, 0);
        assert_eq!(state.apply(Key::Down, 1).selected, 0);
        assert!(state.apply(Key::Enter, 1).done);
    }

    #[test]
    fn test_other_and_interrupt_are_noops() {
        let state = PromptState::new(1);
        assert_eq!(state.apply(Key::Other, 3), state);
        assert_eq!(state.apply(Key::Interrupt, 3), state);
    }

    #[test]
    fn test_done_is_terminal() {
        let done = PromptState::new(1).apply(Key::Enter, 3);
        for key in [Key::Up, Key::Down, Key::Enter, Key::Other, Key::Interrupt] {
            assert_eq!(done.apply(key, 3), done);
        }
    }

    #[test]
    fn test_selected_stays_in_range_under_random_input() {
        // Deterministic LCG so the sequence is reproducible.
        let mut seed: u64 = 0x5eed;
        let len = 5;
        let mut state = PromptState::new(2);
        for _ in 0..10_000 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let key = match seed >> 60 {
                0..=6 => Key::Up,
                7..=13 => Key::Down,
                _ => Key::Other,
            };
            state = state.apply(key, len);
            assert!(state.selected < len);
        }
    }
}
