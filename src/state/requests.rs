//! Request Generations
//!
//! Latest-wins guard for overlapping fetches. Each view tags its in-flight
//! requests with a monotonically increasing generation and drops completions
//! whose tag no longer matches, so a superseded request can never overwrite
//! the result of a newer one.

use leptos::*;

/// Per-view monotonic request counter.
#[derive(Clone, Copy)]
pub struct Generation {
    current: RwSignal<u64>,
}

impl Generation {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(0),
        }
    }

    /// Start a new request generation, superseding all in-flight ones.
    pub fn begin(&self) -> u64 {
        self.current.update(|g| *g += 1);
        self.current.get_untracked()
    }

    /// Whether a completion tagged with `tag` may still be applied.
    pub fn is_current(&self, tag: u64) -> bool {
        self.current.get_untracked() == tag
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_generation_wins() {
        let runtime = create_runtime();

        let generation = Generation::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));

        runtime.dispose();
    }

    #[test]
    fn generations_are_strictly_increasing() {
        let runtime = create_runtime();

        let generation = Generation::new();
        let tags: Vec<u64> = (0..4).map(|_| generation.begin()).collect();
        assert_eq!(tags, vec![1, 2, 3, 4]);

        runtime.dispose();
    }
}
