//! Sentence bank - the fixed list of split sentences dealt onto the board.
//!
//! Fragments are stored pair by pair, so taking the first `pair_count * 2`
//! entries always yields complete pairs.

use crate::error::BoardError;
use crate::types::{Difficulty, Fragment};

/// Built-in sentences (simple present, then present continuous).
pub const BUILTIN_FRAGMENTS: [Fragment; 24] = [
    Fragment::new("She works", 1),
    Fragment::new("at a technology company.", 1),
    Fragment::new("They play soccer", 2),
    Fragment::new("in the park every Sunday.", 2),
    Fragment::new("He doesn't like", 3),
    Fragment::new("to wake up early.", 3),
    Fragment::new("We don't watch", 4),
    Fragment::new("TV during the week.", 4),
    Fragment::new("Do you speak", 5),
    Fragment::new("French?", 5),
    Fragment::new("Does your brother live", 6),
    Fragment::new("in Rio de Janeiro?", 6),
    Fragment::new("She is working", 7),
    Fragment::new("on an important project right now.", 7),
    Fragment::new("They are playing", 8),
    Fragment::new("soccer at this moment.", 8),
    Fragment::new("He isn't listening", 9),
    Fragment::new("to music.", 9),
    Fragment::new("We aren't watching", 10),
    Fragment::new("a movie tonight.", 10),
    Fragment::new("Are you studying", 11),
    Fragment::new("for the test?", 11),
    Fragment::new("Is your brother traveling", 12),
    Fragment::new("this month?", 12),
];

/// Read-only, ordered source of fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceBank {
    fragments: Vec<Fragment>,
}

impl SentenceBank {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// The bank shipped with the game.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_FRAGMENTS.to_vec())
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Take the leading fragments needed for `difficulty`.
    ///
    /// Fails when the bank is too short or when the selection does not hold
    /// every pair id exactly twice.
    pub fn select(&self, difficulty: Difficulty) -> Result<&[Fragment], BoardError> {
        select_fragments(&self.fragments, difficulty)
    }

    /// Check that every difficulty preset can be dealt from this bank.
    pub fn validate(&self) -> Result<(), BoardError> {
        for difficulty in Difficulty::ALL {
            self.select(difficulty)?;
        }
        Ok(())
    }
}

impl Default for SentenceBank {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Truncate `fragments` to the cards needed for `difficulty` and verify the pairing.
pub fn select_fragments(
    fragments: &[Fragment],
    difficulty: Difficulty,
) -> Result<&[Fragment], BoardError> {
    let required = difficulty.card_count();
    if fragments.len() < required {
        return Err(BoardError::InsufficientFragments {
            difficulty: difficulty.as_str(),
            required,
            available: fragments.len(),
        });
    }

    let selected = &fragments[..required];
    for fragment in selected {
        let count = selected
            .iter()
            .filter(|f| f.pair_id == fragment.pair_id)
            .count();
        if count != 2 {
            return Err(BoardError::UnpairedFragment {
                pair_id: fragment.pair_id,
                count,
                selected: required,
            });
        }
    }
    Ok(selected)
}
