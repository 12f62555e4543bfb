//! Error types for tui-pairs-core.

use thiserror::Error;

/// Configuration errors detected while preparing a board.
///
/// These are caller bugs (a sentence bank that cannot cover a difficulty) and
/// are meant to stop the program at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("{difficulty} board needs {required} fragments but the sentence bank has {available}")]
    InsufficientFragments {
        difficulty: &'static str,
        required: usize,
        available: usize,
    },

    #[error("pair {pair_id} has {count} fragment(s) among the first {selected}, expected 2")]
    UnpairedFragment {
        pair_id: u32,
        count: usize,
        selected: usize,
    },
}
