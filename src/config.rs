//! Command-line configuration.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use tui_pairs::core::Timing;
use tui_pairs::term::SoundMode;
use tui_pairs::types::{Difficulty, FLIP_DELAY_MS, PEEK_DURATION_MS};

/// Longest delay accepted for the mismatch flip-back and the peek.
const MAX_DELAY_MS: u64 = 60_000;

/// Command-line arguments for tui-pairs
#[derive(Parser, Debug)]
#[command(name = "tui-pairs")]
#[command(about = "Match the two halves of each sentence, in your terminal")]
#[command(version)]
pub struct Args {
    /// Skip the menu and start at this difficulty (easy, normal, hard)
    #[arg(short, long, env = "PAIRS_DIFFICULTY")]
    pub difficulty: Option<String>,

    /// Shuffle seed; the same seed deals the same boards
    #[arg(short, long, env = "PAIRS_SEED")]
    pub seed: Option<u64>,

    /// How long a mismatched pair stays visible
    #[arg(long, default_value_t = FLIP_DELAY_MS, env = "PAIRS_FLIP_DELAY_MS")]
    pub flip_delay_ms: u64,

    /// How long the one-time peek reveals the board
    #[arg(long, default_value_t = PEEK_DURATION_MS, env = "PAIRS_PEEK_MS")]
    pub peek_ms: u64,

    /// Sound cues: bell, files, or off
    #[arg(long, default_value = "bell", env = "PAIRS_SOUND")]
    pub sound: String,

    /// Directory holding flip.wav, match.wav and win.wav
    #[arg(long, default_value = "assets/sounds", env = "PAIRS_SOUND_DIR")]
    pub sound_dir: PathBuf,

    /// Command used to play a sound file; the file path is appended
    #[arg(long, default_value = "aplay -q", env = "PAIRS_PLAYER")]
    pub player: String,

    /// Log file (the terminal itself is used for the game)
    #[arg(long, default_value = "tui-pairs.log", env = "PAIRS_LOG_FILE")]
    pub log_file: PathBuf,
}

/// Validated settings the game runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub difficulty: Option<Difficulty>,
    pub seed: Option<u64>,
    pub timing: Timing,
    pub sound: SoundMode,
    pub sound_dir: PathBuf,
    pub player: Vec<String>,
    pub log_file: PathBuf,
}

impl Args {
    pub fn into_config(self) -> Result<GameConfig> {
        let difficulty = match self.difficulty.as_deref() {
            None => None,
            Some(s) => match Difficulty::from_str(s) {
                Some(d) => Some(d),
                None => bail!("unknown difficulty {s:?} (expected easy, normal or hard)"),
            },
        };

        let Some(sound) = SoundMode::from_str(&self.sound) else {
            bail!("unknown sound mode {:?} (expected bell, files or off)", self.sound);
        };

        if self.flip_delay_ms == 0 || self.flip_delay_ms > MAX_DELAY_MS {
            bail!(
                "--flip-delay-ms must be between 1 and {MAX_DELAY_MS}, got {}",
                self.flip_delay_ms
            );
        }
        if self.peek_ms == 0 || self.peek_ms > MAX_DELAY_MS {
            bail!(
                "--peek-ms must be between 1 and {MAX_DELAY_MS}, got {}",
                self.peek_ms
            );
        }

        let player: Vec<String> = self.player.split_whitespace().map(String::from).collect();
        if sound == SoundMode::Files && player.is_empty() {
            bail!("--player must name a program when --sound files is used");
        }

        Ok(GameConfig {
            difficulty,
            seed: self.seed,
            timing: Timing {
                flip_delay_ms: self.flip_delay_ms,
                peek_duration_ms: self.peek_ms,
            },
            sound,
            sound_dir: self.sound_dir,
            player,
            log_file: self.log_file,
        })
    }
}
