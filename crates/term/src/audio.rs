//! Sound cues.
//!
//! The game never blocks on audio and never fails because of it. A cue is
//! either the terminal bell, a sound file handed to an external player
//! process, or nothing.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use tracing::{debug, warn};

use crate::types::Cue;

/// Anything that can react to a gameplay cue.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCues;

impl CuePlayer for NullCues {
    fn play(&mut self, _cue: Cue) {}
}

/// What a single cue sounds like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CueSound {
    Silent,
    Bell,
    File(PathBuf),
}

/// Which sound source the game uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoundMode {
    #[default]
    Bell,
    Files,
    Off,
}

impl SoundMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bell" => Some(SoundMode::Bell),
            "files" | "file" => Some(SoundMode::Files),
            "off" | "none" => Some(SoundMode::Off),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundMode::Bell => "bell",
            SoundMode::Files => "files",
            SoundMode::Off => "off",
        }
    }
}

const CUES: [Cue; 3] = [Cue::Flip, Cue::Match, Cue::Win];

fn slot(cue: Cue) -> usize {
    match cue {
        Cue::Flip => 0,
        Cue::Match => 1,
        Cue::Win => 2,
    }
}

/// Plays cues through the bell writer `W` or an external player command.
pub struct AudioCues<W: Write> {
    sounds: [CueSound; 3],
    player: Vec<String>,
    player_failed: bool,
    children: Vec<Child>,
    bell: W,
}

impl<W: Write> AudioCues<W> {
    pub fn new(sounds: [CueSound; 3], player: Vec<String>, bell: W) -> Self {
        Self {
            sounds,
            player,
            player_failed: false,
            children: Vec::new(),
            bell,
        }
    }

    /// Every cue rings the bell.
    pub fn bell(bell: W) -> Self {
        Self::new(
            [CueSound::Bell, CueSound::Bell, CueSound::Bell],
            Vec::new(),
            bell,
        )
    }

    /// Every cue is silent.
    pub fn silent(bell: W) -> Self {
        Self::new(
            [CueSound::Silent, CueSound::Silent, CueSound::Silent],
            Vec::new(),
            bell,
        )
    }

    /// Look up `<dir>/<cue>.wav` for each cue; missing files become silent.
    ///
    /// `player` is the command line (program and leading arguments) the file
    /// path is appended to.
    pub fn from_dir(dir: &Path, player: Vec<String>, bell: W) -> Self {
        let sounds = CUES.map(|cue| {
            let path = dir.join(format!("{}.wav", cue.as_str()));
            if path.is_file() {
                CueSound::File(path)
            } else {
                warn!(cue = cue.as_str(), path = %path.display(), "sound file missing, cue will be silent");
                CueSound::Silent
            }
        });
        if player.is_empty() {
            warn!("no sound player command configured, file cues will be silent");
        }
        Self::new(sounds, player, bell)
    }

    pub fn sound(&self, cue: Cue) -> &CueSound {
        &self.sounds[slot(cue)]
    }

    /// True once spawning the player has failed; file cues stay silent after that.
    pub fn player_failed(&self) -> bool {
        self.player_failed
    }

    pub fn bell_writer(&self) -> &W {
        &self.bell
    }

    fn ring(&mut self) {
        if let Err(err) = self.bell.write_all(b"\x07").and_then(|_| self.bell.flush()) {
            debug!(%err, "bell write failed");
        }
    }

    fn spawn(&mut self, path: &Path) {
        if self.player_failed {
            return;
        }
        self.reap();

        let Some((program, args)) = self.player.split_first() else {
            return;
        };
        match Command::new(program)
            .args(args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => self.children.push(child),
            Err(err) => {
                warn!(%err, program = %program, "failed to start sound player, disabling file cues");
                self.player_failed = true;
            }
        }
    }

    /// Collect finished player processes.
    fn reap(&mut self) {
        self.children
            .retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}

impl<W: Write> CuePlayer for AudioCues<W> {
    fn play(&mut self, cue: Cue) {
        match self.sounds[slot(cue)].clone() {
            CueSound::Silent => {}
            CueSound::Bell => self.ring(),
            CueSound::File(path) => self.spawn(&path),
        }
    }
}

impl<W: Write> Drop for AudioCues<W> {
    fn drop(&mut self) {
        self.reap();
    }
}
