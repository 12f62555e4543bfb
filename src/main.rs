//! Terminal pairs runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `tui_pairs::term`.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{error, info};

use tui_pairs::core::{Clock, GameSession, MonotonicClock, SentenceBank, SimpleRng};
use tui_pairs::input::map_event;
use tui_pairs::term::{
    AudioCues, CuePlayer, FrameBuffer, GameView, RenderThrottle, SoundMode, TerminalRenderer,
    Viewport,
};
use tui_pairs::types::TICK_MS;

mod config;

use config::{Args, GameConfig};

/// Redraw interval when nothing changed but the clock (play timer, peek countdown).
const IDLE_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = Args::parse().into_config()?;
    init_logging(&config.log_file)?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &config));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(%err, "exiting with error");
    }
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn build_audio(config: &GameConfig) -> Box<dyn CuePlayer> {
    match config.sound {
        SoundMode::Bell => Box::new(AudioCues::bell(io::stdout())),
        SoundMode::Off => Box::new(AudioCues::silent(io::sink())),
        SoundMode::Files => Box::new(AudioCues::from_dir(
            &config.sound_dir,
            config.player.clone(),
            io::sink(),
        )),
    }
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let clock = MonotonicClock::new();
    let rng = config
        .seed
        .map(SimpleRng::new)
        .unwrap_or_else(SimpleRng::from_time);
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));

    let mut session =
        GameSession::new(SentenceBank::builtin(), rng, w, h)?.with_timing(config.timing);
    if let Some(difficulty) = config.difficulty {
        session.start(difficulty, clock.now_ms());
    }

    let mut audio = build_audio(config);
    let view = GameView::default();
    let mut throttle = RenderThrottle::new(IDLE_REDRAW_MS);
    let mut fb = FrameBuffer::new(w, h);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let now = clock.now_ms();
        if throttle.should_render(now, session.revision()) {
            let (w, h) = session.screen_size();
            view.render_into(&session, now, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick; everything pending is applied
        // before timers advance.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            loop {
                let ev = event::read()?;
                if matches!(ev, Event::Resize(..)) {
                    term.invalidate();
                    throttle.force();
                }
                if let Some(input) = map_event(ev) {
                    session.handle_input(input, clock.now_ms());
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.update(clock.now_ms());
        }

        for cue in session.drain_cues() {
            audio.play(cue);
        }

        if session.is_terminated() {
            info!(episode = session.episode_id(), "session ended");
            return Ok(());
        }
    }
}
