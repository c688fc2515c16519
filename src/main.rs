use std::io::{stdout, BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{cursor, terminal, ExecutableCommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use xonitix::compute::{init_state, next_level, run_ticks, status};
use xonitix::config::{Args, Config, PLAYABLE_SCREEN_SIZE};
use xonitix::display;
use xonitix::entities::{GameState, GameStatus};
use xonitix::input::{discard_input, poll_input, InputLatch, TerminalEvents};
use xonitix::timing::FixedTimestep;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// How long a finished level stays on screen before the next one starts.
const LEVEL_UP_PAUSE: Duration = Duration::from_millis(2000);
/// How long the game-over banner stays before the process exits.
const GAME_OVER_PAUSE: Duration = Duration::from_millis(2000);

// ── Terminal session ──────────────────────────────────────────────────────────

/// Raw mode and a hidden cursor for as long as this value lives.
struct TerminalSession;

impl TerminalSession {
    fn acquire<W: Write>(out: &mut W) -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on, Drop restores the terminal even if hiding fails.
        let session = TerminalSession;
        out.execute(cursor::Hide)?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = stdout().execute(cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

// ── Level loop ────────────────────────────────────────────────────────────────

/// Play one level to its end and report how it ended.
fn play_level<W: Write>(
    out: &mut W,
    events: &mut TerminalEvents,
    state: &mut GameState,
    clock: &mut FixedTimestep,
) -> std::io::Result<GameStatus> {
    let mut latch = InputLatch::default();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        clock.advance(frame_start - last);
        last = frame_start;

        poll_input(events, &mut latch)?;
        if !latch.is_empty() {
            log::trace!("input {:?}", latch);
            latch.apply(&mut state.player);
        }

        run_ticks(state, clock);

        let line = display::render_line(
            &state.rovers,
            &state.player,
            state.score,
            state.level,
            state.screen_size,
        );
        display::draw_frame(out, &line)?;

        match status(state) {
            GameStatus::Playing => {}
            finished => return Ok(finished),
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

fn run<W: Write>(out: &mut W, config: &Config) -> std::io::Result<u32> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut clock = FixedTimestep::default();
    let mut events = TerminalEvents;
    let mut state = init_state(config, &mut rng);

    loop {
        match play_level(out, &mut events, &mut state, &mut clock)? {
            GameStatus::LevelComplete => {
                log::info!("level {} cleared with score {}", state.level, state.score);
                // let the player see the finished line
                std::thread::sleep(LEVEL_UP_PAUSE);
                let dropped = discard_input(&mut events)?;
                log::debug!("dropped {} events typed during the pause", dropped);
                clock.reset();
                state = next_level(&state, &mut rng);
            }
            _ => {
                log::info!("game over at level {} with score {}", state.level, state.score);
                return Ok(state.score);
            }
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let terminal_width = terminal::size().ok().map(|(width, _)| width);
    let config = Config::from_args(&args, terminal_width).context("invalid configuration")?;
    if config.is_cramped() {
        log::warn!("line size {} is below {}", config.screen_size(), PLAYABLE_SCREEN_SIZE);
        eprintln!(
            "Your terminal window is too small to play! \
             Try increasing its width to at least {} columns.",
            PLAYABLE_SCREEN_SIZE
        );
    }

    let mut out = BufWriter::new(stdout());
    let session = TerminalSession::acquire(&mut out).context("failed to set up terminal")?;

    if !config.quiet {
        display::draw_startup_banner(&mut out)?;
    }

    let score = run(&mut out, &config)?;

    if config.stealth {
        display::draw_stealth_clear(&mut out)?;
    } else {
        display::draw_game_over(&mut out, score)?;
        std::thread::sleep(GAME_OVER_PAUSE);
    }

    drop(session);
    Ok(())
}
