use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sideways::compute::{init_state, restart_state, update};
use sideways::config::Config;
use sideways::display;
use sideways::entities::{default_game_area, Mode, Sprites};
use sideways::error::{check_terminal_size, GameError};
use sideways::input::InputSampler;
use sideways::timing::FramePacer;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The game owns the terminal, so logs only go to a file when asked for.
fn init_logging(config: &Config) -> Result<(), GameError> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| GameError::LogFile {
        path: path.clone(),
        source,
    })?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &Config,
    mut sampler: InputSampler,
) -> Result<(), GameError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut state = init_state(
        Sprites::default(),
        default_game_area(),
        config.motion.into(),
        &mut rng,
    );
    let mut pacer = FramePacer::new(config.fps);

    loop {
        let frame_start = Instant::now();

        if state.mode == Mode::Restart {
            state = restart_state(&state, &mut rng);
        }

        let dt = pacer.tick();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        sampler.begin_frame(dt);
        loop {
            match rx.try_recv() {
                Ok(ev) => sampler.handle_event(&ev),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    warn!("input thread stopped");
                    sampler.request_stop();
                    break;
                }
            }
        }
        let input = sampler.snapshot();
        if input.stop {
            info!("quit requested");
            return Ok(());
        }

        state = update(&state, &input, dt, &mut rng);

        let (cols, rows) = terminal::size()?;
        display::render(out, &state, cols, rows)?;

        pacer.wait(frame_start);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let config = Config::parse();
    init_logging(&config)?;
    info!("starting: {:?}", config);

    let (cols, rows) = terminal::size()?;
    check_terminal_size(cols, rows)?;
    info!("terminal {}x{}", cols, rows);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Terminals without the kitty protocol fall back to the hold window.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    info!("key release events: {}", keyboard_enhanced);

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let sampler = if keyboard_enhanced {
        InputSampler::with_release_events()
    } else {
        InputSampler::new()
    };
    let result = game_loop(&mut out, &rx, &config, sampler);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
