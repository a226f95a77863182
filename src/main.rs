//! Shardfall - Entry Point
//!
//! Initializes the terminal, wires the collaborators together, and runs
//! the fixed-step game loop.

use std::fs::OpenOptions;
use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use shardfall::audio::AudioManager;
use shardfall::config::Settings;
use shardfall::game::{InputState, Session};
use shardfall::ui::App;

/// Target ticks per second for the simulation loop
const TARGET_FPS: u64 = 60;
const FRAME_TIME: Duration = Duration::from_millis(1000 / TARGET_FPS);

fn main() -> Result<()> {
    // Log to a file so the TUI stays clean
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("shardfall.log")
        .unwrap_or_else(|_| OpenOptions::new().write(true).open("/dev/null").unwrap());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    log::info!("Starting Shardfall v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load();
    let mut audio = AudioManager::new();
    audio.set_enabled(settings.audio.enabled);
    audio.set_master_volume(settings.audio.master_volume);
    audio.set_sfx_volume(settings.audio.sfx_volume);

    // Setup terminal
    enable_raw_mode()?;
    let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    if enhanced_keys {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(enhanced_keys);
    let session = Session::new(settings.seed);

    let result = run_game_loop(&mut terminal, &mut app, &mut audio, session);

    // Restore terminal
    if enhanced_keys {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Shardfall shut down cleanly");
    result
}

/// Fixed-step game loop: sample input, advance one tick, play the tick's
/// cues, draw the snapshot
fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    audio: &mut AudioManager,
    mut session: Session,
) -> Result<()> {
    let mut input = InputState::new();

    loop {
        let frame_start = Instant::now();

        // Drain all pending terminal events
        let mut quit = false;
        while event::poll(Duration::from_millis(0))? {
            let ev: Event = event::read()?;
            if app.handle_event(&ev, &mut session, &mut input) {
                quit = true;
            }
        }
        if quit {
            break;
        }
        // Start/restart may have queued the ambient cue
        play_cues(&mut session, audio);

        app.tick_input(&mut input);
        session = session.step(&input);
        play_cues(&mut session, audio);

        terminal.draw(|frame| {
            app.render(frame, &session);
        })?;

        input.clear_transient();

        let frame_time = frame_start.elapsed();
        if frame_time < FRAME_TIME {
            std::thread::sleep(FRAME_TIME - frame_time);
        }
    }

    Ok(())
}

/// Hand the tick's sound cues to the audio collaborator
fn play_cues(session: &mut Session, audio: &mut AudioManager) {
    for cue in session.cues.drain(..) {
        audio.dispatch(cue);
    }
}
