use std::fs::File;
use std::io::{self, Stdout, stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute, terminal,
};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use thiserror::Error;

use flappy_canvas::cli::Cli;
use flappy_canvas::render::{self, PanelLayout, PanelTarget, PixelBuf};
use flappy_canvas::sound::{Effect, Sound};
use flappy_canvas::{Collision, Event, GameOverNotifier, GameState, Input, Machine, Phase, World};

#[derive(Debug, Error)]
enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("cannot create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn init_logging(path: Option<&Path>) -> Result<(), AppError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| AppError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .try_init()?;
        }
        // stderr shares the screen, so stay quiet unless RUST_LOG asks otherwise
        None => env_logger::try_init()?,
    }
    Ok(())
}

// ── Game over ───────────────────────────────────────────────────────────────

/// Shows the game-over board and waits for any key or click.
struct TerminalNotifier<'a> {
    buf: &'a mut PixelBuf,
    out: &'a mut Stdout,
}

impl GameOverNotifier for TerminalNotifier<'_> {
    type Error = io::Error;

    fn acknowledge(&mut self, state: &GameState, collision: Collision) -> io::Result<()> {
        // Drop clicks that were already queued when the bird hit
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        render::draw_game_over(self.buf, state, collision);
        self.buf.render(self.out)?;

        loop {
            match event::read()? {
                TermEvent::Key(KeyEvent {
                    kind: KeyEventKind::Press,
                    ..
                }) => return Ok(()),
                TermEvent::Mouse(m) if matches!(m.kind, MouseEventKind::Down(_)) => return Ok(()),
                TermEvent::Resize(c, r) => {
                    self.buf.resize(c as usize, r as usize * 2);
                    render::draw_scene(self.buf, state);
                    render::draw_game_over(self.buf, state, collision);
                    self.buf.render(self.out)?;
                }
                _ => {}
            }
        }
    }
}

// ── Input ───────────────────────────────────────────────────────────────────

enum Action {
    Quit,
    Input(Input),
}

fn decode(ev: TermEvent, phase: &Phase, buf: &PixelBuf) -> Option<Action> {
    let setup = matches!(phase, Phase::Setup(_));
    match ev {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Some(Action::Quit);
            }
            let input = match key.code {
                KeyCode::Esc => return Some(Action::Quit),
                KeyCode::Char('q') if !setup => return Some(Action::Quit),
                KeyCode::Enter if setup => Input::Start,
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down if setup => {
                    Input::NextField
                }
                KeyCode::Backspace => Input::Backspace,
                KeyCode::Char(c) if setup => Input::Char(c),
                KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Input::Click,
                _ => return None,
            };
            Some(Action::Input(input))
        }
        TermEvent::Mouse(m) if m.kind == MouseEventKind::Down(MouseButton::Left) => {
            if !setup {
                return Some(Action::Input(Input::Click));
            }
            // Terminal rows hold two pixel rows
            let layout = PanelLayout::new(buf.width(), buf.height());
            match layout.hit_test(m.column as i32, m.row as i32 * 2)? {
                PanelTarget::Start => Some(Action::Input(Input::Start)),
                PanelTarget::Field(f) => Some(Action::Input(Input::Focus(f))),
            }
        }
        _ => None,
    }
}

// ── Main ────────────────────────────────────────────────────────────────────

fn run(cli: &Cli, out: &mut Stdout) -> Result<(), AppError> {
    let (cols, rows) = terminal::size()?;
    let pw = cols as usize;
    let ph = rows as usize * 2;

    let mut buf = PixelBuf::new(pw, ph);
    let world = World::fit(pw, ph, cli.height);
    let mut machine = Machine::new(world, cli.config());
    let sound = Sound::new(cli.mute);

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut rng = Pcg32::seed_from_u64(seed);
    log::info!(
        "world {}x{}, seed {seed}, {} fps",
        world.width,
        world.height,
        cli.fps
    );

    let frame_dur = Duration::from_secs_f64(1.0 / cli.fps as f64);

    loop {
        let frame_start = Instant::now();

        // Input
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let TermEvent::Resize(c, r) = ev {
                buf.resize(c as usize, r as usize * 2);
                continue;
            }
            match decode(ev, machine.phase(), &buf) {
                Some(Action::Quit) => return Ok(()),
                Some(Action::Input(input)) => match machine.handle_input(input) {
                    Some(Event::Elevated) => sound.play(Effect::Elevate),
                    Some(Event::StartRefused(e)) => log::info!("start refused: {e}"),
                    _ => {}
                },
                None => {}
            }
        }

        // Update
        let mut notifier = TerminalNotifier {
            buf: &mut buf,
            out: &mut *out,
        };
        if let Some(Event::Crashed { .. }) = machine.tick(&mut rng, &mut notifier)? {
            sound.play(Effect::Crash);
        }

        // Render
        render::draw(&mut buf, &machine);
        buf.render(out)?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
        EnableMouseCapture,
    )?;

    let result = run(&cli, &mut out);

    execute!(
        out,
        DisableMouseCapture,
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    )?;
    terminal::disable_raw_mode()?;
    result
}
