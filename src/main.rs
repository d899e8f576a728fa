//! Stonefall terminal runner (default binary).
//!
//! Keyboard and pointer input drive the game state machine. Gravity, key
//! repeat and hover countdowns all advance by the time the frame clock reports,
//! so nothing here reads a clock of its own.

use std::fs::File;
use std::ops::ControlFlow;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use log::{debug, error, info};

use stonefall::config::Config;
use stonefall::core::{GameSnapshot, GameState, GravityTimer};
use stonefall::input::{handle_key_event, HoverConfirm, InputHandler, SwipeDetector};
use stonefall::term::{
    FrameBuffer, FrameClock, GameView, Layout, Overlay, TerminalRenderer, Viewport,
};
use stonefall::types::{GameAction, Phase};

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;
    info!("starting: seed {} at {} fps", config.seed, config.fps);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => info!("exiting"),
        Err(e) => error!("exiting on error: {:#}", e),
    }
    result
}

/// Log to `STONEFALL_LOG_PATH` if set; the terminal itself belongs to the game.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("cannot create log file {}", path))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(config, Viewport::new(w, h), term.reports_key_release());
    let mut clock = FrameClock::new(config.fps);
    let mut fb = FrameBuffer::new(w, h);
    let mut snap = GameSnapshot::default();

    loop {
        app.render(&mut fb, &mut snap);
        term.draw_swap(&mut fb)?;

        // Input until the frame is due.
        while event::poll(clock.remaining())? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                term.invalidate();
            }
            if app.handle_event(ev).is_break() {
                return Ok(());
            }
        }

        let elapsed_ms = clock.tick();
        if app.update(elapsed_ms).is_break() {
            return Ok(());
        }
    }
}

struct App {
    game: GameState,
    gravity: GravityTimer,
    keys: InputHandler,
    hover: HoverConfirm,
    swipe: SwipeDetector,
    view: GameView,
    viewport: Viewport,
    pointer: Option<(u16, u16)>,
}

impl App {
    fn new(config: &Config, viewport: Viewport, reports_key_release: bool) -> Self {
        let game = GameState::new(config.seed);
        let gravity = GravityTimer::new(game.gravity_interval_ms());
        let view = GameView::default();
        let preview = view
            .layout(game.board().cols(), game.board().rows(), viewport)
            .preview;

        // Real release events make the timeout unnecessary.
        let keys = if reports_key_release {
            InputHandler::new().with_key_release_timeout_ms(u32::MAX)
        } else {
            InputHandler::new()
        };

        Self {
            game,
            gravity,
            keys,
            hover: HoverConfirm::new(),
            swipe: SwipeDetector::with_default_threshold(preview),
            view,
            viewport,
            pointer: None,
        }
    }

    fn layout(&self) -> Layout {
        let board = self.game.board();
        self.view.layout(board.cols(), board.rows(), self.viewport)
    }

    fn apply(&mut self, action: GameAction) -> ControlFlow<()> {
        if action == GameAction::Quit {
            return ControlFlow::Break(());
        }

        let accepted = self.game.apply_action(action);
        debug!("{} accepted={}", action.as_str(), accepted);

        if accepted && matches!(action, GameAction::TogglePause | GameAction::Restart) {
            self.keys.reset();
            self.swipe.reset();
            self.gravity.reset();
        }
        self.gravity.set_interval(self.game.gravity_interval_ms());
        ControlFlow::Continue(())
    }

    fn handle_event(&mut self, ev: Event) -> ControlFlow<()> {
        match ev {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(w, h) => {
                self.viewport = Viewport::new(w, h);
                let preview = self.layout().preview;
                self.swipe.set_area(preview);
                ControlFlow::Continue(())
            }
            _ => ControlFlow::Continue(()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> ControlFlow<()> {
        let Some(action) = handle_key_event(key) else {
            return ControlFlow::Continue(());
        };

        match key.kind {
            KeyEventKind::Press => match self.keys.handle_key_press(action) {
                Some(action) => self.apply(action),
                None => ControlFlow::Continue(()),
            },
            KeyEventKind::Repeat => {
                // Ignore terminal auto-repeat; the input handler repeats internally.
                ControlFlow::Continue(())
            }
            KeyEventKind::Release => {
                self.keys.handle_key_release(action);
                ControlFlow::Continue(())
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> ControlFlow<()> {
        match mouse.kind {
            MouseEventKind::Moved
            | MouseEventKind::Drag(_)
            | MouseEventKind::Down(_)
            | MouseEventKind::Up(_) => {
                let (x, y) = (mouse.column, mouse.row);
                self.pointer = Some((x, y));
                match self.swipe.pointer_moved(x, y) {
                    Some(action) => {
                        debug!("swipe {}", action.as_str());
                        self.apply(action)
                    }
                    None => ControlFlow::Continue(()),
                }
            }
            _ => ControlFlow::Continue(()),
        }
    }

    fn update(&mut self, elapsed_ms: u32) -> ControlFlow<()> {
        for action in self.keys.update(elapsed_ms) {
            self.apply(action)?;
        }

        let phase = self.game.phase();
        let hovered = self
            .pointer
            .and_then(|(x, y)| self.layout().button_at(x, y, phase));
        if let Some(button) = self.hover.update(hovered, elapsed_ms) {
            info!("{} confirmed by hover", button.label());
            self.apply(button.action())?;
        }

        // Ticks that fall due while paused or after game over are dropped.
        let ticks = self.gravity.advance(elapsed_ms);
        if self.game.phase() == Phase::Playing {
            for _ in 0..ticks {
                self.game.timer_tick();
            }
            self.gravity.set_interval(self.game.gravity_interval_ms());
        } else {
            self.swipe.reset();
        }
        ControlFlow::Continue(())
    }

    fn render(&self, fb: &mut FrameBuffer, snap: &mut GameSnapshot) {
        self.game.snapshot_into(snap);
        let overlay = Overlay {
            pointer: self.pointer,
            countdown: self.hover.countdown(),
        };
        self.view.render_into(snap, &overlay, self.viewport, fb);
    }
}
