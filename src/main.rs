//! Terminal runner (default binary).
//!
//! Loads the player's preferences, then drives one `GameState` from crossterm
//! key events and a gravity timer, redrawing through the framebuffer renderer.
//!
//! Keys outside the bindings: Esc / Ctrl+C quit, F2 rebinds (then `1`..`7`
//! for one action or `A` for all), F3 restores the default bindings.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use falling_blocks::core::GameState;
use falling_blocks::input::{
    binding_hints, capture_prompt, handle_key_event, key_id, menu_command, BindingCapture,
    MenuCommand, CHOOSE_PROMPT,
};
use falling_blocks::settings::{JsonFileStore, Preferences, SettingsStore};
use falling_blocks::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use falling_blocks::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let store = JsonFileStore::at_default_location()?;
    log::info!("settings at {}", store.path().display());
    let prefs = Preferences::load(store);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, prefs);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Where key presses go.
enum Mode {
    Play,
    /// F2 pressed, waiting for an action number.
    Choose,
    Capture(BindingCapture),
}

struct App<S: SettingsStore> {
    game: GameState,
    prefs: Preferences<S>,
    mode: Mode,
    /// Terminal reports bare modifier keys.
    modifiers_reported: bool,
    prompt: String,
    hints: Vec<String>,
    /// Last failed settings save, shown until quit.
    save_error: Option<String>,
    quit: bool,
}

fn run<S: SettingsStore>(term: &mut TerminalRenderer, prefs: Preferences<S>) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);

    let mut game = GameState::new(seed).with_high_score(prefs.high_score());
    game.init_game();

    let modifiers_reported = term.enhanced_keys();
    let mut app = App {
        game,
        hints: binding_hints(prefs.controls(), modifiers_reported),
        prefs,
        mode: Mode::Play,
        modifiers_reported,
        prompt: String::new(),
        save_error: None,
        quit: false,
    };

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut next_fall = Instant::now() + fall_interval(&app.game);
    let mut timer_key = (app.game.level(), app.game.is_playing());

    while !app.quit {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = HudView {
            prompt: (!app.prompt.is_empty()).then_some(app.prompt.as_str()),
            hints: &app.hints,
        };
        view.render_into(&app.game.snapshot(), &hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => app.on_key(&key),
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let key = (app.game.level(), app.game.is_playing());
        if key != timer_key {
            timer_key = key;
            next_fall = now + fall_interval(&app.game);
        } else if app.game.is_playing() && now >= next_fall {
            app.game.move_down();
            next_fall = now + fall_interval(&app.game);
        }

        if let Some(event) = app.game.take_last_event() {
            if event.game_over && app.prefs.record_high_score(app.game.high_score()) {
                log::info!("new high score {}", app.game.high_score());
                app.refresh_hints();
            }
        }
    }

    Ok(())
}

impl<S: SettingsStore> App<S> {
    fn on_key(&mut self, key: &KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if !matches!(self.mode, Mode::Play) {
            if key.kind == KeyEventKind::Press {
                self.on_rebind_key(key);
            }
            return;
        }

        if key.kind == KeyEventKind::Press {
            if let Some(command) = menu_command(key) {
                self.on_menu(command);
                return;
            }
        }

        let Some(action) = handle_key_event(key, self.prefs.controls()) else {
            return;
        };
        // Held keys repeat movement only.
        let repeatable = matches!(
            action,
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::MoveDown
        );
        if key.kind == KeyEventKind::Press || repeatable {
            self.game.apply_action(action);
        }
    }

    fn on_menu(&mut self, command: MenuCommand) {
        match command {
            MenuCommand::Quit => self.quit = true,
            MenuCommand::Rebind => {
                if self.game.is_playing() {
                    self.game.toggle_play();
                }
                self.mode = Mode::Choose;
                self.prompt = CHOOSE_PROMPT.to_string();
            }
            MenuCommand::ResetControls => {
                self.prefs.reset_controls();
                self.refresh_hints();
            }
        }
    }

    /// Keys while choosing an action or capturing its new key. Esc cancels.
    fn on_rebind_key(&mut self, key: &KeyEvent) {
        if menu_command(key) == Some(MenuCommand::Quit) {
            self.end_rebind();
            return;
        }
        let Some(id) = key_id(key) else {
            return;
        };

        if let Mode::Choose = self.mode {
            if let Some(capture) = BindingCapture::choose(&id) {
                self.prompt = capture.pending().map(capture_prompt).unwrap_or_default();
                self.mode = Mode::Capture(capture);
            }
            return;
        }
        let Mode::Capture(capture) = &mut self.mode else {
            return;
        };

        if let Some((action, id)) = capture.capture(&id) {
            self.prefs.update_control(action, id);
        }
        match capture.pending() {
            Some(action) => self.prompt = capture_prompt(action),
            None => self.end_rebind(),
        }
        self.refresh_hints();
    }

    fn end_rebind(&mut self) {
        self.mode = Mode::Play;
        self.prompt.clear();
    }

    /// Rebuild the side panel, surfacing a failed settings save.
    fn refresh_hints(&mut self) {
        if let Some(err) = self.prefs.take_save_error() {
            self.save_error = Some(err);
        }
        self.hints = binding_hints(self.prefs.controls(), self.modifiers_reported);
        if let Some(err) = &self.save_error {
            self.hints.push(String::new());
            self.hints.push("! settings not saved".to_string());
            self.hints.push(err.clone());
        }
    }
}

fn fall_interval(game: &GameState) -> Duration {
    Duration::from_millis(game.drop_interval_ms() as u64)
}
