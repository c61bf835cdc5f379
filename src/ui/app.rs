//! Menu/screen controller.
//!
//! Owns the single cooperative event loop: render the active screen, poll
//! input with a bounded timeout, advance the timer, repeat. The poll timeout
//! keeps the loop responsive (an abort keystroke is seen well within one
//! tick interval) while the engine's drift correction keeps the countdown
//! honest regardless of how often the loop turns.
//!
//! All state (the active screen, the settings copy, the engine) is owned
//! here and handed by reference to whichever screen handles the current
//! keystroke. Nothing crosses a thread boundary; there are no threads.

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use super::frame::{chrome, hint_style};
use super::log_viewer::LogViewer;
use super::main_menu::{MainMenu, MenuChoice};
use super::settings_screen::{SettingsAction, SettingsScreen};
use super::task_prompt::{PromptAction, TaskPrompt};
use super::timer_screen::{AlertProgress, TimerAction, TimerScreen};
use crate::config::ConfigStore;
use crate::journal::FileSessionLog;
use crate::paths::Paths;
use crate::timer::{TickOutcome, TimerEngine};
use crate::types::{Settings, TimerPhase};

/// Upper bound on one input poll; keeps the countdown advancing even when
/// the user types nothing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

// ============================================================================
// Screen
// ============================================================================

/// The single active screen.
///
/// One tagged variant per screen, each carrying its own state; the
/// controller dispatches render and keystrokes structurally.
pub enum Screen {
    /// Top-level menu
    MainMenu(MainMenu),
    /// Task entry before a work session
    TaskPrompt(TaskPrompt),
    /// Active countdown (work or break)
    Timer(TimerScreen),
    /// Settings editor
    Settings(SettingsScreen),
    /// Read-only log viewer
    LogViewer(LogViewer),
}

// ============================================================================
// App
// ============================================================================

/// Application controller: screens, settings, timer engine, event loop.
pub struct App {
    config_store: ConfigStore,
    engine: TimerEngine<FileSessionLog>,
    settings: Settings,
    log_path: PathBuf,
    screen: Screen,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Builds the controller from resolved file paths.
    ///
    /// The config file is read once here; a missing or corrupt file silently
    /// yields defaults. Nothing else is opened until needed.
    pub fn new(paths: &Paths) -> Self {
        let config_store = ConfigStore::new(&paths.config);
        let settings = config_store.load();
        Self {
            config_store,
            engine: TimerEngine::new(FileSessionLog::new(&paths.log)),
            settings,
            log_path: paths.log.clone(),
            screen: Screen::MainMenu(MainMenu::new()),
            notice: None,
            should_quit: false,
        }
    }

    /// Returns the active screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Returns the timer engine.
    pub fn engine(&self) -> &TimerEngine<FileSessionLog> {
        &self.engine
    }

    /// Returns the settings currently in effect.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Returns the pending notice line, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Returns true once the user has quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs the event loop until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.advance(Instant::now());
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key, Instant::now());
                    }
                }
            }
        }
        Ok(())
    }

    /// Advances time-driven state: the countdown and the alert sequence.
    pub fn advance(&mut self, now: Instant) {
        if self.engine.tick(now) == TickOutcome::Completed {
            if let Screen::Timer(timer) = &mut self.screen {
                timer.begin_alert(now);
            }
        }
        self.collect_warning();

        let progress = match &mut self.screen {
            Screen::Timer(timer) => timer.advance_alert(now),
            _ => AlertProgress::Idle,
        };
        match progress {
            AlertProgress::Flashed => ring_bell(),
            AlertProgress::Finished => self.finish_session(now),
            AlertProgress::Idle => {}
        }
    }

    /// Dispatches one keystroke to the active screen.
    ///
    /// Keystrokes the active screen does not recognize are ignored; they are
    /// never propagated elsewhere. Any pending notice is dismissed first,
    /// and the key still reaches the screen.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            // Quit from anywhere, but terminate the log record first so a
            // running session never leaves a dangling START
            self.engine.abort();
            self.engine.clear_session();
            self.collect_warning();
            self.should_quit = true;
            return;
        }
        self.notice = None;

        let mut alert_skipped = false;
        let next = match &mut self.screen {
            Screen::MainMenu(menu) => match menu.handle_key(key.code) {
                Some(MenuChoice::StartPomodoro) => Some(Screen::TaskPrompt(TaskPrompt::new())),
                Some(MenuChoice::ViewLog) => {
                    Some(Screen::LogViewer(LogViewer::open(&self.log_path)))
                }
                Some(MenuChoice::Settings) => {
                    Some(Screen::Settings(SettingsScreen::new(self.settings)))
                }
                Some(MenuChoice::Quit) => {
                    self.should_quit = true;
                    None
                }
                None => None,
            },
            Screen::TaskPrompt(prompt) => match prompt.handle_key(key.code) {
                PromptAction::Submit(task) => {
                    self.engine
                        .start(TimerPhase::Work, self.settings.work_minutes, task, now);
                    Some(Screen::Timer(TimerScreen::new()))
                }
                PromptAction::Cancel => Some(Screen::MainMenu(MainMenu::new())),
                PromptAction::None => None,
            },
            Screen::Timer(timer) => match timer.handle_key(key.code) {
                TimerAction::Abort => {
                    self.engine.abort();
                    self.engine.clear_session();
                    Some(Screen::MainMenu(MainMenu::new()))
                }
                TimerAction::SkipAlert => {
                    alert_skipped = true;
                    None
                }
                TimerAction::None => None,
            },
            Screen::Settings(editor) => match editor.handle_key(key.code) {
                SettingsAction::Save(settings) => match self.config_store.save(settings) {
                    Ok(()) => {
                        self.settings = settings;
                        self.notice = Some("Settings saved.".to_string());
                        Some(Screen::MainMenu(MainMenu::new()))
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "settings save failed");
                        self.notice = Some(format!("Could not save settings: {err}"));
                        None
                    }
                },
                SettingsAction::Cancel => Some(Screen::MainMenu(MainMenu::new())),
                SettingsAction::None => None,
            },
            Screen::LogViewer(viewer) => viewer
                .handle_key(key.code)
                .then(|| Screen::MainMenu(MainMenu::new())),
        };

        self.collect_warning();
        if alert_skipped {
            self.finish_session(now);
        } else if let Some(screen) = next {
            self.screen = screen;
        }
    }

    /// Moves a completed session along once its alert is over.
    ///
    /// A completed WORK session auto-starts the break timer with the same
    /// task; a completed BREAK session returns to the main menu.
    fn finish_session(&mut self, now: Instant) {
        let Some(session) = self.engine.session() else {
            self.screen = Screen::MainMenu(MainMenu::new());
            return;
        };
        match session.phase {
            TimerPhase::Work => {
                let task = session.task_description.clone();
                self.engine.clear_session();
                self.engine
                    .start(TimerPhase::Break, self.settings.break_minutes, task, now);
                self.collect_warning();
                self.screen = Screen::Timer(TimerScreen::new());
            }
            TimerPhase::Break => {
                self.engine.clear_session();
                self.notice = Some("Pomodoro complete.".to_string());
                self.screen = Screen::MainMenu(MainMenu::new());
            }
        }
    }

    /// Surfaces a pending journal warning as a dismissible notice.
    fn collect_warning(&mut self) {
        if let Some(warning) = self.engine.take_warning() {
            self.notice = Some(format!("Warning: {warning}"));
        }
    }

    /// Renders the active screen inside the shared chrome.
    pub fn render(&self, frame: &mut Frame) {
        let (title, footer) = match &self.screen {
            Screen::MainMenu(_) => ("PomoCLI", "Up/Down: move  Enter: select  q: quit"),
            Screen::TaskPrompt(_) => ("Start Pomodoro", "Enter: start  Esc: cancel"),
            Screen::Timer(timer) => (
                "Pomodoro Timer",
                if timer.alert_active() {
                    "q: continue"
                } else {
                    "q: abort timer"
                },
            ),
            Screen::Settings(_) => ("Settings", "Enter: edit/save  q: back (without saving)"),
            Screen::LogViewer(_) => (
                "Previous Pomodoros",
                "Up/Down: scroll  PgUp/PgDn: page  Home/End  q: back",
            ),
        };
        let content = chrome(frame, title, footer);

        match &self.screen {
            Screen::MainMenu(menu) => menu.render(frame, content),
            Screen::TaskPrompt(prompt) => prompt.render(frame, content),
            Screen::Timer(timer) => {
                if let Some(session) = self.engine.session() {
                    timer.render(frame, content, session, self.engine.duration_seconds());
                }
            }
            Screen::Settings(editor) => editor.render(frame, content),
            Screen::LogViewer(viewer) => viewer.render(frame, content),
        }

        if let Some(notice) = &self.notice {
            render_notice(frame, notice);
        }
    }
}

/// Draws the notice line just above the footer.
fn render_notice(frame: &mut Frame, notice: &str) {
    let area = frame.area();
    if area.height < 4 || area.width < 6 {
        return;
    }
    let line = Rect {
        x: area.x + 2,
        y: area.y + area.height - 3,
        width: area.width - 4,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(format!("{notice} (press any key)")).style(hint_style()),
        line,
    );
}

/// Rings the terminal bell.
fn ring_bell() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}

// ============================================================================
// Tests
// ============================================================================
