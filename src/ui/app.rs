mod app_input;
mod app_render;

pub use app_render::render_board;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{EnableBracketedPaste, EventStream},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::config::Config;
use crate::ui::board::Board;
use crate::ui::effect::Effect;
use crate::ui::events::{AppEvent, InputMode};
use crate::ui::terminal_guard::{install_panic_hook, TerminalGuard};

/// Main application state
pub struct App {
    /// Application configuration
    config: Config,
    /// Whether the app should quit
    should_quit: bool,
    /// Current input mode
    input_mode: InputMode,
    /// Running game; created when the player leaves the start screen
    board: Option<Board>,
    /// Text shown by the hint dialog
    hint_text: Option<String>,
    /// Event channel sender
    event_tx: mpsc::UnboundedSender<AppEvent>,
    /// Event channel receiver
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Clock refresh task
    ticker: Option<JoinHandle<()>>,
    /// Set when the terminal input stream failed
    input_error: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            config,
            should_quit: false,
            input_mode: InputMode::Start,
            board: None,
            hint_text: None,
            event_tx,
            event_rx,
            ticker: None,
            input_error: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn hint_text(&self) -> Option<&str> {
        self.hint_text.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn input_error(&self) -> Option<&str> {
        self.input_error.as_deref()
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let mut guard = TerminalGuard::new();

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let input_task = self.spawn_input_reader();
        let result = self.event_loop(&mut terminal).await;

        input_task.abort();
        self.stop_ticker();
        guard.cleanup()?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            let Some(event) = self.event_rx.recv().await else {
                break;
            };

            let effects = self.handle_event(event);
            self.run_effects(effects);

            if self.should_quit {
                break;
            }
        }

        match self.input_error.take() {
            Some(message) => anyhow::bail!("terminal input failed: {message}"),
            None => Ok(()),
        }
    }

    /// Forward terminal events into the app channel
    fn spawn_input_reader(&self) -> JoinHandle<()> {
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let mut events = EventStream::new();
            while let Some(event) = events.next().await {
                let app_event = match event {
                    Ok(event) => AppEvent::Input(event),
                    Err(e) => AppEvent::Error(e.to_string()),
                };
                let failed = matches!(app_event, AppEvent::Error(_));
                if tx.send(app_event).is_err() || failed {
                    break;
                }
            }
        })
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartTicker => self.start_ticker(),
                Effect::StopTicker => self.stop_ticker(),
                Effect::ScheduleFlashExpiry { generation, after } => {
                    let tx = self.event_tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(after).await;
                        let _ = tx.send(AppEvent::FlashExpired(generation));
                    });
                }
            }
        }
    }

    fn start_ticker(&mut self) {
        self.stop_ticker();
        let tx = self.event_tx.clone();
        let period = Duration::from_millis(self.config.tick_ms);
        tracing::debug!(tick_ms = self.config.tick_ms, "Starting clock ticker");
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        }));
    }

    fn stop_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}
