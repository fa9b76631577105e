use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::{KeyCombo, KeyContext};
use crate::game::Outcome;
use crate::ui::action::Action;
use crate::ui::app::App;
use crate::ui::board::Board;
use crate::ui::effect::Effect;
use crate::ui::events::{AppEvent, InputMode};

impl App {
    /// Apply one event and return the side effects it asks for
    pub fn handle_event(&mut self, event: AppEvent) -> Vec<Effect> {
        match event {
            AppEvent::Input(input) => self.handle_input_event(input),
            AppEvent::Tick => {
                if let Some(board) = self.board.as_mut() {
                    board.tick();
                }
                Vec::new()
            }
            AppEvent::FlashExpired(generation) => {
                if let Some(board) = self.board.as_mut() {
                    board.expire_flash(generation);
                }
                Vec::new()
            }
            AppEvent::Error(message) => {
                tracing::error!(error = %message, "Input error");
                self.input_error = Some(message);
                self.should_quit = true;
                vec![Effect::StopTicker]
            }
        }
    }

    fn handle_input_event(&mut self, input: Event) -> Vec<Effect> {
        match input {
            Event::Key(key) => self.handle_key_event(key),
            Event::Paste(text) => {
                self.handle_paste_input(&text);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    pub(super) fn handle_key_event(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }

        // Digits type into the focused row and are never remappable
        if self.input_mode == InputMode::Playing {
            if let KeyCode::Char(c) = key.code {
                let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
                if plain && c.is_ascii_digit() {
                    if let Some(board) = self.board.as_mut() {
                        board.input_char(c);
                    }
                    return Vec::new();
                }
            }
        }

        let combo = KeyCombo::from_key_event(&key);
        let context = KeyContext::from_input_mode(self.input_mode);
        match self.config.keybindings.get_action(&combo, context) {
            Some(action) => self.handle_action(action),
            None => Vec::new(),
        }
    }

    fn handle_paste_input(&mut self, text: &str) {
        if self.input_mode != InputMode::Playing {
            return;
        }
        if let Some(board) = self.board.as_mut() {
            if !board.paste(text) {
                tracing::debug!(len = text.len(), "Paste held no digits");
            }
        }
    }

    pub fn handle_action(&mut self, action: Action) -> Vec<Effect> {
        let mut effects = Vec::new();

        match (self.input_mode, action) {
            (_, Action::Quit) => {
                self.should_quit = true;
                effects.push(Effect::StopTicker);
            }

            (InputMode::Start, Action::StartGame) => {
                tracing::info!(riddles = self.config.riddles.len(), "Game started");
                self.board = Some(Board::new(&self.config));
                self.input_mode = InputMode::Playing;
                effects.push(Effect::StartTicker);
            }

            (InputMode::Playing, _) => {
                let Some(board) = self.board.as_mut() else {
                    return effects;
                };
                match action {
                    Action::Submit => {
                        let riddle = board.selected();
                        let outcome = board.submit();
                        tracing::debug!(riddle, ?outcome, "Code submitted");
                        if outcome != Outcome::Ignored {
                            effects.push(Effect::ScheduleFlashExpiry {
                                generation: board.view().flash.generation(),
                                after: Duration::from_millis(self.config.flash_ms),
                            });
                        }
                    }
                    Action::Backspace => board.backspace(),
                    Action::MoveCursorLeft => board.move_left(),
                    Action::MoveCursorRight => board.move_right(),
                    Action::NextRiddle => board.next_riddle(),
                    Action::PrevRiddle => board.prev_riddle(),
                    Action::ShowHint => {
                        if let Some(text) = board.use_hint() {
                            tracing::debug!(riddle = board.selected(), "Hint shown");
                            self.hint_text = Some(text);
                            self.input_mode = InputMode::ShowingHint;
                        }
                    }
                    Action::Finish => {
                        if let Some(summary) = board.finish() {
                            tracing::info!(%summary, "Game finished");
                            self.input_mode = InputMode::ShowingSummary;
                            effects.push(Effect::StopTicker);
                        } else if board.view().summary.is_some() {
                            self.input_mode = InputMode::ShowingSummary;
                        }
                    }
                    _ => {}
                }
            }

            (InputMode::ShowingHint, Action::Confirm | Action::Cancel) => {
                self.hint_text = None;
                self.input_mode = InputMode::Playing;
            }

            (InputMode::ShowingSummary, Action::Confirm) => {
                self.should_quit = true;
            }
            (InputMode::ShowingSummary, Action::Cancel) => {
                self.input_mode = InputMode::Playing;
            }

            _ => {}
        }

        effects
    }
}
