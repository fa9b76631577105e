//! End-to-end game flows without a terminal

use std::time::Duration;

use crossterm::event::KeyCode;
use riddlerun::game::{
    DisplaySnapshot, FinishSummary, ManualClock, Outcome, PenaltyDisplay, PuzzleSession,
    SessionEvent, SessionObserver, SessionPhase, SessionUpdate,
};
use riddlerun::ui::{AppEvent, InputMode};
use riddlerun::{App, Board};

use super::common::fixtures::{config_with_codes, key, type_code, typed, EXAMPLE_CODES};

fn example_session(clock: &ManualClock) -> PuzzleSession<ManualClock> {
    let config = config_with_codes(&EXAMPLE_CODES);
    PuzzleSession::with_time_source(config.build_riddles(), config.rules(), clock.clone())
}

#[test]
fn test_mismatch_then_correct_then_ignored() {
    let clock = ManualClock::new();
    let mut session = example_session(&clock);

    assert_eq!(session.submit_code(0, "999"), Outcome::Mismatch);
    assert_eq!(session.penalty_seconds(), 120);
    assert!(!session.riddles()[0].is_solved());

    assert_eq!(session.submit_code(0, "123"), Outcome::Correct);
    assert!(session.riddles()[0].is_solved());
    assert_eq!(session.penalty_seconds(), 120);

    assert_eq!(session.submit_code(0, "123"), Outcome::Ignored);
    assert_eq!(session.penalty_seconds(), 120);
    assert_eq!(session.solved_count(), 1);
}

#[test]
fn test_short_attempt_is_invalid() {
    let clock = ManualClock::new();
    let mut session = example_session(&clock);
    assert_eq!(session.submit_code(1, "12"), Outcome::Invalid);
    assert_eq!(session.penalty_seconds(), 120);
}

#[test]
fn test_finish_totals_elapsed_and_penalty() {
    let clock = ManualClock::new();
    let mut session = example_session(&clock);

    session.use_hint();
    session.submit_code(2, "000");
    for (i, code) in EXAMPLE_CODES.iter().enumerate() {
        assert_eq!(session.submit_code(i, code), Outcome::Correct);
    }
    assert_eq!(session.phase(), SessionPhase::Complete);

    clock.advance(Duration::from_secs(37));
    let summary = session.finish().expect("complete session finishes");
    assert_eq!(summary.elapsed, "00:00:37");
    assert_eq!(summary.penalty, "00:04:00");
    assert_eq!(summary.total, "00:04:37");
    assert_eq!(session.phase(), SessionPhase::Finished);

    // The clock is frozen after finishing
    clock.advance(Duration::from_secs(100));
    assert_eq!(session.tick().elapsed, "00:00:37");
    assert!(session.finish().is_none());
}

#[test]
fn test_minutes_seconds_penalty_display() {
    let clock = ManualClock::new();
    let config = config_with_codes(&["1"]).with_penalty_display(PenaltyDisplay::Ms);
    let mut session =
        PuzzleSession::with_time_source(config.build_riddles(), config.rules(), clock.clone());
    session.submit_code(0, "2");
    session.submit_code(0, "3");

    let snapshot = session.tick();
    assert_eq!(snapshot.penalty, "04:00");
    assert_eq!(snapshot.elapsed, "00:00:00");
}

#[derive(Default)]
struct Log {
    entries: Vec<String>,
}

impl SessionObserver for Log {
    fn on_snapshot(&mut self, snapshot: &DisplaySnapshot) {
        self.entries
            .push(format!("clock {} +{}", snapshot.elapsed, snapshot.penalty));
    }

    fn on_outcome(&mut self, riddle: usize, outcome: Outcome) {
        self.entries.push(format!("outcome {riddle} {outcome:?}"));
    }

    fn on_riddle_state(&mut self, riddle: usize, solved: bool) {
        self.entries.push(format!("riddle {riddle} solved={solved}"));
    }

    fn on_complete(&mut self) {
        self.entries.push("complete".into());
    }

    fn on_finish(&mut self, summary: &FinishSummary) {
        self.entries.push(format!("finish {}", summary.total));
    }
}

#[test]
fn test_event_contract_drives_observer() {
    let clock = ManualClock::new();
    let config = config_with_codes(&["7"]);
    let mut session =
        PuzzleSession::with_time_source(config.build_riddles(), config.rules(), clock.clone());
    let mut log = Log::default();

    session.dispatch(
        SessionEvent::Submit {
            riddle: 0,
            attempt: "7".into(),
        },
        &mut log,
    );
    clock.advance(Duration::from_secs(5));
    session.dispatch(SessionEvent::Tick, &mut log);
    let update = session.dispatch(SessionEvent::Finish, &mut log);

    assert!(matches!(update, SessionUpdate::Finished(ref s) if s.total == "00:00:05"));
    assert_eq!(
        log.entries,
        vec![
            "outcome 0 Correct",
            "riddle 0 solved=true",
            "clock 00:00:00 +00:00:00",
            "complete",
            "clock 00:00:05 +00:00:00",
            "clock 00:00:05 +00:00:00",
            "finish 00:00:05",
        ]
    );
}

#[test]
fn test_board_walkthrough_with_manual_clock() {
    let clock = ManualClock::new();
    let config = config_with_codes(&["12", "34"]);
    let mut board = Board::with_time_source(&config, clock.clone());

    // Wrong code clears the row and costs a penalty
    type_code(&mut board, "99");
    assert_eq!(board.submit(), Outcome::Mismatch);
    assert_eq!(board.view().entries[0].code(), "");

    // Backspace steps back over the last digit
    type_code(&mut board, "13");
    board.backspace();
    type_code(&mut board, "2");
    assert_eq!(board.submit(), Outcome::Correct);
    assert_eq!(board.selected(), 1);

    board.paste("34");
    assert_eq!(board.submit(), Outcome::Correct);
    assert!(board.view().finish_enabled);

    clock.advance(Duration::from_secs(61));
    board.tick();
    assert_eq!(board.view().clock.elapsed, "00:01:01");

    let summary = board.finish().expect("all solved");
    assert_eq!(summary.to_string(), "Time 00:01:01 | Penalty +00:02:00 | Total 00:03:01");
}

#[test]
fn test_app_keyboard_walkthrough() {
    let mut app = App::new(config_with_codes(&["5", "60"]));

    app.handle_event(key(KeyCode::Enter));
    assert_eq!(app.input_mode(), InputMode::Playing);

    let mut events = typed("5");
    events.push(key(KeyCode::Enter));
    events.extend(typed("60"));
    events.push(key(KeyCode::Enter));
    events.push(AppEvent::Tick);
    events.push(key(KeyCode::F(10)));
    for event in events {
        app.handle_event(event);
    }

    assert_eq!(app.input_mode(), InputMode::ShowingSummary);
    let board = app.board().expect("game running");
    assert_eq!(board.session().penalty_seconds(), 0);
    assert!(board.view().summary.is_some());

    app.handle_event(key(KeyCode::Enter));
    assert!(app.should_quit());
}
