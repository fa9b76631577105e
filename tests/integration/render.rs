//! Rendering the game screens to a test backend

use std::time::Duration;

use crossterm::event::KeyCode;
use riddlerun::config::{Config, KeyCombo, KeyContext, RiddleConfig};
use riddlerun::game::ManualClock;
use riddlerun::ui::components::{ACCENT_ERROR, FLASH_FAILURE_BG, FLASH_SUCCESS_BG};
use riddlerun::ui::action::Action;
use riddlerun::{App, Board};

use super::common::fixtures::{config_with_codes, key, type_code, typed};
use super::common::terminal::{buffer_contains, render_app, render_game, row_text};

#[test]
fn test_start_screen_explains_rules() {
    let app = App::new(Config::default());
    let buffer = render_app(&app, 80, 24);

    assert!(buffer_contains(&buffer, "R I D D L E R U N"));
    assert!(buffer_contains(&buffer, "5 riddles stand between you and the exit."));
    assert!(buffer_contains(&buffer, "adds 00:02:00"));
    assert!(buffer_contains(&buffer, "A hint also costs 00:02:00."));
    assert!(buffer_contains(&buffer, "<CR>"));
    assert!(buffer_contains(&buffer, "start"));
}

#[test]
fn test_start_screen_without_hints() {
    let app = App::new(Config::default().with_hints_enabled(false));
    let buffer = render_app(&app, 80, 24);
    assert!(!buffer_contains(&buffer, "A hint also costs"));
}

#[test]
fn test_status_bar_line() {
    let clock = ManualClock::new();
    let mut board = Board::with_time_source(&config_with_codes(&["1", "22", "333"]), clock.clone());
    type_code(&mut board, "9");
    board.submit();
    type_code(&mut board, "1");
    board.submit();
    clock.advance(Duration::from_secs(65));
    board.tick();

    let buffer = render_game(&board, 80, 16);
    insta::assert_snapshot!(
        row_text(&buffer, 0).trim(),
        @"Time 00:01:05  │  Penalty +00:02:00  │  Solved 1/3"
    );
}

#[test]
fn test_digit_boxes_and_solved_marker() {
    let mut board = Board::with_time_source(&config_with_codes(&["12", "345"]), ManualClock::new());
    let buffer = render_game(&board, 60, 12);
    assert!(buffer_contains(&buffer, " Riddle 1 "));
    assert!(buffer_contains(&buffer, "Enter the 2-digit code"));
    assert!(buffer_contains(&buffer, "[_] [_]"));
    assert!(buffer_contains(&buffer, "[_] [_] [_]"));

    type_code(&mut board, "1");
    let buffer = render_game(&board, 60, 12);
    assert!(buffer_contains(&buffer, "[1] [_]"));

    type_code(&mut board, "2");
    board.submit();
    let buffer = render_game(&board, 60, 12);
    assert!(buffer_contains(&buffer, " Riddle 1 ✓ "));
}

#[test]
fn test_flash_tints_submitted_card() {
    let mut board = Board::with_time_source(&config_with_codes(&["12", "34"]), ManualClock::new());
    type_code(&mut board, "99");
    board.submit();

    // First card starts two rows down; (1, 3) is inside its border
    let buffer = render_game(&board, 40, 12);
    assert_eq!(buffer[(1, 3)].bg, FLASH_FAILURE_BG);
    assert_eq!(buffer[(0, 2)].fg, ACCENT_ERROR);

    let generation = board.view().flash.generation();
    board.expire_flash(generation);
    let buffer = render_game(&board, 40, 12);
    assert_ne!(buffer[(1, 3)].bg, FLASH_FAILURE_BG);
    assert_ne!(buffer[(0, 2)].fg, ACCENT_ERROR);

    type_code(&mut board, "12");
    board.submit();
    // Focus moves on to the second card; the solved first card flashes
    assert_eq!(board.selected(), 1);
    let buffer = render_game(&board, 40, 12);
    assert_eq!(buffer[(1, 3)].bg, FLASH_SUCCESS_BG);
    assert_ne!(buffer[(1, 7)].bg, FLASH_SUCCESS_BG);
}

#[test]
fn test_board_scrolls_to_selection() {
    let codes = ["1", "2", "3", "4", "5", "6"];
    let mut board = Board::with_time_source(&config_with_codes(&codes), ManualClock::new());
    for _ in 0..4 {
        board.next_riddle();
    }

    let buffer = render_game(&board, 40, 12);
    assert!(buffer_contains(&buffer, " Riddle 5 "));
    assert!(!buffer_contains(&buffer, " Riddle 1 "));
}

#[test]
fn test_hint_dialog_shows_text_and_cost() {
    let config = Config {
        riddles: vec![RiddleConfig {
            hint: Some("Count upwards.".into()),
            ..RiddleConfig::new("123")
        }],
        ..Config::default()
    };
    let mut app = App::new(config);
    app.handle_event(key(KeyCode::Enter));
    app.handle_event(key(KeyCode::Char('h')));

    let buffer = render_app(&app, 80, 24);
    assert!(buffer_contains(&buffer, " Hint "));
    assert!(buffer_contains(&buffer, "Count upwards."));
    assert!(buffer_contains(&buffer, "Penalty now +00:02:00"));
}

#[test]
fn test_summary_dialog_after_finish() {
    let mut app = App::new(config_with_codes(&["4"]));
    app.handle_event(key(KeyCode::Enter));
    for event in typed("4") {
        app.handle_event(event);
    }
    app.handle_event(key(KeyCode::Enter));

    let buffer = render_app(&app, 80, 24);
    assert!(buffer_contains(&buffer, "Ready to finish"));

    app.handle_event(key(KeyCode::Char('f')));
    let buffer = render_app(&app, 80, 24);
    assert!(buffer_contains(&buffer, " All riddles solved "));
    assert!(buffer_contains(&buffer, "Penalty   +00:00:00"));
    assert!(buffer_contains(&buffer, "Total"));
}

#[test]
fn test_dialog_instructions_follow_remapped_keys() {
    let mut config = config_with_codes(&["4"]);
    let dialog = config
        .keybindings
        .context
        .entry(KeyContext::Dialog)
        .or_default();
    dialog.retain(|_, action| *action != Action::Confirm);
    let y: KeyCombo = "y".parse().expect("valid key");
    dialog.insert(y, Action::Confirm);

    let mut app = App::new(config);
    app.handle_event(key(KeyCode::Enter));
    for event in typed("4") {
        app.handle_event(event);
    }
    app.handle_event(key(KeyCode::Enter));
    app.handle_event(key(KeyCode::Char('f')));

    let buffer = render_app(&app, 80, 24);
    assert!(buffer_contains(&buffer, "y quit │ <Esc> back"));
    assert!(!buffer_contains(&buffer, "<CR> quit"));
}
