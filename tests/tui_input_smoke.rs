use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use klondike_rs::game::Game;
use klondike_rs::tui::app::{AppState, InputAction, Scene};
use klondike_rs::tui::controller::map_key;

fn setup_app() -> AppState {
    AppState::new(Game::with_seed(12))
}

fn type_line(app: &mut AppState, line: &str) -> bool {
    for c in line.chars() {
        let _ = app.handle_input(InputAction::Char(c));
    }
    app.handle_input(InputAction::Submit)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn typing_and_editing_the_prompt() {
    let mut app = setup_app();
    let _ = app.handle_input(InputAction::Char('m'));
    let _ = app.handle_input(InputAction::Char(' '));
    let _ = app.handle_input(InputAction::Char('1'));
    assert_eq!(app.input(), "m 1");
    let _ = app.handle_input(InputAction::Backspace);
    assert_eq!(app.input(), "m ");
    let _ = app.handle_input(InputAction::Clear);
    assert_eq!(app.input(), "");
}

#[test]
fn bad_command_shows_an_error() {
    let mut app = setup_app();
    assert!(!type_line(&mut app, "m 1"));
    assert!(app.status_is_error());
    assert_eq!(app.status(), Some("Invalid command: 'm' needs a pile"));
    assert!(matches!(app.scene, Scene::Playing));
}

#[test]
fn quit_and_help_commands() {
    let mut app = setup_app();
    let _ = type_line(&mut app, "?");
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(!app.help_open());
    let _ = type_line(&mut app, "q");
    assert!(app.should_quit());
}

#[test]
fn new_game_resets_the_board() {
    let mut app = setup_app();
    assert!(type_line(&mut app, "f"));
    assert_eq!(app.game.moves(), 1);
    assert!(type_line(&mut app, "n"));
    assert_eq!(app.game.moves(), 0);
    assert_eq!(app.status(), Some("New game dealt."));
}

#[test]
fn key_mapping() {
    let mut app = setup_app();
    assert_eq!(map_key(&app, key(KeyCode::Char('f'))), Some(InputAction::Char('f')));
    assert_eq!(map_key(&app, key(KeyCode::Enter)), Some(InputAction::Submit));
    assert_eq!(map_key(&app, key(KeyCode::Esc)), Some(InputAction::Clear));
    assert_eq!(map_key(&app, key(KeyCode::Tab)), None);
    assert_eq!(
        map_key(&app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(InputAction::Quit)
    );
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert_eq!(map_key(&app, key(KeyCode::Esc)), Some(InputAction::ToggleHelp));
}
