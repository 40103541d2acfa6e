use klondike_rs::cards::{Card, Rank, Suit};
use klondike_rs::command::{Command, Outcome};
use klondike_rs::engine::GameEngine;
use klondike_rs::game::Game;
use klondike_rs::layout::{Layout, PileId};
use klondike_rs::pile::Pile;
use klondike_rs::shell;
use std::io::Cursor;

fn almost_won() -> Game {
    let mut layout = Layout::empty();
    for suit in Suit::ALL {
        let ranks = if suit == Suit::Clubs { &Rank::ALL[..12] } else { &Rank::ALL[..] };
        *layout.pile_mut(PileId::Foundation(suit)) =
            Pile::from_cards(ranks.iter().map(|&r| Card::new(r, suit)).collect());
    }
    layout.pile_mut(PileId::Talon).push(Card::new(Rank::King, Suit::Clubs));
    Game::from_layout(layout)
}

fn run_script(game: &mut Game, script: &str) -> String {
    let mut out = Vec::new();
    shell::run(game, Cursor::new(script.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn building_the_last_king_wins() {
    let mut g = almost_won();
    let text = run_script(&mut g, "b 1\nb t\nf\n");
    assert!(text.contains("Invalid move: tableau 1 is empty."));
    assert!(text.trim_end().ends_with("Yay you won!"));
    assert!(g.victory());
    // the trailing flip is never read
    assert!(g.layout().stock().is_empty());
}

#[test]
fn commands_drive_any_engine() {
    fn drive(engine: &mut dyn GameEngine) -> Outcome {
        "b t".parse::<Command>().unwrap().apply(engine)
    }
    let mut g = almost_won();
    assert_eq!(drive(&mut g), Outcome::Won);
}

#[test]
fn new_game_command_redeals() {
    let mut g = almost_won();
    let text = run_script(&mut g, "n\nq\n");
    assert!(text.contains("New game dealt."));
    assert_eq!(g.layout().stock().len(), 24);
    assert!(!g.victory());
}

#[test]
fn help_prints_menu_again_without_a_status_line() {
    let mut g = Game::with_seed(1);
    let text = run_script(&mut g, "?\nq\n");
    assert_eq!(text.matches("Action Menu").count(), 2);
}
