// Game engine API boundary. Front ends (the TUI, the line shell, tests) drive
// a game through this trait instead of reaching into `Game` directly, so a
// different front end can be dropped in without touching the rules.

use crate::game::{MoveError, PileRef, StockFlip};
use crate::layout::Layout;

pub trait GameEngine {
    // Lifecycle
    fn new_game(&mut self);

    // Mutations
    fn move_cards(&mut self, from: PileRef, to: PileRef) -> bool;
    fn try_move(&mut self, from: PileRef, to: PileRef) -> Result<usize, MoveError>;
    fn flip_stock(&mut self) -> StockFlip;
    fn check_tableau(&mut self);

    // Queries
    fn victory(&self) -> bool;
    fn layout(&self) -> &Layout;
    fn moves(&self) -> u32;
}

impl GameEngine for crate::game::Game {
    fn new_game(&mut self) {
        self.new_game();
    }

    fn move_cards(&mut self, from: PileRef, to: PileRef) -> bool {
        self.move_cards(from, to)
    }
    fn try_move(&mut self, from: PileRef, to: PileRef) -> Result<usize, MoveError> {
        self.try_move(from, to)
    }
    fn flip_stock(&mut self) -> StockFlip {
        self.flip_stock()
    }
    fn check_tableau(&mut self) {
        self.check_tableau();
    }

    fn victory(&self) -> bool {
        self.victory()
    }
    fn layout(&self) -> &Layout {
        self.layout()
    }
    fn moves(&self) -> u32 {
        self.moves()
    }
}
