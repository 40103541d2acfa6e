use crate::cards::{can_stack, Card, Rank, Suit};
use crate::layout::{Column, Layout, PileId, Transfer};
use crate::pile::Pile;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use tracing::{debug, info, trace};

/// A pile as named by a move request.
///
/// `Foundation` is destination-only and always means the foundation of the
/// moved card's suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileRef {
    Stock,
    Talon,
    Foundation,
    Tableau(Column),
}

impl fmt::Display for PileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileRef::Stock => f.write_str("stock"),
            PileRef::Talon => f.write_str("talon"),
            PileRef::Foundation => f.write_str("foundation"),
            PileRef::Tableau(col) => write!(f, "tableau {col}"),
        }
    }
}

/// Why a move was refused. Refusals never change the layout.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("cannot move from {from} to {to}")]
    Unsupported { from: PileRef, to: PileRef },
    #[error("{0} is empty")]
    EmptySource(PileRef),
    #[error("top card of {0} is face down")]
    FaceDown(PileRef),
    #[error("{card} cannot go on {to}")]
    Tableau { card: String, to: PileRef },
    #[error("no face-up card in {from} can go on {to}")]
    NoRun { from: PileRef, to: PileRef },
    #[error("{card} does not continue its foundation")]
    Foundation { card: String },
}

/// What a call to [`Game::flip_stock`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StockFlip {
    /// One card went from the stock to the talon.
    Drawn,
    /// The empty stock was refilled from the talon, then one card was drawn.
    Recycled,
    /// Stock and talon are both empty; nothing happened.
    Exhausted,
}

/// A validated move, ready to execute.
#[derive(Debug, Clone, Copy)]
struct Plan {
    from: PileId,
    to: PileId,
    count: usize,
    how: Transfer,
}

/// One game of Klondike: the layout plus the RNG used for redeals.
#[derive(Debug, Clone)]
pub struct Game {
    layout: Layout,
    rng: ChaCha8Rng,
    moves: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Deal a new game from a randomly seeded RNG.
    pub fn new() -> Self {
        Self::from_chacha(ChaCha8Rng::seed_from_u64(rand::random()))
    }

    /// Deal a reproducible game.
    ///
    /// ```
    /// use klondike_rs::game::Game;
    ///
    /// let a = Game::with_seed(7);
    /// let b = Game::with_seed(7);
    /// assert_eq!(a.layout(), b.layout());
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        debug!(seed, "seeded deal");
        Self::from_chacha(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Deal using `rng` as the permutation source.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let layout = Layout::deal_with(rng);
        let rng = ChaCha8Rng::seed_from_u64(rng.random());
        debug!("dealt from caller rng");
        Self { layout, rng, moves: 0 }
    }

    /// Take over an arranged layout as-is; no deal happens.
    pub fn from_layout(layout: Layout) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(rand::random());
        Self { layout, rng, moves: 0 }
    }

    fn from_chacha(mut rng: ChaCha8Rng) -> Self {
        let layout = Layout::deal_with(&mut rng);
        debug!("dealt");
        Self { layout, rng, moves: 0 }
    }

    /// Throw away the current layout and deal again.
    pub fn new_game(&mut self) {
        self.layout = Layout::deal_with(&mut self.rng);
        self.moves = 0;
        debug!("new game dealt");
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Successful moves and stock flips since the deal.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Move cards from `from` to `to` if the rules allow it.
    ///
    /// Returns false and leaves every pile untouched when they don't. Call
    /// [`Game::check_tableau`] afterwards to turn up a newly exposed card.
    pub fn move_cards(&mut self, from: PileRef, to: PileRef) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Like [`Game::move_cards`], reporting how many cards moved or why nothing did.
    pub fn try_move(&mut self, from: PileRef, to: PileRef) -> Result<usize, MoveError> {
        let plan = match self.plan(from, to) {
            Ok(plan) => plan,
            Err(err) => {
                trace!(%from, %to, reason = %err, "move rejected");
                return Err(err);
            }
        };
        self.layout.transfer(plan.from, plan.to, plan.count, plan.how);
        self.moves += 1;
        debug!(%from, %to, count = plan.count, "move");
        Ok(plan.count)
    }

    fn plan(&self, from: PileRef, to: PileRef) -> Result<Plan, MoveError> {
        let src_id = match from {
            PileRef::Talon => PileId::Talon,
            PileRef::Tableau(col) => PileId::Tableau(col),
            PileRef::Stock | PileRef::Foundation => {
                return Err(MoveError::Unsupported { from, to });
            }
        };
        let src = self.layout.pile(src_id);
        let top = *src.top().ok_or(MoveError::EmptySource(from))?;
        if !top.is_face_up() {
            return Err(MoveError::FaceDown(from));
        }

        match to {
            PileRef::Tableau(dest_col) if from != to => {
                let dest_top = self.layout.tableau(dest_col).top().copied();
                let to_id = PileId::Tableau(dest_col);
                if from == PileRef::Talon {
                    if !lands_on(top, dest_top) {
                        return Err(MoveError::Tableau { card: top.to_string(), to });
                    }
                    return Ok(Plan { from: src_id, to: to_id, count: 1, how: Transfer::Deal });
                }
                let count = run_depth(src, dest_top).ok_or(MoveError::NoRun { from, to })?;
                Ok(Plan { from: src_id, to: to_id, count, how: Transfer::Run })
            }
            PileRef::Foundation => {
                let suit = top.suit();
                if self.layout.foundation(suit).len() != top.rank().index() {
                    return Err(MoveError::Foundation { card: top.to_string() });
                }
                Ok(Plan { from: src_id, to: PileId::Foundation(suit), count: 1, how: Transfer::Deal })
            }
            _ => Err(MoveError::Unsupported { from, to }),
        }
    }

    /// Draw one card from the stock onto the talon, face up.
    ///
    /// An empty stock is first refilled from the talon, face down, so that
    /// the cards come around again in the order they were first drawn.
    pub fn flip_stock(&mut self) -> StockFlip {
        let mut outcome = StockFlip::Drawn;
        if self.layout.stock().is_empty() {
            let n = self.layout.talon().len();
            if n == 0 {
                return StockFlip::Exhausted;
            }
            self.layout.transfer(PileId::Talon, PileId::Stock, n, Transfer::Deal);
            self.layout.pile_mut(PileId::Stock).flip_all();
            debug!(cards = n, "talon recycled into stock");
            outcome = StockFlip::Recycled;
        }
        self.layout.transfer(PileId::Stock, PileId::Talon, 1, Transfer::Deal);
        if let Some(card) = self.layout.pile_mut(PileId::Talon).top_mut() {
            if !card.is_face_up() {
                card.flip();
            }
        }
        self.moves += 1;
        outcome
    }

    /// Turn up the top card of every tableau column that shows a face-down card.
    pub fn check_tableau(&mut self) {
        for col in Column::ALL {
            if let Some(card) = self.layout.pile_mut(PileId::Tableau(col)).top_mut() {
                if !card.is_face_up() {
                    card.flip();
                    trace!(column = %col, "revealed top card");
                }
            }
        }
    }

    /// True once every foundation holds its full suit.
    pub fn victory(&self) -> bool {
        let won = Suit::ALL.iter().all(|&s| self.layout.foundation(s).len() == Rank::ALL.len());
        if won {
            info!(moves = self.moves, "all foundations complete");
        }
        won
    }
}

/// Whether `card` may start on a tableau column whose top is `dest_top`.
fn lands_on(card: Card, dest_top: Option<Card>) -> bool {
    match dest_top {
        None => card.rank() == Rank::King,
        Some(base) => can_stack(card, base),
    }
}

/// Number of cards to lift from `src` onto `dest_top`.
///
/// Walks down from the top through face-up cards and stops at the first one
/// that can land on the destination. Only that landing card is checked; the
/// cards above it are trusted to be a properly built run already.
fn run_depth(src: &Pile, dest_top: Option<Card>) -> Option<usize> {
    for (depth, card) in src.iter().enumerate() {
        if !card.is_face_up() {
            return None;
        }
        if lands_on(*card, dest_top) {
            return Some(depth + 1);
        }
    }
    None
}
