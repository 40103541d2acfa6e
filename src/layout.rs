//! The fixed set of piles on the table and the initial deal.

use crate::cards::Suit;
use crate::pile::Pile;
use rand::Rng;
use std::fmt;

pub const TABLEAU_COLUMNS: usize = 7;

/// Size of a complete deal: every rank of every suit exactly once.
pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColumnError {
    #[error("tableau column out of range: {index} (expected 0..{TABLEAU_COLUMNS})")]
    OutOfRange { index: usize },
    #[error("column {number} does not exist (expected 1 to {TABLEAU_COLUMNS})")]
    NoSuchColumn { number: usize },
}

/// A tableau column index, always in `0..7`.
///
/// Displays 1-based, the way columns are numbered for players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Column(u8);

impl Column {
    pub const ALL: [Column; TABLEAU_COLUMNS] =
        [Column(0), Column(1), Column(2), Column(3), Column(4), Column(5), Column(6)];

    pub fn new(index: usize) -> Result<Self, ColumnError> {
        Column::ALL.get(index).copied().ok_or(ColumnError::OutOfRange { index })
    }

    /// Column from a 1-based player-facing number.
    pub fn from_number(number: usize) -> Result<Self, ColumnError> {
        number
            .checked_sub(1)
            .and_then(|index| Column::ALL.get(index).copied())
            .ok_or(ColumnError::NoSuchColumn { number })
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// Names one concrete pile of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileId {
    Stock,
    Talon,
    Foundation(Suit),
    Tableau(Column),
}

impl PileId {
    /// Every pile of the layout, stock first.
    pub fn all() -> impl Iterator<Item = PileId> {
        [PileId::Stock, PileId::Talon]
            .into_iter()
            .chain(Suit::ALL.into_iter().map(PileId::Foundation))
            .chain(Column::ALL.into_iter().map(PileId::Tableau))
    }
}

/// How cards travel between piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transfer {
    /// One card at a time; reverses the transferred cards.
    Deal,
    /// As a unit; keeps the transferred cards in order.
    Run,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    stock: Pile,
    talon: Pile,
    foundations: [Pile; 4],
    tableau: [Pile; TABLEAU_COLUMNS],
}

impl Layout {
    /// A layout with every pile empty. Useful for setting up positions by hand.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shuffle a fresh deck with `rng` and deal it.
    ///
    /// Column `x` receives `x` face-down cards and then one face-up card;
    /// the remaining 24 cards stay in the stock, face down.
    pub fn deal_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut stock = Pile::standard_deck();
        stock.shuffle_with(rng);
        Self::deal_from(stock)
    }

    /// Deal an already ordered deck without shuffling it.
    pub fn deal_from(deck: Pile) -> Self {
        let mut layout = Layout { stock: deck, ..Layout::default() };
        for col in Column::ALL {
            let dest = PileId::Tableau(col);
            layout.transfer(PileId::Stock, dest, col.index(), Transfer::Deal);
            layout.pile_mut(dest).flip_all();
            layout.transfer(PileId::Stock, dest, 1, Transfer::Deal);
        }
        layout.stock.flip_all();
        layout
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn talon(&self) -> &Pile {
        &self.talon
    }

    pub fn foundation(&self, suit: Suit) -> &Pile {
        &self.foundations[suit.index()]
    }

    pub fn tableau(&self, col: Column) -> &Pile {
        &self.tableau[col.index()]
    }

    pub fn pile(&self, id: PileId) -> &Pile {
        match id {
            PileId::Stock => &self.stock,
            PileId::Talon => &self.talon,
            PileId::Foundation(suit) => &self.foundations[suit.index()],
            PileId::Tableau(col) => &self.tableau[col.index()],
        }
    }

    /// Direct mutable access, for arranging positions outside of play.
    pub fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match id {
            PileId::Stock => &mut self.stock,
            PileId::Talon => &mut self.talon,
            PileId::Foundation(suit) => &mut self.foundations[suit.index()],
            PileId::Tableau(col) => &mut self.tableau[col.index()],
        }
    }

    /// Move `count` cards from the top of `from` to the top of `to`.
    ///
    /// # Panics
    /// If `from == to` or `from` holds fewer than `count` cards.
    pub(crate) fn transfer(&mut self, from: PileId, to: PileId, count: usize, how: Transfer) {
        assert_ne!(from, to, "cannot transfer a pile onto itself");
        let mut src = self.pile_mut(from).take_all();
        let dest = self.pile_mut(to);
        match how {
            Transfer::Deal => src.deal_onto(dest, count),
            Transfer::Run => src.move_run_onto(dest, count),
        }
        *self.pile_mut(from) = src;
    }

    /// Total number of cards across all piles.
    pub fn card_count(&self) -> usize {
        PileId::all().map(|id| self.pile(id).len()).sum()
    }

    /// True when the piles together hold each of the 52 cards exactly once.
    pub fn is_complete_deck(&self) -> bool {
        let mut seen = [false; DECK_SIZE];
        let mut total = 0usize;
        for id in PileId::all() {
            for card in self.pile(id).iter() {
                let slot = card.suit().index() * 13 + card.rank().index();
                if seen[slot] {
                    return false;
                }
                seen[slot] = true;
                total += 1;
            }
        }
        total == DECK_SIZE
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Foundations")?;
        for suit in Suit::ALL {
            writeln!(f, "{suit} foundation.")?;
            for card in self.foundation(suit).iter() {
                writeln!(f, "{card}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "Stock")?;
        for card in self.stock.iter() {
            writeln!(f, "{card}")?;
        }

        writeln!(f)?;
        writeln!(f, "Talon")?;
        for card in self.talon.iter() {
            writeln!(f, "{card}")?;
        }

        writeln!(f)?;
        for col in Column::ALL {
            writeln!(f, "Tableau Pile {col}")?;
            let mut hidden = 0usize;
            for card in self.tableau(col).iter() {
                if card.is_face_up() {
                    writeln!(f, "{card}")?;
                } else {
                    hidden += 1;
                }
            }
            if hidden > 0 {
                writeln!(f, "Upside down cards ({hidden})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Card, Rank};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn column_bounds() {
        assert_eq!(Column::new(6).unwrap().index(), 6);
        assert_eq!(Column::new(7), Err(ColumnError::OutOfRange { index: 7 }));
        assert_eq!(Column::from_number(1).unwrap().index(), 0);
        assert_eq!(Column::from_number(0), Err(ColumnError::NoSuchColumn { number: 0 }));
        assert_eq!(Column::from_number(8), Err(ColumnError::NoSuchColumn { number: 8 }));
        assert_eq!(Column::new(2).unwrap().to_string(), "3");
    }

    #[test]
    fn pile_ids_cover_thirteen_piles() {
        assert_eq!(PileId::all().count(), 13);
    }

    #[test]
    fn deal_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let layout = Layout::deal_with(&mut rng);
        for col in Column::ALL {
            let pile = layout.tableau(col);
            assert_eq!(pile.len(), col.index() + 1);
            assert!(pile.top().unwrap().is_face_up());
            assert_eq!(pile.iter().filter(|c| c.is_face_up()).count(), 1);
        }
        assert_eq!(layout.stock().len(), 24);
        assert!(layout.stock().iter().all(|c| !c.is_face_up()));
        assert!(layout.talon().is_empty());
        assert!(Suit::ALL.iter().all(|&s| layout.foundation(s).is_empty()));
        assert!(layout.is_complete_deck());
    }

    #[test]
    fn deal_from_unshuffled_deck_is_sequential() {
        // Ace of Spades is on top of the unshuffled deck and goes straight to column 1.
        let layout = Layout::deal_from(Pile::standard_deck());
        assert_eq!(layout.tableau(Column::ALL[0]).top(), Some(&Card::new(Rank::Ace, Suit::Spades)));
        // Column 2 receives 2s face down, then 3s face up.
        let col = layout.tableau(Column::ALL[1]);
        assert_eq!(col.top(), Some(&Card::new(Rank::Three, Suit::Spades)));
        assert_eq!(col.get(1), Some(&Card::face_down(Rank::Two, Suit::Spades)));
        // Column 3: 4s then 5s face down (5s nearest the top), then 6s.
        let col = layout.tableau(Column::ALL[2]);
        assert_eq!(col.get(1).map(|c| c.rank()), Some(Rank::Five));
        assert_eq!(col.get(2).map(|c| c.rank()), Some(Rank::Four));
    }

    #[test]
    fn transfer_moves_ownership() {
        let mut layout = Layout::empty();
        *layout.pile_mut(PileId::Talon) = Pile::from_cards(parse_cards("2h 3h").unwrap());
        layout.transfer(PileId::Talon, PileId::Stock, 2, Transfer::Deal);
        assert!(layout.talon().is_empty());
        assert_eq!(layout.stock().top().map(|c| c.rank()), Some(Rank::Two));
        assert_eq!(layout.card_count(), 2);
    }

    #[test]
    fn duplicate_card_is_not_a_complete_deck() {
        let mut layout = Layout::deal_from(Pile::standard_deck());
        assert!(layout.is_complete_deck());
        layout.pile_mut(PileId::Talon).push(Card::new(Rank::Ace, Suit::Spades));
        assert!(!layout.is_complete_deck());
    }

    #[test]
    fn display_lists_sections() {
        let layout = Layout::deal_from(Pile::standard_deck());
        let text = layout.to_string();
        assert!(text.starts_with("Foundations\nSpades foundation.\n"));
        assert!(text.contains("Tableau Pile 1\nA of Spades\n\n"));
        assert!(text.contains("Tableau Pile 7\n"));
        assert!(text.contains("Upside down cards (6)"));
        assert_eq!(text.matches("Upside-down card").count(), 24);
    }
}
