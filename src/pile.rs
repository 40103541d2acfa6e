use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// An ordered stack of cards that owns its cards.
///
/// Position 0 is the top: the most recently placed card and the first one
/// drawn. Cards only leave a pile by being transferred into another pile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    // bottom first; the top card is the last element
    cards: Vec<Card>,
}

impl Pile {
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Build a pile from cards listed bottom to top.
    ///
    /// ```
    /// use klondike_rs::cards::parse_cards;
    /// use klondike_rs::pile::Pile;
    ///
    /// let pile = Pile::from_cards(parse_cards("Ks Qh").unwrap());
    /// assert_eq!(pile.top().unwrap().to_string(), "Q of Hearts");
    /// ```
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// The 52-card deck, all face up, with the Ace of Spades on top.
    ///
    /// ```
    /// use klondike_rs::pile::Pile;
    ///
    /// let deck = Pile::standard_deck();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard_deck() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        cards.reverse();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// The card `depth` positions below the top, without removing it.
    pub fn get(&self, depth: usize) -> Option<&Card> {
        let idx = self.cards.len().checked_sub(depth + 1)?;
        self.cards.get(idx)
    }

    /// Cards from the top down.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + ExactSizeIterator {
        self.cards.iter().rev()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Toggle the face of every card in the pile.
    pub fn flip_all(&mut self) {
        for card in &mut self.cards {
            card.flip();
        }
    }

    /// Deal `count` cards one at a time onto `dest`.
    ///
    /// The order reverses: the card that was on top of `self` ends up
    /// deepest among the dealt cards, the last one dealt lands on top.
    ///
    /// # Panics
    /// If `self` holds fewer than `count` cards.
    pub fn deal_onto(&mut self, dest: &mut Pile, count: usize) {
        assert!(count <= self.len(), "not enough cards in pile: need {count}, have {}", self.len());
        for _ in 0..count {
            if let Some(card) = self.cards.pop() {
                dest.cards.push(card);
            }
        }
    }

    /// Lift the top `count` cards as one unit onto `dest`, keeping their order.
    ///
    /// # Panics
    /// If `self` holds fewer than `count` cards.
    pub fn move_run_onto(&mut self, dest: &mut Pile, count: usize) {
        assert!(count <= self.len(), "not enough cards in pile: need {count}, have {}", self.len());
        let run = self.cards.split_off(self.cards.len() - count);
        dest.cards.extend(run);
    }

    /// Take every card out, leaving the pile empty.
    pub(crate) fn take_all(&mut self) -> Pile {
        Pile { cards: std::mem::take(&mut self.cards) }
    }
}
