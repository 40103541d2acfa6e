use klondike_rs::cards::Suit;
use klondike_rs::game::Game;
use klondike_rs::layout::{Column, Layout, PileId};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn assert_fresh_deal(layout: &Layout) {
    for col in Column::ALL {
        let pile = layout.tableau(col);
        assert_eq!(pile.len(), col.index() + 1, "column {col}");
        assert!(pile.top().unwrap().is_face_up(), "column {col} top must be visible");
        assert!(pile.iter().skip(1).all(|c| !c.is_face_up()), "column {col} body must be hidden");
    }
    assert_eq!(layout.stock().len(), 24);
    assert!(layout.stock().iter().all(|c| !c.is_face_up()));
    assert!(layout.talon().is_empty());
    for suit in Suit::ALL {
        assert!(layout.pile(PileId::Foundation(suit)).is_empty());
    }
    assert!(layout.is_complete_deck());
    assert_eq!(layout.card_count(), 52);
}

#[test]
fn every_seed_deals_the_standard_shape() {
    for seed in 0..50 {
        assert_fresh_deal(Game::with_seed(seed).layout());
    }
}

#[test]
fn injected_rng_controls_the_shuffle() {
    let mut a = ChaCha8Rng::seed_from_u64(99);
    let mut b = ChaCha8Rng::seed_from_u64(99);
    let ga = Game::with_rng(&mut a);
    let gb = Game::with_rng(&mut b);
    assert_eq!(ga.layout(), gb.layout());
    assert_fresh_deal(ga.layout());
}

#[test]
fn different_seeds_deal_different_games() {
    assert_ne!(Game::with_seed(1).layout(), Game::with_seed(2).layout());
}

#[test]
fn unseeded_games_are_well_formed() {
    let g = Game::new();
    assert_fresh_deal(g.layout());
    assert_eq!(g.moves(), 0);
}
