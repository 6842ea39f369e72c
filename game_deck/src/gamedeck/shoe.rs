//! Dealing shoe with a cut card.

use log::debug;
use rand::Rng;

use super::{
    cut_card::CutCardCalculator,
    deck::{CardSource, Deck},
    errors::DeckResult,
};
pub use crate::constants::NO_CUT_CARD;

/// A shoe holds the cards for a casino-style game and knows where its cut
/// card sits.
///
/// `cut_card_position` counts cards remaining: with a position of 10 the cut
/// card is out once fewer than 10 cards are left. A position of
/// [`NO_CUT_CARD`] never comes out, not even on an empty shoe. Positions
/// larger than the shoe are allowed and mean the cut card is out from the
/// start.
///
/// The shoe always owns its cards. Constructors copy their input, so nothing
/// the caller holds is changed by drawing from the shoe, and cloning a shoe
/// gives an independent one with the same threshold.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shoe<C> {
    deck: Deck<C>,
    cut_card_position: usize,
}

impl<C: Clone> Shoe<C> {
    /// Create a shoe from cards in top-first order.
    pub fn new(cards: impl IntoIterator<Item = C>, cut_card_position: usize) -> Self {
        Self {
            deck: Deck::new(cards),
            cut_card_position,
        }
    }

    /// Create a shoe holding a copy of `deck`'s remaining cards.
    pub fn from_deck(deck: &Deck<C>, cut_card_position: usize) -> Self {
        Self::new(deck.export_cards(), cut_card_position)
    }

    /// Create a shoe whose cut card is placed by `calculator` for the shoe's
    /// own size.
    ///
    /// # Errors
    ///
    /// * `DeckError::InvalidArgument` - If `cards` is empty
    pub fn with_calculator<R: Rng>(
        cards: impl IntoIterator<Item = C>,
        calculator: &mut CutCardCalculator<R>,
    ) -> DeckResult<Self> {
        let deck = Deck::new(cards);
        let cut_card_position = calculator.calculate_position(deck.len())?;
        debug!(
            "Built {}-card shoe with cut card at {cut_card_position}",
            deck.len()
        );
        Ok(Self {
            deck,
            cut_card_position,
        })
    }

    pub fn cut_card_position(&self) -> usize {
        self.cut_card_position
    }

    /// Whether fewer cards remain than the cut-card position.
    pub fn is_cut_card_out(&self) -> bool {
        self.deck.len() < self.cut_card_position
    }

    /// # Errors
    ///
    /// * `DeckError::EmptyContainer` - If the shoe has no cards
    pub fn draw(&mut self) -> DeckResult<C> {
        self.deck.draw()
    }

    /// # Errors
    ///
    /// * `DeckError::InsufficientCards` - If fewer than `count` cards remain
    pub fn draw_many(&mut self, count: usize) -> DeckResult<Vec<C>> {
        self.deck.draw_many(count)
    }

    /// Look at the top card without drawing it.
    ///
    /// # Errors
    ///
    /// * `DeckError::EmptyContainer` - If the shoe has no cards
    pub fn peek(&self) -> DeckResult<&C> {
        self.deck.peek_top()
    }

    pub fn export_cards(&self) -> Vec<C> {
        self.deck.export_cards()
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }
}

impl<C: Clone> CardSource for Shoe<C> {
    type Card = C;

    fn draw(&mut self) -> DeckResult<C> {
        Shoe::draw(self)
    }

    fn draw_many(&mut self, count: usize) -> DeckResult<Vec<C>> {
        Shoe::draw_many(self, count)
    }

    fn len(&self) -> usize {
        Shoe::len(self)
    }

    fn export_cards(&self) -> Vec<C> {
        Shoe::export_cards(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamedeck::errors::DeckError;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_cut_card_comes_out_below_threshold() {
        let mut shoe = Shoe::new(1..=10, 8);
        assert!(!shoe.is_cut_card_out());
        shoe.draw_many(2).unwrap();
        assert_eq!(shoe.len(), 8);
        assert!(!shoe.is_cut_card_out());
        shoe.draw().unwrap();
        assert!(shoe.is_cut_card_out());
    }

    #[test]
    fn test_no_cut_card_never_comes_out() {
        let mut shoe = Shoe::new(1..=5, NO_CUT_CARD);
        while !shoe.is_empty() {
            assert!(!shoe.is_cut_card_out());
            shoe.draw().unwrap();
        }
        assert!(!shoe.is_cut_card_out());
    }

    #[test]
    fn test_threshold_above_size_is_out_immediately() {
        let shoe = Shoe::new(1..=5, 6);
        assert!(shoe.is_cut_card_out());
    }

    #[test]
    fn test_from_deck_copies() {
        let mut deck = Deck::new(vec!['a', 'b', 'c']);
        let mut shoe = Shoe::from_deck(&deck, 1);

        assert_eq!(shoe.draw(), Ok('a'));
        assert_eq!(deck.len(), 3);

        deck.draw_many(3).unwrap();
        assert_eq!(shoe.export_cards(), vec!['b', 'c']);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Shoe::new(vec![1, 2, 3], 2);
        let copy = original.clone();
        original.draw().unwrap();

        assert_eq!(copy.len(), 3);
        assert_eq!(copy.cut_card_position(), 2);
        assert_eq!(copy.peek(), Ok(&1));
    }

    #[test]
    fn test_delegated_errors() {
        let mut shoe: Shoe<u8> = Shoe::new(vec![], 0);
        assert_eq!(shoe.draw(), Err(DeckError::EmptyContainer));
        assert_eq!(shoe.peek(), Err(DeckError::EmptyContainer));
        assert_eq!(
            shoe.draw_many(1),
            Err(DeckError::InsufficientCards {
                requested: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_with_calculator() {
        let mut calculator =
            CutCardCalculator::with_rng(0.5, 0.1, StdRng::seed_from_u64(11)).unwrap();
        let shoe = Shoe::with_calculator(0..100, &mut calculator).unwrap();
        assert!((40..=60).contains(&shoe.cut_card_position()));

        let empty = Shoe::with_calculator(Vec::<u8>::new(), &mut calculator);
        assert!(matches!(empty, Err(DeckError::InvalidArgument(_))));
    }
}
