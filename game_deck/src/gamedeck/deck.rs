//! Ordered, drawable deck of cards.

use std::collections::VecDeque;

use super::errors::{DeckError, DeckResult};
use crate::cards::{Card, DeckTemplate};

/// Anything cards can be dealt from.
///
/// Implemented by [`Deck`] and [`Shoe`](super::shoe::Shoe) so the dealer can
/// work against either.
pub trait CardSource {
    type Card;

    /// Remove and return the top card.
    fn draw(&mut self) -> DeckResult<Self::Card>;

    /// Remove and return the top `count` cards, all or nothing.
    fn draw_many(&mut self, count: usize) -> DeckResult<Vec<Self::Card>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Owned copy of the remaining cards, top first.
    fn export_cards(&self) -> Vec<Self::Card>;
}

/// A mutable, ordered sequence of cards. The first card is the top of the
/// deck (next to be drawn) and the last card is the bottom.
///
/// The deck treats its cards as opaque tokens; any `Clone + Eq` type works.
/// Cloning a deck produces independent storage holding the same cards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deck<C> {
    cards: VecDeque<C>,
}

impl<C: Clone> Deck<C> {
    /// Create a deck from cards in top-first order.
    pub fn new(cards: impl IntoIterator<Item = C>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove and return the top card.
    ///
    /// # Errors
    ///
    /// * `DeckError::EmptyContainer` - If the deck has no cards
    pub fn draw(&mut self) -> DeckResult<C> {
        self.cards.pop_front().ok_or(DeckError::EmptyContainer)
    }

    /// Remove and return the top `count` cards, preserving their order.
    ///
    /// The size check happens before anything is removed, so on failure the
    /// deck is unchanged. Drawing zero cards always succeeds.
    ///
    /// # Errors
    ///
    /// * `DeckError::InsufficientCards` - If fewer than `count` cards remain
    pub fn draw_many(&mut self, count: usize) -> DeckResult<Vec<C>> {
        let available = self.cards.len();
        if available < count {
            return Err(DeckError::InsufficientCards {
                requested: count,
                available,
            });
        }
        Ok(self.cards.drain(..count).collect())
    }

    /// # Errors
    ///
    /// * `DeckError::EmptyContainer` - If the deck has no cards
    pub fn peek_top(&self) -> DeckResult<&C> {
        self.cards.front().ok_or(DeckError::EmptyContainer)
    }

    /// # Errors
    ///
    /// * `DeckError::EmptyContainer` - If the deck has no cards
    pub fn peek_bottom(&self) -> DeckResult<&C> {
        self.cards.back().ok_or(DeckError::EmptyContainer)
    }

    /// Snapshot of the current order, top first. The snapshot doesn't share
    /// storage with the deck.
    pub fn export_cards(&self) -> Vec<C> {
        self.cards.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.cards.iter()
    }
}

impl Deck<Card> {
    /// Unshuffled deck holding every card of `template`.
    pub fn from_template(template: DeckTemplate) -> Self {
        Self::new(template.cards())
    }
}

impl<C: Clone> CardSource for Deck<C> {
    type Card = C;

    fn draw(&mut self) -> DeckResult<C> {
        Deck::draw(self)
    }

    fn draw_many(&mut self, count: usize) -> DeckResult<Vec<C>> {
        Deck::draw_many(self, count)
    }

    fn len(&self) -> usize {
        Deck::len(self)
    }

    fn export_cards(&self) -> Vec<C> {
        Deck::export_cards(self)
    }
}

impl<C> Default for Deck<C> {
    fn default() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }
}

impl<C> From<Vec<C>> for Deck<C> {
    fn from(value: Vec<C>) -> Self {
        Self {
            cards: value.into(),
        }
    }
}

impl<C> FromIterator<C> for Deck<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn three_cards() -> Vec<Card> {
        vec![
            Card::new(Rank::Ace, Suit::Spade),
            Card::new(Rank::King, Suit::Heart),
            Card::new(Rank::Queen, Suit::Diamond),
        ]
    }

    #[test]
    fn test_draw_takes_from_top() {
        let mut deck = Deck::new(three_cards());
        assert_eq!(deck.draw(), Ok(Card::new(Rank::Ace, Suit::Spade)));
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.peek_top(), Ok(&Card::new(Rank::King, Suit::Heart)));
        assert_eq!(deck.peek_bottom(), Ok(&Card::new(Rank::Queen, Suit::Diamond)));
    }

    #[test]
    fn test_empty_deck_errors() {
        let mut deck: Deck<Card> = Deck::default();
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(DeckError::EmptyContainer));
        assert_eq!(deck.peek_top(), Err(DeckError::EmptyContainer));
        assert_eq!(deck.peek_bottom(), Err(DeckError::EmptyContainer));
    }

    #[test]
    fn test_draw_many_in_order() {
        let mut deck = Deck::new(three_cards());
        let drawn = deck.draw_many(2).unwrap();
        assert_eq!(drawn, three_cards()[..2].to_vec());
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_draw_many_zero() {
        let mut deck = Deck::new(three_cards());
        assert_eq!(deck.draw_many(0), Ok(vec![]));
        assert_eq!(deck.len(), 3);

        let mut empty: Deck<Card> = Deck::default();
        assert_eq!(empty.draw_many(0), Ok(vec![]));
    }

    #[test]
    fn test_draw_many_is_all_or_nothing() {
        let mut deck = Deck::new(three_cards());
        assert_eq!(
            deck.draw_many(4),
            Err(DeckError::InsufficientCards {
                requested: 4,
                available: 3
            })
        );
        assert_eq!(deck.export_cards(), three_cards());
    }

    #[test]
    fn test_export_is_a_snapshot() {
        let mut deck = Deck::new(three_cards());
        let mut snapshot = deck.export_cards();
        deck.draw().unwrap();
        assert_eq!(snapshot.len(), 3);

        snapshot.clear();
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Deck::new(three_cards());
        let copy = original.clone();
        original.draw_many(3).unwrap();
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.export_cards(), three_cards());
    }

    #[test]
    fn test_iter_walks_top_to_bottom() {
        let deck = Deck::new(three_cards());
        let symbols: Vec<String> = deck.iter().map(Card::to_string).collect();
        assert_eq!(symbols, vec!["AS", "KH", "QD"]);
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_from_template() {
        let deck = Deck::from_template(DeckTemplate::Tiny);
        assert_eq!(deck.len(), 24);
        assert_eq!(deck.peek_top(), Ok(&Card::new(Rank::Nine, Suit::Spade)));
    }
}
