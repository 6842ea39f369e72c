//! Weighted rank and suit orderings.
//!
//! Games disagree on card order: aces may be high or low, and suits may be
//! ranked differently or not at all. A weighting assigns each listed rank or
//! suit its position in an explicit order. Ranks or suits left out of the
//! order are unsupported and can't be compared.

use std::cmp::Ordering;
use thiserror::Error;

use super::entities::{Card, CardParseError, Rank, Suit};

/// Result type for ordering operations
pub type OrderingResult<T> = Result<T, OrderingError>;

/// Ordering errors
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OrderingError {
    #[error("Rank order must not be empty")]
    EmptyRankOrder,

    #[error("Suit order must not be empty")]
    EmptySuitOrder,

    #[error("Duplicate rank: {0}")]
    DuplicateRank(Rank),

    #[error("Duplicate suit: {0}")]
    DuplicateSuit(Suit),

    /// The rank isn't part of the weighting
    #[error("Unsupported rank: {0}")]
    UnsupportedRank(Rank),

    /// The suit isn't part of the weighting
    #[error("Unsupported suit: {0}")]
    UnsupportedSuit(Suit),

    #[error("Comparison involving joker cards is not supported: {0}")]
    Joker(Card),

    #[error(transparent)]
    Symbol(#[from] CardParseError),
}

/// Rank weights, indexed by [`Rank::index`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RankWeights {
    weights: [Option<u8>; 13],
}

impl RankWeights {
    /// Weight each rank by its position in `order`. The order may leave ranks
    /// out (e.g., for short decks).
    ///
    /// # Errors
    ///
    /// * `OrderingError::EmptyRankOrder` - If `order` is empty
    /// * `OrderingError::DuplicateRank` - If a rank is listed twice
    pub fn of_order(order: &[Rank]) -> OrderingResult<Self> {
        if order.is_empty() {
            return Err(OrderingError::EmptyRankOrder);
        }
        let mut weights = [None; 13];
        for (weight, rank) in (0u8..).zip(order) {
            let slot = &mut weights[usize::from(rank.index())];
            if slot.is_some() {
                return Err(OrderingError::DuplicateRank(*rank));
            }
            *slot = Some(weight);
        }
        Ok(Self { weights })
    }

    /// Same as [`RankWeights::of_order`], from rank symbols such as `"A"`.
    ///
    /// # Errors
    ///
    /// * `OrderingError::Symbol` - If a symbol isn't a rank
    /// * Any error of [`RankWeights::of_order`]
    pub fn of_symbols(symbols: &[&str]) -> OrderingResult<Self> {
        let order = symbols
            .iter()
            .map(|symbol| symbol.parse())
            .collect::<Result<Vec<Rank>, _>>()?;
        Self::of_order(&order)
    }

    /// Two low, ace high.
    pub fn natural_order() -> Self {
        Self::from_complete(Rank::ALL)
    }

    /// Ace low, king high.
    pub fn ace_low_order() -> Self {
        let mut order = [Rank::Ace; 13];
        order[1..].copy_from_slice(&Rank::ALL[..12]);
        Self::from_complete(order)
    }

    fn from_complete(order: [Rank; 13]) -> Self {
        let mut weights = [None; 13];
        for (weight, rank) in (0u8..).zip(order) {
            weights[usize::from(rank.index())] = Some(weight);
        }
        Self { weights }
    }

    pub fn weight(&self, rank: Rank) -> Option<u8> {
        self.weights[usize::from(rank.index())]
    }

    fn try_weight(&self, rank: Rank) -> OrderingResult<u8> {
        self.weight(rank).ok_or(OrderingError::UnsupportedRank(rank))
    }

    /// # Errors
    ///
    /// * `OrderingError::UnsupportedRank` - If either rank isn't weighted
    pub fn compare(&self, a: Rank, b: Rank) -> OrderingResult<Ordering> {
        Ok(self.try_weight(a)?.cmp(&self.try_weight(b)?))
    }
}

impl Default for RankWeights {
    fn default() -> Self {
        Self::natural_order()
    }
}

/// Suit weights, indexed by [`Suit::index`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SuitWeights {
    weights: [Option<u8>; 4],
}

impl SuitWeights {
    /// Weight each suit by its position in `order`.
    ///
    /// # Errors
    ///
    /// * `OrderingError::EmptySuitOrder` - If `order` is empty
    /// * `OrderingError::DuplicateSuit` - If a suit is listed twice
    pub fn of_order(order: &[Suit]) -> OrderingResult<Self> {
        if order.is_empty() {
            return Err(OrderingError::EmptySuitOrder);
        }
        let mut weights = [None; 4];
        for (weight, suit) in (0u8..).zip(order) {
            let slot = &mut weights[usize::from(suit.index())];
            if slot.is_some() {
                return Err(OrderingError::DuplicateSuit(*suit));
            }
            *slot = Some(weight);
        }
        Ok(Self { weights })
    }

    /// Same as [`SuitWeights::of_order`], from suit symbols such as `"S"`.
    ///
    /// # Errors
    ///
    /// * `OrderingError::Symbol` - If a symbol isn't a suit
    /// * Any error of [`SuitWeights::of_order`]
    pub fn of_symbols(symbols: &[&str]) -> OrderingResult<Self> {
        let order = symbols
            .iter()
            .map(|symbol| symbol.parse())
            .collect::<Result<Vec<Suit>, _>>()?;
        Self::of_order(&order)
    }

    /// Spades, clubs, diamonds, hearts.
    pub fn natural_order() -> Self {
        Self::from_complete(Suit::ALL)
    }

    /// Spades, diamonds, clubs, hearts: alternating colors.
    pub fn alternating_order() -> Self {
        Self::from_complete([Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart])
    }

    fn from_complete(order: [Suit; 4]) -> Self {
        let mut weights = [None; 4];
        for (weight, suit) in (0u8..).zip(order) {
            weights[usize::from(suit.index())] = Some(weight);
        }
        Self { weights }
    }

    pub fn weight(&self, suit: Suit) -> Option<u8> {
        self.weights[usize::from(suit.index())]
    }

    fn try_weight(&self, suit: Suit) -> OrderingResult<u8> {
        self.weight(suit).ok_or(OrderingError::UnsupportedSuit(suit))
    }

    /// # Errors
    ///
    /// * `OrderingError::UnsupportedSuit` - If either suit isn't weighted
    pub fn compare(&self, a: Suit, b: Suit) -> OrderingResult<Ordering> {
        Ok(self.try_weight(a)?.cmp(&self.try_weight(b)?))
    }
}

impl Default for SuitWeights {
    fn default() -> Self {
        Self::natural_order()
    }
}

/// Orders standard cards by suit weight first, then rank weight.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CardOrdering {
    suits: SuitWeights,
    ranks: RankWeights,
}

impl CardOrdering {
    pub fn new(suits: SuitWeights, ranks: RankWeights) -> Self {
        Self { suits, ranks }
    }

    pub fn suits(&self) -> &SuitWeights {
        &self.suits
    }

    pub fn ranks(&self) -> &RankWeights {
        &self.ranks
    }

    /// Sort key of `card`: `(suit weight, rank weight)`.
    ///
    /// # Errors
    ///
    /// * `OrderingError::Joker` - If `card` is a joker
    /// * `OrderingError::UnsupportedSuit` / `UnsupportedRank` - If the card's
    ///   suit or rank isn't weighted
    pub fn key(&self, card: &Card) -> OrderingResult<(u8, u8)> {
        match card {
            Card::Standard { rank, suit } => {
                Ok((self.suits.try_weight(*suit)?, self.ranks.try_weight(*rank)?))
            }
            Card::Joker(_) => Err(OrderingError::Joker(*card)),
        }
    }

    /// # Errors
    ///
    /// Same as [`CardOrdering::key`], for either card.
    pub fn compare(&self, a: &Card, b: &Card) -> OrderingResult<Ordering> {
        Ok(self.key(a)?.cmp(&self.key(b)?))
    }

    /// Sort `cards` ascending. On error `cards` is left untouched.
    ///
    /// # Errors
    ///
    /// Same as [`CardOrdering::key`], for any card.
    pub fn sort(&self, cards: &mut [Card]) -> OrderingResult<()> {
        let mut keyed = cards
            .iter()
            .map(|card| self.key(card).map(|key| (key, *card)))
            .collect::<OrderingResult<Vec<_>>>()?;
        keyed.sort_by_key(|(key, _)| *key);
        for (slot, (_, card)) in cards.iter_mut().zip(keyed) {
            *slot = card;
        }
        Ok(())
    }
}
