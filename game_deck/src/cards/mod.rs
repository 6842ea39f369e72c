//! Card identity: ranks, suits, colors, jokers, and named deck templates,
//! plus weighted card orderings and card holders for hands.
//!
//! Ranks, suits, jokers, and cards are closed sets of plain `Copy` values
//! backed by constant tables. The deck, shoe, and dealer don't depend on this module; they take
//! any `Clone + Eq` token, and [`Card`] is simply the one this crate ships.

pub mod entities;
pub mod holder;
pub mod ordering;
pub mod template;

pub use entities::{
    CARD_ID_COUNT, Card, CardParseError, Color, Joker, Rank, Suit, format_all, parse_all,
};
pub use holder::{CardHolder, CardSummary};
pub use ordering::{CardOrdering, OrderingError, OrderingResult, RankWeights, SuitWeights};
pub use template::{DeckTemplate, ranged};
