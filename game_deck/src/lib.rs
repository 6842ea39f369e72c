//! # Game Deck
//!
//! Physical card distribution for card games: ordered decks, casino-style
//! shoes with a randomized cut card, and a dealer that hands cards from one
//! source to many recipients.
//!
//! The deck, shoe, and dealer treat cards as opaque tokens, so any
//! `Clone + Eq` type can be dealt. The [`cards`] module provides the standard
//! playing card model (ranks, suits, jokers, and deck templates) for callers
//! that don't bring their own.
//!
//! ## Core Modules
//!
//! - [`cards`]: Card identity, symbols, deck templates, orderings, and hands
//! - [`gamedeck`]: Decks, shoes, shuffling, and cut-card placement
//! - [`dealer`]: Multi-recipient dealing with strict and lenient requests
//!
//! Failures are reported through [`DeckError`] and [`DealError`] and are
//! always detected before anything is drawn. The library logs through the
//! `log` facade and never installs a logger itself.
//!
//! ## Example
//!
//! ```
//! use game_deck::{CardDealer, DealRequest, DeckTemplate, Shoe, Shuffler, StandardDealer};
//!
//! let mut cards = DeckTemplate::Full.cards();
//! Shuffler::new().shuffle_in_place(&mut cards);
//! let mut shoe = Shoe::new(cards, 12);
//!
//! let requests = DealRequest::round_robin(&["alice", "bob"], 2, true);
//! let hands = StandardDealer.deal(&mut shoe, &requests).unwrap();
//!
//! assert_eq!(hands.cards_for(&"alice").map(<[_]>::len), Some(2));
//! assert_eq!(shoe.len(), 48);
//! assert!(!shoe.is_cut_card_out());
//! ```

/// Card identity, deck templates, orderings, and card holders.
pub mod cards;
pub use cards::{
    Card, CardHolder, CardOrdering, CardParseError, CardSummary, Color, DeckTemplate, Joker,
    OrderingError, Rank, RankWeights, Suit, SuitWeights,
};

/// Defaults and environment variable names.
pub mod constants;

/// Multi-recipient dealing.
pub mod dealer;
pub use dealer::{CardDealer, DealError, DealRequest, DealResult, Recipient, StandardDealer};

/// Decks, shoes, shuffling, and cut cards.
pub mod gamedeck;
pub use gamedeck::{
    CardSource, CutCardCalculator, CutCardConfig, Deck, DeckError, DeckResult, NO_CUT_CARD, Shoe,
    Shuffler,
};
