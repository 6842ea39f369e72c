//! Error types for decks, shoes, and the cut-card calculator.

use thiserror::Error;

/// Result type for deck operations
pub type DeckResult<T> = Result<T, DeckError>;

/// Deck errors
///
/// Every operation that returns one of these has left the deck untouched.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DeckError {
    /// A draw or peek was attempted on a deck with no cards
    #[error("Deck is empty")]
    EmptyContainer,

    /// A bulk draw asked for more cards than the deck holds
    #[error("Not enough cards in deck (requested: {requested}, available: {available})")]
    InsufficientCards { requested: usize, available: usize },

    /// Out-of-range percentage, non-positive shoe size, or similar
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
