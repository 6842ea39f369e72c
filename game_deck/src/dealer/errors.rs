//! Dealer error types.

use thiserror::Error;

use super::result::DealResult;
use crate::gamedeck::DeckError;

/// Dealer errors
#[derive(Debug, Error)]
pub enum DealError<R, C> {
    /// A strict request asked for more cards than were left.
    ///
    /// Requests before the failing one were already dealt and are not put
    /// back; their cards are in `partial`.
    #[error(
        "Not enough cards for recipient {recipient:?} (requested: {requested}, cards left: {available})"
    )]
    InsufficientCards {
        recipient: R,
        requested: usize,
        available: usize,
        partial: DealResult<R, C>,
    },

    /// The card source refused a draw
    #[error(transparent)]
    Deck(#[from] DeckError),
}
