//! Dealing cards from one source to many recipients.
//!
//! A deal is an ordered list of [`DealRequest`]s processed exactly in list
//! order against a single [`CardSource`]. Requests aren't grouped by
//! recipient, so callers get round-robin dealing by interleaving requests
//! (see [`DealRequest::round_robin`]).
//!
//! ## Strict and lenient requests
//!
//! - **Strict**: if fewer cards are left than requested, the deal stops with
//!   [`DealError::InsufficientCards`]. Cards already dealt by earlier
//!   requests in the same call stay dealt; they are returned in the error's
//!   `partial` result rather than put back into the source.
//! - **Lenient**: takes as many cards as remain, possibly none.
//!
//! ## Example
//!
//! ```
//! use game_deck::dealer::{CardDealer, DealRequest, StandardDealer};
//! use game_deck::gamedeck::Deck;
//!
//! let mut deck = Deck::new(1..=8);
//! let requests = DealRequest::round_robin(&["p1", "p2", "p3"], 2, true);
//!
//! let result = StandardDealer.deal(&mut deck, &requests).unwrap();
//! assert_eq!(result.cards_for(&"p1"), Some(&[1, 4][..]));
//! assert_eq!(deck.export_cards(), vec![7, 8]);
//! ```

pub mod errors;
pub mod request;
pub mod result;

pub use errors::DealError;
pub use request::DealRequest;
pub use result::DealResult;

use log::{debug, trace, warn};
use std::{collections::HashMap, fmt, hash::Hash};

use crate::gamedeck::CardSource;

/// Anything that can receive dealt cards: a player, a pile, a seat index.
pub trait Recipient: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Recipient for T {}

/// Distributes cards from a source according to a list of requests.
pub trait CardDealer<R: Recipient> {
    /// Deal `requests` in order from `source`.
    ///
    /// # Errors
    ///
    /// * `DealError::InsufficientCards` - If a strict request can't be met
    /// * `DealError::Deck` - If the source refuses a draw
    fn deal<S: CardSource>(
        &self,
        source: &mut S,
        requests: &[DealRequest<R>],
    ) -> Result<DealResult<R, S::Card>, DealError<R, S::Card>>;
}

/// The stateless default dealer.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardDealer;

impl<R: Recipient> CardDealer<R> for StandardDealer {
    fn deal<S: CardSource>(
        &self,
        source: &mut S,
        requests: &[DealRequest<R>],
    ) -> Result<DealResult<R, S::Card>, DealError<R, S::Card>> {
        let mut allocations: HashMap<R, Vec<S::Card>> = HashMap::new();

        for request in requests {
            let available = source.len();
            if request.is_strict() && request.amount() > available {
                warn!(
                    "Strict request for {:?} needs {} cards but only {available} left",
                    request.recipient(),
                    request.amount()
                );
                return Err(DealError::InsufficientCards {
                    recipient: request.recipient().clone(),
                    requested: request.amount(),
                    available,
                    partial: DealResult::new(allocations),
                });
            }

            let count = request.amount().min(available);
            if count < request.amount() {
                trace!(
                    "Lenient request for {:?} short by {} cards",
                    request.recipient(),
                    request.amount() - count
                );
            }
            let cards = source.draw_many(count)?;
            allocations
                .entry(request.recipient().clone())
                .or_default()
                .extend(cards);
        }

        let result = DealResult::new(allocations);
        debug!(
            "Dealt {} cards to {} recipients, {} left in source",
            result.total_cards(),
            result.len(),
            source.len()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamedeck::{Deck, Shoe};

    #[test]
    fn test_requests_processed_in_list_order() {
        let mut deck = Deck::new(1..=6);
        let requests = vec![
            DealRequest::strict("b", 2),
            DealRequest::strict("a", 1),
            DealRequest::strict("b", 1),
        ];
        let result = StandardDealer.deal(&mut deck, &requests).unwrap();

        assert_eq!(result.cards_for(&"b"), Some(&[1, 2, 4][..]));
        assert_eq!(result.cards_for(&"a"), Some(&[3][..]));
        assert_eq!(deck.export_cards(), vec![5, 6]);
    }

    #[test]
    fn test_zero_amount_creates_entry() {
        let mut deck = Deck::new(1..=3);
        let requests = vec![DealRequest::strict("idle", 0)];
        let result = StandardDealer.deal(&mut deck, &requests).unwrap();

        assert!(result.contains(&"idle"));
        assert_eq!(result.cards_for(&"idle"), Some(&[][..]));
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_strict_zero_on_empty_source() {
        let mut deck: Deck<u8> = Deck::default();
        let requests = vec![DealRequest::strict("p", 0)];
        let result = StandardDealer.deal(&mut deck, &requests).unwrap();
        assert_eq!(result.total_cards(), 0);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_empty_request_list() {
        let mut deck = Deck::new(1..=3);
        let requests: Vec<DealRequest<&str>> = vec![];
        let result = StandardDealer.deal(&mut deck, &requests).unwrap();
        assert!(result.is_empty());
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_strict_failure_keeps_earlier_draws() {
        let mut deck = Deck::new(1..=3);
        let requests = vec![DealRequest::strict("p1", 2), DealRequest::strict("p2", 2)];

        let Err(DealError::InsufficientCards {
            recipient,
            requested,
            available,
            partial,
        }) = StandardDealer.deal(&mut deck, &requests)
        else {
            panic!("second strict request should fail");
        };

        assert_eq!(recipient, "p2");
        assert_eq!((requested, available), (2, 1));
        assert_eq!(partial.cards_for(&"p1"), Some(&[1, 2][..]));
        assert!(!partial.contains(&"p2"));
        assert_eq!(deck.export_cards(), vec![3]);
    }

    #[test]
    fn test_deals_from_shoe() {
        let mut shoe = Shoe::new(1..=10, 5);
        let requests = DealRequest::round_robin(&[0usize, 1], 3, true);
        let result = StandardDealer.deal(&mut shoe, &requests).unwrap();

        assert_eq!(result.cards_for(&0), Some(&[1, 3, 5][..]));
        assert_eq!(result.cards_for(&1), Some(&[2, 4, 6][..]));
        assert!(shoe.is_cut_card_out());
    }

    #[test]
    fn test_error_message_names_recipient() {
        let mut deck = Deck::new(vec!['x']);
        let err = StandardDealer
            .deal(&mut deck, &[DealRequest::strict("dealer", 2)])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Not enough cards for recipient \"dealer\" (requested: 2, cards left: 1)"
        );
    }
}
