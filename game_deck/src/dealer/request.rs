use serde::{Deserialize, Serialize};

use super::Recipient;

/// One recipient's demand in a deal: how many cards, and whether a shortage
/// should fail the whole deal (strict) or be tolerated (lenient).
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct DealRequest<R> {
    recipient: R,
    amount: usize,
    strict: bool,
}

impl<R: Recipient> DealRequest<R> {
    pub fn new(recipient: R, amount: usize, strict: bool) -> Self {
        Self {
            recipient,
            amount,
            strict,
        }
    }

    /// Request that fails the deal unless all `amount` cards are available.
    pub fn strict(recipient: R, amount: usize) -> Self {
        Self::new(recipient, amount, true)
    }

    /// Request that takes as many of `amount` cards as are left.
    pub fn lenient(recipient: R, amount: usize) -> Self {
        Self::new(recipient, amount, false)
    }

    /// Requests for dealing `cards_each` cards one at a time around the
    /// table: one single-card request per recipient per round, in seat order.
    ///
    /// With `cards_each == 0` every recipient still gets a zero-card request so
    /// it shows up in the result.
    pub fn round_robin(recipients: &[R], cards_each: usize, strict: bool) -> Vec<Self> {
        if cards_each == 0 {
            return recipients
                .iter()
                .map(|recipient| Self::new(recipient.clone(), 0, strict))
                .collect();
        }
        (0..cards_each)
            .flat_map(|_| recipients.iter())
            .map(|recipient| Self::new(recipient.clone(), 1, strict))
            .collect()
    }

    pub fn recipient(&self) -> &R {
        &self.recipient
    }

    pub fn amount(&self) -> usize {
        self.amount
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let strict = DealRequest::strict("p1", 2);
        assert!(strict.is_strict());
        assert_eq!(strict.amount(), 2);
        assert_eq!(strict.recipient(), &"p1");

        assert!(!DealRequest::lenient("p1", 2).is_strict());
    }

    #[test]
    fn test_round_robin_interleaves() {
        let requests = DealRequest::round_robin(&["a", "b", "c"], 2, true);
        let order: Vec<_> = requests.iter().map(|r| *r.recipient()).collect();
        assert_eq!(order, vec!["a", "b", "c", "a", "b", "c"]);
        assert!(requests.iter().all(|r| r.amount() == 1 && r.is_strict()));
    }

    #[test]
    fn test_round_robin_zero_cards() {
        let requests = DealRequest::round_robin(&[1, 2], 0, false);
        assert_eq!(
            requests,
            vec![DealRequest::lenient(1, 0), DealRequest::lenient(2, 0)]
        );
    }
}
