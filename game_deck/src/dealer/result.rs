use serde::Serialize;
use std::collections::{HashMap, hash_map};

use super::Recipient;

/// Cards handed to each recipient by a single deal.
///
/// Each recipient maps to every card it received, in the order the cards
/// were drawn, across all of its requests. Recipients that only made
/// zero-card requests are present with an empty hand. The result owns its
/// cards and can't be changed after the deal.
#[derive(Clone, Debug, Serialize)]
pub struct DealResult<R, C> {
    allocations: HashMap<R, Vec<C>>,
}

impl<R: Recipient, C> DealResult<R, C> {
    pub(crate) fn new(allocations: HashMap<R, Vec<C>>) -> Self {
        Self { allocations }
    }

    /// Cards dealt to `recipient`, or `None` if it wasn't part of the deal.
    pub fn cards_for(&self, recipient: &R) -> Option<&[C]> {
        self.allocations.get(recipient).map(Vec::as_slice)
    }

    pub fn contains(&self, recipient: &R) -> bool {
        self.allocations.contains_key(recipient)
    }

    pub fn recipients(&self) -> impl Iterator<Item = &R> {
        self.allocations.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&R, &[C])> {
        self.allocations
            .iter()
            .map(|(recipient, cards)| (recipient, cards.as_slice()))
    }

    /// Number of recipients in the result.
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Number of cards dealt across all recipients.
    pub fn total_cards(&self) -> usize {
        self.allocations.values().map(Vec::len).sum()
    }

    pub fn into_allocations(self) -> HashMap<R, Vec<C>> {
        self.allocations
    }
}

impl<R: Recipient, C: PartialEq> PartialEq for DealResult<R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.allocations == other.allocations
    }
}

impl<R: Recipient, C: Eq> Eq for DealResult<R, C> {}

impl<R, C> IntoIterator for DealResult<R, C> {
    type Item = (R, Vec<C>);
    type IntoIter = hash_map::IntoIter<R, Vec<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.allocations.into_iter()
    }
}
