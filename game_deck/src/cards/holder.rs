//! Hands and other card piles owned by a single holder.

use serde::Serialize;

use super::entities::{Card, Joker, Rank, Suit};
use super::ordering::{CardOrdering, OrderingResult};

/// Immutable per-rank, per-suit, and per-joker counts of a set of cards.
///
/// A summary is a snapshot: changing the cards it was built from doesn't
/// change the summary.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CardSummary {
    /// Counts indexed by `[rank][suit]`
    matrix: [[usize; 4]; 13],
    ranks: [usize; 13],
    suits: [usize; 4],
    jokers: [usize; 4],
    standard_total: usize,
    joker_total: usize,
}

impl CardSummary {
    pub fn of<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        let mut summary = Self::default();
        for card in cards {
            match card {
                Card::Standard { rank, suit } => {
                    let (r, s) = (usize::from(rank.index()), usize::from(suit.index()));
                    summary.matrix[r][s] += 1;
                    summary.ranks[r] += 1;
                    summary.suits[s] += 1;
                    summary.standard_total += 1;
                }
                Card::Joker(joker) => {
                    summary.jokers[usize::from(joker.number() - 1)] += 1;
                    summary.joker_total += 1;
                }
            }
        }
        summary
    }

    pub fn card_count(&self, rank: Rank, suit: Suit) -> usize {
        self.matrix[usize::from(rank.index())][usize::from(suit.index())]
    }

    pub fn rank_count(&self, rank: Rank) -> usize {
        self.ranks[usize::from(rank.index())]
    }

    pub fn suit_count(&self, suit: Suit) -> usize {
        self.suits[usize::from(suit.index())]
    }

    pub fn joker_count(&self, joker: Joker) -> usize {
        self.jokers[usize::from(joker.number() - 1)]
    }

    /// Number of non-joker cards.
    pub fn standard_total(&self) -> usize {
        self.standard_total
    }

    pub fn joker_total(&self) -> usize {
        self.joker_total
    }

    pub fn total(&self) -> usize {
        self.standard_total + self.joker_total
    }
}

/// A mutable, unordered pile of cards such as a player's hand.
///
/// Duplicates are allowed (multi-deck games). The holder's [`CardOrdering`]
/// drives the min/max and neighbour queries; those ignore jokers and fail if
/// a card of the queried suit isn't covered by the ordering.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CardHolder {
    cards: Vec<Card>,
    ordering: CardOrdering,
}

impl CardHolder {
    pub fn new(ordering: CardOrdering) -> Self {
        Self {
            cards: Vec::new(),
            ordering,
        }
    }

    pub fn with_cards(cards: impl IntoIterator<Item = Card>, ordering: CardOrdering) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            ordering,
        }
    }

    pub fn ordering(&self) -> &CardOrdering {
        &self.ordering
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn add_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove one copy of `card`. Returns whether anything was removed.
    pub fn remove(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|held| held == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every copy of every card in `cards`. Returns whether anything
    /// was removed.
    pub fn remove_all(&mut self, cards: &[Card]) -> bool {
        let before = self.cards.len();
        self.cards.retain(|held| !cards.contains(held));
        self.cards.len() != before
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn contains_all(&self, cards: &[Card]) -> bool {
        cards.iter().all(|card| self.contains(card))
    }

    pub fn contains_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|card| card.suit() == Some(suit))
    }

    pub fn contains_rank(&self, rank: Rank) -> bool {
        self.cards.iter().any(|card| card.rank() == Some(rank))
    }

    pub fn contains_joker(&self) -> bool {
        self.cards.iter().any(Card::is_joker)
    }

    pub fn count_suit(&self, suit: Suit) -> usize {
        self.cards.iter().filter(|card| card.suit() == Some(suit)).count()
    }

    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|card| card.rank() == Some(rank)).count()
    }

    /// Copies of `card` held.
    pub fn count_card(&self, card: &Card) -> usize {
        self.cards.iter().filter(|held| *held == card).count()
    }

    pub fn count_jokers(&self) -> usize {
        self.cards.iter().filter(|card| card.is_joker()).count()
    }

    /// # Errors
    ///
    /// * `OrderingError` - If a held card of `suit` isn't covered by the ordering
    pub fn find_min(&self, suit: Suit) -> OrderingResult<Option<Card>> {
        let keyed = self.keyed_of_suit(Some(suit))?;
        Ok(keyed.into_iter().min_by_key(|(key, _)| *key).map(|(_, card)| card))
    }

    /// # Errors
    ///
    /// * `OrderingError` - If a held card of `suit` isn't covered by the ordering
    pub fn find_max(&self, suit: Suit) -> OrderingResult<Option<Card>> {
        let keyed = self.keyed_of_suit(Some(suit))?;
        Ok(keyed.into_iter().max_by_key(|(key, _)| *key).map(|(_, card)| card))
    }

    /// Highest held card of `reference`'s suit that ranks below it. A joker
    /// reference has no suit and finds nothing.
    ///
    /// # Errors
    ///
    /// * `OrderingError` - If `reference` or a held card of its suit isn't
    ///   covered by the ordering
    pub fn find_closest_lower(&self, reference: &Card) -> OrderingResult<Option<Card>> {
        let lower = self.all_lower_of_suit(reference)?;
        Ok(lower.last().copied())
    }

    /// Lowest held card of `reference`'s suit that ranks above it.
    ///
    /// # Errors
    ///
    /// Same as [`CardHolder::find_closest_lower`].
    pub fn find_closest_higher(&self, reference: &Card) -> OrderingResult<Option<Card>> {
        let higher = self.all_higher_of_suit(reference)?;
        Ok(higher.first().copied())
    }

    /// Held cards of `reference`'s suit ranking below it, ascending.
    ///
    /// # Errors
    ///
    /// Same as [`CardHolder::find_closest_lower`].
    pub fn all_lower_of_suit(&self, reference: &Card) -> OrderingResult<Vec<Card>> {
        self.sorted_relative_to(reference, |key, reference_key| key < reference_key)
    }

    /// Held cards of `reference`'s suit ranking above it, ascending.
    ///
    /// # Errors
    ///
    /// Same as [`CardHolder::find_closest_lower`].
    pub fn all_higher_of_suit(&self, reference: &Card) -> OrderingResult<Vec<Card>> {
        self.sorted_relative_to(reference, |key, reference_key| key > reference_key)
    }

    pub fn summary(&self) -> CardSummary {
        CardSummary::of(&self.cards)
    }

    fn sorted_relative_to(
        &self,
        reference: &Card,
        keep: impl Fn((u8, u8), (u8, u8)) -> bool,
    ) -> OrderingResult<Vec<Card>> {
        if reference.is_joker() {
            return Ok(Vec::new());
        }
        let reference_key = self.ordering.key(reference)?;
        let mut keyed = self.keyed_of_suit(reference.suit())?;
        keyed.retain(|(key, _)| keep(*key, reference_key));
        keyed.sort_by_key(|(key, _)| *key);
        Ok(keyed.into_iter().map(|(_, card)| card).collect())
    }

    fn keyed_of_suit(&self, suit: Option<Suit>) -> OrderingResult<Vec<((u8, u8), Card)>> {
        self.cards
            .iter()
            .filter(|card| !card.is_joker() && card.suit() == suit)
            .map(|card| self.ordering.key(card).map(|key| (key, *card)))
            .collect()
    }
}

impl Extend<Card> for CardHolder {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl FromIterator<Card> for CardHolder {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::with_cards(iter, CardOrdering::default())
    }
}

impl<'a> IntoIterator for &'a CardHolder {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
