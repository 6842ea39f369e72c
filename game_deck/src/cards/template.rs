use serde::{Deserialize, Serialize};
use std::fmt;

use super::entities::{Card, Joker, Rank, Suit};
use crate::gamedeck::errors::{DeckError, DeckResult};

/// Named card sets used by common games. Every card in a template is unique,
/// jokers included.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckTemplate {
    /// 56 cards: the full deck plus all four jokers (double-deck canasta).
    DoubleExtended,
    /// 54 cards: the full deck plus two jokers (canasta, some poker variants).
    Extended,
    /// 52 cards, two to ace (poker).
    Full,
    /// 36 cards, six to ace (durak).
    Short,
    /// 32 cards, seven to ace (preferans).
    Small,
    /// 24 cards, nine to ace (thousand).
    Tiny,
}

impl DeckTemplate {
    pub const ALL: [DeckTemplate; 6] = [
        Self::DoubleExtended,
        Self::Extended,
        Self::Full,
        Self::Short,
        Self::Small,
        Self::Tiny,
    ];

    pub fn lowest_rank(self) -> Rank {
        match self {
            Self::DoubleExtended | Self::Extended | Self::Full => Rank::Two,
            Self::Short => Rank::Six,
            Self::Small => Rank::Seven,
            Self::Tiny => Rank::Nine,
        }
    }

    pub fn jokers(self) -> &'static [Joker] {
        match self {
            Self::DoubleExtended => &Joker::ALL,
            Self::Extended => &[Joker::One, Joker::Two],
            Self::Full | Self::Short | Self::Small | Self::Tiny => &[],
        }
    }

    pub fn size(self) -> usize {
        match self {
            Self::DoubleExtended => 56,
            Self::Extended => 54,
            Self::Full => 52,
            Self::Short => 36,
            Self::Small => 32,
            Self::Tiny => 24,
        }
    }

    /// Cards of this template, suit by suit in ascending rank, jokers last.
    pub fn cards(self) -> Vec<Card> {
        collect_cards(self.lowest_rank(), Rank::Ace, self.jokers())
    }

    pub fn contains(self, card: &Card) -> bool {
        match card {
            Card::Joker(joker) => self.jokers().contains(joker),
            Card::Standard { rank, .. } => *rank >= self.lowest_rank(),
        }
    }
}

impl fmt::Display for DeckTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::DoubleExtended => "double extended",
            Self::Extended => "extended",
            Self::Full => "full",
            Self::Short => "short",
            Self::Small => "small",
            Self::Tiny => "tiny",
        };
        write!(f, "{repr}")
    }
}

/// Build a custom card set with every suit from `from` to `to` (inclusive),
/// followed by the given jokers.
///
/// # Errors
///
/// * `DeckError::InvalidArgument` - If `from` is higher than `to` or a joker
///   is listed twice
pub fn ranged(from: Rank, to: Rank, jokers: &[Joker]) -> DeckResult<Vec<Card>> {
    if from > to {
        return Err(DeckError::InvalidArgument(format!(
            "from rank ({from}) cannot be higher than to rank ({to})"
        )));
    }
    for (i, joker) in jokers.iter().enumerate() {
        if jokers[..i].contains(joker) {
            return Err(DeckError::InvalidArgument(format!(
                "duplicate joker: {joker}"
            )));
        }
    }

    Ok(collect_cards(from, to, jokers))
}

fn collect_cards(from: Rank, to: Rank, jokers: &[Joker]) -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::range(from, to).map(move |rank| Card::new(rank, suit)))
        .chain(jokers.iter().copied().map(Card::Joker))
        .collect()
}
