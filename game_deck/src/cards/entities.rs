use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error returned when a card, rank, suit, or joker symbol can't be parsed.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CardParseError {
    #[error("Invalid rank symbol: {0}")]
    Rank(String),
    #[error("Invalid suit symbol: {0}")]
    Suit(String),
    #[error("Invalid joker symbol: {0}")]
    Joker(String),
    #[error("Invalid card symbol: {0}")]
    Card(String),
    #[error("Invalid card ID: {0}")]
    Id(u8),
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Color {
    Black,
    Red,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Self::Black => Self::Red,
            Self::Red => Self::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Black => "black",
            Self::Red => "red",
        };
        write!(f, "{repr}")
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Spade,
    Club,
    Diamond,
    Heart,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Self::Spade, Self::Club, Self::Diamond, Self::Heart];

    pub fn color(self) -> Color {
        match self {
            Self::Spade | Self::Club => Color::Black,
            Self::Diamond | Self::Heart => Color::Red,
        }
    }

    /// Position of this suit within [`Suit::ALL`].
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Spade => 'S',
            Self::Club => 'C',
            Self::Diamond => 'D',
            Self::Heart => 'H',
        }
    }

    /// Pretty glyph used when rendering cards for people rather than parsers.
    pub fn glyph(self) -> char {
        match self {
            Self::Spade => '♠',
            Self::Club => '♣',
            Self::Diamond => '♦',
            Self::Heart => '♥',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Suit {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Self::Spade),
            "C" => Ok(Self::Club),
            "D" => Ok(Self::Diamond),
            "H" => Ok(Self::Heart),
            _ => Err(CardParseError::Suit(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Position of this rank within [`Rank::ALL`] (two=0 ... ace=12).
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// Ranks from `from` to `to`, both inclusive. Empty if `from > to`.
    pub fn range(from: Rank, to: Rank) -> impl Iterator<Item = Rank> {
        Self::ALL
            .into_iter()
            .filter(move |rank| (from..=to).contains(rank))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Rank {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::ALL
                .into_iter()
                .find(|rank| rank.symbol() == c)
                .ok_or_else(|| CardParseError::Rank(s.to_string())),
            _ => Err(CardParseError::Rank(s.to_string())),
        }
    }
}

/// The four jokers of a double extended deck. Odd jokers are black and even
/// jokers are red.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Joker {
    One,
    Two,
    Three,
    Four,
}

impl Joker {
    pub const ALL: [Joker; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    pub fn color(self) -> Color {
        match self {
            Self::One | Self::Three => Color::Black,
            Self::Two | Self::Four => Color::Red,
        }
    }

    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl fmt::Display for Joker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "R{}", self.number())
    }
}

impl FromStr for Joker {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R1" => Ok(Self::One),
            "R2" => Ok(Self::Two),
            "R3" => Ok(Self::Three),
            "R4" => Ok(Self::Four),
            _ => Err(CardParseError::Joker(s.to_string())),
        }
    }
}

/// A playing card: either a ranked and suited card or a joker.
///
/// Cards render and parse as compact symbols: rank then suit for standard
/// cards (`AS`, `TH`, `2C`) and `R1`..`R4` for jokers. The same symbol is used
/// as the card's serde representation.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Card {
    Standard { rank: Rank, suit: Suit },
    Joker(Joker),
}

/// Number of distinct card ids (52 standard cards plus 4 jokers).
pub const CARD_ID_COUNT: u8 = 56;

/// First id used by jokers.
const FIRST_JOKER_ID: u8 = 52;

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self::Standard { rank, suit }
    }

    pub const fn joker(joker: Joker) -> Self {
        Self::Joker(joker)
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Self::Joker(_))
    }

    pub fn rank(&self) -> Option<Rank> {
        match self {
            Self::Standard { rank, .. } => Some(*rank),
            Self::Joker(_) => None,
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        match self {
            Self::Standard { suit, .. } => Some(*suit),
            Self::Joker(_) => None,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Standard { suit, .. } => suit.color(),
            Self::Joker(joker) => joker.color(),
        }
    }

    /// Stable numeric id. Standard cards are laid out suit by suit
    /// (`suit * 13 + rank`, 0..=51) and jokers follow at 52..=55.
    pub fn id(&self) -> u8 {
        match self {
            Self::Standard { rank, suit } => suit.index() * 13 + rank.index(),
            Self::Joker(joker) => FIRST_JOKER_ID + *joker as u8,
        }
    }

    pub fn from_id(id: u8) -> Result<Self, CardParseError> {
        match id {
            0..FIRST_JOKER_ID => Ok(Self::new(
                Rank::ALL[usize::from(id % 13)],
                Suit::ALL[usize::from(id / 13)],
            )),
            FIRST_JOKER_ID..CARD_ID_COUNT => Ok(Self::Joker(
                Joker::ALL[usize::from(id - FIRST_JOKER_ID)],
            )),
            _ => Err(CardParseError::Id(id)),
        }
    }

    /// All 52 standard cards, suit by suit, twos first.
    pub fn standard_cards() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
    }

    /// Human-friendly rendering with a suit glyph, e.g. `A♠`.
    pub fn pretty(&self) -> String {
        match self {
            Self::Standard { rank, suit } => format!("{rank}{}", suit.glyph()),
            Self::Joker(joker) => format!("{joker}"),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Standard { rank, suit } => write!(f, "{rank}{suit}"),
            Self::Joker(joker) => write!(f, "{joker}"),
        }
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('R') {
            return s.parse().map(Self::Joker);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                let rank = rank
                    .to_string()
                    .parse()
                    .map_err(|_| CardParseError::Card(s.to_string()))?;
                let suit = suit
                    .to_string()
                    .parse()
                    .map_err(|_| CardParseError::Card(s.to_string()))?;
                Ok(Self::new(rank, suit))
            }
            _ => Err(CardParseError::Card(s.to_string())),
        }
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Format cards as symbols joined by `delimiter`.
pub fn format_all<'a>(cards: impl IntoIterator<Item = &'a Card>, delimiter: &str) -> String {
    cards
        .into_iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Parse a `delimiter`-separated list of card symbols. Empty segments are
/// skipped so trailing delimiters are harmless.
pub fn parse_all(symbols: &str, delimiter: &str) -> Result<Vec<Card>, CardParseError> {
    symbols
        .split(delimiter)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
