//! Decks, shoes, shuffling, and cut-card placement.
//!
//! - [`Deck`]: ordered cards, drawn from the top with all-or-nothing bulk draws
//! - [`Shoe`]: a deck plus a cut-card threshold
//! - [`CutCardCalculator`]: randomized cut-card depth within a band
//! - [`Shuffler`]: uniform in-place or copying shuffles
//!
//! None of these types lock internally. Mutation goes through `&mut`, so
//! sharing one between threads needs an outer `Mutex`.
//!
//! ## Example
//!
//! ```
//! use game_deck::cards::DeckTemplate;
//! use game_deck::gamedeck::{CutCardCalculator, Shoe, Shuffler};
//!
//! let mut cards = DeckTemplate::Full.cards();
//! Shuffler::new().shuffle_in_place(&mut cards);
//!
//! let mut calculator = CutCardCalculator::new(0.80, 0.04).unwrap();
//! let mut shoe = Shoe::with_calculator(cards, &mut calculator).unwrap();
//!
//! while !shoe.is_cut_card_out() {
//!     shoe.draw().unwrap();
//! }
//! assert!(shoe.len() < shoe.cut_card_position());
//! ```

pub mod cut_card;
pub mod deck;
pub mod errors;
pub mod shoe;
pub mod shuffler;

pub use cut_card::{CutCardCalculator, CutCardConfig};
pub use deck::{CardSource, Deck};
pub use errors::{DeckError, DeckResult};
pub use shoe::{NO_CUT_CARD, Shoe};
pub use shuffler::Shuffler;
