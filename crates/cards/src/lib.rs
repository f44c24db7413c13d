// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! and a [Deck] type holding the 52 cards universe for shuffling and dealing:
//!
//! ```
//! # use holdem_cards::{Card, Deck, Rank, Suit};
//! let mut rng = rand::rng();
//! let mut deck = Deck::new_and_shuffled(&mut rng);
//! let card = deck.draw().unwrap();
//! assert_eq!(deck.count(), Deck::SIZE - 1);
//! ```
//!
//! Drawing from an exhausted deck fails with [DeckError::Empty].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DeckError, Rank, Suit};
