// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker hand evaluator.
//!
//! This evaluator ranks the best five cards hand out of the seven cards a
//! player can use at showdown, the two hole cards plus the five board cards.
//! It enumerates all 21 five cards combinations and keeps the strongest under
//! the [HandScore] total order.
//!
//! It provides an [evaluate] function that computes a [HandScore] made of a
//! [HandCategory] and a tie break key, scores from different hands compare
//! first by category and then lexicographically by key, an equal comparison at
//! showdown means a split pot.
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! # use holdem_eval::{evaluate, HandCategory};
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::Queen, Suit::Hearts),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Ten, Suit::Hearts),
//!     Card::new(Rank::Deuce, Suit::Clubs),
//!     Card::new(Rank::Trey, Suit::Diamonds),
//! ];
//!
//! let score = evaluate(&cards).unwrap();
//! assert_eq!(score.category(), HandCategory::RoyalFlush);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod eval;
pub use eval::{EvalError, HandCategory, HandScore, evaluate};
