// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Engine error types.
//!
//! Errors split in three groups: illegal actions from a decision provider
//! (the check and raise variants), invalid evaluator input, and deck
//! exhaustion. Decks are sized for the table so a deck error signals a
//! dealing bug, not a recoverable condition. Any of these aborts the current
//! hand, chips settled in previous hands are never touched.
use thiserror::Error;

use holdem_cards::DeckError;
use holdem_eval::EvalError;

use crate::chips::Chips;

/// Errors from the betting engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A provider checked while chips were owed to stay in the hand.
    #[error("{name} checked with {to_call} to call")]
    CheckOwing {
        /// The offending seat name.
        name: String,
        /// The chips owed.
        to_call: Chips,
    },
    /// A provider raised below the minimum raise.
    #[error("{name} raised {amount}, minimum raise is {min_raise}")]
    RaiseBelowMinimum {
        /// The offending seat name.
        name: String,
        /// The raise increment returned by the provider.
        amount: Chips,
        /// The minimum legal raise increment.
        min_raise: Chips,
    },
    /// A provider raised more chips than the seat holds.
    #[error("{name} raised {amount} with only {chips} behind")]
    RaiseOverStack {
        /// The offending seat name.
        name: String,
        /// The chips needed to call and raise.
        amount: Chips,
        /// The seat stack.
        chips: Chips,
    },
    /// The table needs at least two seated players to play a hand.
    #[error("the table needs at least two seated players")]
    NotEnoughSeats,
    /// The deck ran out of cards while dealing.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// Showdown hand evaluation failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
