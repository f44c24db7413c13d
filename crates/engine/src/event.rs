// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table event notifications.
use holdem_cards::Card;
use holdem_eval::HandScore;

use crate::{action::Action, chips::Chips, table::Street};

/// The forced blind bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlindKind {
    /// The small blind.
    Small,
    /// The big blind.
    Big,
}

/// A read only notification from the table.
#[derive(Debug, Clone)]
pub enum TableEvent {
    /// A new hand started.
    HandStarted {
        /// The seat with the dealer button.
        dealer: String,
    },
    /// A seat posted a blind.
    BlindPosted {
        /// The posting seat name.
        name: String,
        /// The blind kind.
        kind: BlindKind,
        /// The chips posted, may be short for an all in seat.
        amount: Chips,
    },
    /// A betting street is about to run.
    StreetDealt {
        /// The street.
        street: Street,
        /// The community cards dealt so far.
        board: Vec<Card>,
    },
    /// A seat acted.
    ActionTaken {
        /// The acting seat name.
        name: String,
        /// The action taken.
        action: Action,
        /// The chips moved into the pot by this action.
        amount: Chips,
        /// The seat went all in on this action.
        all_in: bool,
    },
    /// All other seats folded, the hand ends without a showdown.
    FoldWin {
        /// The winning seat name.
        name: String,
        /// The pot awarded.
        pot: Chips,
    },
    /// A seat revealed its hand at showdown.
    ShowdownHand {
        /// The seat name.
        name: String,
        /// The seat hole cards.
        cards: (Card, Card),
        /// The score of the best five cards hand.
        score: HandScore,
    },
    /// A seat won chips from the pot.
    PotAwarded {
        /// The winning seat name.
        name: String,
        /// The chips won.
        amount: Chips,
    },
    /// A seat lost its last chips and left the table.
    SeatEliminated {
        /// The eliminated seat name.
        name: String,
    },
}

/// A table events observer.
///
/// Sinks are purely observational, no engine behavior depends on the
/// notifications they receive.
pub trait EventSink {
    /// Receives a table event.
    fn notify(&mut self, event: &TableEvent);
}

/// A sink that drops all events.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: &TableEvent) {}
}
