// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seat actions and the decision provider interface.
use serde::{Deserialize, Serialize};
use std::fmt;

use holdem_cards::Card;

use crate::{chips::Chips, seat::Seat};

/// A betting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Leave the hand.
    Fold,
    /// Pass the action with no chips owed.
    Check,
    /// Match the current bet.
    Call,
    /// Match the current bet and add chips on top.
    Raise,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Action::Fold => "folds",
            Action::Check => "checks",
            Action::Call => "calls",
            Action::Raise => "raises",
        };

        write!(f, "{action}")
    }
}

/// A request for a seat action.
#[derive(Debug)]
pub struct ActionRequest<'a> {
    /// The highest street wager among the seats in the hand.
    pub current_bet: Chips,
    /// The minimum raise increment above the call.
    pub min_raise: Chips,
    /// The chips this seat owes to stay in the hand.
    pub to_call: Chips,
    /// The shared pot.
    pub pot: Chips,
    /// The community cards dealt so far.
    pub board: &'a [Card],
}

impl ActionRequest<'_> {
    /// Checks if the seat may check.
    pub fn can_check(&self) -> bool {
        self.to_call == Chips::ZERO
    }
}

/// A seat decision capability.
///
/// One provider is injected per seat when the player joins the table, the
/// betting round calls it whenever the seat has to act. The returned amount
/// is ignored for [Action::Fold] and [Action::Check], recomputed by the
/// engine for [Action::Call], and is the raise increment above the call for
/// [Action::Raise].
///
/// Raises must respect the minimum raise and the seat stack: interactive
/// implementations re-prompt until the action is legal, automated
/// implementations clamp before returning. The engine validates every
/// decision regardless and treats a violation as a provider bug that aborts
/// the hand.
pub trait DecisionProvider {
    /// Decides the action for `seat`.
    fn decide(&mut self, req: &ActionRequest<'_>, seat: &Seat) -> (Action, Chips);
}
