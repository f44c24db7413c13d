// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem automated players.
//!
//! This crate provides [BotPlayer], a probability threshold decision
//! provider used to fill table seats with automated opponents. The bot
//! draws its randomness from an explicit seeded generator so games are
//! reproducible.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use rand::{Rng, rngs::StdRng};

use holdem_engine::{Action, ActionRequest, Chips, DecisionProvider, Seat};

/// Nicknames assigned to bot seats.
pub static NICKNAMES: &[&str] = &["Alice", "Bob", "Carol", "Dave", "Frank", "Mike"];

/// An automated player with a probability threshold strategy.
///
/// The aggression level in `0.0..=1.0` scales how willing the bot is to
/// stay in a hand facing a large bet. Raises are clamped to the minimum
/// raise and the seat stack before they are returned, this provider never
/// produces an illegal action.
#[derive(Debug)]
pub struct BotPlayer {
    aggression: f64,
    rng: StdRng,
}

impl BotPlayer {
    /// Creates a bot with the given aggression level and randomness.
    pub fn new(aggression: f64, rng: StdRng) -> Self {
        Self {
            aggression: aggression.clamp(0.0, 1.0),
            rng,
        }
    }

    /// Picks a raise increment between the minimum raise and `max`.
    fn raise_amount(&mut self, min_raise: Chips, max: Chips) -> Chips {
        Chips::new(self.rng.random_range(min_raise.amount()..=max.amount()))
    }
}

impl DecisionProvider for BotPlayer {
    fn decide(&mut self, req: &ActionRequest<'_>, seat: &Seat) -> (Action, Chips) {
        let decision = self.rng.random::<f64>();
        let min_raise = req.min_raise;

        if req.can_check() {
            if (0.7..0.85).contains(&decision) && seat.chips > min_raise {
                let max = (min_raise * 3).min(seat.chips);
                (Action::Raise, self.raise_amount(min_raise, max))
            } else {
                (Action::Check, Chips::ZERO)
            }
        } else {
            // Raising needs chips left behind the call.
            let behind = seat.chips - req.to_call;

            if req.to_call * 10 > seat.chips * 3 {
                // Facing a large bet play tight, aggression loosens the fold
                // threshold.
                if decision < 0.4 * (1.0 - self.aggression) {
                    (Action::Fold, Chips::ZERO)
                } else if decision < 0.7 || behind <= min_raise {
                    (Action::Call, Chips::ZERO)
                } else {
                    let max = (min_raise * 2).min(behind);
                    (Action::Raise, self.raise_amount(min_raise, max))
                }
            } else if decision < 0.2 {
                (Action::Fold, Chips::ZERO)
            } else if decision < 0.6 + self.aggression * 0.2 || behind <= min_raise {
                (Action::Call, Chips::ZERO)
            } else {
                let max = (min_raise * 3).min(behind);
                (Action::Raise, self.raise_amount(min_raise, max))
            }
        }
    }
}
