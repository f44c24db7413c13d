// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table hand orchestration.
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use holdem_cards::{Card, Deck};
use holdem_eval::evaluate;

use crate::{
    action::DecisionProvider,
    chips::Chips,
    error::EngineError,
    event::{BlindKind, EventSink, TableEvent},
    round::{RoundOutcome, run_round},
    seat::{Seat, SeatsState},
};

/// One of the four betting phases of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Street {
    /// Betting on the hole cards.
    Preflop,
    /// Betting on the first three community cards.
    Flop,
    /// Betting on the fourth community card.
    Turn,
    /// Betting on the fifth community card.
    River,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };

        write!(f, "{street}")
    }
}

/// A poker table playing multi round hands until one seat has all the chips.
///
/// Seats act in seating order, the whole table rotates one position at the
/// start of every hand so the dealer button moves around the table and the
/// first seat is always first to act.
pub struct Table {
    seats: SeatsState,
    providers: Vec<Box<dyn DecisionProvider>>,
    small_blind: Chips,
    big_blind: Chips,
    pot: Chips,
    board: Vec<Card>,
}

impl Table {
    /// Creates a table with the given blinds.
    pub fn new(small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            seats: SeatsState::default(),
            providers: Vec::default(),
            small_blind,
            big_blind,
            pot: Chips::ZERO,
            board: Vec::with_capacity(5),
        }
    }

    /// Seats a player with its decision provider.
    pub fn join(
        &mut self,
        name: impl Into<String>,
        chips: Chips,
        provider: Box<dyn DecisionProvider>,
    ) {
        let name = name.into();
        info!("{name} joined the table with {chips} chips");

        self.seats.join(Seat::new(name, chips));
        self.providers.push(provider);
    }

    /// Returns the seats in acting order.
    pub fn seats(&self) -> &[Seat] {
        self.seats.seats()
    }

    /// The current pot.
    pub fn pot(&self) -> Chips {
        self.pot
    }

    /// The community cards dealt so far.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The big blind amount.
    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }

    /// Plays one hand.
    ///
    /// Broke seats are eliminated before the hand starts, fails with
    /// [EngineError::NotEnoughSeats] when fewer than two seats remain. Any
    /// other error aborts the hand, chips already moved to the pot stay in
    /// the pot but stacks settled in previous hands are untouched.
    pub fn play_hand<R: Rng>(
        &mut self,
        rng: &mut R,
        events: &mut dyn EventSink,
    ) -> Result<(), EngineError> {
        self.eliminate_broke(events);
        if self.seats.len() < 2 {
            return Err(EngineError::NotEnoughSeats);
        }

        // Move the button, reset seats and hand state.
        self.seats.rotate();
        self.providers.rotate_left(1);
        self.seats.start_hand();
        self.pot = Chips::ZERO;
        self.board.clear();

        let dealer = self.seats.seat(self.seats.len() - 1).name.clone();
        info!("hand started, {dealer} has the button");
        events.notify(&TableEvent::HandStarted { dealer });

        let mut deck = Deck::new_and_shuffled(rng);

        self.post_blinds(events);

        for seat in self.seats.iter_mut() {
            seat.hole_cards = Some((deck.draw()?, deck.draw()?));
        }

        // Preflop opens with the big blind to match.
        events.notify(&TableEvent::StreetDealt {
            street: Street::Preflop,
            board: Vec::default(),
        });
        let outcome = run_round(
            &mut self.seats,
            &mut self.providers,
            &self.board,
            &mut self.pot,
            self.big_blind,
            self.big_blind,
            events,
        )?;
        if outcome == RoundOutcome::FoldWin {
            return self.award_fold_win(events);
        }

        for street in [Street::Flop, Street::Turn, Street::River] {
            let deal = if street == Street::Flop { 3 } else { 1 };
            for _ in 0..deal {
                self.board.push(deck.draw()?);
            }

            events.notify(&TableEvent::StreetDealt {
                street,
                board: self.board.clone(),
            });

            let outcome = run_round(
                &mut self.seats,
                &mut self.providers,
                &self.board,
                &mut self.pot,
                Chips::ZERO,
                self.big_blind,
                events,
            )?;
            if outcome == RoundOutcome::FoldWin {
                return self.award_fold_win(events);
            }
        }

        self.showdown(events)
    }

    /// Removes seats that have lost all their chips.
    pub fn eliminate_broke(&mut self, events: &mut dyn EventSink) {
        let mut idx = 0;
        while idx < self.seats.len() {
            if self.seats.seat(idx).chips == Chips::ZERO {
                let seat = self.seats.remove(idx);
                self.providers.remove(idx);

                info!("{} has no chips left and leaves the table", seat.name);
                events.notify(&TableEvent::SeatEliminated { name: seat.name });
            } else {
                idx += 1;
            }
        }
    }

    /// Posts the small and big blind from the first two seats.
    fn post_blinds(&mut self, events: &mut dyn EventSink) {
        let blinds = [
            (0, BlindKind::Small, self.small_blind),
            (1, BlindKind::Big, self.big_blind),
        ];

        for (idx, kind, blind) in blinds {
            let seat = self.seats.seat_mut(idx);
            let paid = seat.pay(blind);
            self.pot += paid;

            events.notify(&TableEvent::BlindPosted {
                name: seat.name.clone(),
                kind,
                amount: paid,
            });
        }
    }

    /// Awards the pot to the only seat left in the hand.
    fn award_fold_win(&mut self, events: &mut dyn EventSink) -> Result<(), EngineError> {
        if let Some(seat) = self.seats.iter_mut().find(|s| !s.folded) {
            seat.chips += self.pot;

            info!("{} wins {} unopposed", seat.name, self.pot);
            events.notify(&TableEvent::FoldWin {
                name: seat.name.clone(),
                pot: self.pot,
            });

            self.pot = Chips::ZERO;
        }

        Ok(())
    }

    /// Compares the hands left at showdown and distributes the pot.
    fn showdown(&mut self, events: &mut dyn EventSink) -> Result<(), EngineError> {
        let mut scores = Vec::new();
        for (idx, seat) in self.seats.iter().enumerate() {
            if seat.folded {
                continue;
            }

            if let Some((c1, c2)) = seat.hole_cards {
                let mut cards = vec![c1, c2];
                cards.extend_from_slice(&self.board);
                let score = evaluate(&cards)?;

                events.notify(&TableEvent::ShowdownHand {
                    name: seat.name.clone(),
                    cards: (c1, c2),
                    score,
                });
                scores.push((idx, score));
            }
        }

        let Some(best) = scores.iter().map(|(_, score)| *score).max() else {
            return Ok(());
        };

        let winners = scores
            .iter()
            .filter(|(_, score)| *score == best)
            .map(|(idx, _)| *idx)
            .collect::<Vec<_>>();

        // Split pots divide evenly, the odd chips go to the first winner
        // after the button so none are lost.
        let share = self.pot / winners.len() as u32;
        let remainder = self.pot % winners.len() as u32;

        for (pos, &idx) in winners.iter().enumerate() {
            let amount = if pos == 0 { share + remainder } else { share };
            let seat = self.seats.seat_mut(idx);
            seat.chips += amount;

            info!("{} wins {} at showdown", seat.name, amount);
            events.notify(&TableEvent::PotAwarded {
                name: seat.name.clone(),
                amount,
            });
        }

        self.pot = Chips::ZERO;

        Ok(())
    }
}
