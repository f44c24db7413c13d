// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table seat state.
use holdem_cards::Card;

use crate::chips::Chips;

/// A seated player state.
///
/// The stack persists across hands, the street wager and the folded and all
/// in flags reset at the start of every hand.
#[derive(Debug, Clone)]
pub struct Seat {
    /// The player name.
    pub name: String,
    /// The player stack.
    pub chips: Chips,
    /// The chips wagered in the current street.
    pub bet: Chips,
    /// The seat folded this hand.
    pub folded: bool,
    /// The seat wagered its whole stack this hand.
    pub all_in: bool,
    /// The two private cards, dealt at the start of a hand.
    pub hole_cards: Option<(Card, Card)>,
    /// The seat has the dealer button.
    pub has_button: bool,
}

impl Seat {
    /// Creates a new seat.
    pub fn new(name: impl Into<String>, chips: Chips) -> Self {
        Self {
            name: name.into(),
            chips,
            bet: Chips::ZERO,
            folded: false,
            all_in: false,
            hole_cards: None,
            has_button: false,
        }
    }

    /// Checks if this seat can still act in the hand.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }

    /// Sets this seat in fold state.
    pub fn fold(&mut self) {
        self.folded = true;
    }

    /// Moves up to `amount` chips from the stack into the street wager.
    ///
    /// A seat with a short stack pays what it has and goes all in, the
    /// chips actually paid are returned for the caller to add to the pot.
    pub fn pay(&mut self, amount: Chips) -> Chips {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.bet += paid;

        if self.chips == Chips::ZERO {
            self.all_in = true;
        }

        paid
    }

    /// Reset state for a new hand.
    fn start_hand(&mut self) {
        self.bet = Chips::ZERO;
        self.folded = false;
        self.all_in = false;
        self.hole_cards = None;
        self.has_button = false;
    }
}

/// The table seats in acting order.
///
/// Seats rotate one position at the start of every hand so that the first
/// seat posts the small blind and acts first on every street, the last seat
/// holds the dealer button.
#[derive(Debug, Default)]
pub(crate) struct SeatsState {
    seats: Vec<Seat>,
}

impl SeatsState {
    /// Adds a seat to the table.
    pub fn join(&mut self, seat: Seat) {
        self.seats.push(seat);
    }

    /// Number of seats at the table.
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Returns the number of seats still in the hand.
    pub fn count_active(&self) -> usize {
        self.seats.iter().filter(|s| !s.folded).count()
    }

    /// Moves the first seat after the dealer button.
    pub fn rotate(&mut self) {
        self.seats.rotate_left(1);
    }

    /// Resets all seats for a new hand and marks the dealer button.
    pub fn start_hand(&mut self) {
        for seat in &mut self.seats {
            seat.start_hand();
        }

        if let Some(button) = self.seats.last_mut() {
            button.has_button = true;
        }
    }

    /// Removes the seat at `idx`.
    pub fn remove(&mut self, idx: usize) -> Seat {
        self.seats.remove(idx)
    }

    /// Returns the seat at `idx`.
    pub fn seat(&self, idx: usize) -> &Seat {
        &self.seats[idx]
    }

    /// Returns the mutable seat at `idx`.
    pub fn seat_mut(&mut self, idx: usize) -> &mut Seat {
        &mut self.seats[idx]
    }

    /// Returns all seats in acting order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Returns an iterator to all seats.
    pub fn iter(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter()
    }

    /// Returns a mutable iterator to all seats.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Seat> {
        self.seats.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_stack_pays_all_in() {
        let mut seat = Seat::new("Alice", Chips::new(15));

        let paid = seat.pay(Chips::new(20));

        assert_eq!(paid, Chips::new(15));
        assert_eq!(seat.chips, Chips::ZERO);
        assert_eq!(seat.bet, Chips::new(15));
        assert!(seat.all_in);
        assert!(!seat.can_act());
    }

    #[test]
    fn exact_stack_pay_is_all_in() {
        let mut seat = Seat::new("Bob", Chips::new(20));

        let paid = seat.pay(Chips::new(20));

        assert_eq!(paid, Chips::new(20));
        assert!(seat.all_in);
    }

    #[test]
    fn start_hand_keeps_stack() {
        let mut seat = Seat::new("Carol", Chips::new(500));
        seat.pay(Chips::new(100));
        seat.fold();

        seat.start_hand();

        assert_eq!(seat.chips, Chips::new(400));
        assert_eq!(seat.bet, Chips::ZERO);
        assert!(!seat.folded);
        assert!(!seat.all_in);
        assert!(seat.hole_cards.is_none());
    }

    #[test]
    fn rotation_moves_button() {
        let mut seats = SeatsState::default();
        seats.join(Seat::new("Alice", Chips::new(1000)));
        seats.join(Seat::new("Bob", Chips::new(1000)));
        seats.join(Seat::new("Carol", Chips::new(1000)));

        seats.rotate();
        seats.start_hand();

        let names = seats.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["Bob", "Carol", "Alice"]);
        assert!(seats.seat(2).has_button);
        assert!(!seats.seat(0).has_button);
    }
}
