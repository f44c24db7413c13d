// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Betting round state machine.
//!
//! Runs one street: seats act in order starting from the first seat after
//! the dealer button, folded and all in seats are skipped. The round ends
//! when every seat that can still act has acted since the last raise and
//! matched the current bet, a raise re-opens the round for all other seats.
use holdem_cards::Card;

use crate::{
    action::{Action, ActionRequest, DecisionProvider},
    chips::Chips,
    error::EngineError,
    event::{EventSink, TableEvent},
    seat::SeatsState,
};

/// How a betting round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// All bets are matched, the hand moves to the next street.
    Complete,
    /// All seats but one folded, the hand ends without a showdown.
    FoldWin,
}

/// Runs one betting street.
///
/// `current_bet` is the wager to match when the street opens, the big blind
/// preflop and zero on later streets. Street wagers are cleared when the
/// round completes, the pot persists across streets.
pub(crate) fn run_round(
    seats: &mut SeatsState,
    providers: &mut [Box<dyn DecisionProvider>],
    board: &[Card],
    pot: &mut Chips,
    current_bet: Chips,
    big_blind: Chips,
    events: &mut dyn EventSink,
) -> Result<RoundOutcome, EngineError> {
    let mut current_bet = current_bet;
    let mut min_raise = big_blind;

    let n = seats.len();
    let mut acted = vec![false; n];
    let mut idx = 0;

    loop {
        if seats.count_active() <= 1 {
            return Ok(RoundOutcome::FoldWin);
        }

        // The round is over once every seat that can still act has acted
        // since the last raise and matched the current bet. With no seat
        // left to act the street plays out with no actions.
        let complete = seats
            .iter()
            .enumerate()
            .filter(|(_, seat)| seat.can_act())
            .all(|(i, seat)| acted[i] && seat.bet == current_bet);
        if complete {
            break;
        }

        if seats.seat(idx).can_act() {
            let seat = seats.seat(idx);
            let to_call = current_bet - seat.bet;
            let req = ActionRequest {
                current_bet,
                min_raise,
                to_call,
                pot: *pot,
                board,
            };

            let (action, amount) = providers[idx].decide(&req, seat);

            let seat = seats.seat_mut(idx);
            let paid = match action {
                Action::Fold => {
                    seat.fold();
                    Chips::ZERO
                }
                Action::Check => {
                    if to_call > Chips::ZERO {
                        return Err(EngineError::CheckOwing {
                            name: seat.name.clone(),
                            to_call,
                        });
                    }
                    Chips::ZERO
                }
                Action::Call => {
                    let paid = seat.pay(to_call);
                    *pot += paid;
                    paid
                }
                Action::Raise => {
                    if amount < min_raise {
                        return Err(EngineError::RaiseBelowMinimum {
                            name: seat.name.clone(),
                            amount,
                            min_raise,
                        });
                    }
                    if to_call + amount > seat.chips {
                        return Err(EngineError::RaiseOverStack {
                            name: seat.name.clone(),
                            amount: to_call + amount,
                            chips: seat.chips,
                        });
                    }

                    let paid = seat.pay(to_call + amount);
                    *pot += paid;
                    min_raise = amount;
                    current_bet = seat.bet;

                    // The raise re-opens the round, every other seat has to
                    // act again before the street can end.
                    acted.fill(false);
                    paid
                }
            };

            let seat = seats.seat(idx);
            events.notify(&TableEvent::ActionTaken {
                name: seat.name.clone(),
                action,
                amount: paid,
                all_in: seat.all_in,
            });

            acted[idx] = true;
        }

        idx = (idx + 1) % n;
    }

    // Street wagers are spent, clear them before the next street.
    for seat in seats.iter_mut() {
        seat.bet = Chips::ZERO;
    }

    Ok(RoundOutcome::Complete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event::NullSink, seat::Seat};
    use std::collections::VecDeque;

    /// A provider that plays a fixed list of decisions.
    struct Script(VecDeque<(Action, Chips)>);

    impl Script {
        fn new(decisions: &[(Action, u32)]) -> Box<dyn DecisionProvider> {
            Box::new(Self(
                decisions
                    .iter()
                    .map(|(a, c)| (*a, Chips::new(*c)))
                    .collect(),
            ))
        }
    }

    impl DecisionProvider for Script {
        fn decide(&mut self, _req: &ActionRequest<'_>, seat: &Seat) -> (Action, Chips) {
            self.0
                .pop_front()
                .unwrap_or_else(|| panic!("unexpected action request for {}", seat.name))
        }
    }

    fn seats(chips: &[u32]) -> SeatsState {
        let mut seats = SeatsState::default();
        for (idx, &chips) in chips.iter().enumerate() {
            seats.join(Seat::new(format!("P{idx}"), Chips::new(chips)));
        }
        seats
    }

    fn total_chips(seats: &SeatsState, pot: Chips) -> Chips {
        seats
            .iter()
            .fold(pot, |acc, s| acc + s.chips)
    }

    const BB: Chips = Chips::new(20);

    #[test]
    fn checks_complete_the_round() {
        let mut seats = seats(&[1000, 1000, 1000]);
        let mut providers = vec![
            Script::new(&[(Action::Check, 0)]),
            Script::new(&[(Action::Check, 0)]),
            Script::new(&[(Action::Check, 0)]),
        ];
        let mut pot = Chips::ZERO;

        let outcome = run_round(
            &mut seats,
            &mut providers,
            &[],
            &mut pot,
            Chips::ZERO,
            BB,
            &mut NullSink,
        )
        .unwrap();

        assert_eq!(outcome, RoundOutcome::Complete);
        assert_eq!(pot, Chips::ZERO);
    }

    #[test]
    fn raise_reopens_the_round() {
        let mut seats = seats(&[1000, 1000, 1000]);
        // P0 opens for 20, P1 raises 40 more to 60, P2 calls, and P0 has to
        // act again even though it already acted this street.
        let mut providers = vec![
            Script::new(&[(Action::Raise, 20), (Action::Call, 0)]),
            Script::new(&[(Action::Raise, 40)]),
            Script::new(&[(Action::Call, 0)]),
        ];
        let mut pot = Chips::ZERO;

        let outcome = run_round(
            &mut seats,
            &mut providers,
            &[],
            &mut pot,
            Chips::ZERO,
            BB,
            &mut NullSink,
        )
        .unwrap();

        assert_eq!(outcome, RoundOutcome::Complete);
        assert_eq!(pot, Chips::new(180));
        for seat in seats.iter() {
            assert_eq!(seat.chips, Chips::new(940));
            // Wagers reset when the street ends.
            assert_eq!(seat.bet, Chips::ZERO);
        }
    }

    #[test]
    fn short_stack_call_goes_all_in() {
        let mut seats = seats(&[1000, 15, 1000]);
        let mut providers = vec![
            Script::new(&[(Action::Raise, 20)]),
            // P1 can only cover 15 of the 20 to call and is not asked again.
            Script::new(&[(Action::Call, 0)]),
            Script::new(&[(Action::Call, 0)]),
        ];
        let mut pot = Chips::ZERO;

        let outcome = run_round(
            &mut seats,
            &mut providers,
            &[],
            &mut pot,
            Chips::ZERO,
            BB,
            &mut NullSink,
        )
        .unwrap();

        assert_eq!(outcome, RoundOutcome::Complete);
        assert_eq!(pot, Chips::new(55));
        assert!(seats.seat(1).all_in);
        assert!(!seats.seat(1).folded);
        assert_eq!(seats.seat(1).chips, Chips::ZERO);
    }

    #[test]
    fn fold_win_short_circuits() {
        let mut seats = seats(&[1000, 1000, 1000]);
        let mut providers = vec![
            Script::new(&[(Action::Raise, 20)]),
            Script::new(&[(Action::Fold, 0)]),
            Script::new(&[(Action::Fold, 0)]),
        ];
        let mut pot = Chips::ZERO;

        let outcome = run_round(
            &mut seats,
            &mut providers,
            &[],
            &mut pot,
            Chips::ZERO,
            BB,
            &mut NullSink,
        )
        .unwrap();

        assert_eq!(outcome, RoundOutcome::FoldWin);
        assert_eq!(pot, Chips::new(20));
        assert_eq!(seats.count_active(), 1);
    }

    #[test]
    fn check_while_owing_is_rejected() {
        let mut seats = seats(&[1000, 1000]);
        let mut providers = vec![
            Script::new(&[(Action::Raise, 20)]),
            Script::new(&[(Action::Check, 0)]),
        ];
        let mut pot = Chips::ZERO;

        let err = run_round(
            &mut seats,
            &mut providers,
            &[],
            &mut pot,
            Chips::ZERO,
            BB,
            &mut NullSink,
        )
        .unwrap_err();

        assert_eq!(
            err,
            EngineError::CheckOwing {
                name: "P1".to_string(),
                to_call: Chips::new(20),
            }
        );
        // The chips committed before the error stay committed.
        assert_eq!(pot, Chips::new(20));
        assert_eq!(total_chips(&seats, pot), Chips::new(2000));
    }

    #[test]
    fn raise_below_minimum_is_rejected() {
        let mut seats = seats(&[1000, 1000]);
        let mut providers = vec![
            Script::new(&[(Action::Raise, 20)]),
            Script::new(&[(Action::Raise, 10)]),
        ];
        let mut pot = Chips::ZERO;

        let err = run_round(
            &mut seats,
            &mut providers,
            &[],
            &mut pot,
            Chips::ZERO,
            BB,
            &mut NullSink,
        )
        .unwrap_err();

        assert_eq!(
            err,
            EngineError::RaiseBelowMinimum {
                name: "P1".to_string(),
                amount: Chips::new(10),
                min_raise: BB,
            }
        );
    }

    #[test]
    fn raise_over_stack_is_rejected() {
        let mut seats = seats(&[1000, 50]);
        let mut providers = vec![
            Script::new(&[(Action::Raise, 20)]),
            Script::new(&[(Action::Raise, 100)]),
        ];
        let mut pot = Chips::ZERO;

        let err = run_round(
            &mut seats,
            &mut providers,
            &[],
            &mut pot,
            Chips::ZERO,
            BB,
            &mut NullSink,
        )
        .unwrap_err();

        assert_eq!(
            err,
            EngineError::RaiseOverStack {
                name: "P1".to_string(),
                amount: Chips::new(120),
                chips: Chips::new(50),
            }
        );
    }

    #[test]
    fn reraise_updates_minimum_raise() {
        let mut seats = seats(&[1000, 1000]);
        // P1 raises 60 over the call, P0 re-raising the old minimum of 20
        // is now below the 60 minimum.
        let mut providers = vec![
            Script::new(&[(Action::Raise, 20), (Action::Raise, 20)]),
            Script::new(&[(Action::Raise, 60)]),
        ];
        let mut pot = Chips::ZERO;

        let err = run_round(
            &mut seats,
            &mut providers,
            &[],
            &mut pot,
            Chips::ZERO,
            BB,
            &mut NullSink,
        )
        .unwrap_err();

        assert_eq!(
            err,
            EngineError::RaiseBelowMinimum {
                name: "P0".to_string(),
                amount: Chips::new(20),
                min_raise: Chips::new(60),
            }
        );
    }

    #[test]
    fn single_eligible_seat_closes_with_one_check() {
        let mut seats = seats(&[1000, 1000]);
        seats.seat_mut(1).all_in = true;

        let mut providers = vec![
            Script::new(&[(Action::Check, 0)]),
            Script::new(&[]),
        ];
        let mut pot = Chips::ZERO;

        let outcome = run_round(
            &mut seats,
            &mut providers,
            &[],
            &mut pot,
            Chips::ZERO,
            BB,
            &mut NullSink,
        )
        .unwrap();

        assert_eq!(outcome, RoundOutcome::Complete);
    }

    #[test]
    fn no_eligible_seat_completes_without_actions() {
        let mut seats = seats(&[1000, 1000]);
        seats.seat_mut(0).all_in = true;
        seats.seat_mut(1).all_in = true;

        let mut providers = vec![Script::new(&[]), Script::new(&[])];
        let mut pot = Chips::ZERO;

        let outcome = run_round(
            &mut seats,
            &mut providers,
            &[],
            &mut pot,
            Chips::ZERO,
            BB,
            &mut NullSink,
        )
        .unwrap();

        assert_eq!(outcome, RoundOutcome::Complete);
    }

    #[test]
    fn chips_are_conserved_across_actions() {
        let mut seats = seats(&[1000, 500, 300]);
        let mut providers = vec![
            Script::new(&[(Action::Raise, 40), (Action::Call, 0)]),
            Script::new(&[(Action::Raise, 80)]),
            Script::new(&[(Action::Fold, 0)]),
        ];
        let mut pot = Chips::ZERO;

        let outcome = run_round(
            &mut seats,
            &mut providers,
            &[],
            &mut pot,
            Chips::ZERO,
            BB,
            &mut NullSink,
        )
        .unwrap();

        assert_eq!(outcome, RoundOutcome::Complete);
        assert_eq!(total_chips(&seats, pot), Chips::new(1800));
        assert_eq!(pot, Chips::new(240));
    }
}
