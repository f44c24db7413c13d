// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Interactive decision provider.
use std::io::{self, BufRead, Write};

use holdem_engine::{Action, ActionRequest, Chips, DecisionProvider, Seat};

/// A decision provider that prompts the player on the terminal.
///
/// Illegal inputs never leave this provider: raises below the minimum or
/// over the stack re-prompt until the action is legal. A closed input
/// stream folds the hand so the game can settle cleanly.
#[derive(Debug, Default)]
pub struct HumanPlayer;

/// Outcome of the raise amount prompt.
enum RaiseInput {
    Amount(Chips),
    Retry,
    Closed,
}

impl HumanPlayer {
    /// Reads a trimmed input line, `None` when the input is closed.
    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Prompts for a raise increment above the call.
    fn prompt_raise(&self, req: &ActionRequest<'_>, seat: &Seat) -> RaiseInput {
        let max = seat.chips - req.to_call;
        if max < req.min_raise {
            println!("Not enough chips to raise");
            return RaiseInput::Retry;
        }

        print!("Raise amount (minimum {}, maximum {max}): ", req.min_raise);
        let _ = io::stdout().flush();

        let Some(line) = self.read_line() else {
            return RaiseInput::Closed;
        };

        match line.parse::<u32>() {
            Ok(amount) if Chips::new(amount) < req.min_raise => {
                println!("The minimum raise is {}", req.min_raise);
                RaiseInput::Retry
            }
            Ok(amount) if Chips::new(amount) > max => {
                println!("Not enough chips, the maximum raise is {max}");
                RaiseInput::Retry
            }
            Ok(amount) => RaiseInput::Amount(Chips::new(amount)),
            Err(_) => {
                println!("Enter a valid number");
                RaiseInput::Retry
            }
        }
    }
}

impl DecisionProvider for HumanPlayer {
    fn decide(&mut self, req: &ActionRequest<'_>, seat: &Seat) -> (Action, Chips) {
        println!("\nYour turn");
        if let Some((c1, c2)) = seat.hole_cards {
            println!("Your cards: {c1} {c2}");
        }
        println!("Your chips: {}  Pot: {}", seat.chips, req.pot);

        loop {
            if req.can_check() {
                print!("Choose [c]heck, [r]aise, [f]old: ");
            } else {
                println!("{} to call", req.to_call);
                print!("Choose [c]all, [r]aise, [f]old: ");
            }
            let _ = io::stdout().flush();

            let Some(line) = self.read_line() else {
                // Closed input folds the hand.
                return (Action::Fold, Chips::ZERO);
            };

            match line.as_str() {
                "c" if req.can_check() => return (Action::Check, Chips::ZERO),
                "c" => return (Action::Call, Chips::ZERO),
                "f" => return (Action::Fold, Chips::ZERO),
                "r" => match self.prompt_raise(req, seat) {
                    RaiseInput::Amount(amount) => return (Action::Raise, amount),
                    RaiseInput::Retry => {}
                    RaiseInput::Closed => return (Action::Fold, Chips::ZERO),
                },
                _ => println!("Invalid input, try again"),
            }
        }
    }
}
