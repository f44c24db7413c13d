// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table events printer.
use holdem_engine::{BlindKind, Chips, EventSink, TableEvent};

/// Prints table events to the terminal.
#[derive(Debug, Default)]
pub struct Printer;

impl EventSink for Printer {
    fn notify(&mut self, event: &TableEvent) {
        match event {
            TableEvent::HandStarted { dealer } => {
                println!("\n{dealer} has the button");
            }
            TableEvent::BlindPosted { name, kind, amount } => {
                let blind = match kind {
                    BlindKind::Small => "small blind",
                    BlindKind::Big => "big blind",
                };
                println!("{name} posts the {blind} {amount}");
            }
            TableEvent::StreetDealt { street, board } => {
                println!("\n--- {street} ---");
                if !board.is_empty() {
                    let cards = board
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(" ");
                    println!("Board: {cards}");
                }
            }
            TableEvent::ActionTaken {
                name,
                action,
                amount,
                all_in,
            } => {
                if *amount > Chips::ZERO {
                    print!("{name} {action} {amount}");
                } else {
                    print!("{name} {action}");
                }

                if *all_in {
                    println!(" and is all in");
                } else {
                    println!();
                }
            }
            TableEvent::FoldWin { name, pot } => {
                println!("\n{name} wins {pot} chips, everyone else folded");
            }
            TableEvent::ShowdownHand { name, cards, score } => {
                println!("{name} shows {} {} - {score}", cards.0, cards.1);
            }
            TableEvent::PotAwarded { name, amount } => {
                println!("{name} wins {amount} chips");
            }
            TableEvent::SeatEliminated { name } => {
                println!("\n{name} is out of chips and leaves the game");
            }
        }
    }
}
