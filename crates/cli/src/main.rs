// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem terminal game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::io::{self, BufRead, Write};

use holdem_bot::{BotPlayer, NICKNAMES};
use holdem_engine::{Chips, EngineError, Table};

mod display;
mod human;

#[derive(Debug, Parser)]
struct Cli {
    /// This player nickname.
    #[clap(long, short, default_value = "You")]
    nickname: String,
    /// Number of bot opponents.
    #[clap(long, short, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    bots: u8,
    /// The starting stack for each player.
    #[clap(long, default_value_t = 1000)]
    stack: u32,
    /// The small blind.
    #[clap(long, default_value_t = 10)]
    small_blind: u32,
    /// The big blind.
    #[clap(long, default_value_t = 20)]
    big_blind: u32,
    /// Seed for a reproducible game.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stack = Chips::new(cli.stack);
    let mut table = Table::new(Chips::new(cli.small_blind), Chips::new(cli.big_blind));

    table.join(
        cli.nickname.clone(),
        stack,
        Box::new(human::HumanPlayer::default()),
    );

    for idx in 0..cli.bots as usize {
        let aggression = 0.3 + 0.2 * (idx % 3) as f64;
        let bot_rng = StdRng::seed_from_u64(rng.random::<u64>());
        table.join(
            NICKNAMES[idx % NICKNAMES.len()],
            stack,
            Box::new(BotPlayer::new(aggression, bot_rng)),
        );
    }

    println!("Welcome to Holdem!");
    println!(
        "{} players, {stack} starting chips, blinds {}/{}",
        cli.bots + 1,
        cli.small_blind,
        cli.big_blind
    );

    let mut display = display::Printer;
    let mut hand = 0u32;

    loop {
        hand += 1;
        println!();
        println!("{:=<50}", "");
        println!("Hand #{hand}");
        println!("{:=<50}", "");

        match table.play_hand(&mut rng, &mut display) {
            Ok(()) => {}
            Err(EngineError::NotEnoughSeats) => break,
            Err(e) => return Err(e.into()),
        }

        show_chips(&table);
        table.eliminate_broke(&mut display);

        if table.seats().len() <= 1 {
            break;
        }

        // Bots play on by themselves once the human player busts out.
        let human_seated = table.seats().iter().any(|s| s.name == cli.nickname);
        if human_seated && !next_hand_prompt()? {
            break;
        }
    }

    standings(&table);

    Ok(())
}

/// Shows the current stack of every seated player.
fn show_chips(table: &Table) {
    println!("\nChip counts:");
    for seat in table.seats() {
        println!("  {}: {}", seat.name, seat.chips);
    }
}

/// Asks whether to play the next hand.
fn next_hand_prompt() -> Result<bool> {
    print!("\nPlay the next hand? (y/n): ");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;

    // Closed input ends the game.
    Ok(read > 0 && line.trim().eq_ignore_ascii_case("y"))
}

/// Shows the final standings sorted by stack.
fn standings(table: &Table) {
    println!();
    println!("{:=<50}", "");
    println!("Game over");
    println!("{:=<50}", "");

    let mut seats = table.seats().to_vec();
    seats.sort_by(|a, b| b.chips.cmp(&a.chips));

    if let [winner] = seats.as_slice() {
        println!("\nWinner: {} with {} chips", winner.name, winner.chips);
    } else {
        println!("\nFinal chips:");
        for (pos, seat) in seats.iter().enumerate() {
            println!("  {}. {} - {}", pos + 1, seat.name, seat.chips);
        }
    }

    println!("\nThanks for playing!");
}
