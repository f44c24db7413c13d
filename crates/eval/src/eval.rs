// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand scoring over the best five cards out of seven.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use holdem_cards::Card;

/// Evaluation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The evaluator was called with a number of cards other than seven.
    #[error("hand evaluation requires 7 cards, got {0}")]
    CardCount(usize),
    /// The evaluator was called with the same card twice.
    #[error("duplicate card {0} in hand")]
    DuplicateCard(Card),
}

/// The category of a five cards hand, weakest to strongest.
///
/// Category strength is the declaration order, hands from different
/// categories never compare by tie break key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HandCategory {
    /// No matching cards, ranked by high cards.
    HighCard = 0,
    /// Two cards of one rank.
    OnePair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Five consecutive ranks of one suit.
    StraightFlush,
    /// The ace high straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// The category display name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The score of a hand, a category plus a tie break key.
///
/// Scores order first by category and then lexicographically by key, so the
/// derived ordering is the showdown comparator, an equal comparison between
/// the best scores means a split pot.
///
/// The key holds rank values high to low, zero padded to five entries, equal
/// categories always populate the same number of entries so the padding never
/// decides a comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct HandScore {
    category: HandCategory,
    key: [u8; 5],
}

impl HandScore {
    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tie break key, rank values high to low.
    pub fn key(&self) -> &[u8; 5] {
        &self.key
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

/// Evaluates the strongest five cards hand out of seven distinct cards.
///
/// Fails with [EvalError] if the input is not exactly seven distinct cards.
pub fn evaluate(cards: &[Card]) -> Result<HandScore, EvalError> {
    if cards.len() != 7 {
        return Err(EvalError::CardCount(cards.len()));
    }

    let mut seen = AHashSet::with_capacity(cards.len());
    for &card in cards {
        if !seen.insert(card) {
            return Err(EvalError::DuplicateCard(card));
        }
    }

    // Enumerate the C(7,5)=21 five cards hands by choosing two cards to drop.
    let mut best: Option<HandScore> = None;
    for drop1 in 0..cards.len() {
        for drop2 in (drop1 + 1)..cards.len() {
            let mut hand = [cards[0]; 5];
            let mut n = 0;
            for (idx, &card) in cards.iter().enumerate() {
                if idx != drop1 && idx != drop2 {
                    hand[n] = card;
                    n += 1;
                }
            }

            let score = rank_five(&hand);
            if best.as_ref().is_none_or(|b| &score > b) {
                best = Some(score);
            }
        }
    }

    Ok(best.expect("seven cards yield 21 five cards hands"))
}

/// Scores a five cards hand.
fn rank_five(cards: &[Card; 5]) -> HandScore {
    let mut ranks = [0u8; 5];
    for (rank, card) in ranks.iter_mut().zip(cards) {
        *rank = card.rank().value();
    }
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());

    // The wheel scores as a five high straight, the ace moves to the bottom.
    // After the substitution the high card is a five so the wheel can never
    // match the royal flush test below.
    let is_wheel = ranks == [14, 5, 4, 3, 2];
    if is_wheel {
        ranks = [5, 4, 3, 2, 1];
    }

    let is_straight =
        is_wheel || (ranks[0] - ranks[4] == 4 && ranks.windows(2).all(|w| w[0] > w[1]));

    // Group ranks by multiplicity, higher count first then higher rank.
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &rank in &ranks {
        match groups.iter_mut().find(|g| g.1 == rank) {
            Some(group) => group.0 += 1,
            None => groups.push((1, rank)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let counts = groups.iter().map(|g| g.0).collect::<Vec<_>>();

    let category = if is_flush && is_straight && ranks[0] == 14 {
        HandCategory::RoyalFlush
    } else if is_flush && is_straight {
        HandCategory::StraightFlush
    } else if counts == [4, 1] {
        HandCategory::FourOfAKind
    } else if counts == [3, 2] {
        HandCategory::FullHouse
    } else if is_flush {
        HandCategory::Flush
    } else if is_straight {
        HandCategory::Straight
    } else if counts == [3, 1, 1] {
        HandCategory::ThreeOfAKind
    } else if counts == [2, 2, 1] {
        HandCategory::TwoPair
    } else if counts == [2, 1, 1, 1] {
        HandCategory::OnePair
    } else {
        HandCategory::HighCard
    };

    let key = match category {
        HandCategory::RoyalFlush
        | HandCategory::StraightFlush
        | HandCategory::Flush
        | HandCategory::Straight
        | HandCategory::HighCard => ranks,
        _ => {
            // Grouped categories rank by count first, quads before their
            // kicker, trips before the pair.
            let mut key = [0u8; 5];
            for (entry, group) in key.iter_mut().zip(&groups) {
                *entry = group.1;
            }
            key
        }
    };

    HandScore { category, key }
}
