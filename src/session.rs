// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

/// The three things a learner can do with the card in front of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum Action {
    Flip,
    Skip,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// The deck has no cards.
    Empty,
    /// A card is active, front side up.
    Presenting,
    /// A card is active, back side up.
    Flipped,
    /// Every card is on the learned pile.
    AllLearned,
}

/// A study session over one deck.
///
/// Cards are referred to by their position in the deck. Every position is on
/// exactly one of the three piles: `to_learn`, `active` (at most one card) or
/// `learned`. Cards only ever move between piles.
#[derive(Clone, Debug)]
pub struct Session {
    /// Waiting cards. The front is the next card to become active.
    to_learn: VecDeque<usize>,
    active: Option<usize>,
    /// Learned cards, oldest first.
    learned: Vec<usize>,
    flipped: bool,
}

impl Session {
    /// Starts a session over `card_count` cards in uniformly random order.
    pub fn new<R: Rng + ?Sized>(card_count: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..card_count).collect();
        order.shuffle(rng);
        Self::with_order(order)
    }

    pub fn shuffled(card_count: usize) -> Self {
        Self::new(card_count, &mut rand::thread_rng())
    }

    /// Starts a session that presents cards in the given order.
    pub fn with_order(order: Vec<usize>) -> Self {
        let mut session = Self {
            to_learn: order.into(),
            active: None,
            learned: Vec::new(),
            flipped: false,
        };
        session.refill();
        session
    }

    pub fn state(&self) -> SessionState {
        match self.active {
            Some(_) if self.flipped => SessionState::Flipped,
            Some(_) => SessionState::Presenting,
            None if self.learned.is_empty() => SessionState::Empty,
            None => SessionState::AllLearned,
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Flip => self.flip(),
            Action::Skip => self.skip(),
            Action::Done => self.done(),
        }
    }

    /// Turns the active card over.
    pub fn flip(&mut self) {
        if self.active.is_some() {
            self.flipped = !self.flipped;
        }
    }

    /// Puts the active card back behind every card still waiting.
    pub fn skip(&mut self) {
        if let Some(card) = self.active.take() {
            self.to_learn.push_back(card);
            self.flipped = false;
            self.refill();
        }
    }

    /// Moves the active card to the learned pile.
    pub fn done(&mut self) {
        if let Some(card) = self.active.take() {
            self.learned.push(card);
            self.flipped = false;
            self.refill();
        }
    }

    fn refill(&mut self) {
        if self.active.is_none() {
            self.active = self.to_learn.pop_front();
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Waiting cards, next card first.
    pub fn to_learn(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.to_learn.iter().copied()
    }

    /// Learned cards, oldest first.
    pub fn learned(&self) -> &[usize] {
        &self.learned
    }

    pub fn to_learn_count(&self) -> usize {
        self.to_learn.len()
    }

    pub fn learned_count(&self) -> usize {
        self.learned.len()
    }

    pub fn total(&self) -> usize {
        self.to_learn.len() + usize::from(self.active.is_some()) + self.learned.len()
    }
}
