// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazily determinized Levenshtein automaton.
//!
//! A DFA state is a row of the edit-distance table: entry `j` is the distance
//! between the input consumed so far and the first `j` query characters,
//! clamped at `max + 1` ("too far"). Clamping is what makes the state space
//! finite. Two inputs that produce the same clamped row are indistinguishable
//! from here on, so rows are interned and become state ids.
//!
//! ```text
//!   query "cat", max 1          input so far   row (clamped at 2)
//!                               ""             [0 1 2 2]
//!                               "c"            [1 0 1 2]
//!                               "co"           [2 1 1 2]
//!                               "cot"          [2 2 2 1]  → accept, distance 1
//! ```
//!
//! States are only created when the trie traversal actually steps into them,
//! and each `(state, char)` transition is computed once and cached, so a
//! product walk over thousands of trie nodes touches a small number of rows.
//!
//! With transpositions on (optimal string alignment), a state also carries
//! the row before and the last input character. The last character is
//! forgotten when it is not in the query, since it can then never complete a
//! transposition; that keeps unrelated input from multiplying states.

use std::collections::HashMap;

pub type StateId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct State {
    row: Vec<u8>,
    before: Vec<u8>,
    last: Option<char>,
}

/// Per-query automaton over characters.
#[derive(Debug)]
pub struct LevenshteinAutomaton {
    query: Vec<char>,
    max: u8,
    transpositions: bool,
    states: Vec<State>,
    state_map: HashMap<State, StateId>,
    transitions: HashMap<(StateId, char), Option<StateId>>,
}

impl LevenshteinAutomaton {
    /// `max` is clamped to what a `u8` row can represent.
    pub fn new(query: &str, max: u32, transpositions: bool) -> Self {
        let query: Vec<char> = query.chars().collect();
        let max = max.min(u32::from(u8::MAX - 2)) as u8;
        let limit = max.saturating_add(1);
        let row = (0..=query.len())
            .map(|j| (j.min(limit as usize)) as u8)
            .collect();

        let start = State {
            row,
            before: Vec::new(),
            last: None,
        };
        let mut state_map = HashMap::new();
        state_map.insert(start.clone(), 0);

        Self {
            query,
            max,
            transpositions,
            states: vec![start],
            state_map,
            transitions: HashMap::new(),
        }
    }

    pub fn start(&self) -> StateId {
        0
    }

    pub fn max_edits(&self) -> u32 {
        u32::from(self.max)
    }

    /// Number of states materialized so far.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Consume `c`. `None` means no extension of this input can come within
    /// `max` edits of the query.
    pub fn step(&mut self, state: StateId, c: char) -> Option<StateId> {
        if let Some(&next) = self.transitions.get(&(state, c)) {
            return next;
        }
        let next = self.compute(state, c);
        self.transitions.insert((state, c), next);
        next
    }

    fn compute(&mut self, state: StateId, c: char) -> Option<StateId> {
        let limit = self.max + 1;
        let current = &self.states[state as usize];
        let row = &current.row;
        let mut next = vec![0u8; row.len()];
        next[0] = row[0].saturating_add(1).min(limit);

        for j in 1..row.len() {
            let cost = u8::from(self.query[j - 1] != c);
            let mut d = (row[j] + 1).min(next[j - 1] + 1).min(row[j - 1] + cost);
            if self.transpositions && j > 1 && !current.before.is_empty() {
                if let Some(last) = current.last {
                    if c == self.query[j - 2] && last == self.query[j - 1] {
                        d = d.min(current.before[j - 2] + 1);
                    }
                }
            }
            next[j] = d.min(limit);
        }

        let (before, last) = if self.transpositions {
            let last = self.query.contains(&c).then_some(c);
            (row.clone(), last)
        } else {
            (Vec::new(), None)
        };
        let candidate = State {
            row: next,
            before,
            last,
        };
        if Self::floor(&candidate) > self.max {
            return None;
        }

        if let Some(&id) = self.state_map.get(&candidate) {
            return Some(id);
        }
        let id = self.states.len() as StateId;
        self.states.push(candidate.clone());
        self.state_map.insert(candidate, id);
        Some(id)
    }

    /// Lower bound on the distance of any continuation from this state.
    fn floor(state: &State) -> u8 {
        let row_min = state.row.iter().copied().min().unwrap_or(u8::MAX);
        let before_min = state
            .before
            .iter()
            .copied()
            .min()
            .map_or(u8::MAX, |m| m.saturating_add(1));
        row_min.min(before_min)
    }

    /// Smallest distance any string starting with the consumed input can have.
    pub fn lower_bound(&self, state: StateId) -> u32 {
        u32::from(Self::floor(&self.states[state as usize]))
    }

    /// Distance between the consumed input and the whole query, if within range.
    pub fn distance(&self, state: StateId) -> Option<u32> {
        let d = *self.states[state as usize].row.last()?;
        (d <= self.max).then_some(u32::from(d))
    }

    /// Run the automaton over a whole string.
    pub fn eval(&mut self, input: &str) -> Option<u32> {
        let mut state = self.start();
        for c in input.chars() {
            state = self.step(state, c)?;
        }
        self.distance(state)
    }
}
