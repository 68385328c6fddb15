// src/fixture.rs
//! Round-robin pairing for one box.
//!
//! Players are paired positionally: for input `[p0, p1, p2, ...]` the pairs come
//! out as `(p0,p1), (p0,p2), ..., (p1,p2), ...`. Ids are opaque, so repeated ids
//! in the input are paired like any other entry and are NOT collapsed.

use crate::config::consts::MIN_PLAYERS;
use crate::error::{FixtureError, Result};

pub type PlayerId = i64;
pub type BoxId = i64;
pub type RoundId = i64;

/// One scheduled, unplayed match between two players of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fixture {
    pub round_id: RoundId,
    pub box_id: BoxId,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
}

impl Fixture {
    /// Values in table column order.
    pub fn values(&self) -> [i64; 4] {
        [self.round_id, self.box_id, self.player1_id, self.player2_id]
    }
}

/// Result of one generation call: the box it was made for plus its fixtures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureSet {
    pub round_id: RoundId,
    pub box_id: BoxId,
    pub players: Vec<PlayerId>,
    pub fixtures: Vec<Fixture>,
}

impl FixtureSet {
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    // Always false for a set built by `generate`.
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}

/// Number of round-robin matches among `n` players.
pub const fn pair_count(n: usize) -> usize {
    if n < 2 { 0 } else { n * (n - 1) / 2 }
}

/// Every unordered pair of a slice, in lexicographic index order.
pub struct Pairs<'a, T> {
    items: &'a [T],
    i: usize,
    j: usize,
}

pub fn pairs<T>(items: &[T]) -> Pairs<'_, T> {
    Pairs { items, i: 0, j: 1 }
}

impl<'a, T> Iterator for Pairs<'a, T> {
    type Item = (&'a T, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.items.len();
        if self.j >= n {
            // advance outer index; the inner one restarts right after it
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= n {
                self.i = n;
                return None;
            }
        }
        let pair = (&self.items[self.i], &self.items[self.j]);
        self.j += 1;
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.items.len();
        let rem = if self.i >= n {
            0
        } else {
            // rest of the current row plus every later row
            n.saturating_sub(self.j) + pair_count(n - self.i - 1)
        };
        (rem, Some(rem))
    }
}

impl<T> ExactSizeIterator for Pairs<'_, T> {}

/// Builds the round-robin fixtures for one box.
///
/// Fails with [`FixtureError::InsufficientPlayers`] when fewer than two players
/// are supplied; nothing partial is returned. Performs no I/O.
pub fn generate(round_id: RoundId, box_id: BoxId, player_ids: &[PlayerId]) -> Result<FixtureSet> {
    if player_ids.len() < MIN_PLAYERS {
        return Err(FixtureError::InsufficientPlayers { found: player_ids.len() });
    }

    let fixtures: Vec<Fixture> = pairs(player_ids)
        .map(|(&player1_id, &player2_id)| Fixture { round_id, box_id, player1_id, player2_id })
        .collect();

    Ok(FixtureSet {
        round_id,
        box_id,
        players: player_ids.to_vec(),
        fixtures,
    })
}
