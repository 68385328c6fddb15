// src/input.rs
//
// Turns user-typed text (CLI args, prompts, GUI fields) into ids. Strict: a
// single bad token rejects the whole input.

use crate::error::{FixtureError, Result};
use crate::fixture::PlayerId;

pub fn parse_id(field: &'static str, text: &str) -> Result<i64> {
    let t = text.trim();
    if t.is_empty() {
        return Err(FixtureError::MissingValue(field));
    }
    match t.parse::<i64>() {
        Ok(v) => Ok(v),
        Err(_) => invalid_id!(field, t),
    }
}

/// Player ids separated by commas and/or whitespace, e.g. `"1, 2,3 4"`.
/// Order and repeats are kept as typed; empty tokens are skipped.
pub fn parse_player_ids(text: &str) -> Result<Vec<PlayerId>> {
    let mut out = Vec::new();
    for token in text.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() { continue; }
        match token.parse::<PlayerId>() {
            Ok(v) => out.push(v),
            Err(_) => invalid_id!("player", token),
        }
    }
    Ok(out)
}
