// src/plan.rs
//! Round plans: every box of a round in one file.
//!
//! ```text
//! # box_id, players...
//! 10, 1, 2, 3, 4
//! 11, 5, 6, 7
//! ```
//! `#` lines are blanked before the CSV reader sees them, so quotes inside a
//! comment cannot open a field. Box order in the file is the order fixtures are
//! generated and written in.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::consts::{PLAN_COMMENT, PLAN_SEP};
use crate::csv::parse_rows;
use crate::error::{FixtureError, Result};
use crate::fixture::{BoxId, PlayerId};
use crate::input::parse_id;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxEntry {
    pub box_id: BoxId,
    pub players: Vec<PlayerId>,
}

fn at_line(line: usize, e: FixtureError) -> FixtureError {
    FixtureError::Plan { line, source: Box::new(e) }
}

// Comment lines become empty lines; line numbers stay put.
fn strip_comments(text: &str) -> String {
    text.lines()
        .map(|l| if l.trim_start().starts_with(PLAN_COMMENT) { "" } else { l })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_players(cells: &[String]) -> Result<Vec<PlayerId>> {
    cells
        .iter()
        .filter(|c| !c.trim().is_empty())
        .map(|c| parse_id("player", c))
        .collect()
}

pub fn parse(text: &str) -> Result<Vec<BoxEntry>> {
    let mut entries = Vec::new();
    let mut seen: HashSet<BoxId> = HashSet::new();

    for (line, row) in parse_rows(&strip_comments(text), PLAN_SEP) {
        let Some(first) = row.first() else { continue };

        let box_id = parse_id("box", first).map_err(|e| at_line(line, e))?;
        let players = parse_players(&row[1..]).map_err(|e| at_line(line, e))?;

        if !seen.insert(box_id) {
            return Err(at_line(line, FixtureError::DuplicateBox(box_id)));
        }
        entries.push(BoxEntry { box_id, players });
    }

    if entries.is_empty() {
        return Err(FixtureError::EmptyPlan);
    }
    logd!("Plan: parsed {} box(es)", entries.len());
    Ok(entries)
}

pub fn load(path: &Path) -> Result<Vec<BoxEntry>> {
    let text = fs::read_to_string(path)?;
    logf!("Plan: loading {}", path.display());
    parse(&text)
}
