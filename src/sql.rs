// src/sql.rs
//
// Renders fixture sets as batch INSERT statements. Nothing here executes SQL;
// the text is handed to whoever owns the database.

use crate::config::consts::FIXTURE_COLUMNS;
use crate::config::options::SqlOptions;
use crate::error::{FixtureError, Result};
use crate::fixture::FixtureSet;

/// Accepts `name`, `schema.name` and bracketed parts such as `[dbo].[matches]`.
pub fn validate_table(table: &str) -> Result<()> {
    let ok = !table.is_empty() && table.split('.').all(|part| {
        let bare = part
            .strip_prefix('[')
            .and_then(|p| p.strip_suffix(']'))
            .unwrap_or(part);
        let mut chars = bare.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    });
    if ok { Ok(()) } else { Err(FixtureError::InvalidTable(s!(table))) }
}

fn tuple(values: [i64; 4]) -> String {
    format!("({}, {}, {}, {})", values[0], values[1], values[2], values[3])
}

/// One `INSERT ... VALUES` statement covering every fixture of the set,
/// terminated by `;` with no trailing newline.
pub fn insert_statement(table: &str, set: &FixtureSet) -> Result<String> {
    validate_table(table)?;
    if set.is_empty() {
        return Err(FixtureError::InsufficientPlayers { found: set.players.len() });
    }

    let values: Vec<String> = set.fixtures.iter().map(|f| tuple(f.values())).collect();
    Ok(format!(
        "INSERT INTO {table} ({}) VALUES\n{};",
        FIXTURE_COLUMNS.join(", "),
        values.join(",\n")
    ))
}

fn players_list(players: &[i64]) -> String {
    let ids: Vec<String> = players.iter().map(|p| p.to_string()).collect();
    format!("[{}]", ids.join(", "))
}

/// Full script for a run: one statement per box, optionally wrapped in the
/// comment banner and the "unplayed" reminder.
pub fn render_script(opts: &SqlOptions, sets: &[FixtureSet]) -> Result<String> {
    validate_table(&opts.table)?;

    let mut blocks = Vec::with_capacity(sets.len());
    for set in sets {
        let mut block = s!();
        if opts.include_comments {
            block.push_str(&format!(
                "-- SQL INSERT statements for Round ID: {}, Box ID: {}\n",
                set.round_id, set.box_id
            ));
            block.push_str(&format!("-- Players involved: {}\n\n", players_list(&set.players)));
        }
        block.push_str(&insert_statement(&opts.table, set)?);
        block.push('\n');
        blocks.push(block);
    }

    let mut out = blocks.join("\n");
    if opts.include_comments && !sets.is_empty() {
        out.push_str("\n-- Remember: These matches are initially unplayed. Update them with scores later.\n");
    }
    Ok(out)
}
