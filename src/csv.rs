// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::config::consts::FIXTURE_COLUMNS;
use crate::fixture::FixtureSet;

/* ---------------- Parsing ---------------- */

/// Minimal CSV reader (quotes + CRLF tolerant). Blank lines are dropped and
/// every row carries the 1-based line it started on.
pub fn parse_rows(text: &str, sep: char) -> Vec<(usize, Vec<String>)> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_line = 1;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].trim().is_empty()) {
                    rows.push((row_line, take(&mut row)));
                } else {
                    row.clear();
                }
                line += 1;
                row_line = line;
            }
            '\n' => { line += 1; field.push(ch); }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    if !(row.len() == 1 && row[0].trim().is_empty()) {
        rows.push((row_line, row));
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Fixture records as delimited text, one row per match.
pub fn fixtures_to_string(sets: &[FixtureSet], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &FIXTURE_COLUMNS, sep);
    }
    for f in sets.iter().flat_map(|s| s.fixtures.iter()) {
        let cells = f.values().map(|v| v.to_string());
        let _ = write_row(&mut buf, &cells, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
