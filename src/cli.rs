// src/cli.rs
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::options::{AppOptions, BoxSource, ExportFormat, Target};
use crate::input::{parse_id, parse_player_ids};
use crate::plan::BoxEntry;

pub type CliResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Arguments as typed, before any id parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawArgs {
    pub round: Option<String>,
    pub box_id: Option<String>,
    pub players: Option<String>,
    pub plan: Option<PathBuf>,
    pub table: Option<String>,
    pub format: Option<ExportFormat>,
    pub no_comments: bool,
    pub include_headers: bool,
    pub out: Option<PathBuf>,
    pub verbose: bool,
    pub help: bool,
}

impl RawArgs {
    /// No box source on the command line → ask on stdin.
    pub fn needs_prompt(&self) -> bool {
        self.plan.is_none() && self.players.is_none()
    }
}

pub fn run() -> CliResult<()> {
    let mut raw = parse_args(std::env::args().skip(1))?;
    if raw.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }
    crate::log::set_echo(raw.verbose);

    if raw.needs_prompt() || raw.round.is_none() {
        let stdin = io::stdin();
        prompt(&mut raw, stdin.lock(), io::stderr())?;
    }

    let options = build_options(&raw)?;
    let summary = crate::runner::run(&options, None)?;

    if let Some(path) = &summary.written {
        eprintln!("Wrote {} fixture(s) → {}", summary.fixture_count(), path.display());
    }
    Ok(())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> CliResult<RawArgs> {
    let mut raw = RawArgs::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-r" | "--round" => raw.round = Some(args.next().ok_or("Missing value for --round")?),
            "-b" | "--box" => raw.box_id = Some(args.next().ok_or("Missing value for --box")?),
            "-p" | "--players" => raw.players = Some(args.next().ok_or("Missing value for --players")?),
            "--plan" => raw.plan = Some(PathBuf::from(args.next().ok_or("Missing value for --plan")?)),
            "--table" => raw.table = Some(args.next().ok_or("Missing value for --table")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                raw.format = Some(
                    ExportFormat::parse(&v).ok_or_else(|| format!("Unknown format: {}", v))?,
                );
            }
            "--no-comments" => raw.no_comments = true,
            "--include-headers" => raw.include_headers = true,
            "-o" | "--out" => raw.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "-v" | "--verbose" => raw.verbose = true,
            "-h" | "--help" => raw.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if raw.plan.is_some() && (raw.box_id.is_some() || raw.players.is_some()) {
        return Err("--plan cannot be combined with --box or --players".into());
    }
    Ok(raw)
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> CliResult<String> {
    write!(out, "{question}")?;
    out.flush()?;
    let mut line = s!();
    if input.read_line(&mut line)? == 0 {
        return Err("Unexpected end of input".into());
    }
    Ok(line.trim().to_string())
}

/// Fill whatever the command line left out, one question per value.
pub fn prompt<R: BufRead, W: Write>(raw: &mut RawArgs, mut input: R, mut out: W) -> CliResult<()> {
    writeln!(out, "--- Generate Match Fixtures SQL ---")?;
    if raw.round.is_none() {
        raw.round = Some(ask(&mut input, &mut out, "Enter the Round ID (e.g., 1): ")?);
    }
    if raw.plan.is_none() {
        if raw.box_id.is_none() {
            raw.box_id = Some(ask(&mut input, &mut out, "Enter the Box ID (e.g., 10): ")?);
        }
        if raw.players.is_none() {
            raw.players = Some(ask(
                &mut input,
                &mut out,
                "Enter player IDs for this box, comma-separated (e.g., 1,2,3,4,5): ",
            )?);
        }
    }
    Ok(())
}

pub fn build_options(raw: &RawArgs) -> CliResult<AppOptions> {
    let mut options = AppOptions::default();

    options.fixtures.round_id = parse_id("round", raw.round.as_deref().unwrap_or(""))?;
    options.fixtures.boxes = match &raw.plan {
        Some(path) => BoxSource::Plan(path.clone()),
        None => BoxSource::Single(BoxEntry {
            box_id: parse_id("box", raw.box_id.as_deref().unwrap_or(""))?,
            players: parse_player_ids(raw.players.as_deref().unwrap_or(""))?,
        }),
    };

    if let Some(table) = &raw.table {
        crate::sql::validate_table(table)?;
        options.sql.table = table.clone();
    }
    options.sql.include_comments = !raw.no_comments;

    let export = &mut options.export;
    if let Some(fmt) = raw.format {
        export.format = fmt;
    }
    export.include_headers = raw.include_headers;
    match &raw.out {
        Some(path) => {
            export.target = Target::File;
            export.set_path(&path.to_string_lossy())?;
        }
        None => export.target = Target::Stdout,
    }

    Ok(options)
}

