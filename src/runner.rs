// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::{AppOptions, BoxSource, FixtureOptions, Target},
    csv,
    error::Result,
    file,
    fixture::{self, FixtureSet, RoundId},
    plan::{self, BoxEntry},
    progress::Progress,
    sql,
};

/// Summary of what was produced.
pub struct RunSummary {
    pub sets: Vec<FixtureSet>,
    /// Rendered output, exactly as written.
    pub text: String,
    /// `None` when the output went to stdout.
    pub written: Option<PathBuf>,
}

impl RunSummary {
    pub fn fixture_count(&self) -> usize {
        self.sets.iter().map(FixtureSet::len).sum()
    }
}

/// Expand the configured source into the boxes to generate.
pub fn resolve_boxes(opts: &FixtureOptions) -> Result<Vec<BoxEntry>> {
    match &opts.boxes {
        BoxSource::Single(entry) => Ok(vec![entry.clone()]),
        BoxSource::Plan(path) => plan::load(path),
    }
}

/// Generate every box of the round. The first failing box aborts the run.
pub fn generate_all(
    round_id: RoundId,
    boxes: &[BoxEntry],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<FixtureSet>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(boxes.len());
    }

    let mut sets = Vec::with_capacity(boxes.len());
    for entry in boxes {
        let set = match fixture::generate(round_id, entry.box_id, &entry.players) {
            Ok(set) => set,
            Err(e) => {
                logw!("Generate: round={} box={}: {}", round_id, entry.box_id, e);
                return Err(e);
            }
        };
        logd!(
            "Generate: round={} box={} players={:?} fixtures={}",
            round_id, entry.box_id, entry.players, set.len()
        );
        if let Some(p) = progress.as_deref_mut() {
            p.box_done(entry.box_id, set.len());
        }
        sets.push(set);
    }
    Ok(sets)
}

/// Render generated sets in the configured export format.
pub fn render(options: &AppOptions, sets: &[FixtureSet]) -> Result<String> {
    let export = &options.export;
    match export.format.delim() {
        None => sql::render_script(&options.sql, sets),
        Some(sep) => Ok(csv::fixtures_to_string(sets, export.include_headers, sep)),
    }
}

/// Top-level run: resolve boxes → generate → render → write.
/// Nothing is written unless every box generated and rendered cleanly.
pub fn run(
    options: &AppOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary> {
    let result = run_inner(options, progress.as_deref_mut());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    if let Err(e) = &result {
        loge!("Run: {}", e);
    }
    result
}

fn run_inner(
    options: &AppOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary> {
    let round_id = options.fixtures.round_id;
    let boxes = resolve_boxes(&options.fixtures)?;
    logf!("Run: round={} boxes={} format={:?}", round_id, boxes.len(), options.export.format);

    let sets = generate_all(round_id, &boxes, progress.as_deref_mut())?;
    let text = render(options, &sets)?;
    logd!("Run: rendered {} byte(s) as {:?}", text.len(), options.export.format);

    let written = match options.export.target {
        Target::Stdout => {
            print!("{text}");
            None
        }
        Target::File => Some(file::write_export(&options.export, &text)?),
    };

    if let Some(p) = progress.as_deref_mut() {
        let msg = match &written {
            Some(path) => format!("Wrote {} box(es) → {}", sets.len(), path.display()),
            None => format!("Generated {} box(es)", sets.len()),
        };
        p.log(&msg);
    }

    Ok(RunSummary { sets, text, written })
}
