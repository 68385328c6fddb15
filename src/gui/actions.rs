// src/gui/actions.rs
//
// Button handlers. Each one reports through the status line and the log;
// none of them panics on bad input.

use eframe::egui;

use crate::{
    config::options::BoxSource,
    error::Result,
    file,
    gui::{app::App, progress::GuiProgress},
    input::{parse_id, parse_player_ids},
    plan::BoxEntry,
    progress::Progress,
    runner,
};

/// Copy GUI text fields into options, parsing ids on the way.
fn apply_inputs(app: &mut App) -> Result<()> {
    let gui = &app.state.gui;
    let round_id = parse_id("round", &gui.round_text)?;
    let box_id = parse_id("box", &gui.box_text)?;
    let players = parse_player_ids(&gui.players_text)?;

    let fixtures = &mut app.state.options.fixtures;
    fixtures.round_id = round_id;
    fixtures.boxes = BoxSource::Single(BoxEntry { box_id, players });

    if app.state.gui.out_path_dirty {
        app.state.options.export.set_path(&app.state.gui.out_path_text)?;
        app.state.gui.out_path_dirty = false;
        logf!("UI: Out path set → {}", app.state.options.export.out_path().display());
    }
    Ok(())
}

fn try_generate(app: &mut App) -> Result<()> {
    apply_inputs(app)?;

    let options = &app.state.options;
    let boxes = runner::resolve_boxes(&options.fixtures)?;

    let mut prog = GuiProgress::new(app.status.clone());
    let sets = runner::generate_all(options.fixtures.round_id, &boxes, Some(&mut prog))?;
    let text = runner::render(options, &sets)?;
    prog.finish();

    app.sets = sets;
    app.preview = text;
    Ok(())
}

pub fn generate(app: &mut App) -> bool {
    match try_generate(app) {
        Ok(()) => {
            logf!("Generate: OK fixtures={}", app.sets.iter().map(|s| s.len()).sum::<usize>());
            true
        }
        Err(e) => {
            loge!("Generate: Error: {}", e);
            app.sets.clear();
            app.preview.clear();
            app.status(format!("Error: {e}"));
            false
        }
    }
}

pub fn copy(app: &mut App, ctx: &egui::Context) {
    if app.preview.is_empty() && !generate(app) {
        return;
    }
    ctx.copy_text(app.preview.clone());
    logf!("Copy: {} byte(s)", app.preview.len());
    app.status("Copied to clipboard");
}

pub fn export(app: &mut App) {
    // regenerate so the file always matches what is on screen
    if !generate(app) {
        return;
    }
    match file::write_export(&app.state.options.export, &app.preview) {
        Ok(path) => {
            app.state.gui.out_path_text = path.to_string_lossy().into_owned();
            app.status(format!("Exported → {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
