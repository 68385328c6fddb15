// src/gui/components/input_panel.rs
//
// Left panel: round, box and player ids. Any edit invalidates the shown result.

use eframe::egui;

use crate::{fixture::pair_count, gui::app::App, input::parse_player_ids};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Box");
    ui.add_space(6.0);

    let mut changed = false;
    let gui = &mut app.state.gui;

    egui::Grid::new("box_inputs").num_columns(2).spacing([8.0, 6.0]).show(ui, |ui| {
        ui.label("Round ID:");
        changed |= ui.text_edit_singleline(&mut gui.round_text).changed();
        ui.end_row();

        ui.label("Box ID:");
        changed |= ui.text_edit_singleline(&mut gui.box_text).changed();
        ui.end_row();
    });

    ui.add_space(6.0);
    ui.label("Player IDs (comma or space separated):");
    changed |= ui
        .add(
            egui::TextEdit::multiline(&mut gui.players_text)
                .desired_rows(4)
                .font(egui::TextStyle::Monospace),
        )
        .changed();

    // Live count hint; parse errors surface on Generate.
    match parse_player_ids(&gui.players_text) {
        Ok(ids) => ui.weak(format!("{} player(s) → {} match(es)", ids.len(), pair_count(ids.len()))),
        Err(e) => ui.colored_label(egui::Color32::from_rgb(200, 60, 60), e.to_string()),
    };

    if changed {
        logd!("UI: inputs changed");
        app.invalidate();
    }

    ui.add_space(10.0);
    if ui.button("Generate").clicked() {
        crate::gui::actions::generate(app);
    }
}
