// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut rerender = false;

    {
        let options = &mut app.state.options;

        // --- Format + toggles ---
        let prev_fmt = options.export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut options.export.format, ExportFormat::Sql, "SQL");
            ui.selectable_value(&mut options.export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut options.export.format, ExportFormat::Tsv, "TSV");
        });
        if options.export.format != prev_fmt {
            logf!("UI: Export format → {:?}", options.export.format);
            if !app.state.gui.out_path_dirty {
                app.state.gui.out_path_text = options.export.out_path().to_string_lossy().into_owned();
            }
            rerender = true;
        }

        ui.horizontal(|ui| match options.export.format {
            ExportFormat::Sql => {
                ui.label("Table:");
                rerender |= ui
                    .add(egui::TextEdit::singleline(&mut options.sql.table)
                        .desired_width(160.0)
                        .font(egui::TextStyle::Monospace))
                    .changed();
                rerender |= ui.checkbox(&mut options.sql.include_comments, "Comments").changed();
            }
            ExportFormat::Csv | ExportFormat::Tsv => {
                rerender |= ui.checkbox(&mut options.export.include_headers, "Include headers").changed();
            }
        });
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.state.gui.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.state.gui.out_path_text);
        }
    });

    // --- Actions ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
        ui.label(format!("Status: {}", app.status_text()));
    });

    // Option change on a shown result: render again with the new settings.
    if rerender && !app.sets.is_empty() {
        actions::generate(app);
    }
}
