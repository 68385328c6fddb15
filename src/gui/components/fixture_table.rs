// src/gui/components/fixture_table.rs
//
// Fixture grid on top, rendered output below. Purely a view.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::FIXTURE_COLUMNS, gui::app::App};

const ROW_H: f32 = 18.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.sets.is_empty() {
        ui.weak("No fixtures yet. Enter players and press Generate.");
        return;
    }

    let fixtures: Vec<[i64; 4]> = app
        .sets
        .iter()
        .flat_map(|s| s.fixtures.iter().map(|f| f.values()))
        .collect();

    let table_h = (ui.available_height() * 0.5).max(ROW_H * 4.0);
    ui.push_id("fixture_grid", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(table_h)
            .column(Column::exact(36.0))
            .columns(Column::initial(90.0).resizable(true), FIXTURE_COLUMNS.len())
            .header(22.0, |mut header| {
                header.col(|ui| { ui.strong("#"); });
                for name in FIXTURE_COLUMNS {
                    header.col(|ui| { ui.strong(name); });
                }
            })
            .body(|body| {
                body.rows(ROW_H, fixtures.len(), |mut row| {
                    let ix = row.index();
                    let values = fixtures[ix];
                    row.col(|ui| { ui.weak((ix + 1).to_string()); });
                    for v in values {
                        row.col(|ui| { ui.monospace(v.to_string()); });
                    }
                });
            });
    });

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("preview_scroll")
        .show(ui, |ui| {
            let mut text = app.preview.as_str();
            ui.add(
                egui::TextEdit::multiline(&mut text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );
        });
}
