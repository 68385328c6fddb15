// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{config::state::AppState, fixture::FixtureSet};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Box League Fixtures",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last successful generation
    pub sets: Vec<FixtureSet>,
    pub preview: String,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: table={} format={:?}", state.options.sql.table, state.options.export.format);
        Self {
            state,
            sets: Vec::new(),
            preview: s!(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Drop the last result; inputs no longer match it.
    pub fn invalidate(&mut self) {
        if !self.sets.is_empty() {
            self.sets.clear();
            self.preview.clear();
            self.status("Inputs changed, press Generate");
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("inputs")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                crate::gui::components::input_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::fixture_table::draw(ui, self);
        });
    }
}
