// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Raw text of the input fields; parsed on Generate.
    pub round_text: String,
    pub box_text: String,
    pub players_text: String,

    /// Output path field. `dirty` once the user has typed in it.
    pub out_path_text: String,
    pub out_path_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            round_text: s!("1"),
            box_text: s!("1"),
            players_text: s!(),
            out_path_text: s!(),
            out_path_dirty: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        let options = AppOptions::default();
        let gui = GuiState {
            out_path_text: options.export.out_path().to_string_lossy().into_owned(),
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
