// src/config/consts.rs

// League
pub const DEFAULT_TABLE: &str = "dbo.matches";
pub const MIN_PLAYERS: usize = 2;
pub const FIXTURE_COLUMNS: [&str; 4] = ["round_id", "box_id", "player1_id", "player2_id"];

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "fixtures.log";

// Plans
pub const PLAN_SEP: char = ',';
pub const PLAN_COMMENT: char = '#';

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "fixtures";

// GUI
pub const WINDOW_W: f32 = 900.0;
pub const WINDOW_H: f32 = 640.0;
