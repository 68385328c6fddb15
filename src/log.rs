// src/log.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_FILE, STORE_DIR};

// `None` → STORE_DIR. Also serialises writers.
static LOG_DIR: Mutex<Option<PathBuf>> = Mutex::new(None);
static START: OnceLock<Instant> = OnceLock::new();
static ECHO: AtomicBool = AtomicBool::new(false);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

/// Redirect the log file into `dir` (created on first write).
pub fn set_dir(dir: impl Into<PathBuf>) {
    if let Ok(mut guard) = LOG_DIR.lock() {
        *guard = Some(dir.into());
    }
}

/// Current log file path.
pub fn log_path() -> PathBuf {
    let dir = LOG_DIR
        .lock()
        .ok()
        .and_then(|g| (*g).clone())
        .unwrap_or_else(|| PathBuf::from(STORE_DIR));
    dir.join(LOG_FILE)
}

/// Mirror every log line to stderr (CLI `--verbose`).
pub fn set_echo(on: bool) {
    ECHO.store(on, Ordering::Relaxed);
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub fn format_line(level: Level, elapsed_ms: u128, msg: &str) -> String {
    format!("[{}][{}] {msg}\n", fmt_elapsed(elapsed_ms), level.tag())
}

/// Appends one line to the log file. Best effort: I/O failures are swallowed.
pub fn write_log(level: Level, msg: &str) {
    let line = format_line(level, start().elapsed().as_millis(), msg);

    if ECHO.load(Ordering::Relaxed) {
        eprint!("{line}");
    }

    if let Ok(guard) = LOG_DIR.lock() {
        let dir = (*guard).clone().unwrap_or_else(|| PathBuf::from(STORE_DIR));
        let _ = fs::create_dir_all(&dir);
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
        {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Warning-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Warn, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}
